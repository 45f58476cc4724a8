//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate and turns the mode flags into [`Settings`].

use std::ffi::OsStr;

use clap::error::ErrorKind;
use clap::Parser;
use intersect_core::angle::AngleMode;
use intersect_core::config::{Settings, SettingsBuilder};
use intersect_core::error::Result;

const SHORT_FLAGS: &str = "hsdrV";

const AFTER_HELP: &str = "\
y = m1*(x-x1) + y1, where x1 and y1 are the offsets
if you want to use regular y = m*x + c, set x1 to 0 and y1 as c
m1 is the gradient (or angle with --degrees/--radians)
same goes for x2/y2/m2
negative numbers may be given directly or after --";

/// Command-line arguments for the `intersect` tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use intersect_cli::cli_args::Args;
///
/// let args = Args::parse_from(["intersect", "0", "0", "1", "1", "0", "2"]);
/// assert_eq!(args.values.len(), 6);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "intersect", version, about = "Find where two lines intersect")]
#[command(after_help = AFTER_HELP)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Subtract 90° from the gradient angle (useful for Minecraft stronghold triangulation).
    ///
    /// Requires --degrees or --radians.
    #[arg(
        long = "subtract90",
        short = 's',
        action,
        overrides_with = "subtract_right_angle"
    )]
    pub subtract_right_angle: bool,

    /// Use degrees for the gradient.
    #[arg(long, short = 'd', action)]
    pub degrees: bool,

    /// Use radians for the gradient.
    #[arg(long, short = 'r', action)]
    pub radians: bool,

    /// The two lines as `x1 y1 m1 x2 y2 m2`.
    #[arg(value_name = "VALUES", allow_negative_numbers = true)]
    pub values: Vec<String>,
}

impl Args {
    /// Builds run settings from the mode flags.
    ///
    /// # Errors
    ///
    /// Returns an error if both angle modes are given, or if `--subtract90`
    /// is given without an angle mode.
    pub fn settings(&self) -> Result<Settings> {
        let mut builder = SettingsBuilder::new().subtract_right_angle(self.subtract_right_angle);

        if self.degrees {
            builder = builder.angle_mode(AngleMode::Degrees)?;
        }
        if self.radians {
            builder = builder.angle_mode(AngleMode::Radians)?;
        }

        builder.build()
    }
}

/// Whether a clap error is really a request for help or version output.
#[must_use]
pub fn is_informational(error: &clap::Error) -> bool {
    matches!(
        error.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    )
}

/// Whether the raw arguments ask for help anywhere before a `--` separator.
///
/// Help wins even when other flags are invalid, so this is checked when clap
/// rejects the command line. Short flag clusters such as `-dh` count too.
pub fn requests_help<I, T>(raw_args: I) -> bool
where
    I: IntoIterator<Item = T>,
    T: AsRef<OsStr>,
{
    raw_args
        .into_iter()
        .map_while(|arg| arg.as_ref().to_str().map(str::to_owned))
        .take_while(|arg| arg != "--")
        .any(|arg| {
            arg == "--help"
                || arg.strip_prefix('-').is_some_and(|cluster| {
                    !cluster.starts_with('-')
                        && cluster.contains('h')
                        && cluster.chars().all(|flag| SHORT_FLAGS.contains(flag))
                })
        })
}
