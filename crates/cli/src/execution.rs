use intersect_core::error::Result;
use intersect_core::format::Report;
use intersect_core::line::parse_lines;
use intersect_core::solver::intersect;
use log::info;

use crate::cli_args::Args;

/// Runs the whole pipeline for parsed arguments.
///
/// Usage problems are reported before any value is parsed, and nothing is
/// returned for printing unless every step succeeds.
///
/// # Errors
///
/// Returns usage, number parsing, or geometry errors; see
/// [`intersect_core::error::Error::exit_code`] for how they map to exit codes.
pub fn run(args: &Args) -> Result<Report> {
    let settings = args.settings()?;
    info!("Using {} slopes", settings.angle_mode());

    let (first, second) = parse_lines(args.values.as_slice(), &settings)?;
    let intersection = intersect(&first, &second)?;
    info!("Lines intersect at {intersection}");

    Ok(Report {
        first,
        second,
        intersection,
        settings,
    })
}
