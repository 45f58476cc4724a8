//! Intersect Core Library
//!
//! This crate provides the numeric core of `intersect`, a tool that finds the
//! point where two straight lines cross. Each line is given in point-slope
//! form, `y = m*(x - x0) + y0`, with the slope either a plain gradient or an
//! angle in degrees or radians.
//!
//! # Key Features
//!
//! - **Settings**: Angle mode and right-angle subtraction, validated once
//! - **Line Parsing**: Strict parsing of the six positional values
//! - **Solver**: Closed-form intersection with exact degeneracy checks
//! - **Formatting**: Equations rendered the way they were solved
//! - **Error Handling**: Error kinds that map onto process exit codes
//!
//! # Examples
//!
//! ```
//! use intersect_core::config::Settings;
//! use intersect_core::line::parse_lines;
//! use intersect_core::solver::intersect;
//!
//! let settings = Settings::default();
//! let (first, second) = parse_lines(&["0", "0", "1", "1", "0", "2"], &settings)?;
//! let intersection = intersect(&first, &second)?;
//! assert_eq!((intersection.x, intersection.y), (2.0, 2.0));
//! # Ok::<(), intersect_core::error::Error>(())
//! ```

pub mod angle;
pub mod config;
pub mod error;
pub mod format;
pub mod line;
pub mod solver;
