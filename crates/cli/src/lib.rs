//! Intersect CLI Library
//!
//! This crate provides the command-line interface for `intersect`, a tool
//! that finds where two lines given in point-slope form cross. It handles
//! argument parsing, turns flags into settings, and runs the pipeline from
//! [`intersect_core`].
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and validation
//! - [`execution`]: Parsing, solving and rendering for one invocation
//!
//! # Examples
//!
//! ```bash
//! # y=x and y=2*(x-1)
//! intersect 0 0 1 1 0 2
//!
//! # Slopes as angles, negative numbers after --
//! intersect --degrees -- 0 0 45 0 0 -45
//!
//! # Angles measured from the other axis
//! intersect -s -d 12.5 -30 140 -80 44 95
//! ```

pub mod cli_args;
pub mod execution;
