//! Lines in point-slope form and parsing of their positional values.

use itertools::Itertools;
use log::{debug, trace};

use crate::config::{Settings, ARGUMENT_COUNT};
use crate::error::{Error, Result};

/// A line `y = slope * (x - offset_x) + offset_y`.
///
/// `slope_input` keeps the value as given (gradient, degrees or radians) so
/// equations can be rendered the way the user wrote them, while `slope` is
/// the resolved gradient used for solving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    offset_x: f64,
    offset_y: f64,
    slope_input: f64,
    slope: f64,
}

impl Line {
    /// Builds a line, resolving its slope under the given settings.
    #[must_use]
    pub fn new(offset_x: f64, offset_y: f64, slope_input: f64, settings: &Settings) -> Self {
        Self::from_parts(
            offset_x,
            offset_y,
            slope_input,
            settings.resolve_gradient(slope_input),
        )
    }

    /// Builds a line whose gradient has already been resolved.
    #[must_use]
    pub fn from_parts(offset_x: f64, offset_y: f64, slope_input: f64, slope: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            slope_input,
            slope,
        }
    }

    #[must_use]
    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    #[must_use]
    pub fn offset_y(&self) -> f64 {
        self.offset_y
    }

    #[must_use]
    pub fn slope_input(&self) -> f64 {
        self.slope_input
    }

    #[must_use]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Evaluates the line at `x`.
    #[must_use]
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * (x - self.offset_x) + self.offset_y
    }
}

/// Parses one positional value, which must be a finite number.
///
/// # Errors
///
/// Returns [`Error::InvalidNumber`] naming the argument if the token is not a
/// number, has trailing characters, or is infinite or NaN.
pub fn parse_number(name: &str, token: &str) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            trace!("Parsed {name} = {value}");
            Ok(value)
        }
        _ => Err(Error::invalid_number(name, token)),
    }
}

/// Parses `x1 y1 m1 x2 y2 m2` into two lines.
///
/// Values are parsed in order and the first invalid one is reported.
///
/// # Errors
///
/// Returns [`Error::ArgumentCount`] unless exactly six tokens are given, or
/// [`Error::InvalidNumber`] for the first token that is not a finite number.
pub fn parse_lines<S: AsRef<str>>(tokens: &[S], settings: &Settings) -> Result<(Line, Line)> {
    let (x1, y1, m1, x2, y2, m2) = tokens
        .iter()
        .map(AsRef::<str>::as_ref)
        .collect_tuple()
        .ok_or(Error::ArgumentCount {
            expected: ARGUMENT_COUNT,
            found: tokens.len(),
        })?;

    let first = Line::new(
        parse_number("x1", x1)?,
        parse_number("y1", y1)?,
        parse_number("m1", m1)?,
        settings,
    );
    let second = Line::new(
        parse_number("x2", x2)?,
        parse_number("y2", y2)?,
        parse_number("m2", m2)?,
        settings,
    );

    debug!("First line: {:?}", first);
    debug!("Second line: {:?}", second);

    Ok((first, second))
}
