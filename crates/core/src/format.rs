//! Rendering of line equations and results.
//!
//! Numbers are written as the shortest text that parses back to the same
//! value, switching to exponent form for very large or very small magnitudes.

use std::fmt::{Display, Formatter};

use crate::angle::AngleMode;
use crate::config::{
    Settings, DEGREES_RIGHT_ANGLE_SUFFIX, DEGREE_SYMBOL, RADIANS_RIGHT_ANGLE_SUFFIX,
};
use crate::line::Line;
use crate::solver::Intersection;

/// Smallest magnitude written without an exponent.
const PLAIN_MIN: f64 = 1e-4;
/// Magnitudes from here on are written with an exponent.
const PLAIN_MAX: f64 = 1e16;

/// An `f64` rendered like `%g` but with shortest round-trip digits.
///
/// `{:+}` forces a sign on non-negative values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number(pub f64);

impl Display for Number {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let value = self.0;
        let magnitude = value.abs();
        let plain =
            magnitude == 0.0 || !value.is_finite() || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude);

        match (plain, formatter.sign_plus()) {
            (true, false) => write!(formatter, "{value}"),
            (true, true) => write!(formatter, "{value:+}"),
            (false, false) => write!(formatter, "{value:e}"),
            (false, true) => write!(formatter, "{value:+e}"),
        }
    }
}

/// A line rendered as the equation that was actually solved, e.g.
/// `y=tan(30°)*(x-2)+1`.
#[derive(Debug, Clone, Copy)]
pub struct LineEquation<'a> {
    line: &'a Line,
    settings: &'a Settings,
}

impl<'a> LineEquation<'a> {
    #[must_use]
    pub fn new(line: &'a Line, settings: &'a Settings) -> Self {
        Self { line, settings }
    }

    fn write_coefficient(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let slope_input = Number(self.line.slope_input());
        let subtract = self.settings.subtract_right_angle();

        match self.settings.angle_mode() {
            AngleMode::Gradient => write!(formatter, "{slope_input}")?,
            AngleMode::Degrees => {
                write!(formatter, "tan({slope_input}{DEGREE_SYMBOL}")?;
                if subtract {
                    formatter.write_str(DEGREES_RIGHT_ANGLE_SUFFIX)?;
                }
                formatter.write_str(")")?;
            }
            AngleMode::Radians => {
                write!(formatter, "tan({slope_input}")?;
                if subtract {
                    formatter.write_str(RADIANS_RIGHT_ANGLE_SUFFIX)?;
                }
                formatter.write_str(")")?;
            }
        }

        formatter.write_str("*")
    }
}

impl Display for LineEquation<'_> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let line = self.line;
        formatter.write_str("y=")?;

        if line.slope() == 0.0 {
            return write!(formatter, "{}", Number(line.offset_y()));
        }

        if line.slope() != 1.0 {
            self.write_coefficient(formatter)?;
        }

        if line.offset_x() == 0.0 {
            formatter.write_str("x")?;
        } else {
            write!(formatter, "(x{:+})", Number(-line.offset_x()))?;
        }

        if line.offset_y() != 0.0 {
            write!(formatter, "{:+}", Number(line.offset_y()))?;
        }

        Ok(())
    }
}

impl Display for Intersection {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "({}, {})", Number(self.x), Number(self.y))
    }
}

/// Everything printed for a successful run.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    pub first: Line,
    pub second: Line,
    pub intersection: Intersection,
    pub settings: Settings,
}

impl Display for Report {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(formatter, "{}", LineEquation::new(&self.first, &self.settings))?;
        writeln!(formatter, "{}", LineEquation::new(&self.second, &self.settings))?;
        writeln!(formatter, "x = {}", Number(self.intersection.x))?;
        writeln!(formatter, "y = {}", Number(self.intersection.y))?;
        writeln!(formatter, "{}", self.intersection)
    }
}
