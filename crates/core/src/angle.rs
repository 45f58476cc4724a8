//! Angle conventions for slope inputs and their conversion to gradients.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt::{Display, Formatter};

/// How the slope of each line is given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleMode {
    /// The slope is the gradient `dy/dx` itself.
    #[default]
    Gradient,
    /// The slope is an angle in degrees.
    Degrees,
    /// The slope is an angle in radians.
    Radians,
}

impl AngleMode {
    /// Returns `true` when slope inputs are angles rather than gradients.
    #[must_use]
    pub fn is_angle(self) -> bool {
        !matches!(self, Self::Gradient)
    }

    /// Converts a slope input into a gradient.
    ///
    /// Angles are optionally rotated back by a right angle before the tangent
    /// is taken. The result may be huge or non-finite; classification is left
    /// to the solver.
    #[must_use]
    pub fn to_gradient(self, slope_input: f64, subtract_right_angle: bool) -> f64 {
        match self {
            Self::Gradient => slope_input,
            Self::Degrees => {
                Self::Radians.to_gradient(slope_input * PI / 180.0, subtract_right_angle)
            }
            Self::Radians => {
                let angle = if subtract_right_angle {
                    slope_input - FRAC_PI_2
                } else {
                    slope_input
                };
                angle.tan()
            }
        }
    }
}

impl Display for AngleMode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Gradient => "gradient",
            Self::Degrees => "degrees",
            Self::Radians => "radians",
        };
        formatter.write_str(name)
    }
}
