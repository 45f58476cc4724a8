//! Run settings and fixed rendering constants.
//!
//! All configuration for a run comes from command-line flags. The flags are
//! collected through [`SettingsBuilder`], which enforces that only one angle
//! mode is chosen and that right-angle subtraction is only used with angles.

use log::debug;

use crate::angle::AngleMode;
use crate::error::{Error, Result};

/// Number of positional values: `x1 y1 m1 x2 y2 m2`.
pub const ARGUMENT_COUNT: usize = 6;

/// Suffix appended to degree values in rendered equations.
pub const DEGREE_SYMBOL: &str = "°";

/// Right-angle adjustment shown inside `tan(...)` in degrees mode.
pub const DEGREES_RIGHT_ANGLE_SUFFIX: &str = "-90°";

/// Right-angle adjustment shown inside `tan(...)` in radians mode.
pub const RADIANS_RIGHT_ANGLE_SUFFIX: &str = "-\u{03c0}/2";

/// Immutable settings for a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    angle_mode: AngleMode,
    subtract_right_angle: bool,
}

impl Settings {
    #[must_use]
    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    #[must_use]
    pub fn subtract_right_angle(&self) -> bool {
        self.subtract_right_angle
    }

    /// Resolves a raw slope input into a gradient under these settings.
    #[must_use]
    pub fn resolve_gradient(&self, slope_input: f64) -> f64 {
        self.angle_mode
            .to_gradient(slope_input, self.subtract_right_angle)
    }
}

/// Collects settings from flags in any order.
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    angle_mode: Option<AngleMode>,
    subtract_right_angle: bool,
}

impl SettingsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the angle mode. It can only be set once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConflictingAngleModes`] if a mode was already selected.
    pub fn angle_mode(mut self, angle_mode: AngleMode) -> Result<Self> {
        if let Some(existing) = self.angle_mode {
            debug!("Angle mode `{angle_mode}` requested after `{existing}` was already set");
            return Err(Error::ConflictingAngleModes);
        }

        self.angle_mode = Some(angle_mode);
        Ok(self)
    }

    #[must_use]
    pub fn subtract_right_angle(mut self, subtract_right_angle: bool) -> Self {
        self.subtract_right_angle = subtract_right_angle;
        self
    }

    /// Finishes the settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SubtractWithoutAngleMode`] if right-angle subtraction
    /// was requested while slopes are plain gradients.
    pub fn build(self) -> Result<Settings> {
        let angle_mode = self.angle_mode.unwrap_or_default();

        if self.subtract_right_angle && !angle_mode.is_angle() {
            return Err(Error::SubtractWithoutAngleMode);
        }

        let settings = Settings {
            angle_mode,
            subtract_right_angle: self.subtract_right_angle,
        };
        debug!("Settings: {:?}", settings);

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = SettingsBuilder::new().build().unwrap();
        assert_eq!(settings.angle_mode(), AngleMode::Gradient);
        assert!(!settings.subtract_right_angle());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_angle_mode_set_once() {
        let settings = SettingsBuilder::new()
            .angle_mode(AngleMode::Radians)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(settings.angle_mode(), AngleMode::Radians);
    }

    #[test]
    fn test_second_angle_mode_is_rejected() {
        let result = SettingsBuilder::new()
            .angle_mode(AngleMode::Degrees)
            .unwrap()
            .angle_mode(AngleMode::Radians);
        assert!(matches!(result, Err(Error::ConflictingAngleModes)));
    }

    #[test]
    fn test_same_angle_mode_twice_is_rejected() {
        let result = SettingsBuilder::new()
            .angle_mode(AngleMode::Degrees)
            .unwrap()
            .angle_mode(AngleMode::Degrees);
        assert!(matches!(result, Err(Error::ConflictingAngleModes)));
    }

    #[test]
    fn test_subtract_requires_angle_mode() {
        let result = SettingsBuilder::new().subtract_right_angle(true).build();
        assert!(matches!(result, Err(Error::SubtractWithoutAngleMode)));
    }

    #[test]
    fn test_subtract_with_degrees() {
        let settings = SettingsBuilder::new()
            .subtract_right_angle(true)
            .angle_mode(AngleMode::Degrees)
            .unwrap()
            .build()
            .unwrap();
        assert!(settings.subtract_right_angle());
        assert!(settings.resolve_gradient(90.0).abs() < 1e-12);
    }

    #[test]
    fn test_resolve_gradient_in_gradient_mode() {
        let settings = Settings::default();
        assert_eq!(settings.resolve_gradient(3.0), 3.0);
    }
}
