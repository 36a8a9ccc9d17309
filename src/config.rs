//! Fit-time tolerances.
//!
//! [SplineConfig] carries the minimum allowed spacing between adjacent knots,
//! defaulting to [DEFAULT_MIN_SPACING]. Knots closer than that are reported as
//! duplicates instead of producing a near-singular system.

use crate::error::SplineError;

pub const DEFAULT_MIN_SPACING: f64 = 1e-12;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SplineConfig {
    min_spacing: f64,
}

impl SplineConfig {
    pub fn new() -> Self {
        SplineConfig { min_spacing: DEFAULT_MIN_SPACING }
    }

    /// Replaces the minimum knot spacing.
    /// # Example
    /// ```
    /// use natural_spline::SplineConfig;
    ///
    /// let config = SplineConfig::new().set_min_spacing(1e-6).unwrap();
    /// assert_eq!(config.get_min_spacing(), 1e-6);
    ///
    /// assert!(SplineConfig::new().set_min_spacing(0.0).is_err());
    /// ```
    /// # Errors
    /// [SplineError::InvalidMinSpacing] when `min_spacing` is not finite or not positive.
    pub fn set_min_spacing(mut self, min_spacing: f64) -> Result<Self, SplineError> {
        if !min_spacing.is_finite() || min_spacing <= 0.0 {
            return Err(SplineError::InvalidMinSpacing { got: min_spacing });
        }
        self.min_spacing = min_spacing;
        Ok(self)
    }

    pub fn get_min_spacing(&self) -> f64 {
        self.min_spacing
    }
}

impl Default for SplineConfig {
    fn default() -> Self {
        Self::new()
    }
}
