//! Confidence level type

use linreg_core::{Error, Result};
use std::fmt;

/// Default confidence level of the interval estimates
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.90;

/// Confidence level type with validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Create a new confidence level, rejecting values outside `(0, 1)`
    pub fn new(level: f64) -> Result<Self> {
        if !(level > 0.0 && level < 1.0) {
            return Err(Error::invalid_confidence_level(level));
        }
        Ok(Self(level))
    }

    /// Get the confidence level value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the alpha level (1 - confidence level)
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }

    /// Get the tail probability (alpha/2 for two-tailed)
    pub fn tail_probability(&self) -> f64 {
        self.alpha() / 2.0
    }

    /// Lower-tail probability of the lower critical point, `alpha/2`
    pub fn lower_tail(&self) -> f64 {
        self.tail_probability()
    }

    /// Lower-tail probability of the upper critical point, `1 - alpha/2`
    pub fn upper_tail(&self) -> f64 {
        1.0 - self.tail_probability()
    }

    /// Common confidence levels
    pub const NINETY: Self = Self(0.90);
    pub const NINETY_FIVE: Self = Self(0.95);
    pub const NINETY_NINE: Self = Self(0.99);
}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        Self(DEFAULT_CONFIDENCE_LEVEL)
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = Error;

    fn try_from(level: f64) -> Result<Self> {
        Self::new(level)
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tails() {
        let level = ConfidenceLevel::NINETY;
        assert_relative_eq!(level.alpha(), 0.1, epsilon = 1e-12);
        assert_relative_eq!(level.lower_tail(), 0.05, epsilon = 1e-12);
        assert_relative_eq!(level.upper_tail(), 0.95, epsilon = 1e-12);
    }

    #[test]
    fn test_validation() {
        assert!(ConfidenceLevel::new(0.0).is_err());
        assert!(ConfidenceLevel::new(1.0).is_err());
        assert!(ConfidenceLevel::new(f64::NAN).is_err());
        assert!(ConfidenceLevel::try_from(0.95).is_ok());
    }

    #[test]
    fn test_display_and_default() {
        assert_eq!(ConfidenceLevel::NINETY_FIVE.to_string(), "95.0%");
        assert_eq!(ConfidenceLevel::default(), ConfidenceLevel::NINETY);
    }
}
