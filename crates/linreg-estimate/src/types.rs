//! Result types for regression estimates

use serde::Serialize;
use std::fmt;

/// A confidence interval with lower and upper bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate the interval belongs to
    pub estimate: f64,
    /// Confidence level (e.g., 0.90 for 90% CI)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: f64) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    /// `estimate ± margin`
    pub fn symmetric(estimate: f64, margin: f64, confidence_level: f64) -> Self {
        Self::new(estimate - margin, estimate + margin, estimate, confidence_level)
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Margin of error (half-width)
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Apply a monotonically increasing map to both bounds and the estimate
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.lower), f(self.upper), f(self.estimate), self.confidence_level)
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.4}, {:.4}]", self.lower, self.upper)
    }
}

/// Point estimates and interval estimates of one least-squares fit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimationResult {
    pub slope: f64,
    pub intercept: f64,
    /// Residual variance, `RSS / (n - 2)`
    pub variance: f64,

    pub slope_standard_error: f64,
    pub intercept_standard_error: f64,

    pub slope_interval: ConfidenceInterval,
    pub intercept_interval: ConfidenceInterval,
    pub variance_interval: ConfidenceInterval,

    pub sample_size: usize,
    pub degrees_of_freedom: usize,
    /// Student's t critical value used for the slope and intercept intervals
    pub t_critical: f64,
}

impl EstimationResult {
    /// Residual standard deviation, `sqrt(variance)`
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }

    /// Interval for the residual standard deviation
    pub fn std_dev_interval(&self) -> ConfidenceInterval {
        self.variance_interval.map(f64::sqrt)
    }

    /// Value of the fitted line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn confidence_level(&self) -> f64 {
        self.slope_interval.confidence_level
    }
}
