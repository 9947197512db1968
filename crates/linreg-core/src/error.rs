//! Error types for dataset synthesis and estimation
//!
//! Provides a unified error type for all linreg crates.

use thiserror::Error;

/// Core error type for dataset and estimation operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Input that makes the fit undefined, e.g. all x values equal
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a probability outside the open unit interval
    pub fn invalid_probability(p: f64) -> Self {
        Self::InvalidParameter(format!("Probability {p} must be in (0, 1)"))
    }

    /// Create an error for a confidence level outside the open unit interval
    pub fn invalid_confidence_level(level: f64) -> Self {
        Self::InvalidParameter(format!("Confidence level {level} must be in (0, 1)"))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }

    /// Whether the error reports a bad argument supplied by the caller
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter(_) | Self::InvalidInput(_) | Self::InsufficientData { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("increment must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: increment must be positive");

        let err = Error::InvalidInput("noise length differs".to_string());
        assert_eq!(err.to_string(), "Invalid input: noise length differs");

        let err = Error::InsufficientData { expected: 3, actual: 2 };
        assert_eq!(err.to_string(), "Insufficient data: expected at least 3 samples, got 2");

        let err = Error::DegenerateInput("x values are constant".to_string());
        assert_eq!(err.to_string(), "Degenerate input: x values are constant");

        let err = Error::Computation("quantile is non-positive".to_string());
        assert_eq!(err.to_string(), "Computation error: quantile is non-positive");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::invalid_probability(1.5);
        assert_eq!(err.to_string(), "Invalid parameter: Probability 1.5 must be in (0, 1)");

        let err = Error::invalid_confidence_level(0.0);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: Confidence level 0 must be in (0, 1)"
        );

        let err = Error::size_mismatch(11, 10, "noise sequence");
        assert_eq!(
            err.to_string(),
            "Invalid input: Size mismatch in noise sequence: expected 11, got 10"
        );

        let err = Error::non_finite("y values");
        assert_eq!(err.to_string(), "Computation error: y values contains NaN or infinite values");
    }

    #[test]
    fn test_invalid_argument_grouping() {
        assert!(Error::InvalidParameter(String::new()).is_invalid_argument());
        assert!(Error::InvalidInput(String::new()).is_invalid_argument());
        assert!(Error::InsufficientData { expected: 3, actual: 1 }.is_invalid_argument());
        assert!(!Error::DegenerateInput(String::new()).is_invalid_argument());
        assert!(!Error::Computation(String::new()).is_invalid_argument());
    }

    #[test]
    fn test_error_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("custom error message");
        let err: Error = anyhow_err.into();

        match err {
            Error::Other(_) => {
                assert!(err.to_string().contains("custom error message"));
            }
            _ => panic!("Wrong error type"),
        }
    }
}
