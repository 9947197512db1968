//! Student's t critical values

use crate::ConfidenceLevel;
use linreg_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Two-sided critical value `t(1 - alpha/2, df)` of Student's t distribution
pub fn students_t_critical(confidence_level: f64, degrees_of_freedom: usize) -> Result<f64> {
    let level = ConfidenceLevel::new(confidence_level)?;
    if degrees_of_freedom == 0 {
        return Err(Error::InvalidParameter(
            "Degrees of freedom must be positive".to_string(),
        ));
    }

    let t_dist = StudentsT::new(0.0, 1.0, degrees_of_freedom as f64).map_err(|e| {
        Error::Computation(format!("Failed to create t-distribution: {}", e))
    })?;
    Ok(t_dist.inverse_cdf(level.upper_tail()))
}
