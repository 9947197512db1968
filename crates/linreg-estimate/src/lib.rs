//! Least-squares estimation of a simple linear model
//!
//! [`RegressionEstimator`] fits `y = a*x + b + noise` by ordinary least
//! squares and reports point estimates of the slope, intercept and residual
//! variance together with confidence intervals for all three.
//!
//! # Example
//!
//! ```rust
//! use linreg_estimate::RegressionEstimator;
//!
//! let x: Vec<f64> = (0..11).map(|i| (i * 5 - 25) as f64).collect();
//! let y: Vec<f64> = x.iter().map(|&x| 2.0 * x + 1.0).collect();
//!
//! let result = RegressionEstimator::new(0.90).unwrap().fit(&x, &y).unwrap();
//! assert!((result.slope - 2.0).abs() < 1e-9);
//! assert!((result.intercept - 1.0).abs() < 1e-9);
//! println!("90% CI for a: {}", result.slope_interval);
//! ```

mod ols;
mod types;

pub use ols::{RegressionEstimator, MIN_SAMPLES};
pub use types::{ConfidenceInterval, EstimationResult};
