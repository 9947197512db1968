//! Quantile functions for regression confidence intervals
//!
//! - [`chi_squared_quantile`]: closed-form approximation of Chi-squared
//!   quantiles, used for the residual variance interval
//! - [`students_t_critical`]: two-sided Student's t critical values for any
//!   number of degrees of freedom, used for slope and intercept intervals
//! - [`ConfidenceLevel`]: validated confidence level with tail helpers
//!
//! # Example
//!
//! ```rust
//! use linreg_quantile::{chi_squared_quantile, students_t_critical};
//!
//! let upper = chi_squared_quantile(0.95, 9).unwrap();
//! let lower = chi_squared_quantile(0.05, 9).unwrap();
//! assert!(lower < 9.0 && 9.0 < upper);
//!
//! let t = students_t_critical(0.95, 9).unwrap();
//! assert!((t - 2.262).abs() < 1e-3);
//! ```

mod chi_squared;
mod level;
mod students_t;

pub use chi_squared::{chi_squared_quantile, probit_approximation};
pub use level::{ConfidenceLevel, DEFAULT_CONFIDENCE_LEVEL};
pub use students_t::students_t_critical;
