//! Synthesize noisy linear datasets and recover their parameters
//!
//! A run takes a [`DatasetConfiguration`], draws noise from a
//! [`NoiseSource`], evaluates `y = a*x + b + noise` on the configured grid
//! and fits the result by ordinary least squares, reporting point estimates
//! and confidence intervals for the slope, intercept and residual variance.
//!
//! # Example
//!
//! ```rust
//! use linreg_sim::{DatasetConfiguration, DatasetRun};
//!
//! let config = DatasetConfiguration::new(5.0, 4.0, 1, 51, 1.0).unwrap();
//! let outcome = DatasetRun::new(config)
//!     .with_table_step(0.001)
//!     .unwrap()
//!     .with_seed(42)
//!     .execute()
//!     .unwrap();
//!
//! println!("90% CI for a: {}", outcome.estimate.slope_interval);
//! ```

pub mod pipeline;
pub mod report;

pub use linreg_core::{
    DatasetConfiguration, Error, LinearModel, Result, SampleSeries, DEFAULT_MAX_X, DEFAULT_MIN_X,
    MAX_SAMPLE_COUNT,
};
pub use linreg_estimate::{ConfidenceInterval, EstimationResult, RegressionEstimator, MIN_SAMPLES};
pub use linreg_noise::{GaussianNoise, NoiseSource, NoiseTable, TablePoint, DEFAULT_TABLE_STEP};
pub use linreg_quantile::{
    chi_squared_quantile, students_t_critical, ConfidenceLevel, DEFAULT_CONFIDENCE_LEVEL,
};

pub use pipeline::{DatasetRun, RunOutcome};
pub use report::{DataTable, EstimationSummary};
