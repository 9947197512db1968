//! Core types for synthesizing noisy linear datasets
//!
//! This crate holds the pieces every other linreg crate builds on:
//!
//! - [`Error`] / [`Result`]: the shared error taxonomy
//! - [`DatasetConfiguration`]: validated true parameters and sampling grid
//! - [`LinearModel`] / [`SampleSeries`]: `y = a*x + b + noise` over the grid
//!
//! # Example
//!
//! ```rust
//! use linreg_core::{DatasetConfiguration, LinearModel};
//!
//! let config = DatasetConfiguration::new(5.0, 4.0, 5, 11, 1.0).unwrap();
//! let series = LinearModel::evaluate(&config, &[0.0; 11]).unwrap();
//!
//! assert_eq!(series.x()[0], -25.0);
//! assert_eq!(series.x()[10], 25.0);
//! ```

pub mod config;
pub mod error;
pub mod series;

pub use config::{DatasetConfiguration, DEFAULT_MAX_X, DEFAULT_MIN_X, MAX_SAMPLE_COUNT};
pub use error::{Error, Result};
pub use series::{LinearModel, SampleSeries};
