//! Linear model evaluation
//!
//! [`LinearModel::evaluate`] turns a configuration and a noise sequence into
//! a [`SampleSeries`] following `y[i] = slope * x[i] + intercept + noise[i]`.

use crate::{DatasetConfiguration, Error, Result};

/// Parallel x / noise / y sequences of one dataset
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    x: Vec<f64>,
    noise: Vec<f64>,
    y: Vec<f64>,
}

impl SampleSeries {
    /// Grid points `x[0..n)`
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Noise added to each point
    pub fn noise(&self) -> &[f64] {
        &self.noise
    }

    /// Observed values `y[0..n)`
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// `(x, y)` pairs in index order, e.g. for plotting
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// The noisy linear model `y = a*x + b + noise`
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearModel;

impl LinearModel {
    /// The x grid of a configuration
    pub fn x_values(config: &DatasetConfiguration) -> Vec<f64> {
        (0..config.sample_count())
            .map(|i| config.x_at(i) as f64)
            .collect()
    }

    /// Evaluate the model over the configured grid with the given noise
    ///
    /// Fails when `noise` does not hold exactly `sample_count` values.
    pub fn evaluate(config: &DatasetConfiguration, noise: &[f64]) -> Result<SampleSeries> {
        if noise.len() != config.sample_count() {
            return Err(Error::size_mismatch(
                config.sample_count(),
                noise.len(),
                "noise sequence",
            ));
        }

        let x = Self::x_values(config);
        let y = x
            .iter()
            .zip(noise)
            .map(|(&xi, &ei)| config.model_value(xi) + ei)
            .collect();

        Ok(SampleSeries {
            x,
            noise: noise.to_vec(),
            y,
        })
    }
}
