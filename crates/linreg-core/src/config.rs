//! Dataset configuration
//!
//! A [`DatasetConfiguration`] bundles the true model parameters and the
//! sampling grid for one synthetic dataset. The true slope and intercept are
//! derived from two modelling coefficients `N` and `M`:
//!
//! ```text
//! slope     = M + N / 7
//! intercept = N / 3 + M / 2
//! ```

use crate::{Error, Result};
use serde::Deserialize;
use std::fmt;

/// Default lower bound of the x domain
pub const DEFAULT_MIN_X: i64 = -25;

/// Default upper bound of the x domain
pub const DEFAULT_MAX_X: i64 = 25;

/// Largest accepted number of data points
pub const MAX_SAMPLE_COUNT: usize = 100_000_000;

/// Immutable, validated parameters for one dataset run
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawConfiguration")]
pub struct DatasetConfiguration {
    slope: f64,
    intercept: f64,
    increment: i64,
    sample_count: usize,
    noise_std_dev: f64,
    min_x: i64,
    max_x: i64,
}

impl DatasetConfiguration {
    /// Create a configuration from the modelling coefficients
    ///
    /// # Arguments
    /// * `n_coef` - First modelling coefficient (`N`)
    /// * `m_coef` - Second modelling coefficient (`M`)
    /// * `increment` - Step between consecutive x values, must be positive
    /// * `sample_count` - Number of data points, in `1..=MAX_SAMPLE_COUNT`
    /// * `noise_std_dev` - Standard deviation of the noise, must be positive
    pub fn new(
        n_coef: f64,
        m_coef: f64,
        increment: i64,
        sample_count: usize,
        noise_std_dev: f64,
    ) -> Result<Self> {
        if !n_coef.is_finite() || !m_coef.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "Model coefficients must be finite, got N = {n_coef}, M = {m_coef}"
            )));
        }
        if increment <= 0 {
            return Err(Error::InvalidParameter(format!(
                "Increment must be positive, got {increment}"
            )));
        }
        if sample_count == 0 {
            return Err(Error::InvalidParameter(
                "Sample count must be positive".to_string(),
            ));
        }
        if sample_count > MAX_SAMPLE_COUNT {
            return Err(Error::InvalidParameter(format!(
                "Sample count {sample_count} exceeds limit {MAX_SAMPLE_COUNT}"
            )));
        }
        if !(noise_std_dev.is_finite() && noise_std_dev > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Noise standard deviation must be positive and finite, got {noise_std_dev}"
            )));
        }

        let config = Self {
            slope: m_coef + n_coef / 7.0,
            intercept: n_coef / 3.0 + m_coef / 2.0,
            increment,
            sample_count,
            noise_std_dev,
            min_x: DEFAULT_MIN_X,
            max_x: DEFAULT_MAX_X,
        };
        config.check_grid()?;
        Ok(config)
    }

    /// Replace the x domain bounds
    pub fn with_domain(mut self, min_x: i64, max_x: i64) -> Result<Self> {
        if min_x > max_x {
            return Err(Error::InvalidParameter(format!(
                "Domain lower bound {min_x} exceeds upper bound {max_x}"
            )));
        }
        self.min_x = min_x;
        self.max_x = max_x;
        self.check_grid()?;
        Ok(self)
    }

    // The last grid point must be representable.
    fn check_grid(&self) -> Result<()> {
        let last = i64::try_from(self.sample_count - 1)
            .ok()
            .and_then(|steps| steps.checked_mul(self.increment))
            .and_then(|span| span.checked_add(self.min_x));
        match last {
            Some(_) => Ok(()),
            None => Err(Error::InvalidParameter(format!(
                "Grid of {} points with increment {} overflows from {}",
                self.sample_count, self.increment, self.min_x
            ))),
        }
    }

    /// True slope `a` of `y = a*x + b + noise`
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// True intercept `b` of `y = a*x + b + noise`
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn increment(&self) -> i64 {
        self.increment
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn noise_std_dev(&self) -> f64 {
        self.noise_std_dev
    }

    pub fn min_x(&self) -> i64 {
        self.min_x
    }

    pub fn max_x(&self) -> i64 {
        self.max_x
    }

    /// The i-th grid point, `min_x + i * increment`, in integer arithmetic
    #[inline]
    pub fn x_at(&self, index: usize) -> i64 {
        self.min_x + index as i64 * self.increment
    }

    /// Noiseless model value at `x`
    #[inline]
    pub fn model_value(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

impl fmt::Display for DatasetConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x in [{}, {}], h = {}, n = {}, sigma = {}, true model: a = {}, b = {}",
            self.min_x,
            self.max_x,
            self.increment,
            self.sample_count,
            self.noise_std_dev,
            self.slope,
            self.intercept
        )
    }
}

/// Wire form accepted by serde, validated through [`DatasetConfiguration::new`]
#[derive(Debug, Deserialize)]
struct RawConfiguration {
    n: f64,
    m: f64,
    increment: i64,
    sample_count: usize,
    noise_std_dev: f64,
    #[serde(default = "default_min_x")]
    min_x: i64,
    #[serde(default = "default_max_x")]
    max_x: i64,
}

fn default_min_x() -> i64 {
    DEFAULT_MIN_X
}

fn default_max_x() -> i64 {
    DEFAULT_MAX_X
}

impl TryFrom<RawConfiguration> for DatasetConfiguration {
    type Error = Error;

    fn try_from(raw: RawConfiguration) -> Result<Self> {
        DatasetConfiguration::new(
            raw.n,
            raw.m,
            raw.increment,
            raw.sample_count,
            raw.noise_std_dev,
        )?
        .with_domain(raw.min_x, raw.max_x)
    }
}
