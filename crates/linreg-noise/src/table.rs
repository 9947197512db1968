//! Discretized Gaussian density table
//!
//! [`NoiseTable`] evaluates the normal density
//!
//! ```text
//! f(x) = 1 / sqrt(2*pi*sigma^2) * exp(-(x - mu)^2 / (2*sigma^2))
//! ```
//!
//! on a symmetric grid covering `mu ± 5*sigma`. Sampling picks a grid index
//! uniformly at random and returns the *density* stored there. The returned
//! value is therefore a density reading in `(0, f(mu)]`, not a draw from the
//! normal distribution's support. Use [`GaussianNoise`](crate::GaussianNoise)
//! for classical normal draws.

use crate::NoiseSource;
use linreg_core::{Error, Result};
use rand::Rng;
use std::f64::consts::PI;
use tracing::{debug, instrument};

/// Default spacing between grid points
pub const DEFAULT_TABLE_STEP: f64 = 0.0001;

/// Half-width of the grid in standard deviations
pub const TABLE_HALF_WIDTH_SIGMAS: f64 = 5.0;

/// Upper bound on the number of grid points a table may hold
pub const MAX_TABLE_POINTS: usize = 20_000_000;

/// One grid point: offset from the mean and the density there
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TablePoint {
    pub offset: f64,
    pub density: f64,
}

/// Immutable density table for one `(mean, std_dev, step)` triple
#[derive(Debug, Clone)]
pub struct NoiseTable {
    mean: f64,
    std_dev: f64,
    step: f64,
    points: Vec<TablePoint>,
}

impl NoiseTable {
    /// Build the table with the given grid step
    ///
    /// The grid holds `floor(2 * 5 * std_dev / step) + 1` points centred on
    /// `mean`.
    #[instrument(level = "debug")]
    pub fn build(mean: f64, std_dev: f64, step: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "Mean must be finite, got {mean}"
            )));
        }
        if !(std_dev.is_finite() && std_dev > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Standard deviation must be positive, got {std_dev}"
            )));
        }
        if !(step.is_finite() && step > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Table step must be positive, got {step}"
            )));
        }

        let count = grid_point_count(std_dev, step)?;
        let half_range = (count - 1) as f64 * step / 2.0;
        let variance = std_dev * std_dev;
        let normalization = 1.0 / (2.0 * PI * variance).sqrt();

        let points = (0..count)
            .map(|i| {
                let offset = -half_range + i as f64 * step;
                let density = normalization * (-(offset * offset) / (2.0 * variance)).exp();
                TablePoint { offset, density }
            })
            .collect();

        debug!("Built density table with {} points", count);

        Ok(Self {
            mean,
            std_dev,
            step,
            points,
        })
    }

    /// Build the table with [`DEFAULT_TABLE_STEP`]
    pub fn with_default_step(mean: f64, std_dev: f64) -> Result<Self> {
        Self::build(mean, std_dev, DEFAULT_TABLE_STEP)
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Grid points in ascending offset order
    pub fn points(&self) -> &[TablePoint] {
        &self.points
    }

    /// Absolute position of a grid point, `mean + offset`
    pub fn position(&self, point: &TablePoint) -> f64 {
        self.mean + point.offset
    }

    /// Largest density in the table, attained at the grid point nearest the mean
    pub fn peak_density(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.density)
            .fold(0.0, f64::max)
    }
}

impl NoiseSource for NoiseTable {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.points[rng.gen_range(0..self.points.len())].density
    }

    fn sample_many<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Result<Vec<f64>> {
        if count == 0 {
            return Err(Error::InvalidParameter(
                "Sample count must be positive".to_string(),
            ));
        }
        if self.points.is_empty() {
            return Err(Error::InvalidInput("Density table is empty".to_string()));
        }
        Ok((0..count).map(|_| self.sample(rng)).collect())
    }

    fn name(&self) -> &'static str {
        "density-table"
    }
}

// A ratio within 1e-9 of an integer is taken as that integer so that
// 10 * sigma / step does not lose its last point to rounding.
fn grid_point_count(std_dev: f64, step: f64) -> Result<usize> {
    let ratio = 2.0 * TABLE_HALF_WIDTH_SIGMAS * std_dev / step;
    let intervals = if (ratio - ratio.round()).abs() < 1e-9 {
        ratio.round()
    } else {
        ratio.floor()
    };

    if intervals + 1.0 > MAX_TABLE_POINTS as f64 {
        return Err(Error::InvalidParameter(format!(
            "Density table would hold {} points, limit is {MAX_TABLE_POINTS}",
            intervals + 1.0
        )));
    }
    Ok(intervals as usize + 1)
}
