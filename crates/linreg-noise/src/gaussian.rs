//! Standard normal noise via `rand_distr`

use crate::NoiseSource;
use linreg_core::{Error, Result};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Draws noise from `N(mean, std_dev^2)`
#[derive(Debug, Clone, Copy)]
pub struct GaussianNoise {
    normal: Normal<f64>,
}

impl GaussianNoise {
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !(std_dev.is_finite() && std_dev > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Standard deviation must be positive, got {std_dev}"
            )));
        }
        let normal = Normal::new(mean, std_dev).map_err(|e| {
            Error::InvalidParameter(format!("Failed to create normal distribution: {e}"))
        })?;
        Ok(Self { normal })
    }

    pub fn mean(&self) -> f64 {
        self.normal.mean()
    }

    pub fn std_dev(&self) -> f64 {
        self.normal.std_dev()
    }
}

impl NoiseSource for GaussianNoise {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.normal.sample(rng)
    }

    fn name(&self) -> &'static str {
        "gaussian"
    }
}
