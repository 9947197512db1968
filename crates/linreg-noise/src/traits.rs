//! Noise source abstraction
//!
//! The random generator is always passed in by the caller, so a run can be
//! seeded for reproducibility and separate runs never share hidden state.

use linreg_core::{Error, Result};
use rand::Rng;

/// A source of additive noise values
pub trait NoiseSource {
    /// Draw a single noise value
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64;

    /// Draw `count` independent values in draw order
    ///
    /// Fails when `count` is zero.
    fn sample_many<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Result<Vec<f64>> {
        if count == 0 {
            return Err(Error::InvalidParameter(
                "Sample count must be positive".to_string(),
            ));
        }
        Ok((0..count).map(|_| self.sample(rng)).collect())
    }

    /// Short name for logs and reports
    fn name(&self) -> &'static str;
}
