//! Noise generation for synthetic linear datasets
//!
//! Two sources implement [`NoiseSource`]:
//!
//! - [`NoiseTable`]: a discretized Gaussian density table sampled by uniform
//!   index selection. This is the default policy and returns density values.
//! - [`GaussianNoise`]: classical draws from a normal distribution.
//!
//! Both take the random generator as an argument.
//!
//! # Example
//!
//! ```rust
//! use linreg_noise::{NoiseSource, NoiseTable};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let table = NoiseTable::build(0.0, 1.0, 0.001).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//! let noise = table.sample_many(&mut rng, 11).unwrap();
//!
//! assert_eq!(noise.len(), 11);
//! ```

mod gaussian;
mod table;
mod traits;

pub use gaussian::GaussianNoise;
pub use table::{
    NoiseTable, TablePoint, DEFAULT_TABLE_STEP, MAX_TABLE_POINTS, TABLE_HALF_WIDTH_SIGMAS,
};
pub use traits::NoiseSource;
