//! Statistical behaviour of the estimator on simulated data

use linreg_core::{DatasetConfiguration, Error, LinearModel};
use linreg_estimate::RegressionEstimator;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Fraction of simulated datasets whose slope interval covers the true slope
fn slope_coverage(config: &DatasetConfiguration, level: f64, runs: usize, seed: u64) -> f64 {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(0.0, config.noise_std_dev()).unwrap();
    let estimator = RegressionEstimator::new(level).unwrap();

    let covered = (0..runs)
        .filter(|_| {
            let noise: Vec<f64> = (0..config.sample_count())
                .map(|_| normal.sample(&mut rng))
                .collect();
            let series = LinearModel::evaluate(config, &noise).unwrap();
            let result = estimator.fit_series(&series).unwrap();
            result.slope_interval.contains(config.slope())
        })
        .count();

    covered as f64 / runs as f64
}

#[test]
fn slope_interval_coverage_is_near_nominal() {
    let config = DatasetConfiguration::new(5.0, 4.0, 5, 11, 3.0).unwrap();
    let coverage = slope_coverage(&config, 0.90, 2000, 42);

    // Binomial standard error at 2000 runs is about 0.007
    assert!((coverage - 0.90).abs() < 0.03, "coverage {coverage}");
}

#[test]
fn variance_estimate_is_unbiased_on_average() {
    let config = DatasetConfiguration::new(5.0, 4.0, 1, 51, 2.0).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let normal = Normal::new(0.0, 2.0).unwrap();
    let estimator = RegressionEstimator::default();

    let runs = 1000;
    let mean_variance = (0..runs)
        .map(|_| {
            let noise: Vec<f64> = (0..51).map(|_| normal.sample(&mut rng)).collect();
            let series = LinearModel::evaluate(&config, &noise).unwrap();
            estimator.fit_series(&series).unwrap().variance
        })
        .sum::<f64>()
        / runs as f64;

    assert!((mean_variance - 4.0).abs() < 0.2, "mean variance {mean_variance}");
}

proptest! {
    #[test]
    fn zero_noise_recovers_true_line(
        n_coef in -50.0f64..50.0,
        m_coef in -50.0f64..50.0,
        increment in 1i64..5,
        sample_count in 3usize..40,
    ) {
        let config = DatasetConfiguration::new(n_coef, m_coef, increment, sample_count, 1.0).unwrap();
        let series = LinearModel::evaluate(&config, &vec![0.0; sample_count]).unwrap();
        let result = RegressionEstimator::default().fit_series(&series).unwrap();

        prop_assert!((result.slope - config.slope()).abs() < 1e-9);
        prop_assert!((result.intercept - config.intercept()).abs() < 1e-9);
        prop_assert!(result.variance.abs() < 1e-9);
    }

    #[test]
    fn coefficient_intervals_are_symmetric(
        noise in prop::collection::vec(-5.0f64..5.0, 3..60),
        level in 0.5f64..0.99,
    ) {
        let config = DatasetConfiguration::new(5.0, 4.0, 1, noise.len(), 1.0).unwrap();
        let series = LinearModel::evaluate(&config, &noise).unwrap();
        let estimator = RegressionEstimator::new(level).unwrap();

        match estimator.fit_series(&series) {
            Ok(result) => {
                for ci in [result.slope_interval, result.intercept_interval] {
                    let tolerance = 1e-9 * (1.0 + ci.estimate.abs() + ci.width());
                    prop_assert!(((ci.upper - ci.estimate) - (ci.estimate - ci.lower)).abs() < tolerance);
                }
            }
            // Only the far Chi-squared tail with a single degree of freedom fails
            Err(err) => {
                prop_assert!(matches!(err, Error::Computation(_)), "unexpected error: {}", err);
                prop_assert_eq!(noise.len(), 3);
                prop_assert!(level > 0.95);
            }
        }
    }
}
