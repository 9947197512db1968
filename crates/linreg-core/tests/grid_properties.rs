//! Property tests for the dataset grid and the linear model

use linreg_core::{DatasetConfiguration, LinearModel};
use proptest::prelude::*;

proptest! {
    #[test]
    fn x_grid_is_exact(
        increment in 1i64..50,
        sample_count in 1usize..200,
        min_x in -1000i64..1000,
    ) {
        let config = DatasetConfiguration::new(5.0, 4.0, increment, sample_count, 1.0)
            .unwrap()
            .with_domain(min_x, min_x + 10)
            .unwrap();
        let series = LinearModel::evaluate(&config, &vec![0.0; sample_count]).unwrap();

        prop_assert_eq!(series.len(), sample_count);
        for (i, &x) in series.x().iter().enumerate() {
            prop_assert_eq!(x, (min_x + i as i64 * increment) as f64);
        }
    }

    #[test]
    fn evaluate_is_bit_exact_on_repeat(
        noise in prop::collection::vec(-10.0f64..10.0, 1..64),
        n_coef in -20.0f64..20.0,
        m_coef in -20.0f64..20.0,
    ) {
        let config = DatasetConfiguration::new(n_coef, m_coef, 1, noise.len(), 2.0).unwrap();
        let first = LinearModel::evaluate(&config, &noise).unwrap();
        let second = LinearModel::evaluate(&config, &noise).unwrap();

        for (a, b) in first.y().iter().zip(second.y()) {
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn mismatched_noise_is_rejected(sample_count in 1usize..100, extra in 1usize..5) {
        let config = DatasetConfiguration::new(1.0, 1.0, 1, sample_count, 1.0).unwrap();
        let noise = vec![0.0; sample_count + extra];
        let err = LinearModel::evaluate(&config, &noise).unwrap_err();
        prop_assert!(err.is_invalid_argument());
    }
}
