//! Ordinary least squares for `y = a*x + b + noise`
//!
//! With `Sxx = Σ(xᵢ - x̄)²` the estimates are
//!
//! ```text
//! a = Σ(xᵢ - x̄)(yᵢ - ȳ) / Sxx
//! b = ȳ - a·x̄
//! σ² = Σ(yᵢ - a·xᵢ - b)² / (n - 2)
//! SE(a) = √(σ² / Sxx)
//! SE(b) = √(σ² (1/n + x̄² / Sxx))
//! ```
//!
//! Slope and intercept intervals are `estimate ± t·SE` with the two-sided
//! Student's t critical value on `n - 2` degrees of freedom. The variance
//! interval is `[(n-2)σ² / χ²(1-α/2), (n-2)σ² / χ²(α/2)]` with approximated
//! Chi-squared quantiles.

use crate::{ConfidenceInterval, EstimationResult};
use linreg_core::{Error, Result, SampleSeries};
use linreg_quantile::{chi_squared_quantile, students_t_critical, ConfidenceLevel};
use tracing::{debug, instrument};

/// Minimum number of points for a fit with positive residual degrees of freedom
pub const MIN_SAMPLES: usize = 3;

/// Least-squares estimator with interval estimates at a fixed level
#[derive(Debug, Clone, Copy, Default)]
pub struct RegressionEstimator {
    level: ConfidenceLevel,
}

impl RegressionEstimator {
    /// Create an estimator for the given confidence level in `(0, 1)`
    pub fn new(confidence_level: f64) -> Result<Self> {
        Ok(Self {
            level: ConfidenceLevel::new(confidence_level)?,
        })
    }

    pub fn with_level(level: ConfidenceLevel) -> Self {
        Self { level }
    }

    pub fn confidence_level(&self) -> ConfidenceLevel {
        self.level
    }

    /// Fit a generated series
    pub fn fit_series(&self, series: &SampleSeries) -> Result<EstimationResult> {
        self.fit(series.x(), series.y())
    }

    /// Fit `y` against `x`
    ///
    /// # Errors
    /// * `InvalidInput` if the lengths differ
    /// * `InsufficientData` for fewer than [`MIN_SAMPLES`] points
    /// * `Computation` for NaN/Inf input or a non-positive Chi-squared
    ///   quantile approximation
    /// * `DegenerateInput` if all x values are equal
    #[instrument(level = "debug", skip(self, x, y), fields(n = x.len()))]
    pub fn fit(&self, x: &[f64], y: &[f64]) -> Result<EstimationResult> {
        if x.len() != y.len() {
            return Err(Error::size_mismatch(x.len(), y.len(), "y values"));
        }
        if x.len() < MIN_SAMPLES {
            return Err(Error::InsufficientData {
                expected: MIN_SAMPLES,
                actual: x.len(),
            });
        }
        if x.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("x values"));
        }
        if y.iter().any(|v| !v.is_finite()) {
            return Err(Error::non_finite("y values"));
        }

        if x.iter().all(|&v| v == x[0]) {
            return Err(Error::DegenerateInput(
                "x values are all equal, slope is undefined".to_string(),
            ));
        }

        let n = x.len();
        let n_f = n as f64;
        let x_mean = x.iter().sum::<f64>() / n_f;
        let y_mean = y.iter().sum::<f64>() / n_f;

        let (sxy, sxx) = x
            .iter()
            .zip(y)
            .fold((0.0, 0.0), |(sxy, sxx), (&xi, &yi)| {
                let dx = xi - x_mean;
                (sxy + dx * (yi - y_mean), sxx + dx * dx)
            });
        if sxx == 0.0 {
            return Err(Error::DegenerateInput(
                "x spread underflows, slope is undefined".to_string(),
            ));
        }

        let slope = sxy / sxx;
        let intercept = y_mean - slope * x_mean;

        let df = n - 2;
        let rss: f64 = x
            .iter()
            .zip(y)
            .map(|(&xi, &yi)| {
                let residual = yi - slope * xi - intercept;
                residual * residual
            })
            .sum();
        let variance = rss / df as f64;

        let slope_se = (variance / sxx).sqrt();
        let intercept_se = (variance * (1.0 / n_f + x_mean * x_mean / sxx)).sqrt();

        let level = self.level.value();
        let t_critical = students_t_critical(level, df)?;

        let variance_interval = self.variance_interval(variance, df)?;

        debug!(
            "Fit n={} slope={:.6} intercept={:.6} variance={:.6} t={:.4}",
            n, slope, intercept, variance, t_critical
        );

        Ok(EstimationResult {
            slope,
            intercept,
            variance,
            slope_standard_error: slope_se,
            intercept_standard_error: intercept_se,
            slope_interval: ConfidenceInterval::symmetric(slope, t_critical * slope_se, level),
            intercept_interval: ConfidenceInterval::symmetric(
                intercept,
                t_critical * intercept_se,
                level,
            ),
            variance_interval,
            sample_size: n,
            degrees_of_freedom: df,
            t_critical,
        })
    }

    fn variance_interval(&self, variance: f64, df: usize) -> Result<ConfidenceInterval> {
        let chi_upper = chi_squared_quantile(self.level.upper_tail(), df)?;
        let chi_lower = chi_squared_quantile(self.level.lower_tail(), df)?;
        if chi_lower <= 0.0 {
            return Err(Error::Computation(format!(
                "Chi-squared approximation for {df} degrees of freedom at p = {} is non-positive ({chi_lower})",
                self.level.lower_tail()
            )));
        }

        let scaled = df as f64 * variance;
        Ok(ConfidenceInterval::new(
            scaled / chi_upper,
            scaled / chi_lower,
            variance,
            self.level.value(),
        ))
    }
}
