//! One dataset run: configuration → noise → series → estimate

use linreg_core::{DatasetConfiguration, Error, LinearModel, Result, SampleSeries};
use linreg_estimate::{EstimationResult, RegressionEstimator};
use linreg_noise::{
    NoiseSource, NoiseTable, DEFAULT_TABLE_STEP, MAX_TABLE_POINTS, TABLE_HALF_WIDTH_SIGMAS,
};
use linreg_quantile::ConfidenceLevel;
use rand::prelude::*;
use tracing::{debug, instrument};

/// Everything produced by one run, read by reporting collaborators
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub configuration: DatasetConfiguration,
    pub series: SampleSeries,
    pub estimate: EstimationResult,
    /// Name of the noise source that produced `series.noise()`
    pub noise_source: &'static str,
}

/// Builder for a single dataset run
///
/// By default the noise comes from a [`NoiseTable`] with mean zero and the
/// configured standard deviation, and intervals are built at 90%.
#[derive(Debug, Clone)]
pub struct DatasetRun {
    configuration: DatasetConfiguration,
    level: ConfidenceLevel,
    table_step: f64,
    seed: Option<u64>,
}

impl DatasetRun {
    pub fn new(configuration: DatasetConfiguration) -> Self {
        Self {
            configuration,
            level: ConfidenceLevel::default(),
            table_step: DEFAULT_TABLE_STEP,
            seed: None,
        }
    }

    /// Set the confidence level of the interval estimates
    pub fn with_confidence_level(mut self, confidence_level: f64) -> Result<Self> {
        self.level = ConfidenceLevel::new(confidence_level)?;
        Ok(self)
    }

    /// Set the grid step of the density table
    pub fn with_table_step(mut self, step: f64) -> Result<Self> {
        if !(step.is_finite() && step > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Table step must be positive, got {step}"
            )));
        }
        self.table_step = step;
        Ok(self)
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn configuration(&self) -> &DatasetConfiguration {
        &self.configuration
    }

    /// Grid step used for the density table
    ///
    /// A wide noise distribution would need more than [`MAX_TABLE_POINTS`]
    /// points at the configured step, in which case the step is widened to
    /// the finest one that fits.
    pub fn effective_table_step(&self) -> f64 {
        let span = 2.0 * TABLE_HALF_WIDTH_SIGMAS * self.configuration.noise_std_dev();
        let finest = span / (MAX_TABLE_POINTS - 2) as f64;
        self.table_step.max(finest)
    }

    /// The density table this run samples from
    pub fn noise_table(&self) -> Result<NoiseTable> {
        let step = self.effective_table_step();
        if step > self.table_step {
            debug!("Widened table step from {} to {}", self.table_step, step);
        }
        NoiseTable::build(0.0, self.configuration.noise_std_dev(), step)
    }

    /// Run with the density table and a generator seeded from the run's seed
    ///
    /// Without a seed a fresh one is drawn from the thread-local generator.
    #[instrument(level = "debug", skip(self), fields(n = self.configuration.sample_count()))]
    pub fn execute(&self) -> Result<RunOutcome> {
        let table = self.noise_table()?;
        let seed = self.seed.unwrap_or_else(|| thread_rng().gen());
        let mut rng = StdRng::seed_from_u64(seed);
        debug!("Running dataset with seed {}", seed);
        self.execute_with(&table, &mut rng)
    }

    /// Run with a caller-supplied noise source and generator
    pub fn execute_with<S, R>(&self, source: &S, rng: &mut R) -> Result<RunOutcome>
    where
        S: NoiseSource,
        R: Rng + ?Sized,
    {
        let noise = source.sample_many(rng, self.configuration.sample_count())?;
        let series = LinearModel::evaluate(&self.configuration, &noise)?;
        let estimate = RegressionEstimator::with_level(self.level).fit_series(&series)?;

        debug!(
            "Run with {} noise: a = {:.4} (true {:.4}), b = {:.4} (true {:.4})",
            source.name(),
            estimate.slope,
            self.configuration.slope(),
            estimate.intercept,
            self.configuration.intercept()
        );

        Ok(RunOutcome {
            configuration: self.configuration.clone(),
            series,
            estimate,
            noise_source: source.name(),
        })
    }
}
