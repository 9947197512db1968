//! Console tables for finished runs
//!
//! Reporting only reads a [`RunOutcome`]; nothing here recomputes
//! statistics.

use crate::RunOutcome;
use std::fmt;

const SEPARATOR: &str = "____________________________";

/// Parameter header, `n | x | E | Y` rows and the estimation summary
pub struct DataTable<'a> {
    outcome: &'a RunOutcome,
}

impl<'a> DataTable<'a> {
    pub fn new(outcome: &'a RunOutcome) -> Self {
        Self { outcome }
    }
}

impl fmt::Display for DataTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = &self.outcome.configuration;
        let series = &self.outcome.series;

        writeln!(f, "Parameters: {config}")?;
        writeln!(f, "   n   |   x   |   E   |   Y")?;
        writeln!(f, "{SEPARATOR}")?;
        for (i, ((x, e), y)) in series
            .x()
            .iter()
            .zip(series.noise())
            .zip(series.y())
            .enumerate()
        {
            writeln!(f, "   {i:<4} |   {x:<5} |   {e:<6.4} |   {y:<6.4}")?;
        }
        write!(f, "{}", EstimationSummary::new(self.outcome))
    }
}

/// True values, point estimates and interval estimates
pub struct EstimationSummary<'a> {
    outcome: &'a RunOutcome,
}

impl<'a> EstimationSummary<'a> {
    pub fn new(outcome: &'a RunOutcome) -> Self {
        Self { outcome }
    }
}

impl fmt::Display for EstimationSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = &self.outcome.configuration;
        let estimate = &self.outcome.estimate;
        let level = estimate.confidence_level() * 100.0;

        writeln!(
            f,
            "True values: a = {}, b = {}, sigma = {}",
            config.slope(),
            config.intercept(),
            config.noise_std_dev()
        )?;
        writeln!(
            f,
            "Point estimates: a = {:.4}, b = {:.4}, sigma^2 = {:.4}, sigma = {:.4}",
            estimate.slope,
            estimate.intercept,
            estimate.variance,
            estimate.std_dev()
        )?;
        writeln!(f, "{level:.0}% CI for a: {}", estimate.slope_interval)?;
        writeln!(f, "{level:.0}% CI for b: {}", estimate.intercept_interval)?;
        writeln!(f, "{level:.0}% CI for sigma^2: {}", estimate.variance_interval)?;
        writeln!(f, "{level:.0}% CI for sigma: {}", estimate.std_dev_interval())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatasetRun;
    use linreg_core::DatasetConfiguration;

    fn outcome() -> RunOutcome {
        let config = DatasetConfiguration::new(5.0, 4.0, 5, 11, 1.0).unwrap();
        DatasetRun::new(config)
            .with_table_step(0.01)
            .unwrap()
            .with_seed(1)
            .execute()
            .unwrap()
    }

    #[test]
    fn test_table_has_one_row_per_sample() {
        let outcome = outcome();
        let text = DataTable::new(&outcome).to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("Parameters: x in [-25, 25], h = 5, n = 11"));
        assert_eq!(lines[2], SEPARATOR);
        // header + column names + separator + 11 rows + 6 summary lines
        assert_eq!(lines.len(), 3 + 11 + 6);
        assert!(lines[3].starts_with("   0    |   -25"));
        assert!(lines[13].starts_with("   10   |   25"));
    }

    #[test]
    fn test_summary_reads_outcome() {
        let outcome = outcome();
        let text = EstimationSummary::new(&outcome).to_string();

        assert!(text.contains(&format!("a = {:.4}", outcome.estimate.slope)));
        assert!(text.contains(&format!("90% CI for a: {}", outcome.estimate.slope_interval)));
        assert!(text.contains("90% CI for sigma^2: ["));
        assert!(text.contains(&format!("sigma = {:.4}", outcome.estimate.std_dev())));
        assert!(text.contains(&format!(
            "90% CI for sigma: {}",
            outcome.estimate.std_dev_interval()
        )));
    }
}
