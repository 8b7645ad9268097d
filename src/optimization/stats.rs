use super::random::RandomStream;
use crate::core::{ConfigurationError, Result, RunStatistics};
use serde::{Deserialize, Serialize};

/// Repeats a randomized run from one seeded stream and summarizes the outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Aggregator {
    pub n_runs: usize,
    pub seed: u64,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self {
            n_runs: 20,
            seed: 123,
        }
    }
}

impl Aggregator {
    pub fn new(n_runs: usize, seed: u64) -> Self {
        Self { n_runs, seed }
    }

    pub fn validate(&self) -> Result<()> {
        if self.n_runs == 0 {
            return Err(ConfigurationError::ZeroCount { name: "n_runs" }.into());
        }
        Ok(())
    }

    /// Calls `run_fn` `n_runs` times on the same stream.
    ///
    /// The stream is never reseeded between runs, so run `k` sees the state
    /// left behind by run `k - 1`.
    pub fn run<F>(&self, mut run_fn: F) -> Result<RunStatistics>
    where
        F: FnMut(&mut RandomStream) -> Result<f64>,
    {
        self.validate()?;

        let mut rng = RandomStream::seeded(self.seed);
        let mut values = Vec::with_capacity(self.n_runs);
        for run in 0..self.n_runs {
            let value = run_fn(&mut rng)?;
            tracing::debug!(run = run + 1, value, "aggregated run finished");
            values.push(value);
        }

        let stats = RunStatistics::from_values(&values)
            .ok_or(ConfigurationError::ZeroCount { name: "n_runs" })?;
        tracing::info!(
            n_runs = self.n_runs,
            seed = self.seed,
            best = stats.best,
            mean = stats.mean,
            std = stats.std,
            "run statistics"
        );
        Ok(stats)
    }
}

/// `Aggregator::new(n_runs, seed).run(run_fn)`
pub fn aggregate<F>(run_fn: F, n_runs: usize, seed: u64) -> Result<RunStatistics>
where
    F: FnMut(&mut RandomStream) -> Result<f64>,
{
    Aggregator::new(n_runs, seed).run(run_fn)
}
