use super::traits::Solver;
use crate::core::{Bounds, ConfigurationError, DIMENSION, OptimizerResult, Result, Trajectory};
use crate::optimization::problem::Objective;
use crate::optimization::random::RandomStream;
use argmin::core::CostFunction;
use serde::{Deserialize, Serialize};

/// Bounded, temperature-adaptive simulated annealing with random restarts.
///
/// Geometric cooling `T *= alpha`; the proposal step shrinks linearly from
/// `step_max` at `initial_temp` to `step_min` at `final_temp`. Worse moves are
/// accepted with the Metropolis probability `exp(-dE / T)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatedAnnealer {
    pub initial_temp: f64,
    pub final_temp: f64,
    /// Cooling factor applied every iteration
    pub alpha: f64,
    /// Step at high temperature
    pub step_max: f64,
    /// Step at low temperature
    pub step_min: f64,
    pub max_iters: usize,
    pub n_restarts: usize,
    pub bounds: Bounds,
}

impl Default for SimulatedAnnealer {
    fn default() -> Self {
        Self {
            initial_temp: 5.0,
            final_temp: 1e-3,
            alpha: 0.999,
            step_max: 0.8,
            step_min: 0.02,
            max_iters: 6000,
            n_restarts: 25,
            bounds: Bounds::default(),
        }
    }
}

impl SimulatedAnnealer {
    pub fn new(max_iters: usize) -> Self {
        Self {
            max_iters,
            ..Self::default()
        }
    }

    /// Configure the cooling schedule (defaults: 5.0 -> 1e-3, alpha=0.999)
    pub fn with_schedule(mut self, initial_temp: f64, final_temp: f64, alpha: f64) -> Self {
        self.initial_temp = initial_temp;
        self.final_temp = final_temp;
        self.alpha = alpha;
        self
    }

    /// Configure proposal step bounds (defaults: 0.8 hot, 0.02 cold)
    pub fn with_steps(mut self, step_max: f64, step_min: f64) -> Self {
        self.step_max = step_max;
        self.step_min = step_min;
        self
    }

    /// Configure number of restarts (default: 25)
    pub fn with_restarts(mut self, n_restarts: usize) -> Self {
        self.n_restarts = n_restarts;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Proposal half-width at temperature `t`
    pub fn step_size(&self, t: f64) -> f64 {
        let span = (self.initial_temp - self.final_temp).max(1e-12);
        let ratio = ((t - self.final_temp) / span).clamp(0.0, 1.0);
        self.step_min + (self.step_max - self.step_min) * ratio
    }

    /// One annealing run from `start` (clamped into bounds first).
    ///
    /// The trajectory holds the start and every accepted state; it can go
    /// uphill. `best_value` never regresses.
    pub fn anneal<P: Objective>(
        &self,
        problem: &P,
        start: &[f64],
        rng: &mut RandomStream,
    ) -> Result<OptimizerResult> {
        self.validate_schedule()?;
        let mut x = self.bounds.clamp_start(start)?;
        let mut fx = problem.cost(&x)?;
        let mut cost_evals = 1;

        let mut best = x.clone();
        let mut best_fx = fx;

        let mut temperature = self.initial_temp;
        let mut trajectory = Trajectory::starting_at(&x);
        let mut iterations = 0;

        for _ in 0..self.max_iters {
            if temperature < self.final_temp {
                break;
            }
            iterations += 1;

            // Propose
            let step = self.step_size(temperature);
            let mut candidate: Vec<f64> = x
                .iter()
                .map(|xi| xi + rng.uniform(-step, step))
                .collect();
            self.bounds.clamp_in_place(&mut candidate);
            let fc = problem.cost(&candidate)?;
            cost_evals += 1;

            // Metropolis: the acceptance draw is only taken for uphill moves
            let delta = fc - fx;
            let accepted = delta <= 0.0 || rng.unit() < (-delta / temperature).exp();
            if accepted {
                if delta > 0.0 {
                    tracing::trace!(delta, temperature, "accepted uphill move");
                }
                x = candidate;
                fx = fc;
                trajectory.push(&x);

                if fx < best_fx {
                    best.copy_from_slice(&x);
                    best_fx = fx;
                }
            }

            temperature *= self.alpha;
        }

        Ok(OptimizerResult {
            trajectory,
            best_point: best,
            best_value: best_fx,
            iterations,
            cost_evals,
        })
    }

    /// Anneals from fresh uniform starts drawn from the same stream.
    ///
    /// Only the winning restart's trajectory is kept.
    pub fn anneal_with_restarts<P: Objective>(
        &self,
        problem: &P,
        rng: &mut RandomStream,
    ) -> Result<OptimizerResult> {
        self.validate()?;
        tracing::info!(
            n_restarts = self.n_restarts,
            initial_temp = self.initial_temp,
            final_temp = self.final_temp,
            alpha = self.alpha,
            max_iters = self.max_iters,
            "starting simulated annealing"
        );

        let mut best: Option<OptimizerResult> = None;
        let mut iterations = 0;
        let mut cost_evals = 0;

        for restart in 0..self.n_restarts {
            let start = rng.uniform_point(&self.bounds, DIMENSION);
            let run = self.anneal(problem, &start, rng)?;
            iterations += run.iterations;
            cost_evals += run.cost_evals;

            tracing::debug!(
                restart = restart + 1,
                best_value = run.best_value,
                accepted = run.trajectory.len() - 1,
                "annealing restart finished"
            );

            let improves = best
                .as_ref()
                .is_none_or(|incumbent| run.best_value < incumbent.best_value);
            if improves {
                best = Some(run);
            }
        }

        // validate() guarantees at least one restart
        let mut best = best.ok_or(ConfigurationError::ZeroCount { name: "n_restarts" })?;
        best.iterations = iterations;
        best.cost_evals = cost_evals;

        tracing::info!(
            best_value = best.best_value,
            iterations,
            cost_evals,
            "simulated annealing finished"
        );
        Ok(best)
    }

    fn validate_schedule(&self) -> Result<()> {
        self.bounds.validate()?;
        if !(self.final_temp > 0.0 && self.initial_temp > self.final_temp)
            || !self.initial_temp.is_finite()
        {
            return Err(ConfigurationError::InvalidTemperatures {
                initial: self.initial_temp,
                final_temp: self.final_temp,
            }
            .into());
        }
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(ConfigurationError::InvalidCoolingFactor(self.alpha).into());
        }
        if !(self.step_min >= 0.0 && self.step_max >= self.step_min) || !self.step_max.is_finite()
        {
            return Err(ConfigurationError::InvalidStepRange {
                min: self.step_min,
                max: self.step_max,
            }
            .into());
        }
        Ok(())
    }
}

impl Solver for SimulatedAnnealer {
    type Trace = Trajectory;

    fn name(&self) -> &str {
        "SimulatedAnnealing"
    }

    fn validate(&self) -> Result<()> {
        self.validate_schedule()?;
        if self.n_restarts == 0 {
            return Err(ConfigurationError::ZeroCount { name: "n_restarts" }.into());
        }
        Ok(())
    }

    fn solve<P: Objective>(
        &self,
        problem: &P,
        rng: &mut RandomStream,
    ) -> Result<OptimizerResult<Trajectory>> {
        self.anneal_with_restarts(problem, rng)
    }
}
