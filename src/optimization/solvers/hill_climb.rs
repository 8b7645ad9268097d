use super::argmin_index;
use super::traits::Solver;
use crate::core::{Bounds, ConfigurationError, DIMENSION, OptimizerResult, Result, Trajectory};
use crate::optimization::problem::Objective;
use crate::optimization::random::RandomStream;
use argmin::core::CostFunction;
use serde::{Deserialize, Serialize};

/// Greedy axis-aligned local search with random restarts.
///
/// Each step looks at the `2d` neighbors at distance `step_size` and moves to
/// the best one only if it strictly improves; otherwise the climb stops.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HillClimber {
    pub step_size: f64,
    pub max_iters: usize,
    pub n_restarts: usize,
    pub bounds: Bounds,
}

impl Default for HillClimber {
    fn default() -> Self {
        Self {
            step_size: 0.1,
            max_iters: 500,
            n_restarts: 20,
            bounds: Bounds::default(),
        }
    }
}

impl HillClimber {
    pub fn new(step_size: f64, max_iters: usize) -> Self {
        Self {
            step_size,
            max_iters,
            ..Self::default()
        }
    }

    /// Configure number of restarts (default: 20)
    pub fn with_restarts(mut self, n_restarts: usize) -> Self {
        self.n_restarts = n_restarts;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// One greedy descent from `start` (clamped into bounds first).
    ///
    /// The trajectory holds only strictly improving states, so its values are
    /// non-increasing. `best_point` is where the climb stopped.
    pub fn climb<P: Objective>(&self, problem: &P, start: &[f64]) -> Result<OptimizerResult> {
        self.validate_step()?;
        let mut current = self.bounds.clamp_start(start)?;
        let mut current_value = problem.cost(&current)?;
        let mut cost_evals = 1;
        let mut trajectory = Trajectory::starting_at(&current);
        let mut iterations = 0;

        for _ in 0..self.max_iters {
            let neighbors = self.neighbors(&current);
            let mut values = Vec::with_capacity(neighbors.len());
            for neighbor in &neighbors {
                values.push(problem.cost(neighbor)?);
            }
            cost_evals += neighbors.len();

            let best_idx = argmin_index(&values);
            // Local optimum: no neighbor is strictly better. NaN never improves.
            if !(values[best_idx] < current_value) {
                break;
            }

            current.copy_from_slice(&neighbors[best_idx]);
            current_value = values[best_idx];
            trajectory.push(&current);
            iterations += 1;
        }

        Ok(OptimizerResult {
            trajectory,
            best_point: current,
            best_value: current_value,
            iterations,
            cost_evals,
        })
    }

    /// Independent climbs from uniform random starts; keeps the lowest final value.
    pub fn random_restart<P: Objective>(
        &self,
        problem: &P,
        rng: &mut RandomStream,
    ) -> Result<OptimizerResult> {
        self.validate()?;
        tracing::info!(
            n_restarts = self.n_restarts,
            step_size = self.step_size,
            max_iters = self.max_iters,
            "starting hill climbing"
        );

        let mut best: Option<OptimizerResult> = None;
        let mut iterations = 0;
        let mut cost_evals = 0;

        for restart in 0..self.n_restarts {
            let start = rng.uniform_point(&self.bounds, DIMENSION);
            let run = self.climb(problem, &start)?;
            iterations += run.iterations;
            cost_evals += run.cost_evals;

            tracing::debug!(
                restart = restart + 1,
                final_value = run.best_value,
                steps = run.iterations,
                "hill climbing restart finished"
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
            "hill climbing finished"
        );
        Ok(best)
    }

    fn validate_step(&self) -> Result<()> {
        self.bounds.validate()?;
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(ConfigurationError::InvalidStepSize(self.step_size).into());
        }
        Ok(())
    }

    /// `+step, -step` on each axis in turn, clamped into bounds
    fn neighbors(&self, current: &[f64]) -> Vec<Vec<f64>> {
        let mut neighbors = Vec::with_capacity(2 * current.len());
        for axis in 0..current.len() {
            for delta in [self.step_size, -self.step_size] {
                let mut neighbor = current.to_vec();
                neighbor[axis] += delta;
                self.bounds.clamp_in_place(&mut neighbor);
                neighbors.push(neighbor);
            }
        }
        neighbors
    }
}

impl Solver for HillClimber {
    type Trace = Trajectory;

    fn name(&self) -> &str {
        "HillClimbing"
    }

    fn validate(&self) -> Result<()> {
        self.validate_step()?;
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
        self.random_restart(problem, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use crate::optimization::problem::{Rastrigin, rastrigin};

    #[test]
    fn start_at_optimum_is_already_done() {
        let climber = HillClimber::new(0.1, 500);
        let result = climber.climb(&Rastrigin, &[0.0, 0.0]).unwrap();

        assert_eq!(result.trajectory.len(), 1);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.best_value, 0.0);
        assert_eq!(result.cost_evals, 5);
    }

    #[test]
    fn descends_into_nearest_basin() {
        let climber = HillClimber::new(0.1, 500);
        let result = climber.climb(&Rastrigin, &[0.3, -0.2]).unwrap();

        // Greedy descent settles at the floor of the origin basin
        assert!(result.best_value < rastrigin(&[0.3, -0.2]));
        assert!(result.best_point.iter().all(|x| x.abs() < 0.11));
        assert_eq!(result.trajectory.last(), Some(&result.best_point));
    }

    #[test]
    fn trajectory_values_never_increase() {
        let climber = HillClimber::new(0.05, 1000);
        let result = climber.climb(&Rastrigin, &[3.7, -4.1]).unwrap();

        let values: Vec<f64> = result.trajectory.iter().map(|p| rastrigin(p)).collect();
        for pair in values.windows(2) {
            assert!(pair[1] < pair[0]);
        }
        assert_eq!(result.trajectory.len(), result.iterations + 1);
    }

    #[test]
    fn respects_iteration_budget() {
        let climber = HillClimber::new(0.01, 3);
        let result = climber.climb(&Rastrigin, &[2.5, 2.5]).unwrap();
        assert!(result.iterations <= 3);
        assert!(result.trajectory.len() <= 4);
    }

    #[test]
    fn zero_iterations_returns_start() {
        let climber = HillClimber::new(0.1, 0);
        let result = climber.climb(&Rastrigin, &[1.7, 0.4]).unwrap();
        assert_eq!(result.trajectory.len(), 1);
        assert_eq!(result.best_point, vec![1.7, 0.4]);
    }

    #[test]
    fn start_outside_bounds_is_clamped() {
        let climber = HillClimber::new(0.1, 100);
        let result = climber.climb(&Rastrigin, &[40.0, -40.0]).unwrap();
        assert_eq!(result.trajectory.first(), Some(&vec![5.12, -5.12]));
        assert!(result.trajectory.iter().all(|p| climber.bounds.contains(p)));
    }

    #[test]
    fn neighbor_order_is_plus_then_minus_per_axis() {
        let climber = HillClimber::new(0.5, 1);
        let neighbors = climber.neighbors(&[1.0, 2.0]);
        assert_eq!(
            neighbors,
            vec![
                vec![1.5, 2.0],
                vec![0.5, 2.0],
                vec![1.0, 2.5],
                vec![1.0, 1.5]
            ]
        );
    }

    #[test]
    fn restarts_keep_best_and_are_reproducible() {
        let climber = HillClimber::new(0.1, 500).with_restarts(10);

        let mut rng = RandomStream::seeded(42);
        let first = climber.random_restart(&Rastrigin, &mut rng).unwrap();
        let mut rng = RandomStream::seeded(42);
        let second = climber.random_restart(&Rastrigin, &mut rng).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.best_value, rastrigin(&first.best_point));
    }

    #[test]
    fn restart_best_is_no_worse_than_any_restart() {
        let climber = HillClimber::new(0.1, 500).with_restarts(8);
        let mut rng = RandomStream::seeded(9);
        let best = climber.random_restart(&Rastrigin, &mut rng).unwrap();

        // Replay the same starts one by one
        let mut replay = RandomStream::seeded(9);
        for _ in 0..8 {
            let start = replay.uniform_point(&climber.bounds, DIMENSION);
            let run = climber.climb(&Rastrigin, &start).unwrap();
            assert!(best.best_value <= run.best_value);
        }
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        let mut rng = RandomStream::seeded(0);
        let cases = [
            HillClimber::new(0.0, 10),
            HillClimber::new(f64::NAN, 10),
            HillClimber::new(0.1, 10).with_restarts(0),
            HillClimber::new(0.1, 10).with_bounds(Bounds { lo: 1.0, hi: -1.0 }),
        ];
        for climber in cases {
            let err = climber.random_restart(&Rastrigin, &mut rng).unwrap_err();
            assert!(matches!(err, Error::Configuration(_)));
        }
    }

    #[test]
    fn non_finite_start_is_rejected() {
        let climber = HillClimber::default();
        for start in [[f64::NAN, 0.0], [0.0, f64::INFINITY]] {
            let err = climber.climb(&Rastrigin, &start).unwrap_err();
            assert!(matches!(
                err,
                Error::Configuration(ConfigurationError::NonFiniteStart { .. })
            ));
        }
    }

    /// Evaluates to NaN everywhere
    struct Undefined;

    impl CostFunction for Undefined {
        type Param = Vec<f64>;
        type Output = f64;

        fn cost(&self, _param: &Vec<f64>) -> std::result::Result<f64, argmin::core::Error> {
            Ok(f64::NAN)
        }
    }

    #[test]
    fn nan_objective_never_moves() {
        let result = HillClimber::new(0.1, 50)
            .climb(&Undefined, &[1.0, 1.0])
            .unwrap();
        assert_eq!(result.trajectory.len(), 1);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.best_point, vec![1.0, 1.0]);
    }

    #[test]
    fn empty_start_is_rejected() {
        let err = HillClimber::default().climb(&Rastrigin, &[]).unwrap_err();
        assert!(matches!(
            err,
            Error::Configuration(ConfigurationError::EmptyStart)
        ));
    }
}
