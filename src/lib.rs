//! Metaheuristic search on the Rastrigin benchmark.
//!
//! Three optimizers minimize a bounded objective and return their full search
//! trace together with the best point and value found:
//!
//! - [`HillClimber`]: greedy axis-aligned descent with random restarts
//! - [`SimulatedAnnealer`]: temperature-adaptive annealing with restarts
//! - [`ParticleOptimizer`]: particle swarm with velocity/position dynamics
//!
//! All randomness flows through an explicit [`RandomStream`], so one seed
//! reproduces an experiment exactly. [`aggregate`] repeats a run on one stream
//! and reports best, mean and population standard deviation.
//!
//! ```
//! use rastrigin_metaheuristics::{HillClimber, RandomStream, Rastrigin, Solver};
//!
//! let mut rng = RandomStream::seeded(123);
//! let result = HillClimber::default().solve(&Rastrigin, &mut rng).unwrap();
//! assert!(result.best_value >= 0.0);
//! ```

mod core;
mod optimization;

pub use crate::core::*;
pub use crate::optimization::*;
