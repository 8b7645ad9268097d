pub mod problem;
pub mod random;
pub mod solvers;
pub mod stats;

pub use problem::{Objective, Rastrigin, rastrigin};
pub use random::RandomStream;
pub use solvers::{HillClimber, ParticleOptimizer, SimulatedAnnealer, Solver};
pub use stats::{Aggregator, aggregate};
