use crate::core::{OptimizerResult, Result};
use crate::optimization::problem::Objective;
use crate::optimization::random::RandomStream;

/// Solver interface - takes a problem and the experiment's random stream
pub trait Solver {
    /// What the run records: a single path or whole-swarm snapshots
    type Trace;

    fn name(&self) -> &str;

    /// Reject configuration misuse before any search begins
    fn validate(&self) -> Result<()>;

    /// Run the solver's top-level driver (restarts included) on `problem`
    fn solve<P: Objective>(
        &self,
        problem: &P,
        rng: &mut RandomStream,
    ) -> Result<OptimizerResult<Self::Trace>>;
}

// ============================================================================
// NOTES FOR SOLVER IMPLEMENTATIONS
// ============================================================================
//
// - Call validate() first; never start a search on a bad configuration.
// - Clamp every perturbed point with Bounds before evaluating it.
// - Draw randomness only from the RandomStream argument, in a fixed order.
//   Reordering draws changes every result for a given seed.
// - Track the incumbent separately from the current state; best_value must
//   never regress even when the current point does.
// - Count every problem.cost() call in cost_evals.
// - Restart drivers keep the strictly better run; ties keep the earlier one.
//
// ============================================================================
