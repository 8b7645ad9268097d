mod annealing;
mod hill_climb;
mod particle;
pub mod traits;

pub use annealing::SimulatedAnnealer;
pub use hill_climb::HillClimber;
pub use particle::ParticleOptimizer;
pub use traits::Solver;

/// Index of the first strict minimum. NaN entries never win.
pub(crate) fn argmin_index(values: &[f64]) -> usize {
    let mut best_idx = 0;
    let mut best = f64::INFINITY;
    for (i, &value) in values.iter().enumerate() {
        if value < best {
            best = value;
            best_idx = i;
        }
    }
    best_idx
}

// Tests at the bottom:

#[cfg(test)]
mod tests {
    use super::argmin_index;

    #[test]
    fn argmin_prefers_first_on_ties() {
        assert_eq!(argmin_index(&[3.0, 1.0, 2.0, 1.0]), 1);
        assert_eq!(argmin_index(&[5.0]), 0);
    }

    #[test]
    fn argmin_skips_nan() {
        assert_eq!(argmin_index(&[f64::NAN, 2.0, 1.5]), 2);
    }
}
