use super::error::Result;
use crate::optimization::solvers::{HillClimber, ParticleOptimizer, SimulatedAnnealer, Solver};
use crate::optimization::stats::Aggregator;
use serde::{Deserialize, Serialize};

/// Every knob of an experiment in one document.
///
/// Missing sections and fields fall back to the defaults of each solver, which
/// match the reference drivers (seed 123).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Seed of the stream the drivers share for single runs
    pub seed: u64,
    pub hill_climb: HillClimber,
    pub annealing: SimulatedAnnealer,
    pub swarm: ParticleOptimizer,
    /// Repeated runs draw only from a stream seeded with `runs.seed`, never from `seed`
    pub runs: Aggregator,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            seed: 123,
            hill_climb: HillClimber::default().with_restarts(30),
            annealing: SimulatedAnnealer::default(),
            swarm: ParticleOptimizer::new(1500),
            runs: Aggregator::default(),
        }
    }
}

impl ExperimentConfig {
    /// Parse a JSON document and validate every section
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.hill_climb.validate()?;
        self.annealing.validate()?;
        self.swarm.validate()?;
        self.runs.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConfigurationError, Error};

    #[test]
    fn empty_document_uses_defaults() {
        let config = ExperimentConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ExperimentConfig::default());
        assert_eq!(config.hill_climb.n_restarts, 30);
        assert_eq!(config.swarm.n_iters, 1500);
    }

    #[test]
    fn partial_sections_fill_from_defaults() {
        let json = r#"{
            "seed": 7,
            "annealing": { "n_restarts": 10, "max_iters": 3000 },
            "swarm": { "n_particles": 12, "velocity_limit": 0.5 }
        }"#;
        let config = ExperimentConfig::from_json_str(json).unwrap();

        assert_eq!(config.seed, 7);
        assert_eq!(config.annealing.n_restarts, 10);
        assert_eq!(config.annealing.max_iters, 3000);
        assert_eq!(config.annealing.alpha, 0.999);
        assert_eq!(config.swarm.population_size, 12);
        assert_eq!(config.swarm.velocity_limit, Some(0.5));
        assert_eq!(config.swarm.inertia, 0.7);
    }

    #[test]
    fn invalid_values_are_reported() {
        let json = r#"{ "annealing": { "alpha": 1.5 } }"#;
        let err = ExperimentConfig::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            Error::Configuration(ConfigurationError::InvalidCoolingFactor(_))
        ));

        let json = r#"{ "hill_climb": { "bounds": { "lo": 2.0, "hi": 1.0 } } }"#;
        assert!(ExperimentConfig::from_json_str(json).is_err());
    }

    #[test]
    fn malformed_json_is_a_document_error() {
        let err = ExperimentConfig::from_json_str("{ seed: ").unwrap_err();
        assert!(matches!(err, Error::Document(_)));
        assert!(err.is_configuration());
    }

    #[test]
    fn repeated_runs_ignore_the_top_level_seed() {
        let summarize = |seed: u64| {
            let mut config = ExperimentConfig::default();
            config.seed = seed;
            config.runs.n_runs = 3;
            config.runs.run(|rng| Ok(rng.unit())).unwrap()
        };
        assert_eq!(summarize(1), summarize(999));

        let mut config = ExperimentConfig::default();
        config.runs.n_runs = 3;
        config.runs.seed = 5;
        let reseeded = config.runs.run(|rng| Ok(rng.unit())).unwrap();
        assert_ne!(reseeded, summarize(1));
    }

    #[test]
    fn json_round_trip_preserves_settings() {
        let mut config = ExperimentConfig::default();
        config.swarm = config.swarm.with_velocity_limit(2.0);
        let json = config.to_json_string().unwrap();
        assert_eq!(ExperimentConfig::from_json_str(&json).unwrap(), config);
    }
}
