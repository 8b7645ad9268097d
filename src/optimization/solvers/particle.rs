use super::argmin_index;
use super::traits::Solver;
use crate::core::{
    Bounds, ConfigurationError, DIMENSION, OptimizerResult, Point, Result, SwarmHistory,
};
use crate::optimization::problem::Objective;
use crate::optimization::random::RandomStream;
use argmin::core::CostFunction;
use argmin_math::{ArgminAdd, ArgminMul, ArgminScaledAdd, ArgminSub};
use serde::{Deserialize, Serialize};

/// Particle Swarm Optimization over the bounded domain.
///
/// Positions are clamped after every move. Velocities are left unbounded
/// unless `velocity_limit` is set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleOptimizer {
    pub n_iters: usize,
    #[serde(alias = "n_particles")]
    pub population_size: usize,
    pub inertia: f64,   // w - velocity inertia weight
    pub cognitive: f64, // c1 - personal best influence
    pub social: f64,    // c2 - global best influence
    /// Per-axis cap on |velocity|; `None` keeps velocities unclamped
    pub velocity_limit: Option<f64>,
    pub bounds: Bounds,
}

impl Default for ParticleOptimizer {
    fn default() -> Self {
        Self {
            n_iters: 2000,
            population_size: 20,
            inertia: 0.7,
            cognitive: 1.5,
            social: 1.5,
            velocity_limit: None,
            bounds: Bounds::default(),
        }
    }
}

impl ParticleOptimizer {
    pub fn new(n_iters: usize) -> Self {
        Self {
            n_iters,
            ..Self::default()
        }
    }

    /// Configure swarm size (default: 20)
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Configure PSO parameters (defaults: w=0.7, c1=1.5, c2=1.5)
    pub fn with_pso_params(mut self, inertia: f64, cognitive: f64, social: f64) -> Self {
        self.inertia = inertia;
        self.cognitive = cognitive;
        self.social = social;
        self
    }

    /// Clamp every velocity component to `[-limit, limit]` after each update
    pub fn with_velocity_limit(mut self, limit: f64) -> Self {
        self.velocity_limit = Some(limit);
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Initialize particle positions uniformly within bounds
    fn initialize_particles(&self, rng: &mut RandomStream) -> Vec<Point> {
        (0..self.population_size)
            .map(|_| rng.uniform_point(&self.bounds, DIMENSION))
            .collect()
    }

    /// Initialize velocities uniformly in [-1, 1) per axis
    fn initialize_velocities(&self, rng: &mut RandomStream) -> Vec<Point> {
        (0..self.population_size)
            .map(|_| rng.uniform_vector(-1.0, 1.0, DIMENSION))
            .collect()
    }

    /// One uniform [0, 1) coefficient per particle and axis
    fn draw_coefficients(&self, rng: &mut RandomStream) -> Vec<Point> {
        (0..self.population_size)
            .map(|_| rng.uniform_vector(0.0, 1.0, DIMENSION))
            .collect()
    }

    /// Runs the swarm for exactly `n_iters` iterations.
    ///
    /// The history holds the positions at the start of every iteration, so it
    /// has `n_iters` snapshots of `population_size` points each.
    pub fn optimize<P: Objective>(
        &self,
        problem: &P,
        rng: &mut RandomStream,
    ) -> Result<OptimizerResult<SwarmHistory>> {
        self.validate()?;
        tracing::info!(
            population_size = self.population_size,
            n_iters = self.n_iters,
            inertia = self.inertia,
            cognitive = self.cognitive,
            social = self.social,
            "starting particle swarm"
        );

        // Initialize swarm
        let mut particles = self.initialize_particles(rng);
        let mut velocities = self.initialize_velocities(rng);
        let mut personal_best_positions = particles.clone();
        let mut personal_best_costs = Vec::with_capacity(self.population_size);
        for particle in &particles {
            personal_best_costs.push(problem.cost(particle)?);
        }
        let mut cost_evals = self.population_size;

        let best_idx = argmin_index(&personal_best_costs);
        let mut global_best_position = personal_best_positions[best_idx].clone();
        let mut global_best_cost = personal_best_costs[best_idx];

        let mut history = SwarmHistory::with_capacity(self.n_iters);

        // Main optimization loop
        for iter in 0..self.n_iters {
            history.record(&particles);

            let r1 = self.draw_coefficients(rng);
            let r2 = self.draw_coefficients(rng);

            // Update velocities and positions for all particles
            for p in 0..self.population_size {
                let cognitive_pull = r1[p].mul(&personal_best_positions[p].sub(&particles[p]));
                let social_pull = r2[p].mul(&global_best_position.sub(&particles[p]));

                // v = w*v + c1*r1*(pbest - x) + c2*r2*(gbest - x)
                velocities[p] = velocities[p]
                    .mul(&self.inertia)
                    .scaled_add(&self.cognitive, &cognitive_pull)
                    .scaled_add(&self.social, &social_pull);

                if let Some(limit) = self.velocity_limit {
                    for v in velocities[p].iter_mut() {
                        *v = v.clamp(-limit, limit);
                    }
                }

                particles[p] = particles[p].add(&velocities[p]);
                self.bounds.clamp_in_place(&mut particles[p]);
            }

            // Evaluate all particles, updating personal bests
            for p in 0..self.population_size {
                let cost = problem.cost(&particles[p])?;
                if cost < personal_best_costs[p] {
                    personal_best_costs[p] = cost;
                    personal_best_positions[p].copy_from_slice(&particles[p]);
                }
            }
            cost_evals += self.population_size;

            // Update global best from the personal bests
            let best_idx = argmin_index(&personal_best_costs);
            if personal_best_costs[best_idx] < global_best_cost {
                global_best_cost = personal_best_costs[best_idx];
                global_best_position.copy_from_slice(&personal_best_positions[best_idx]);
                tracing::trace!(
                    iteration = iter + 1,
                    global_best = global_best_cost,
                    "swarm improved"
                );
            }
        }

        tracing::info!(
            best_value = global_best_cost,
            iterations = self.n_iters,
            cost_evals,
            "particle swarm finished"
        );

        Ok(OptimizerResult {
            trajectory: history,
            best_point: global_best_position,
            best_value: global_best_cost,
            iterations: self.n_iters,
            cost_evals,
        })
    }
}

impl Solver for ParticleOptimizer {
    type Trace = SwarmHistory;

    fn name(&self) -> &str {
        "PSO"
    }

    fn validate(&self) -> Result<()> {
        self.bounds.validate()?;
        if self.population_size == 0 {
            return Err(ConfigurationError::ZeroCount {
                name: "n_particles",
            }
            .into());
        }
        for (name, value) in [
            ("inertia", self.inertia),
            ("cognitive", self.cognitive),
            ("social", self.social),
        ] {
            if !value.is_finite() {
                return Err(ConfigurationError::NonFiniteCoefficient { name, value }.into());
            }
        }
        if let Some(limit) = self.velocity_limit {
            if limit.is_nan() || limit <= 0.0 {
                return Err(ConfigurationError::InvalidVelocityLimit(limit).into());
            }
        }
        Ok(())
    }

    fn solve<P: Objective>(
        &self,
        problem: &P,
        rng: &mut RandomStream,
    ) -> Result<OptimizerResult<SwarmHistory>> {
        self.optimize(problem, rng)
    }
}
