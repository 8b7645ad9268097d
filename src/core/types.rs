use serde::{Deserialize, Serialize};

/// Real-valued search point. Two coordinates in every driver.
pub type Point = Vec<f64>;

/// Dimension used by the restart drivers and the swarm.
pub const DIMENSION: usize = 2;

// ===== TRACES =====

/// Ordered, append-only record of the points visited by one run.
///
/// Only the optimizers in this crate can append; callers get a read-only view.
/// Serializes for export but cannot be deserialized.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Trajectory {
    points: Vec<Point>,
}

impl Trajectory {
    pub(crate) fn starting_at(point: &[f64]) -> Self {
        Self {
            points: vec![point.to_vec()],
        }
    }

    pub(crate) fn push(&mut self, point: &[f64]) {
        self.points.push(point.to_vec());
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Where the run started
    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Every `stride`-th point, starting with the first. A stride of 0 keeps everything.
    pub fn sampled(&self, stride: usize) -> Self {
        Self {
            points: self.points.iter().step_by(stride.max(1)).cloned().collect(),
        }
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

/// Positions of the whole swarm, one snapshot per iteration.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SwarmHistory {
    snapshots: Vec<Vec<Point>>,
}

impl SwarmHistory {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            snapshots: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn record(&mut self, positions: &[Point]) {
        self.snapshots.push(positions.to_vec());
    }

    pub fn snapshots(&self) -> &[Vec<Point>] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec<Point>> {
        self.snapshots.iter()
    }

    /// Every `stride`-th snapshot, starting with the first. A stride of 0 keeps everything.
    pub fn sampled(&self, stride: usize) -> Self {
        Self {
            snapshots: self
                .snapshots
                .iter()
                .step_by(stride.max(1))
                .cloned()
                .collect(),
        }
    }
}

// ===== RESULTS =====

/// Outcome of one optimizer call.
///
/// `best_point`/`best_value` are the incumbent over the whole call (restarts
/// included), independent of where the trajectory ends.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OptimizerResult<T = Trajectory> {
    pub trajectory: T,
    pub best_point: Point,
    pub best_value: f64,
    /// Loop iterations executed, summed over restarts
    pub iterations: usize,
    /// Objective evaluations, summed over restarts
    pub cost_evals: usize,
}

/// Summary of the scalar outcomes of repeated runs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunStatistics {
    pub best: f64,
    pub mean: f64,
    /// Population standard deviation (divides by N)
    pub std: f64,
}

impl RunStatistics {
    /// Returns `None` for an empty sample.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let n = values.len() as f64;
        let best = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        Some(Self {
            best,
            mean,
            std: variance.sqrt(),
        })
    }
}
