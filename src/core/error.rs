/// Configuration misuse, reported before any search begins.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// Returned when the domain is degenerate or not finite.
    #[error("invalid bounds: lo ({lo}) must be finite and less than hi ({hi})")]
    InvalidBounds { lo: f64, hi: f64 },

    /// Returned when a count that drives a loop must be at least one.
    #[error("{name} must be at least 1")]
    ZeroCount { name: &'static str },

    /// Returned when the hill-climbing step is not a positive finite number.
    #[error("invalid step size: {0} must be positive and finite")]
    InvalidStepSize(f64),

    /// Returned when the temperature range is empty or reaches zero.
    #[error(
        "invalid temperatures: initial ({initial}) must exceed final ({final_temp}) and final must be positive"
    )]
    InvalidTemperatures { initial: f64, final_temp: f64 },

    /// Returned when the cooling factor is not in (0.0, 1.0).
    #[error("invalid cooling factor: {0} must be in (0.0, 1.0)")]
    InvalidCoolingFactor(f64),

    /// Returned when the annealing step bounds are inverted or negative.
    #[error("invalid step range: need step_max ({max}) >= step_min ({min}) >= 0")]
    InvalidStepRange { min: f64, max: f64 },

    /// Returned when a configured velocity limit is not positive.
    #[error("invalid velocity limit: {0} must be positive")]
    InvalidVelocityLimit(f64),

    /// Returned when a start point has no coordinates.
    #[error("start point must have at least one coordinate")]
    EmptyStart,

    /// Returned when a start coordinate is NaN or infinite.
    #[error("start coordinate {axis} is not finite ({value})")]
    NonFiniteStart { axis: usize, value: f64 },

    /// Returned when a swarm coefficient is NaN or infinite.
    #[error("invalid swarm coefficient: {name} ({value}) must be finite")]
    NonFiniteCoefficient { name: &'static str, value: f64 },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// The cost function failed while evaluating a point.
    #[error(transparent)]
    Objective(#[from] argmin::core::Error),

    /// A configuration document could not be parsed.
    #[error("invalid configuration document: {0}")]
    Document(#[from] serde_json::Error),
}

impl Error {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::Document(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
