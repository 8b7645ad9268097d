pub mod bounds;
pub mod config;
pub mod error;
pub mod types;

pub use bounds::Bounds;
pub use config::ExperimentConfig;
pub use error::{ConfigurationError, Error, Result};
pub use types::*;
