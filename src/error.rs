//! Error types for gravsim.

use thiserror::Error;

use crate::simulation::states::BodyId;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid mass for body '{name}': {mass}")]
    InvalidMass { name: String, mass: f64 },

    #[error("Invalid size for body '{name}': {size}")]
    InvalidSize { name: String, size: f64 },

    #[error("Invalid initial state for body '{0}': position and velocity must be finite")]
    InvalidState(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unknown color: {0}")]
    UnknownColor(String),

    #[error("Bodies {a} and {b} occupy the same position")]
    CoincidentBodies { a: BodyId, b: BodyId },
}

pub type Result<T> = std::result::Result<T, SimError>;
