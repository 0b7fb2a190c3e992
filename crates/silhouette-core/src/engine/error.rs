use super::config::ConfigError;
use crate::core::models::point_set::EmptyInputError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    EmptyInput(#[from] EmptyInputError),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("Scan cancelled after {completed} of {total} angle_x rows")]
    Cancelled { completed: usize, total: usize },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
