use thiserror::Error;

// Bring in specific errors from the layers we wrap
use crate::config::ConfigError;
use crate::io::{IoError, LimitError};
use crate::wrap::WrapError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    #[error("{0}")]
    Limit(#[from] LimitError),

    #[error("Wrap error: {0}")]
    Wrap(#[from] WrapError),
}

pub type AppResult<T> = Result<T, AppError>;
