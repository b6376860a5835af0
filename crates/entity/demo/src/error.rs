//! Demo error types

use thiserror::Error;

/// Demo error type
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Demo result type
pub type DemoResult<T> = Result<T, DemoError>;
