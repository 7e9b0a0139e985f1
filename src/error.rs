use thiserror::Error;

/// Custom error types for zoomiz
#[derive(Debug, Error)]
pub enum ZoomizError {
    #[error("Input is not valid UTF-8: {0}")]
    InvalidUtf8(String),

    #[error("Invalid config file: {0}")]
    ConfigParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
