// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    /// The console will never deliver another line (EOF, script exhausted)
    #[error("Input closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True when the session ended because the operator's input went away
    pub fn is_input_closed(&self) -> bool {
        matches!(self, AppError::InputClosed)
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
