// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Employee name must not be empty")]
    EmptyName,

    #[error("Missing value for {0}")]
    MissingField(&'static str),

    #[error("Invalid {field}: '{value}' is not a number")]
    NotNumeric { field: &'static str, value: String },

    #[error("Invalid pay rate: '{0}' (must be a positive number)")]
    InvalidPayRate(String),

    #[error("No employee found with ID {0}")]
    IdNotFound(String),

    #[error("No employee found with name '{0}'")]
    NameNotFound(String),
}

impl DomainError {
    /// Lookup failures (no record matched the given key)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::IdNotFound(_) | DomainError::NameNotFound(_)
        )
    }

    /// Input rejected before the roster was touched
    pub fn is_validation(&self) -> bool {
        !self.is_not_found()
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
