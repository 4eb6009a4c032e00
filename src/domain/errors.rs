use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("An administrator account already exists")]
    AlreadyInitialized,
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Outcomes of a rejected login attempt.
///
/// `NotFound` and `InvalidCredentials` render identically to the client so
/// the response never reveals which half of the credential was wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("No account matches the supplied identifier")]
    NotFound,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Account locked until {until}")]
    Locked { until: DateTime<Utc> },
    #[error("Account is deactivated")]
    Deactivated,
}
