//! Domain errors

use thiserror::Error;

use crate::validation::ValidationErrors;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    ValidationError(ValidationErrors),

    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Password hash error: {0}")]
    PasswordHashError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
