//! # Signup Core
//! 
//! Domain types, the registration validator, the user repository port,
//! and the registration workflow.

pub mod domain;
pub mod validation;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
pub use validation::{validate_registration, ValidationErrors};
