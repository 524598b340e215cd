//! Domain services (business logic)

pub mod registration_service;

pub use registration_service::{RegisterResult, RegistrationService};
