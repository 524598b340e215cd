//! # Signup Core - Domain Module
//! 
//! Registration input and the persisted user record.

pub mod registration;
pub mod user;

pub use registration::RegistrationRequest;
pub use user::{UserId, UserRecord};
