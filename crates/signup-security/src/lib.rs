//! # Signup Security
//! 
//! Password hashing for stored user records.

pub mod password;

pub use password::{PasswordError, PasswordService};
