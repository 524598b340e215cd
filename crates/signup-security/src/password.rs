//! Password hashing with bcrypt

use bcrypt::DEFAULT_COST;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Hash error: {0}")]
    HashError(String),
    #[error("Verification error: {0}")]
    VerificationError(String),
}

/// Salted bcrypt hashing at the library's default work factor.
///
/// Hashes are returned in modular crypt format (`$2b$12$...`), which embeds
/// the salt and cost so `verify` needs nothing but the stored string.
pub struct PasswordService;

impl PasswordService {
    pub fn hash(password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(password, DEFAULT_COST).map_err(|e| PasswordError::HashError(e.to_string()))
    }

    pub fn verify(password: &str, hash: &str) -> Result<bool, PasswordError> {
        bcrypt::verify(password, hash).map_err(|e| PasswordError::VerificationError(e.to_string()))
    }
}
