//! Persisted user record

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque identifier assigned by the store when a record is inserted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered user. `password_hash` is a bcrypt digest, never the raw
/// password.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl UserRecord {
    /// New active record stamped with the current UTC time.
    pub fn new(full_name: String, email: String, phone: String, password_hash: String) -> Self {
        Self {
            full_name,
            email,
            phone,
            password_hash,
            created_at: Utc::now(),
            is_active: true,
        }
    }
}
