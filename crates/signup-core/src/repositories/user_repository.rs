//! User repository trait (port)

use async_trait::async_trait;

use crate::domain::{UserId, UserRecord};
use crate::error::DomainError;

/// Storage for registered users.
///
/// Email matching is exact and case-sensitive. Implementations are not
/// required to enforce email uniqueness on insert.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// True when any stored record carries this email, whatever else the
    /// record holds.
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError>;

    /// Inserts the record and returns the store-assigned identifier.
    async fn create(&self, user: &UserRecord) -> Result<UserId, DomainError>;

    /// Round-trips to the store without touching user data.
    async fn ping(&self) -> Result<(), DomainError>;
}
