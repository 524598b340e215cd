//! In-process user store

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use signup_core::domain::{UserId, UserRecord};
use signup_core::error::DomainError;
use signup_core::repositories::UserRepository;

/// Keeps records in insertion order behind an async lock. Identifiers have
/// the same shape as the MongoDB adapter's.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<(UserId, UserRecord)>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    /// First stored record with this email.
    pub async fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        let users = self.users.read().await;
        users
            .iter()
            .find(|(_, user)| user.email == email)
            .map(|(_, user)| user.clone())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().any(|(_, user)| user.email == email))
    }

    async fn create(&self, user: &UserRecord) -> Result<UserId, DomainError> {
        let user_id = UserId::new(ObjectId::new().to_hex());
        self.users.write().await.push((user_id.clone(), user.clone()));
        Ok(user_id)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
