// ============================================================================
// Signup Core - Registration Service
// File: crates/signup-core/src/services/registration_service.rs
// ============================================================================
//! Registration workflow: validate, duplicate-check, hash, persist

use std::sync::Arc;
use tracing::{error, info, warn};

use signup_security::PasswordService;
use signup_shared::utils::mask_email;

use crate::domain::{RegistrationRequest, UserId, UserRecord};
use crate::error::DomainError;
use crate::repositories::UserRepository;
use crate::validation::validate_registration;

/// Registration service for handling new account sign-ups
pub struct RegistrationService {
    user_repo: Arc<dyn UserRepository>,
}

impl RegistrationService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Register a new user.
    ///
    /// Performs at most one store write, and only when every earlier step
    /// succeeded. The email check and the insert are not atomic.
    pub async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegisterResult, DomainError> {
        // 1. Validate the form
        let errors = validate_registration(request);
        if !errors.is_empty() {
            warn!(fields = ?errors.fields(), "Registration rejected: validation failed");
            return Err(DomainError::ValidationError(errors));
        }

        let full_name = request.full_name.clone().unwrap_or_default();
        let email = request.email.clone().unwrap_or_default();
        let phone = request.phone.clone().unwrap_or_default();
        let password = request.password.clone().unwrap_or_default();

        info!("Registration attempt for email: {}", mask_email(&email));

        // 2. Check if email already exists
        if self.user_repo.email_exists(&email).await? {
            warn!("Registration failed: email already registered: {}", mask_email(&email));
            return Err(DomainError::EmailAlreadyRegistered);
        }

        // 3. Hash password
        let password_hash = hash_password(password).await?;

        // 4. Build the record
        let user = UserRecord::new(full_name, email, phone, password_hash);

        // 5. Save to database
        let user_id = self.user_repo.create(&user).await?;

        info!(user_id = %user_id, "Registration successful for: {}", mask_email(&user.email));

        Ok(RegisterResult { user_id })
    }

    /// Checks that the backing store is reachable.
    pub async fn store_ready(&self) -> Result<(), DomainError> {
        self.user_repo.ping().await
    }
}

// bcrypt is CPU-bound; keep it off the async workers.
async fn hash_password(password: String) -> Result<String, DomainError> {
    tokio::task::spawn_blocking(move || PasswordService::hash(&password))
        .await
        .map_err(|e| {
            error!("Password hashing task failed: {}", e);
            DomainError::PasswordHashError(e.to_string())
        })?
        .map_err(|e| {
            error!("Password hashing failed: {}", e);
            DomainError::PasswordHashError(e.to_string())
        })
}

/// Result of successful registration
#[derive(Debug, Clone)]
pub struct RegisterResult {
    pub user_id: UserId,
}
