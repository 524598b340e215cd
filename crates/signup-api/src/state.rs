use std::sync::Arc;

use signup_core::repositories::UserRepository;
use signup_core::services::RegistrationService;

#[derive(Clone)]
pub struct AppState {
    pub registration: Arc<RegistrationService>,
}

impl AppState {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            registration: Arc::new(RegistrationService::new(user_repo)),
        }
    }
}
