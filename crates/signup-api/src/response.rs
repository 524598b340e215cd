//! API Response wrapper

use serde::Serialize;

use signup_core::domain::UserId;
use signup_core::ValidationErrors;

/// Envelope shared by every registration outcome. Only the fields relevant
/// to an outcome are serialized.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl ApiResponse {
    pub fn registered(user_id: UserId) -> Self {
        Self {
            success: true,
            message: Some("User registered successfully".to_string()),
            errors: None,
            user_id: Some(user_id.to_string()),
        }
    }

    pub fn validation_failed(errors: ValidationErrors) -> Self {
        Self {
            success: false,
            message: None,
            errors: Some(errors),
            user_id: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            errors: None,
            user_id: None,
        }
    }
}
