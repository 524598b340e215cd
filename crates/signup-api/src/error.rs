use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use signup_core::{DomainError, ValidationErrors};

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    ValidationError(ValidationErrors),

    #[error("Email already registered")]
    Conflict,

    #[error("Invalid request body: {0}")]
    InvalidPayload(String),

    /// Carries the underlying error text, which is echoed to the client.
    #[error("Registration failed: {0}")]
    RegistrationFailed(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ValidationError(errors) => ApiError::ValidationError(errors),
            DomainError::EmailAlreadyRegistered => ApiError::Conflict,
            other => ApiError::RegistrationFailed(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, body) = match self {
            ApiError::ValidationError(errors) => {
                tracing::warn!("Validation failed: {}", errors);
                (StatusCode::BAD_REQUEST, ApiResponse::validation_failed(errors))
            }
            ApiError::Conflict => {
                tracing::warn!("Conflict: {}", message);
                (StatusCode::CONFLICT, ApiResponse::error(message))
            }
            ApiError::InvalidPayload(_) => {
                tracing::warn!("Bad request: {}", message);
                (StatusCode::BAD_REQUEST, ApiResponse::error(message))
            }
            ApiError::RegistrationFailed(_) => {
                tracing::error!("{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, ApiResponse::error(message))
            }
        };

        (status, Json(body)).into_response()
    }
}
