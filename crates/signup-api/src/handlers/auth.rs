// ============================================================================
// Signup API - Auth Handlers
// File: crates/signup-api/src/handlers/auth.rs
// ============================================================================
//! Registration HTTP handler

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use signup_core::domain::RegistrationRequest;

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Register handler - POST /api/auth/register
///
/// A body that does not decode into the form shape is rejected before the
/// workflow runs.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegistrationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse>), ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::InvalidPayload(rejection.body_text()))?;

    let result = state.registration.register(&request).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::registered(result.user_id))))
}
