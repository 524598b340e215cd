use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::warn;

use signup_shared::config::CorsSettings;

use crate::handlers::{auth, health};
use crate::state::AppState;

pub fn build_router(state: AppState, cors: &CorsSettings) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::readiness_check))
        .route("/api/auth/register", post(auth::register))
        .with_state(state)
        // CORS
        .layer(cors_layer(cors))
        // Tracing
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let allow_origin = if settings.allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = settings
            .allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use mongodb::bson::{doc, spec::BinarySubtype, Binary, Document};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    use signup_core::domain::{UserId, UserRecord};
    use signup_core::error::DomainError;
    use signup_core::repositories::UserRepository;
    use signup_infrastructure::InMemoryUserRepository;
    use signup_security::PasswordService;

    struct UnreachableStore;

    #[async_trait]
    impl UserRepository for UnreachableStore {
        async fn email_exists(&self, _email: &str) -> Result<bool, DomainError> {
            Err(DomainError::DatabaseError("connection refused".to_string()))
        }

        async fn create(&self, _user: &UserRecord) -> Result<UserId, DomainError> {
            Err(DomainError::DatabaseError("connection refused".to_string()))
        }

        async fn ping(&self) -> Result<(), DomainError> {
            Err(DomainError::DatabaseError("connection refused".to_string()))
        }
    }

    /// Holds raw documents of any shape; only the email key is read.
    struct RawDocumentStore {
        documents: Vec<Document>,
    }

    #[async_trait]
    impl UserRepository for RawDocumentStore {
        async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
            Ok(self
                .documents
                .iter()
                .any(|d| d.get_str("email").ok() == Some(email)))
        }

        async fn create(&self, _user: &UserRecord) -> Result<UserId, DomainError> {
            Err(DomainError::DatabaseError("read-only store".to_string()))
        }

        async fn ping(&self) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn cors_settings() -> CorsSettings {
        CorsSettings {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        }
    }

    fn app_with(repo: Arc<dyn UserRepository>) -> Router {
        build_router(AppState::new(repo), &cors_settings())
    }

    fn valid_payload() -> Value {
        json!({
            "fullName": "Jane Doe",
            "email": "jane@example.com",
            "phone": "0812345678",
            "password": "secret123",
            "confirmPassword": "secret123"
        })
    }

    fn register_request(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/auth/register")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = app_with(Arc::new(InMemoryUserRepository::new()));
        let request = Request::builder().uri("/api/health").body(Body::empty()).unwrap();

        let (status, body) = send(app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "status": "healthy", "message": "Registration API is running" })
        );
    }

    #[tokio::test]
    async fn test_register_then_duplicate() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let app = app_with(repo.clone());

        let (status, body) = send(app.clone(), register_request(valid_payload().to_string())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "User registered successfully");
        let user_id = body["user_id"].as_str().unwrap();
        assert!(!user_id.is_empty());

        let stored = repo.find_by_email("jane@example.com").await.unwrap();
        assert_ne!(stored.password_hash, "secret123");
        assert!(PasswordService::verify("secret123", &stored.password_hash).unwrap());
        assert!(stored.is_active);

        let (status, body) = send(app, register_request(valid_payload().to_string())).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, json!({ "success": false, "message": "Email already registered" }));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_register_conflicts_with_record_of_other_shape() {
        let store = RawDocumentStore {
            documents: vec![
                doc! {
                    "full_name": "Jane Doe",
                    "email": "jane@example.com",
                    "password": Binary {
                        subtype: BinarySubtype::Generic,
                        bytes: b"$2b$12$legacyhash".to_vec(),
                    },
                },
                doc! { "email": "jane@example.com", "note": "inserted by hand" },
            ],
        };
        let app = app_with(Arc::new(store));

        let (status, body) = send(app, register_request(valid_payload().to_string())).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, json!({ "success": false, "message": "Email already registered" }));
    }

    #[tokio::test]
    async fn test_register_validation_errors() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let app = app_with(repo.clone());

        let mut payload = valid_payload();
        payload["email"] = json!("not-an-email");
        payload["confirmPassword"] = json!("secret124");

        let (status, body) = send(app, register_request(payload.to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "success": false,
                "errors": {
                    "confirmPassword": "Passwords do not match",
                    "email": "Invalid email format"
                }
            })
        );
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_register_empty_object_reports_all_fields() {
        let app = app_with(Arc::new(InMemoryUserRepository::new()));

        let (status, body) = send(app, register_request("{}".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let errors = body["errors"].as_object().unwrap();
        for field in ["fullName", "email", "phone", "password", "confirmPassword"] {
            assert!(errors.contains_key(field), "missing {}", field);
        }
    }

    #[tokio::test]
    async fn test_register_malformed_body() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let app = app_with(repo.clone());

        for body in ["{not json", "[1, 2, 3]", r#"{"phone": 1234567890}"#] {
            let (status, response) = send(app.clone(), register_request(body.to_string())).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "body {}", body);
            assert_eq!(response["success"], false);
            assert!(response["message"]
                .as_str()
                .unwrap()
                .starts_with("Invalid request body: "));
        }
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_register_store_failure_echoes_error() {
        let app = app_with(Arc::new(UnreachableStore));

        let (status, body) = send(app, register_request(valid_payload().to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({
                "success": false,
                "message": "Registration failed: Database error: connection refused"
            })
        );
    }

    #[tokio::test]
    async fn test_readiness_reflects_store() {
        let ready = app_with(Arc::new(InMemoryUserRepository::new()));
        let request = Request::builder().uri("/api/health/ready").body(Body::empty()).unwrap();
        let (status, body) = send(ready, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ready" }));

        let down = app_with(Arc::new(UnreachableStore));
        let request = Request::builder().uri("/api/health/ready").body(Body::empty()).unwrap();
        let (status, body) = send(down, request).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "unavailable");
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let app = app_with(Arc::new(InMemoryUserRepository::new()));
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/auth/register")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:3000"
        );
    }
}
