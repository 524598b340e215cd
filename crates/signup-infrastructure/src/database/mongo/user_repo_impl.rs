// ============================================================================
// Signup Infrastructure - MongoDB User Repository
// File: crates/signup-infrastructure/src/database/mongo/user_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::bson::{self, doc, oid::ObjectId, spec::BinarySubtype, Binary, Bson, Document};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use signup_core::domain::{UserId, UserRecord};
use signup_core::error::DomainError;
use signup_core::repositories::UserRepository;

pub struct MongoUserRepository {
    database: Database,
    users: Collection<UserDocument>,
}

impl MongoUserRepository {
    pub fn new(database: Database, collection: &str) -> Self {
        let users = database.collection::<UserDocument>(collection);
        Self { database, users }
    }
}

// Internal document type for BSON mapping. The bcrypt digest is kept as
// generic binary under `password`.
#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "password")]
    pub password_hash: Binary,
    pub created_at: bson::DateTime,
    pub is_active: bool,
}

impl From<&UserRecord> for UserDocument {
    fn from(user: &UserRecord) -> Self {
        UserDocument {
            id: None,
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            password_hash: Binary {
                subtype: BinarySubtype::Generic,
                bytes: user.password_hash.as_bytes().to_vec(),
            },
            created_at: bson::DateTime::from_millis(user.created_at.timestamp_millis()),
            is_active: user.is_active,
        }
    }
}

impl From<UserDocument> for UserRecord {
    fn from(doc: UserDocument) -> Self {
        UserRecord {
            full_name: doc.full_name,
            email: doc.email,
            phone: doc.phone,
            password_hash: String::from_utf8_lossy(&doc.password_hash.bytes).into_owned(),
            created_at: DateTime::<Utc>::from_timestamp_millis(doc.created_at.timestamp_millis())
                .unwrap_or_default(),
            is_active: doc.is_active,
        }
    }
}

fn email_filter(email: &str) -> Document {
    doc! { "email": email }
}

fn inserted_id_to_user_id(inserted_id: &Bson) -> UserId {
    match inserted_id.as_object_id() {
        Some(oid) => UserId::new(oid.to_hex()),
        None => UserId::new(inserted_id.to_string()),
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        // Counting never decodes the stored documents.
        let count = self
            .users
            .count_documents(email_filter(email))
            .limit(1)
            .await
            .map_err(|e| {
                error!("Database error checking email: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(count > 0)
    }

    async fn create(&self, user: &UserRecord) -> Result<UserId, DomainError> {
        let result = self
            .users
            .insert_one(UserDocument::from(user))
            .await
            .map_err(|e| {
                error!("Database error creating user: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        let user_id = inserted_id_to_user_id(&result.inserted_id);
        info!("User created successfully: {}", user_id);
        Ok(user_id)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|e| {
                error!("Database ping failed: {}", e);
                DomainError::DatabaseError(e.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> UserRecord {
        UserRecord::new(
            "Jane Doe".to_string(),
            "jane@example.com".to_string(),
            "0812345678".to_string(),
            "$2b$12$somehash".to_string(),
        )
    }

    #[test]
    fn test_document_layout() {
        let user = sample_user();
        let document = bson::to_document(&UserDocument::from(&user)).unwrap();

        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("full_name").unwrap(), "Jane Doe");
        assert_eq!(document.get_str("email").unwrap(), "jane@example.com");
        assert!(!document.contains_key("password_hash"));
        assert_eq!(
            document.get_binary_generic("password").unwrap().as_slice(),
            b"$2b$12$somehash"
        );
        assert!(document.get_bool("is_active").unwrap());
        assert_eq!(
            document.get_datetime("created_at").unwrap().timestamp_millis(),
            user.created_at.timestamp_millis()
        );
    }

    #[test]
    fn test_document_round_trips_to_record_at_millisecond_precision() {
        let user = sample_user();
        let restored: UserRecord = UserDocument::from(&user).into();

        assert_eq!(restored.email, user.email);
        assert_eq!(restored.password_hash, user.password_hash);
        assert_eq!(
            restored.created_at.timestamp_millis(),
            user.created_at.timestamp_millis()
        );
    }

    #[test]
    fn test_object_id_becomes_hex_identifier() {
        let oid = ObjectId::new();
        let user_id = inserted_id_to_user_id(&Bson::ObjectId(oid));

        assert_eq!(user_id.as_str(), oid.to_hex());
        assert_eq!(user_id.as_str().len(), 24);
    }

    #[test]
    fn test_existence_filter_matches_on_email_only() {
        assert_eq!(
            email_filter("jane@example.com"),
            doc! { "email": "jane@example.com" }
        );
    }

    #[test]
    fn test_record_with_binary_password_decodes() {
        let stored = doc! {
            "_id": ObjectId::new(),
            "full_name": "Legacy User",
            "email": "legacy@example.com",
            "phone": "0812345678",
            "password": Binary {
                subtype: BinarySubtype::Generic,
                bytes: b"$2b$12$legacyhash".to_vec(),
            },
            "created_at": bson::DateTime::now(),
            "is_active": true,
        };

        let record: UserRecord = bson::from_document::<UserDocument>(stored).unwrap().into();

        assert_eq!(record.email, "legacy@example.com");
        assert_eq!(record.password_hash, "$2b$12$legacyhash");
    }
}
