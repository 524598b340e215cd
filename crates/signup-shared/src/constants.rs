//! Application-wide constants

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_APP_NAME: &str = "signup-server";
pub const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE_NAME: &str = "registration_db";
pub const DEFAULT_USERS_COLLECTION: &str = "users";
pub const DEFAULT_MAX_POOL_SIZE: u32 = 10;
pub const DEFAULT_CONNECT_TIMEOUT_SECONDS: u64 = 5;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MIN_PHONE_DIGITS: usize = 10;
pub const MAX_PHONE_DIGITS: usize = 15;
