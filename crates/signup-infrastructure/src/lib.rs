//! # Signup Infrastructure
//! 
//! Store implementations (adapters) of the user repository port.

pub mod database;

pub use database::{create_client, InMemoryUserRepository, MongoUserRepository};
