//! Database module (MongoDB and in-memory adapters)

pub mod connection;
pub mod memory;
pub mod mongo;

pub use connection::create_client;
pub use memory::InMemoryUserRepository;
pub use mongo::MongoUserRepository;
