//! # Signup API
//! 
//! HTTP handlers, response envelopes, error mapping, and the router.

pub mod handlers;
pub mod error;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
