//! Database client bootstrap

use mongodb::{options::ClientOptions, Client};
use std::time::Duration;

use signup_shared::config::DatabaseSettings;

/// Builds a pooled client. The driver connects lazily; callers that need to
/// fail fast should ping through the repository.
pub async fn create_client(settings: &DatabaseSettings) -> Result<Client, mongodb::error::Error> {
    let timeout = Duration::from_secs(settings.connect_timeout_seconds);

    let mut options = ClientOptions::parse(&settings.url).await?;
    options.max_pool_size = Some(settings.max_pool_size);
    options.connect_timeout = Some(timeout);
    options.server_selection_timeout = Some(timeout);

    Client::with_options(options)
}
