//! Supermatech API server entry point.
//!
//! Loads `config/{env}.yaml` (env from `APP_ENV`, default `dev`), wires
//! the configured store, and starts the gateway. Without a
//! `postgres_url` the server runs on the in-memory store.

use std::sync::Arc;

use supermatech_api::config::AppConfig;
use supermatech_api::gateway::{self, state::AppState};
use supermatech_api::logging::init_logging;
use supermatech_api::store::{Database, MemoryStore, OrderLineStore, PgOrderLineStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = std::env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());
    let config = AppConfig::load_or_default(&env);

    let _log_guard = init_logging(&config);
    tracing::info!("Starting supermatech-api (env: {})", env);

    let (store, db): (Arc<dyn OrderLineStore>, Option<Arc<Database>>) =
        match config.postgres_url {
            Some(ref url) => {
                let db = Arc::new(Database::connect(url).await?);
                tracing::info!("OrderLine store: PostgreSQL");
                (Arc::new(PgOrderLineStore::new(db.pool().clone())), Some(db))
            }
            None => {
                tracing::warn!("No postgres_url configured, using in-memory store");
                (Arc::new(MemoryStore::new()), None)
            }
        };

    let state = Arc::new(AppState::new(store, db));
    gateway::run_server(&config.gateway.host, config.gateway.port, state).await
}
