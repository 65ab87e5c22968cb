//! Supermatech store backend - OrderLine REST resource server.
//!
//! # Modules
//!
//! - [`models`] - OrderLine entity and merge-patch form
//! - [`store`] - storage collaborator trait plus memory/PostgreSQL stores
//! - [`gateway`] - axum HTTP server: routes, handlers, error mapping
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing setup

pub mod config;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod store;

// Convenient re-exports at crate root
pub use config::AppConfig;
pub use gateway::state::AppState;
pub use models::{OrderLine, OrderLinePatch};
pub use store::{MemoryStore, OrderLineStore, PgOrderLineStore, StoreError};
