//! Storage collaborator for the OrderLine resource.
//!
//! The gateway owns request validation and response shaping only; durable
//! state and identifier assignment live behind [`OrderLineStore`]. Two
//! implementations ship with the crate:
//!
//! - [`MemoryStore`] - id-keyed in-process map, used in tests and as the
//!   dev default when no database is configured
//! - [`PgOrderLineStore`] - PostgreSQL via sqlx

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{OrderLine, OrderLinePatch};

pub use memory::MemoryStore;
pub use postgres::{Database, PgOrderLineStore};

/// Storage-layer failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Update or partial-update called with an entity that carries no id.
    /// The gateway rejects these before delegating, so hitting this means
    /// a caller bypassed validation.
    #[error("entity has no identifier")]
    MissingId,
}

/// Persistence operations the OrderLine resource delegates to.
///
/// Ordering of `find_all` results is store-defined. `eagerload` is a hint
/// for stores that resolve relations lazily; implementations are free to
/// ignore it.
#[async_trait]
pub trait OrderLineStore: Send + Sync {
    /// Persist a new entity, assigning a fresh identifier.
    async fn save(&self, entity: OrderLine) -> Result<OrderLine, StoreError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, StoreError>;

    /// Full-replace update of an existing entity.
    async fn update(&self, entity: OrderLine) -> Result<OrderLine, StoreError>;

    /// Merge the non-`None` patch fields into the stored entity.
    /// Returns `None` when the target entity does not exist.
    async fn partial_update(
        &self,
        patch: OrderLinePatch,
    ) -> Result<Option<OrderLine>, StoreError>;

    async fn find_all(&self, eagerload: bool) -> Result<Vec<OrderLine>, StoreError>;

    async fn find_one(&self, id: i64) -> Result<Option<OrderLine>, StoreError>;

    /// Remove the entity if present. Not an error when it is absent.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}
