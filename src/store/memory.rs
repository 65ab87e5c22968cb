//! In-memory OrderLine store.
//!
//! Backs the dev server when no database is configured and the test
//! suites. Identifiers come from a monotonically increasing counter, so
//! ids are never reused within a process even after deletes.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use super::{OrderLineStore, StoreError};
use crate::models::{OrderLine, OrderLinePatch};

/// Id-keyed map store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entities: DashMap<i64, OrderLine>,
    id_gen: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> i64 {
        self.id_gen.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl OrderLineStore for MemoryStore {
    async fn save(&self, mut entity: OrderLine) -> Result<OrderLine, StoreError> {
        let id = self.next_id();
        entity.id = Some(id);
        self.entities.insert(id, entity.clone());
        Ok(entity)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.entities.contains_key(&id))
    }

    async fn update(&self, entity: OrderLine) -> Result<OrderLine, StoreError> {
        let id = entity.id.ok_or(StoreError::MissingId)?;
        self.entities.insert(id, entity.clone());
        Ok(entity)
    }

    async fn partial_update(
        &self,
        patch: OrderLinePatch,
    ) -> Result<Option<OrderLine>, StoreError> {
        let id = patch.id.ok_or(StoreError::MissingId)?;
        match self.entities.get_mut(&id) {
            Some(mut stored) => {
                patch.apply_to(stored.value_mut());
                Ok(Some(stored.value().clone()))
            }
            None => Ok(None),
        }
    }

    async fn find_all(&self, _eagerload: bool) -> Result<Vec<OrderLine>, StoreError> {
        let mut all: Vec<OrderLine> = self.entities.iter().map(|e| e.value().clone()).collect();
        // DashMap iteration order is arbitrary; sort for stable listings.
        all.sort_by_key(|e| e.id);
        Ok(all)
    }

    async fn find_one(&self, id: i64) -> Result<Option<OrderLine>, StoreError> {
        Ok(self.entities.get(&id).map(|e| e.value().clone()))
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.entities.remove(&id);
        Ok(())
    }
}
