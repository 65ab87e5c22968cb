use std::sync::Arc;

use crate::store::{Database, OrderLineStore};

/// Shared gateway state.
#[derive(Clone)]
pub struct AppState {
    /// Storage collaborator for the OrderLine resource.
    pub store: Arc<dyn OrderLineStore>,
    /// Database handle, present when running on PostgreSQL. Used by the
    /// health endpoint only; all entity access goes through `store`.
    pub db: Option<Arc<Database>>,
}

impl AppState {
    pub fn new(store: Arc<dyn OrderLineStore>, db: Option<Arc<Database>>) -> Self {
        Self { store, db }
    }
}
