//! API server state

use std::sync::Arc;

use crate::storage::RecordStore;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Shared record store handle
    pub store: Arc<dyn RecordStore>,

    /// Whether 500 responses carry the underlying storage message
    pub expose_errors: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            expose_errors: true,
        }
    }

    pub fn with_expose_errors(mut self, expose_errors: bool) -> Self {
        self.expose_errors = expose_errors;
        self
    }

    /// Name of the backing store
    pub fn backend(&self) -> &'static str {
        self.store.name()
    }
}
