//! In-memory state store

use super::{StateStore, StoreError};
use crate::ledger::TradingState;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Volatile single-slot store, the default test double
#[derive(Clone, Default)]
pub struct MemoryStore {
    slot: Arc<RwLock<Option<TradingState>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn load(&self) -> Result<Option<TradingState>, StoreError> {
        let slot = self.slot.read().await;
        Ok(slot.clone())
    }

    async fn save(&self, state: &TradingState) -> Result<(), StoreError> {
        let mut slot = self.slot.write().await;
        *slot = Some(state.clone());
        tracing::debug!("Snapshot saved to memory store");
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut slot = self.slot.write().await;
        *slot = None;
        Ok(())
    }
}
