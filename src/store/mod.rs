//! State store module
//!
//! Persistence boundary for `TradingState` snapshots. The core only needs
//! load/save/clear semantics; which backend sits behind the trait is the
//! host application's choice. Failures surface to the caller, never a
//! silent no-op.

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use crate::ledger::TradingState;
use async_trait::async_trait;
use thiserror::Error;

/// State store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure
    #[error("Store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// Snapshot could not be encoded or decoded
    #[error("Snapshot codec failed: {0}")]
    Codec(#[from] serde_json::Error),
    /// Backend-specific failure
    #[error("Store backend failed: {0}")]
    Backend(String),
}

/// Trait for trading-state persistence implementations
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Load the last saved snapshot, `None` when nothing was ever saved
    async fn load(&self) -> Result<Option<TradingState>, StoreError>;
    /// Persist a snapshot, replacing any previous one
    async fn save(&self, state: &TradingState) -> Result<(), StoreError>;
    /// Drop the stored snapshot
    async fn clear(&self) -> Result<(), StoreError>;
}
