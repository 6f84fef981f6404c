//! Trade manager types

use crate::ledger::TradeOutcome;
use thiserror::Error;
use uuid::Uuid;

/// Trade manager errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TradeError {
    /// Close referenced a position id with no open position
    #[error("No open position with id {0}")]
    PositionNotFound(Uuid),
    /// Manual close without an explicit pnl
    #[error("Manual close requires an explicit pnl")]
    MissingPnl,
    /// Outcome needs a protective level the position does not carry
    #[error("Outcome {0:?} requires a price level on the position")]
    MissingLevel(TradeOutcome),
}
