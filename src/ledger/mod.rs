//! Trade ledger module
//!
//! The `TradingState` aggregate and the pure metric recomputation over its
//! closed-trade history

mod metrics;
mod state;
mod trade;

pub use metrics::PerformanceMetrics;
pub use state::{DailyStats, RiskSettings, TradingState};
pub use trade::{ClosedTrade, Direction, OpenPosition, Signal, TradeOutcome};
