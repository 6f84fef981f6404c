//! Trade and signal types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trade direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Profit when price rises
    Long,
    /// Profit when price falls
    Short,
}

/// Terminal classification of a closed trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeOutcome {
    /// Take-profit level was reached
    #[serde(rename = "Target Hit")]
    TargetHit,
    /// Stop-loss level was reached
    #[serde(rename = "Stop Loss Hit")]
    StopLossHit,
    /// Closed flat at entry
    Breakeven,
    /// Closed by the trader at an arbitrary price
    #[serde(rename = "Manual Close")]
    ManualClose,
}

/// An externally supplied trade idea
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    /// Unique signal identifier
    pub id: Uuid,
    /// Instrument, e.g. "EURUSD"
    pub pair: String,
    /// Trade direction
    pub direction: Direction,
    /// Proposed entry price
    pub entry_price: Decimal,
    /// Position size in units of the instrument
    pub size: Decimal,
    /// Optional stop-loss level
    pub stop_loss: Option<Decimal>,
    /// Optional take-profit level
    pub take_profit: Option<Decimal>,
    /// Signal generation timestamp
    pub timestamp: DateTime<Utc>,
}

impl Signal {
    /// Create a new signal without protective levels
    pub fn new(pair: impl Into<String>, direction: Direction, entry_price: Decimal, size: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            pair: pair.into(),
            direction,
            entry_price,
            size,
            stop_loss: None,
            take_profit: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach stop-loss and take-profit levels
    pub fn with_levels(mut self, stop_loss: Decimal, take_profit: Decimal) -> Self {
        self.stop_loss = Some(stop_loss);
        self.take_profit = Some(take_profit);
        self
    }
}

/// An open position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenPosition {
    /// Position identifier
    pub id: Uuid,
    /// Signal this position was opened from
    pub signal_id: Uuid,
    /// Instrument
    pub pair: String,
    /// Trade direction
    pub direction: Direction,
    /// Entry price
    pub entry_price: Decimal,
    /// Position size
    pub size: Decimal,
    /// Entry timestamp
    pub entry_time: DateTime<Utc>,
    /// Stop-loss level, if set
    pub stop_loss: Option<Decimal>,
    /// Take-profit level, if set
    pub take_profit: Option<Decimal>,
}

/// A closed trade, immutable once created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClosedTrade {
    /// Original position
    pub position: OpenPosition,
    /// How the trade ended
    pub outcome: TradeOutcome,
    /// Realized P&L
    pub pnl: Decimal,
    /// Close timestamp
    pub close_time: DateTime<Utc>,
}
