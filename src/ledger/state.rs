//! The `TradingState` aggregate

use super::{ClosedTrade, OpenPosition, PerformanceMetrics};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Risk policy configured at ledger creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskSettings {
    /// Risk per trade as percentage of equity
    #[serde(default = "default_risk_per_trade_pct")]
    pub risk_per_trade_pct: Decimal,
    /// Daily loss limit as percentage of the day's starting equity
    #[serde(default = "default_daily_loss_limit_pct")]
    pub daily_loss_limit_pct: Decimal,
    /// Trailing losing streak at which new trades are blocked
    #[serde(default = "default_consecutive_losses_limit")]
    pub consecutive_losses_limit: u32,
}

fn default_risk_per_trade_pct() -> Decimal {
    dec!(1)
}
fn default_daily_loss_limit_pct() -> Decimal {
    dec!(5)
}
fn default_consecutive_losses_limit() -> u32 {
    3
}

impl Default for RiskSettings {
    fn default() -> Self {
        Self {
            risk_per_trade_pct: dec!(1),
            daily_loss_limit_pct: dec!(5),
            consecutive_losses_limit: 3,
        }
    }
}

/// Per-trading-day statistics, reset at each day boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyStats {
    /// Day key the stats belong to
    pub day: NaiveDate,
    /// P&L realized today
    pub pnl: Decimal,
    /// Trades closed today
    pub trades: u32,
    /// Equity at the start of the day
    pub initial_equity: Decimal,
}

/// Aggregate trading state for a single account
///
/// `current_equity` always equals `initial_equity` plus the sum of realized
/// P&L over `trades`; `trades` is append-only in close order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingState {
    /// Equity at account creation, immutable afterwards
    pub initial_equity: Decimal,
    /// Equity after all realized P&L
    pub current_equity: Decimal,
    /// Closed trade history, chronological by close time
    pub trades: Vec<ClosedTrade>,
    /// Currently open positions, chronological by open time
    pub open_positions: Vec<OpenPosition>,
    /// Configured risk policy
    pub risk_settings: RiskSettings,
    /// Metrics derived from `trades`, recomputed after every close
    pub performance_metrics: PerformanceMetrics,
    /// Today's statistics
    pub daily_stats: DailyStats,
}

impl TradingState {
    /// Create a fresh ledger with no history
    pub fn new(initial_equity: Decimal, risk_settings: RiskSettings, day: NaiveDate) -> Self {
        Self {
            initial_equity,
            current_equity: initial_equity,
            trades: vec![],
            open_positions: vec![],
            risk_settings,
            performance_metrics: PerformanceMetrics::default(),
            daily_stats: DailyStats {
                day,
                pnl: dec!(0),
                trades: 0,
                initial_equity,
            },
        }
    }

    /// Look up an open position by id
    pub fn open_position(&self, id: Uuid) -> Option<&OpenPosition> {
        self.open_positions.iter().find(|p| p.id == id)
    }

    /// Sum of realized P&L over the closed trade history
    pub fn realized_pnl(&self) -> Decimal {
        self.trades.iter().map(|t| t.pnl).sum()
    }
}
