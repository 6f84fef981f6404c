//! Trade manager module
//!
//! The only component that derives mutated ledgers: opening a position from a
//! signal, closing it with an outcome, and rolling the trading day. Every
//! operation takes a state snapshot by reference and returns a fresh snapshot;
//! on error the input is untouched.

mod types;

pub use types::TradeError;

use crate::ledger::{ClosedTrade, OpenPosition, PerformanceMetrics, Signal, TradeOutcome, TradingState};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Time source injected into the manager
///
/// Keeps entry/close timestamps and the trading-day key out of ambient
/// wall-clock state so tests can pin them.
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Applies trade lifecycle transitions to a `TradingState`
pub struct TradeManager {
    clock: Box<dyn Clock>,
}

impl TradeManager {
    /// Create a manager on the system clock
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Create a manager with an injected clock
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Current trading-day key
    pub fn today(&self) -> NaiveDate {
        self.clock.now().date_naive()
    }

    /// Open a position from a signal
    ///
    /// Structurally total: risk policy is the caller's concern (see
    /// [`crate::risk`]), so this never rejects. Equity and metrics are not
    /// touched until the position closes.
    pub fn open_trade(&self, state: &TradingState, signal: &Signal) -> TradingState {
        let position = OpenPosition {
            id: Uuid::new_v4(),
            signal_id: signal.id,
            pair: signal.pair.clone(),
            direction: signal.direction,
            entry_price: signal.entry_price,
            size: signal.size,
            entry_time: self.clock.now(),
            stop_loss: signal.stop_loss,
            take_profit: signal.take_profit,
        };

        tracing::info!(
            position_id = %position.id,
            pair = %position.pair,
            direction = ?position.direction,
            "Position opened"
        );

        let mut next = state.clone();
        next.open_positions.push(position);
        next
    }

    /// Close an open position with an outcome
    ///
    /// An explicit `pnl` always wins; otherwise it is derived from the
    /// outcome's reference level and the position size. The closed trade is
    /// appended to the history, equity and daily stats absorb the pnl, and
    /// metrics are recomputed.
    pub fn close_trade(
        &self,
        state: &TradingState,
        position_id: Uuid,
        outcome: TradeOutcome,
        pnl: Option<Decimal>,
    ) -> Result<TradingState, TradeError> {
        let index = state
            .open_positions
            .iter()
            .position(|p| p.id == position_id)
            .ok_or(TradeError::PositionNotFound(position_id))?;

        let pnl = match pnl {
            Some(value) => value,
            None => derive_pnl(&state.open_positions[index], outcome)?,
        };

        let mut next = state.clone();
        let position = next.open_positions.remove(index);

        tracing::info!(
            position_id = %position.id,
            outcome = ?outcome,
            %pnl,
            "Position closed"
        );

        next.trades.push(ClosedTrade {
            position,
            outcome,
            pnl,
            close_time: self.clock.now(),
        });
        next.current_equity += pnl;
        next.daily_stats.pnl += pnl;
        next.daily_stats.trades += 1;
        next.performance_metrics = PerformanceMetrics::compute(next.initial_equity, &next.trades);

        Ok(next)
    }

    /// Start a new trading day
    ///
    /// Day boundaries are caller-driven: invoke this when the clock's date
    /// has moved past `daily_stats.day`.
    pub fn reset_daily(&self, state: &TradingState) -> TradingState {
        let mut next = state.clone();
        next.daily_stats.day = self.today();
        next.daily_stats.pnl = Decimal::ZERO;
        next.daily_stats.trades = 0;
        next.daily_stats.initial_equity = next.current_equity;

        tracing::info!(
            day = %next.daily_stats.day,
            start_equity = %next.daily_stats.initial_equity,
            "Trading day reset"
        );

        next
    }
}

impl Default for TradeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Directional distance between entry and the outcome's reference price,
/// times position size
fn derive_pnl(position: &OpenPosition, outcome: TradeOutcome) -> Result<Decimal, TradeError> {
    use crate::ledger::Direction;

    let reference = match outcome {
        TradeOutcome::TargetHit => position
            .take_profit
            .ok_or(TradeError::MissingLevel(outcome))?,
        TradeOutcome::StopLossHit => position.stop_loss.ok_or(TradeError::MissingLevel(outcome))?,
        TradeOutcome::Breakeven => position.entry_price,
        TradeOutcome::ManualClose => return Err(TradeError::MissingPnl),
    };

    let distance = match position.direction {
        Direction::Long => reference - position.entry_price,
        Direction::Short => position.entry_price - reference,
    };
    Ok(distance * position.size)
}
