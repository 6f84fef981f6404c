//! Pre-trade policy checks

use crate::ledger::TradingState;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Why a new trade is blocked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockReason {
    /// Today's realized loss reached the configured share of the day's
    /// starting equity; carries the loss threshold in money terms
    DailyLossLimitReached(Decimal),
    /// The trailing losing streak reached the configured limit
    ConsecutiveLossLimitReached(u32),
}

/// True iff today's realized loss has consumed the daily loss allowance
pub fn is_daily_loss_limit_reached(state: &TradingState) -> bool {
    state.daily_stats.pnl <= -daily_loss_allowance(state)
}

/// True iff the trailing losing streak is at or past the configured limit
pub fn is_consecutive_loss_limit_reached(state: &TradingState) -> bool {
    state.performance_metrics.consecutive_losses >= state.risk_settings.consecutive_losses_limit
}

/// First tripped policy, if any, in precedence order
pub fn check_new_trade(state: &TradingState) -> Option<BlockReason> {
    if is_daily_loss_limit_reached(state) {
        return Some(BlockReason::DailyLossLimitReached(daily_loss_allowance(state)));
    }
    if is_consecutive_loss_limit_reached(state) {
        return Some(BlockReason::ConsecutiveLossLimitReached(
            state.performance_metrics.consecutive_losses,
        ));
    }
    None
}

/// Allowed daily loss in money terms
fn daily_loss_allowance(state: &TradingState) -> Decimal {
    state.daily_stats.initial_equity * state.risk_settings.daily_loss_limit_pct / dec!(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::RiskSettings;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn state() -> TradingState {
        TradingState::new(
            dec!(10000),
            RiskSettings::default(),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        )
    }

    #[test]
    fn test_daily_limit_boundary() {
        // 5% of 10000 = 500
        let mut state = state();

        state.daily_stats.pnl = dec!(-499);
        assert!(!is_daily_loss_limit_reached(&state));

        state.daily_stats.pnl = dec!(-500);
        assert!(is_daily_loss_limit_reached(&state));

        state.daily_stats.pnl = dec!(-550);
        assert!(is_daily_loss_limit_reached(&state));
    }

    #[test]
    fn test_daily_limit_ignores_profit() {
        let mut state = state();
        state.daily_stats.pnl = dec!(750);
        assert!(!is_daily_loss_limit_reached(&state));
    }

    #[test]
    fn test_consecutive_loss_limit() {
        let mut state = state();
        assert!(!is_consecutive_loss_limit_reached(&state));

        state.performance_metrics.consecutive_losses = 2;
        assert!(!is_consecutive_loss_limit_reached(&state));

        state.performance_metrics.consecutive_losses = 3;
        assert!(is_consecutive_loss_limit_reached(&state));
    }

    #[test]
    fn test_check_precedence() {
        let mut state = state();
        state.daily_stats.pnl = dec!(-600);
        state.performance_metrics.consecutive_losses = 5;

        assert_eq!(
            check_new_trade(&state),
            Some(BlockReason::DailyLossLimitReached(dec!(500)))
        );
    }

    #[test]
    fn test_check_passes_clean_state() {
        assert_eq!(check_new_trade(&state()), None);
    }

    #[test]
    fn test_gate_is_pure() {
        let state = state();
        let before = serde_json::to_string(&state).unwrap();
        let _ = check_new_trade(&state);
        let after = serde_json::to_string(&state).unwrap();
        assert_eq!(before, after);
    }
}
