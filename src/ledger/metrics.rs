//! Performance metric recomputation
//!
//! `PerformanceMetrics::compute` is a pure function of the initial equity and
//! the closed-trade history. It never consults open positions, so two ledgers
//! with identical histories always carry identical metrics.

use super::ClosedTrade;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Metrics derived from the closed trade history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Net realized P&L
    pub total_pnl: Decimal,
    /// Winning trades as percentage of all trades
    pub win_rate: Decimal,
    /// Number of closed trades
    pub total_trades: u32,
    /// Trades with positive P&L
    pub winning_trades: u32,
    /// Trades with negative P&L
    pub losing_trades: u32,
    /// Mean P&L of winning trades
    pub average_win: Decimal,
    /// Mean absolute P&L of losing trades
    pub average_loss: Decimal,
    /// Gross profit over gross loss; `Decimal::MAX` when there are profits
    /// but no losses, zero when there are neither
    pub profit_factor: Decimal,
    /// Worst peak-to-trough equity decline, percent
    pub max_drawdown: Decimal,
    /// Decline from the equity peak as of the last trade, percent
    pub current_drawdown: Decimal,
    /// Sum of positive P&L
    pub gross_profit: Decimal,
    /// Sum of absolute negative P&L
    pub gross_loss: Decimal,
    /// Trailing winning streak at the end of the history
    pub consecutive_wins: u32,
    /// Trailing losing streak at the end of the history
    pub consecutive_losses: u32,
}

impl PerformanceMetrics {
    /// Recompute all metrics from the closed trade history
    pub fn compute(initial_equity: Decimal, trades: &[ClosedTrade]) -> Self {
        let total_trades = trades.len() as u32;
        let winning_trades = trades.iter().filter(|t| t.pnl > dec!(0)).count() as u32;
        let losing_trades = trades.iter().filter(|t| t.pnl < dec!(0)).count() as u32;

        let gross_profit: Decimal = trades.iter().filter(|t| t.pnl > dec!(0)).map(|t| t.pnl).sum();
        let gross_loss: Decimal = trades
            .iter()
            .filter(|t| t.pnl < dec!(0))
            .map(|t| t.pnl.abs())
            .sum();
        let total_pnl = gross_profit - gross_loss;

        let win_rate = if total_trades > 0 {
            Decimal::from(winning_trades) / Decimal::from(total_trades) * dec!(100)
        } else {
            dec!(0)
        };

        let average_win = if winning_trades > 0 {
            gross_profit / Decimal::from(winning_trades)
        } else {
            dec!(0)
        };
        let average_loss = if losing_trades > 0 {
            gross_loss / Decimal::from(losing_trades)
        } else {
            dec!(0)
        };

        let profit_factor = if gross_loss > dec!(0) {
            gross_profit / gross_loss
        } else if gross_profit > dec!(0) {
            Decimal::MAX
        } else {
            dec!(0)
        };

        let (consecutive_wins, consecutive_losses) = trailing_streaks(trades);
        let (max_drawdown, current_drawdown) = drawdowns(initial_equity, trades);

        Self {
            total_pnl,
            win_rate,
            total_trades,
            winning_trades,
            losing_trades,
            average_win,
            average_loss,
            profit_factor,
            max_drawdown,
            current_drawdown,
            gross_profit,
            gross_loss,
            consecutive_wins,
            consecutive_losses,
        }
    }
}

/// Trailing same-sign streak lengths at the end of the history
///
/// A zero-P&L trade terminates both streaks.
fn trailing_streaks(trades: &[ClosedTrade]) -> (u32, u32) {
    let mut wins = 0;
    for t in trades.iter().rev() {
        if t.pnl > dec!(0) {
            wins += 1;
        } else {
            break;
        }
    }
    let mut losses = 0;
    for t in trades.iter().rev() {
        if t.pnl < dec!(0) {
            losses += 1;
        } else {
            break;
        }
    }
    (wins, losses)
}

/// Maximum and current drawdown in percent over the equity curve
///
/// The peak is the running maximum of `initial_equity` plus cumulative P&L,
/// seeded with `initial_equity` itself, so the maximum never decreases as
/// trades are appended.
fn drawdowns(initial_equity: Decimal, trades: &[ClosedTrade]) -> (Decimal, Decimal) {
    let mut equity = initial_equity;
    let mut peak = initial_equity;
    let mut max_dd = dec!(0);
    let mut current_dd = dec!(0);

    for t in trades {
        equity += t.pnl;
        if equity > peak {
            peak = equity;
        }
        current_dd = if peak > dec!(0) {
            (peak - equity).max(dec!(0)) / peak * dec!(100)
        } else {
            dec!(0)
        };
        if current_dd > max_dd {
            max_dd = current_dd;
        }
    }

    (max_dd, current_dd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Direction, OpenPosition, TradeOutcome};
    use chrono::Utc;
    use uuid::Uuid;

    fn trade(pnl: Decimal) -> ClosedTrade {
        ClosedTrade {
            position: OpenPosition {
                id: Uuid::new_v4(),
                signal_id: Uuid::new_v4(),
                pair: "EURUSD".to_string(),
                direction: Direction::Long,
                entry_price: dec!(1.0850),
                size: dec!(10000),
                entry_time: Utc::now(),
                stop_loss: None,
                take_profit: None,
            },
            outcome: TradeOutcome::ManualClose,
            pnl,
            close_time: Utc::now(),
        }
    }

    fn trades(pnls: &[Decimal]) -> Vec<ClosedTrade> {
        pnls.iter().copied().map(trade).collect()
    }

    #[test]
    fn test_empty_history() {
        let m = PerformanceMetrics::compute(dec!(10000), &[]);
        assert_eq!(m, PerformanceMetrics::default());
    }

    #[test]
    fn test_basic_counts_and_totals() {
        let history = trades(&[dec!(100), dec!(-50), dec!(200), dec!(0)]);
        let m = PerformanceMetrics::compute(dec!(10000), &history);

        assert_eq!(m.total_trades, 4);
        assert_eq!(m.winning_trades, 2);
        assert_eq!(m.losing_trades, 1);
        assert_eq!(m.gross_profit, dec!(300));
        assert_eq!(m.gross_loss, dec!(50));
        assert_eq!(m.total_pnl, dec!(250));
        assert_eq!(m.win_rate, dec!(50));
        assert_eq!(m.average_win, dec!(150));
        assert_eq!(m.average_loss, dec!(50));
        assert_eq!(m.profit_factor, dec!(6));
    }

    #[test]
    fn test_zero_pnl_counts_as_neither() {
        let history = trades(&[dec!(0), dec!(0)]);
        let m = PerformanceMetrics::compute(dec!(10000), &history);

        assert_eq!(m.total_trades, 2);
        assert_eq!(m.winning_trades, 0);
        assert_eq!(m.losing_trades, 0);
        assert!(m.winning_trades + m.losing_trades <= m.total_trades);
        assert_eq!(m.win_rate, dec!(0));
        assert_eq!(m.profit_factor, dec!(0));
    }

    #[test]
    fn test_profit_factor_sentinel_no_losses() {
        let history = trades(&[dec!(100), dec!(50)]);
        let m = PerformanceMetrics::compute(dec!(10000), &history);
        assert_eq!(m.profit_factor, Decimal::MAX);
    }

    #[test]
    fn test_trailing_streaks() {
        let history = trades(&[dec!(-10), dec!(20), dec!(30), dec!(40)]);
        let m = PerformanceMetrics::compute(dec!(10000), &history);
        assert_eq!(m.consecutive_wins, 3);
        assert_eq!(m.consecutive_losses, 0);

        let history = trades(&[dec!(20), dec!(-10), dec!(-10)]);
        let m = PerformanceMetrics::compute(dec!(10000), &history);
        assert_eq!(m.consecutive_wins, 0);
        assert_eq!(m.consecutive_losses, 2);

        // A breakeven trade ends both streaks
        let history = trades(&[dec!(20), dec!(20), dec!(0)]);
        let m = PerformanceMetrics::compute(dec!(10000), &history);
        assert_eq!(m.consecutive_wins, 0);
        assert_eq!(m.consecutive_losses, 0);
    }

    #[test]
    fn test_drawdown_from_peak() {
        // 10000 -> 11000 (peak) -> 9900: 10% below peak
        let history = trades(&[dec!(1000), dec!(-1100)]);
        let m = PerformanceMetrics::compute(dec!(10000), &history);
        assert_eq!(m.current_drawdown, dec!(10));
        assert_eq!(m.max_drawdown, dec!(10));
    }

    #[test]
    fn test_drawdown_recovers_max_stays() {
        // Dip to 9000 (10% from the 10000 peak) then recover above the peak
        let history = trades(&[dec!(-1000), dec!(2500)]);
        let m = PerformanceMetrics::compute(dec!(10000), &history);
        assert_eq!(m.current_drawdown, dec!(0));
        assert_eq!(m.max_drawdown, dec!(10));
        assert!(m.max_drawdown >= m.current_drawdown);
    }

    #[test]
    fn test_max_drawdown_monotone_under_append() {
        let pnls = [dec!(-500), dec!(300), dec!(-900), dec!(1200), dec!(-100)];
        let mut history = vec![];
        let mut previous_max = dec!(0);
        for pnl in pnls {
            history.push(trade(pnl));
            let m = PerformanceMetrics::compute(dec!(10000), &history);
            assert!(m.max_drawdown >= previous_max);
            previous_max = m.max_drawdown;
        }
    }

    #[test]
    fn test_determinism() {
        let history = trades(&[dec!(120), dec!(-80), dec!(0), dec!(45.5)]);
        let a = PerformanceMetrics::compute(dec!(10000), &history);
        let b = PerformanceMetrics::compute(dec!(10000), &history);
        assert_eq!(a, b);
    }
}
