//! Position sizing from the risk-per-trade budget

use crate::ledger::TradingState;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Size whose loss at the stop equals the per-trade risk budget
///
/// The budget is `risk_per_trade_pct` of current equity; size is budget over
/// the entry-to-stop distance. `None` when the stop sits on the entry, since
/// no finite size satisfies the budget there.
pub fn recommended_size(state: &TradingState, entry_price: Decimal, stop_loss: Decimal) -> Option<Decimal> {
    let distance = (entry_price - stop_loss).abs();
    if distance == dec!(0) {
        return None;
    }
    let budget = state.current_equity * state.risk_settings.risk_per_trade_pct / dec!(100);
    Some(budget / distance)
}
