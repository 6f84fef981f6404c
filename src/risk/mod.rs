//! Risk gate module
//!
//! Stateless predicates over a `TradingState`, consulted before opening a
//! trade. The gate never mutates, throws, or logs; surfacing a blocked trade
//! is the caller's job.

mod gate;
mod sizing;

pub use gate::{
    check_new_trade, is_consecutive_loss_limit_reached, is_daily_loss_limit_reached, BlockReason,
};
pub use sizing::recommended_size;
