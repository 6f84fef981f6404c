//! prop-ledger: trading-state and risk bookkeeping core for prop-firm accounts
//!
//! This library provides the core components for:
//! - The `TradingState` ledger: equity, open positions, closed trade history
//! - Deterministic performance metrics (win rate, drawdown, profit factor)
//! - Trade lifecycle transitions (open from a signal, close with an outcome)
//! - Pre-trade risk gating (daily loss limit, losing-streak limit)
//! - Pluggable state persistence behind the `StateStore` trait
//! - Session orchestration of the load/transform/save cycle
//!
//! All ledger operations are value-in/value-out: they take a state snapshot
//! and return a new one, leaving the input untouched on error.

pub mod config;
pub mod ledger;
pub mod manager;
pub mod risk;
pub mod session;
pub mod store;
pub mod telemetry;
