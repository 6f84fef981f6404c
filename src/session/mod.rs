//! Trading session module
//!
//! Drives the load-once / transform / save-after-each-change cycle around a
//! `TradeManager` and an injected `StateStore`. One session owns one
//! account's state; concurrent writers to the same backing store are the
//! host's problem to serialize.

use crate::ledger::{RiskSettings, Signal, TradeOutcome, TradingState};
use crate::manager::{TradeError, TradeManager};
use crate::risk::{check_new_trade, BlockReason};
use crate::store::{StateStore, StoreError};
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// Trading session errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// The risk gate blocked a new trade
    #[error("Trade blocked by risk policy: {0:?}")]
    Blocked(BlockReason),
    /// The trade itself was invalid
    #[error(transparent)]
    Trade(#[from] TradeError),
    /// Persistence failed; the in-memory state may be ahead of the store
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A live trading session for a single account
pub struct TradingSession {
    store: Box<dyn StateStore>,
    manager: TradeManager,
    state: TradingState,
}

impl TradingSession {
    /// Resume from the store, or create a fresh ledger when nothing is saved
    pub async fn resume_or_create(
        store: Box<dyn StateStore>,
        manager: TradeManager,
        initial_equity: Decimal,
        risk_settings: RiskSettings,
    ) -> Result<Self, SessionError> {
        let state = match store.load().await? {
            Some(state) => {
                tracing::info!(equity = %state.current_equity, "Resumed trading state");
                state
            }
            None => {
                let state = TradingState::new(initial_equity, risk_settings, manager.today());
                store.save(&state).await?;
                tracing::info!(%initial_equity, "Created fresh trading state");
                state
            }
        };

        let mut session = Self {
            store,
            manager,
            state,
        };
        session.roll_day_if_needed().await?;
        Ok(session)
    }

    /// Current state snapshot
    pub fn state(&self) -> &TradingState {
        &self.state
    }

    /// Open a position from a signal, subject to the risk gate
    pub async fn open_trade(&mut self, signal: &Signal) -> Result<Uuid, SessionError> {
        self.roll_day_if_needed().await?;

        if let Some(reason) = check_new_trade(&self.state) {
            tracing::warn!(?reason, "New trade blocked");
            return Err(SessionError::Blocked(reason));
        }

        let next = self.manager.open_trade(&self.state, signal);
        let id = next
            .open_positions
            .last()
            .map(|p| p.id)
            .unwrap_or_default();
        self.commit(next).await?;
        Ok(id)
    }

    /// Close an open position; returns the realized pnl
    pub async fn close_trade(
        &mut self,
        position_id: Uuid,
        outcome: TradeOutcome,
        pnl: Option<Decimal>,
    ) -> Result<Decimal, SessionError> {
        self.roll_day_if_needed().await?;

        let next = self.manager.close_trade(&self.state, position_id, outcome, pnl)?;
        let realized = next
            .trades
            .last()
            .map(|t| t.pnl)
            .unwrap_or(Decimal::ZERO);
        self.commit(next).await?;
        Ok(realized)
    }

    /// Wipe the store and start over with a fresh ledger
    pub async fn reset(&mut self) -> Result<(), SessionError> {
        self.store.clear().await?;
        let state = TradingState::new(
            self.state.initial_equity,
            self.state.risk_settings.clone(),
            self.manager.today(),
        );
        self.commit(state).await
    }

    /// Start a new trading day when the clock's date moved past the day key
    async fn roll_day_if_needed(&mut self) -> Result<(), SessionError> {
        if self.manager.today() > self.state.daily_stats.day {
            let next = self.manager.reset_daily(&self.state);
            self.commit(next).await?;
        }
        Ok(())
    }

    /// Adopt a new snapshot and persist it
    async fn commit(&mut self, next: TradingState) -> Result<(), SessionError> {
        self.store.save(&next).await?;
        self.state = next;
        Ok(())
    }
}
