//! The balance state machine. Every action settles the open interval at the rate of the mode
//! being left and then switches mode. Queries compute the same value without writing it.

pub mod action;
pub mod state;

use anyhow::Result;
use tracing::{debug, info, instrument};

use crate::{
    storage::StateStore,
    utils::{clock::Clock, time::epoch_seconds},
};

use action::Action;
use state::{Mode, TrackerState};

/// What a render needs to know: the current mode and the balance including the open interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceSnapshot {
    pub mode: Mode,
    pub balance: f64,
}

pub struct BalanceTracker<S, C> {
    store: S,
    clock: C,
}

impl<S: StateStore, C: Clock> BalanceTracker<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Settles the open interval, applies `action` and persists the result. The state is saved
    /// even for unrecognized actions.
    #[instrument(skip_all, fields(action = %action))]
    pub fn handle_action(&self, action: &Action) -> Result<TrackerState> {
        let mut state = self.store.load()?;
        let now = epoch_seconds(self.clock.time());
        let previous = state.mode;

        state.settle(now);
        state.apply(action, now);
        self.store.save(&state)?;

        info!(
            "Switched {previous} -> {} with balance {:.4}h",
            state.mode, state.balance
        );
        Ok(state)
    }

    /// Current balance without touching the stored state.
    pub fn snapshot(&self) -> Result<BalanceSnapshot> {
        let state = self.store.load()?;
        let balance = state.balance_at(epoch_seconds(self.clock.time()));
        debug!("Snapshot of {state:?} is {balance}");
        Ok(BalanceSnapshot {
            mode: state.mode,
            balance,
        })
    }
}
