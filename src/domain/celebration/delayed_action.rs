//! DelayedAction - a one-shot action due at a point in time.
//!
//! Time is passed in rather than read, so whoever owns a clock decides when
//! "now" is. Tests move a manual clock forward instead of sleeping.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::foundation::Timestamp;

/// Where a delayed action is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelayedActionState {
    Pending,
    Fired,
    Cancelled,
}

/// A one-shot action that becomes due at `due_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayedAction {
    due_at: Timestamp,
    state: DelayedActionState,
}

impl DelayedAction {
    /// Schedules an action `delay` after `now`.
    pub fn schedule(now: Timestamp, delay: Duration) -> Self {
        Self {
            due_at: now.plus(delay),
            state: DelayedActionState::Pending,
        }
    }

    pub fn due_at(&self) -> Timestamp {
        self.due_at
    }

    pub fn state(&self) -> DelayedActionState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == DelayedActionState::Pending
    }

    /// Fires the action if it is pending and due.
    ///
    /// Returns true exactly once, on the poll that fires it.
    pub fn poll(&mut self, now: Timestamp) -> bool {
        if self.state == DelayedActionState::Pending && !now.is_before(&self.due_at) {
            self.state = DelayedActionState::Fired;
            return true;
        }
        false
    }

    /// Cancels a pending action. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self) -> bool {
        if self.state == DelayedActionState::Pending {
            self.state = DelayedActionState::Cancelled;
            return true;
        }
        false
    }

    /// Time left until due; zero once due or no longer pending.
    pub fn remaining(&self, now: Timestamp) -> Duration {
        if !self.is_pending() {
            return Duration::ZERO;
        }
        self.due_at
            .duration_since(&now)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}
