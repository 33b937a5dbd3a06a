//! Celebration - confetti, the congratulations modal and the share panel.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::delayed_action::DelayedAction;
use crate::domain::foundation::Timestamp;

/// How long confetti stays on screen after finalizing.
pub const DEFAULT_CONFETTI_DURATION: Duration = Duration::from_secs(5);

/// Visibility of the celebratory overlays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Celebration {
    confetti_visible: bool,
    modal_open: bool,
    share_open: bool,
    hide_confetti: Option<DelayedAction>,
}

impl Celebration {
    /// Nothing showing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows confetti and the modal; confetti hides after `duration`.
    ///
    /// Starting again reschedules the hide, cancelling any pending one.
    pub fn start(&mut self, now: Timestamp, duration: Duration) {
        if let Some(previous) = self.hide_confetti.as_mut() {
            previous.cancel();
        }
        self.confetti_visible = true;
        self.modal_open = true;
        self.hide_confetti = Some(DelayedAction::schedule(now, duration));
    }

    /// Applies any due timers. Returns true if confetti was hidden by this call.
    pub fn tick(&mut self, now: Timestamp) -> bool {
        let fired = self
            .hide_confetti
            .as_mut()
            .map_or(false, |action| action.poll(now));
        if fired {
            self.confetti_visible = false;
        }
        fired
    }

    /// Hides confetti immediately and drops the pending hide.
    pub fn stop_confetti(&mut self) {
        if let Some(action) = self.hide_confetti.as_mut() {
            action.cancel();
        }
        self.confetti_visible = false;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    pub fn open_share(&mut self) {
        self.share_open = true;
    }

    pub fn close_share(&mut self) {
        self.share_open = false;
    }

    pub fn confetti_visible(&self) -> bool {
        self.confetti_visible
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn share_open(&self) -> bool {
        self.share_open
    }

    pub fn hide_confetti_action(&self) -> Option<&DelayedAction> {
        self.hide_confetti.as_ref()
    }
}
