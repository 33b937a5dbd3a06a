//! Celebration module - the payoff after a decision is finalized.

mod delayed_action;
mod overlay;

pub use delayed_action::{DelayedAction, DelayedActionState};
pub use overlay::{Celebration, DEFAULT_CONFETTI_DURATION};
