//! Decision module - the state the guided path reads and writes.
//!
//! # Components
//!
//! - `DecisionState` - title, importance, urgency and options with impacts
//! - `OptionDraft` - option names being entered on Explore Options
//! - `PriorityList` - weighted priorities from Clarify Priorities
//! - `ConfidenceCheck` - self-reported confidence
//! - `FinalDecisionForm` / `FinalizedDecision` - the committed choice
//! - `ProsConsMatrix` - the pros/cons worksheet variant

mod confidence;
mod final_form;
mod matrix;
mod option;
mod option_draft;
mod priorities;
mod state;
mod weighted_item;

pub use confidence::ConfidenceCheck;
pub use final_form::{FinalDecisionForm, FinalizedDecision};
pub use matrix::{ProsConsMatrix, ProsConsMatrixBuilder, Side};
pub use option::{DecisionOption, ImpactCategory};
pub use option_draft::OptionDraft;
pub use priorities::PriorityList;
pub use state::DecisionState;
pub use weighted_item::{qualifying, qualifying_weight_sum, WeightedItem};
