//! Flow module - navigation across the guided path and the worksheet tabs.

mod navigator;
mod worksheet_tab;

pub use navigator::{DecisionFlow, Navigation};
pub use worksheet_tab::WorksheetTab;
