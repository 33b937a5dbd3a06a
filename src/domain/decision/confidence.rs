//! Self-reported confidence captured on Decision Confidence.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

/// How sure the user feels, and what would make them surer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceCheck {
    pub level: Percentage,
    pub would_help: String,
}

impl ConfidenceCheck {
    /// Starts at 50% with no note.
    pub fn new() -> Self {
        Self {
            level: Percentage::HALF,
            would_help: String::new(),
        }
    }

    /// Sets the slider value, clamping to 0..=100.
    pub fn set_level(&mut self, level: i64) {
        self.level = Percentage::new(level.clamp(0, 100) as u8);
    }

    pub fn set_would_help(&mut self, note: impl Into<String>) {
        self.would_help = note.into();
    }
}

impl Default for ConfidenceCheck {
    fn default() -> Self {
        Self::new()
    }
}
