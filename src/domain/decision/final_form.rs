//! Final decision form and the finalized record it produces.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValidationError};

/// The three fields on Make Decision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalDecisionForm {
    pub choice: String,
    pub reasoning: String,
    pub next_steps: String,
}

impl FinalDecisionForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// True only when choice, reasoning and next steps are all non-blank.
    pub fn can_finalize(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of the fields still blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("choice", &self.choice),
            ("reasoning", &self.reasoning),
            ("next_steps", &self.next_steps),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Produces the finalized record, or the first blank field.
    pub fn finalize(&self, at: Timestamp) -> Result<FinalizedDecision, ValidationError> {
        if let Some(field) = self.missing_fields().first() {
            return Err(ValidationError::empty_field(*field));
        }
        Ok(FinalizedDecision {
            choice: self.choice.trim().to_string(),
            reasoning: self.reasoning.trim().to_string(),
            next_steps: self.next_steps.trim().to_string(),
            finalized_at: at,
        })
    }
}

/// A decision the user has committed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizedDecision {
    pub choice: String,
    pub reasoning: String,
    pub next_steps: String,
    pub finalized_at: Timestamp,
}
