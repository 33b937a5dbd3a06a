//! OptionDraft - the editable list of option names on Explore Options.

use serde::{Deserialize, Serialize};

use super::state::DecisionState;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Option names being typed before they are submitted to the decision.
///
/// Always holds at least one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDraft {
    names: Vec<String>,
}

impl OptionDraft {
    /// Starts a draft with one empty row.
    pub fn new() -> Self {
        Self {
            names: vec![String::new()],
        }
    }

    /// Starts a draft pre-filled with the decision's current options.
    pub fn from_state(state: &DecisionState) -> Self {
        let names: Vec<String> = state.options().iter().map(|o| o.text.clone()).collect();
        if names.is_empty() {
            Self::new()
        } else {
            Self { names }
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Adds an empty row and returns its index.
    pub fn add(&mut self) -> usize {
        self.names.push(String::new());
        self.names.len() - 1
    }

    pub fn update(&mut self, index: usize, name: impl Into<String>) -> Result<(), DomainError> {
        let slot = self
            .names
            .get_mut(index)
            .ok_or_else(|| DomainError::item_not_found("options", index))?;
        *slot = name.into();
        Ok(())
    }

    /// Removes a row. The last remaining row cannot be removed.
    pub fn remove(&mut self, index: usize) -> Result<String, DomainError> {
        if index >= self.names.len() {
            return Err(DomainError::item_not_found("options", index));
        }
        if self.names.len() == 1 {
            return Err(DomainError::new(
                ErrorCode::LastRowRequired,
                "At least one option row must remain",
            ));
        }
        Ok(self.names.remove(index))
    }

    /// Writes the non-blank names into the decision. Returns the option count.
    pub fn submit(&self, state: &mut DecisionState) -> usize {
        state.set_options(&self.names)
    }
}

impl Default for OptionDraft {
    fn default() -> Self {
        Self::new()
    }
}
