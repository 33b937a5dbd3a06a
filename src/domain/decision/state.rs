//! DecisionState - the decision under consideration and its options.
//!
//! This is the shared store every step of the guided path reads and writes.
//! It is a plain value owned by the session; nothing about it is global.

use serde::{Deserialize, Serialize};

use super::option::{DecisionOption, ImpactCategory};
use super::weighted_item::WeightedItem;
use crate::domain::foundation::{DomainError, Weight};

/// The decision, why it matters, how urgent it is, and the options on the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionState {
    pub title: String,
    pub importance: String,
    pub urgency: Weight,
    options: Vec<DecisionOption>,
}

impl DecisionState {
    /// Creates an empty decision with neutral urgency.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            importance: String::new(),
            urgency: Weight::NEUTRAL,
            options: Vec::new(),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_importance(&mut self, importance: impl Into<String>) {
        self.importance = importance.into();
    }

    /// Sets urgency, clamping to 1..=5.
    pub fn set_urgency(&mut self, urgency: i64) {
        self.urgency = Weight::new(urgency);
    }

    /// Replaces the option list from submitted names.
    ///
    /// Blank names are dropped and the rest trimmed. A name matching an
    /// existing option keeps that option's impacts; new names start with one
    /// blank row per category. Returns the resulting option count.
    pub fn set_options<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut previous = std::mem::take(&mut self.options);
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            let option = match previous.iter().position(|o| o.text == name) {
                Some(pos) => previous.remove(pos),
                None => DecisionOption::new(name),
            };
            self.options.push(option);
        }
        self.options.len()
    }

    /// Read-only view of the options, in entry order.
    pub fn options(&self) -> &[DecisionOption] {
        &self.options
    }

    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    pub fn option(&self, index: usize) -> Result<&DecisionOption, DomainError> {
        self.options
            .get(index)
            .ok_or_else(|| DomainError::option_not_found(index))
    }

    pub fn option_mut(&mut self, index: usize) -> Result<&mut DecisionOption, DomainError> {
        self.options
            .get_mut(index)
            .ok_or_else(|| DomainError::option_not_found(index))
    }

    /// Replaces one impact list of one option.
    pub fn update_option(
        &mut self,
        index: usize,
        category: ImpactCategory,
        items: Vec<WeightedItem>,
    ) -> Result<(), DomainError> {
        self.option_mut(index)?.set_impacts(category, items);
        Ok(())
    }

    /// Appends a blank impact row to an option.
    pub fn add_impact(
        &mut self,
        option_index: usize,
        category: ImpactCategory,
    ) -> Result<usize, DomainError> {
        Ok(self.option_mut(option_index)?.add_impact(category))
    }

    pub fn update_impact_text(
        &mut self,
        option_index: usize,
        category: ImpactCategory,
        impact_index: usize,
        text: impl Into<String>,
    ) -> Result<(), DomainError> {
        self.option_mut(option_index)?
            .update_impact_text(category, impact_index, text)
    }

    pub fn update_impact_weight(
        &mut self,
        option_index: usize,
        category: ImpactCategory,
        impact_index: usize,
        weight: i64,
    ) -> Result<(), DomainError> {
        self.option_mut(option_index)?
            .update_impact_weight(category, impact_index, weight)
    }

    /// Option names, for the final-choice picker.
    pub fn option_names(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.text.as_str()).collect()
    }
}

impl Default for DecisionState {
    fn default() -> Self {
        Self::new()
    }
}
