//! PriorityList - what matters most, captured on Clarify Priorities.

use serde::{Deserialize, Serialize};

use super::weighted_item::{item_mut, qualifying, WeightedItem};
use crate::domain::foundation::{DomainError, ErrorCode, Weight};

/// Weighted priorities. Always holds at least one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<WeightedItem>", into = "Vec<WeightedItem>")]
pub struct PriorityList {
    items: Vec<WeightedItem>,
}

impl PriorityList {
    /// Starts with one blank, neutral row.
    pub fn new() -> Self {
        Self {
            items: vec![WeightedItem::blank(Weight::NEUTRAL)],
        }
    }

    /// Restores a list, falling back to a single blank row when empty.
    pub fn from_items(items: Vec<WeightedItem>) -> Self {
        if items.is_empty() {
            Self::new()
        } else {
            Self { items }
        }
    }

    pub fn items(&self) -> &[WeightedItem] {
        &self.items
    }

    pub fn add(&mut self) -> usize {
        self.items.push(WeightedItem::blank(Weight::NEUTRAL));
        self.items.len() - 1
    }

    pub fn update_text(&mut self, index: usize, text: impl Into<String>) -> Result<(), DomainError> {
        item_mut(&mut self.items, "priorities", index)?.text = text.into();
        Ok(())
    }

    pub fn update_weight(&mut self, index: usize, weight: i64) -> Result<(), DomainError> {
        item_mut(&mut self.items, "priorities", index)?.weight = Weight::new(weight);
        Ok(())
    }

    /// Removes a row. The last remaining row cannot be removed.
    pub fn remove(&mut self, index: usize) -> Result<WeightedItem, DomainError> {
        if index >= self.items.len() {
            return Err(DomainError::item_not_found("priorities", index));
        }
        if self.items.len() == 1 {
            return Err(DomainError::new(
                ErrorCode::LastRowRequired,
                "At least one priority row must remain",
            ));
        }
        Ok(self.items.remove(index))
    }

    /// Priorities with text, most important first. Ties keep entry order.
    pub fn ranked(&self) -> Vec<&WeightedItem> {
        let mut ranked: Vec<&WeightedItem> = qualifying(&self.items).collect();
        ranked.sort_by(|a, b| b.weight.cmp(&a.weight));
        ranked
    }
}

impl Default for PriorityList {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<WeightedItem>> for PriorityList {
    fn from(items: Vec<WeightedItem>) -> Self {
        Self::from_items(items)
    }
}

impl From<PriorityList> for Vec<WeightedItem> {
    fn from(list: PriorityList) -> Self {
        list.items
    }
}
