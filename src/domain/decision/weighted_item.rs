//! WeightedItem - a free-text statement paired with an importance weight.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Weight};

/// A statement (impact, pro, con, priority) and how much it matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedItem {
    pub text: String,
    pub weight: Weight,
}

impl WeightedItem {
    /// Creates an item with the given text and weight.
    pub fn new(text: impl Into<String>, weight: Weight) -> Self {
        Self {
            text: text.into(),
            weight,
        }
    }

    /// Creates an empty row with the given starting weight.
    pub fn blank(weight: Weight) -> Self {
        Self::new(String::new(), weight)
    }

    /// True when the text is empty after trimming.
    ///
    /// Blank items never contribute to scoring aggregates.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Iterates over the items that count towards aggregates.
pub fn qualifying(items: &[WeightedItem]) -> impl Iterator<Item = &WeightedItem> {
    items.iter().filter(|item| !item.is_blank())
}

/// Sums the weights of qualifying items.
pub fn qualifying_weight_sum(items: &[WeightedItem]) -> u32 {
    qualifying(items).map(|item| u32::from(item.weight.value())).sum()
}

pub(crate) fn item_mut<'a>(
    items: &'a mut [WeightedItem],
    list: &str,
    index: usize,
) -> Result<&'a mut WeightedItem, DomainError> {
    items
        .get_mut(index)
        .ok_or_else(|| DomainError::item_not_found(list, index))
}
