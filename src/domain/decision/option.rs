//! DecisionOption - a candidate choice and its weighted impacts.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::weighted_item::{item_mut, WeightedItem};
use crate::domain::foundation::{DomainError, ErrorCode, Weight};

/// One of the three impact lists kept for every option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImpactCategory {
    ShortTerm,
    LongTerm,
    Risks,
}

impl ImpactCategory {
    /// Returns all categories in display order.
    pub fn all() -> &'static [ImpactCategory] {
        &[
            ImpactCategory::ShortTerm,
            ImpactCategory::LongTerm,
            ImpactCategory::Risks,
        ]
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ImpactCategory::ShortTerm => "Short Term",
            ImpactCategory::LongTerm => "Long Term",
            ImpactCategory::Risks => "Risks",
        }
    }

    fn field_name(&self) -> &'static str {
        match self {
            ImpactCategory::ShortTerm => "short_term",
            ImpactCategory::LongTerm => "long_term",
            ImpactCategory::Risks => "risks",
        }
    }
}

impl fmt::Display for ImpactCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A candidate choice with its short-term, long-term and risk statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionOption {
    pub text: String,
    #[serde(default)]
    pub short_term: Vec<WeightedItem>,
    #[serde(default)]
    pub long_term: Vec<WeightedItem>,
    #[serde(default)]
    pub risks: Vec<WeightedItem>,
}

impl DecisionOption {
    /// Creates an option with one blank, neutral row per category.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            short_term: vec![WeightedItem::blank(Weight::NEUTRAL)],
            long_term: vec![WeightedItem::blank(Weight::NEUTRAL)],
            risks: vec![WeightedItem::blank(Weight::NEUTRAL)],
        }
    }

    /// Creates an option from explicit impact lists.
    pub fn with_impacts(
        text: impl Into<String>,
        short_term: Vec<WeightedItem>,
        long_term: Vec<WeightedItem>,
        risks: Vec<WeightedItem>,
    ) -> Self {
        Self {
            text: text.into(),
            short_term,
            long_term,
            risks,
        }
    }

    /// Returns the items of one category.
    pub fn impacts(&self, category: ImpactCategory) -> &[WeightedItem] {
        match category {
            ImpactCategory::ShortTerm => &self.short_term,
            ImpactCategory::LongTerm => &self.long_term,
            ImpactCategory::Risks => &self.risks,
        }
    }

    fn impacts_mut(&mut self, category: ImpactCategory) -> &mut Vec<WeightedItem> {
        match category {
            ImpactCategory::ShortTerm => &mut self.short_term,
            ImpactCategory::LongTerm => &mut self.long_term,
            ImpactCategory::Risks => &mut self.risks,
        }
    }

    /// Replaces one category wholesale.
    pub fn set_impacts(&mut self, category: ImpactCategory, items: Vec<WeightedItem>) {
        *self.impacts_mut(category) = items;
    }

    /// Appends a blank row (weight 3) and returns its index.
    pub fn add_impact(&mut self, category: ImpactCategory) -> usize {
        let items = self.impacts_mut(category);
        items.push(WeightedItem::blank(Weight::NEUTRAL));
        items.len() - 1
    }

    /// Rewrites the text of one impact.
    pub fn update_impact_text(
        &mut self,
        category: ImpactCategory,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), DomainError> {
        item_mut(self.impacts_mut(category), category.field_name(), index)?.text = text.into();
        Ok(())
    }

    /// Rewrites the weight of one impact, clamping to 1..=5.
    pub fn update_impact_weight(
        &mut self,
        category: ImpactCategory,
        index: usize,
        weight: i64,
    ) -> Result<(), DomainError> {
        item_mut(self.impacts_mut(category), category.field_name(), index)?.weight =
            Weight::new(weight);
        Ok(())
    }

    /// Removes one impact row.
    pub fn remove_impact(
        &mut self,
        category: ImpactCategory,
        index: usize,
    ) -> Result<WeightedItem, DomainError> {
        let items = self.impacts_mut(category);
        if index >= items.len() {
            return Err(DomainError::item_not_found(category.field_name(), index));
        }
        Ok(items.remove(index))
    }

    /// True when the option names nothing.
    pub fn is_unnamed(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl std::str::FromStr for ImpactCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shortTerm" | "short_term" => Ok(ImpactCategory::ShortTerm),
            "longTerm" | "long_term" => Ok(ImpactCategory::LongTerm),
            "risks" | "risk" => Ok(ImpactCategory::Risks),
            other => Err(DomainError::new(
                ErrorCode::InvalidFormat,
                format!("Unknown impact category '{}'", other),
            )),
        }
    }
}
