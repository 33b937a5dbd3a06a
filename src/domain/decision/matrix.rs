//! Pros/cons worksheet - the create / matrix / vote variant of a decision.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::weighted_item::{item_mut, WeightedItem};
use crate::domain::foundation::{DomainError, Weight};

/// Which column of the worksheet an item sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Pro,
    Con,
}

impl Side {
    fn list_name(&self) -> &'static str {
        match self {
            Side::Pro => "pros",
            Side::Con => "cons",
        }
    }
}

/// Title, options, and per-option weighted pros and cons.
///
/// Lists are keyed by option text. `weights` holds an optional per-option
/// multiplier applied to the net score; a missing entry counts as 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProsConsMatrix {
    pub title: String,
    pub options: Vec<String>,
    #[serde(default)]
    pub pros: HashMap<String, Vec<WeightedItem>>,
    #[serde(default)]
    pub cons: HashMap<String, Vec<WeightedItem>>,
    #[serde(default)]
    pub weights: HashMap<String, u32>,
}

impl ProsConsMatrix {
    /// Creates a worksheet with one unnamed option row.
    pub fn new() -> Self {
        Self {
            options: vec![String::new()],
            ..Self::default()
        }
    }

    /// Creates a builder for constructing a worksheet.
    pub fn builder() -> ProsConsMatrixBuilder {
        ProsConsMatrixBuilder::new()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Adds an unnamed option row and returns its index.
    pub fn add_option(&mut self) -> usize {
        self.options.push(String::new());
        self.options.len() - 1
    }

    /// Renames an option, carrying its pros, cons and multiplier along.
    ///
    /// A non-empty name already used by another row is rejected. Unnamed rows
    /// share one set of columns: renaming one of several unnamed rows leaves
    /// those items with the rows still unnamed, and blanking a name merges its
    /// items into the shared columns.
    pub fn rename_option(&mut self, index: usize, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        let old = self
            .options
            .get(index)
            .cloned()
            .ok_or_else(|| DomainError::option_not_found(index))?;
        if old == name {
            return Ok(());
        }
        let taken = |key: &str| {
            self.options
                .iter()
                .enumerate()
                .any(|(i, option)| i != index && option == key)
        };
        if !name.is_empty() && taken(&name) {
            return Err(DomainError::duplicate_option(name));
        }
        let shared = taken(&old);

        self.options[index] = name.clone();
        if shared {
            return Ok(());
        }
        merge_column(&mut self.pros, &old, &name);
        merge_column(&mut self.cons, &old, &name);
        if let Some(multiplier) = self.weights.remove(&old) {
            self.weights.entry(name).or_insert(multiplier);
        }
        Ok(())
    }

    /// Items in one column for one option. Unknown options have none.
    pub fn items(&self, side: Side, option: &str) -> &[WeightedItem] {
        let map = match side {
            Side::Pro => &self.pros,
            Side::Con => &self.cons,
        };
        map.get(option).map(Vec::as_slice).unwrap_or(&[])
    }

    fn column_mut(&mut self, side: Side, option: &str) -> &mut Vec<WeightedItem> {
        let map = match side {
            Side::Pro => &mut self.pros,
            Side::Con => &mut self.cons,
        };
        map.entry(option.to_string()).or_default()
    }

    /// Appends a blank item with weight 1 and returns its index.
    pub fn add_item(&mut self, side: Side, option: &str) -> usize {
        let column = self.column_mut(side, option);
        column.push(WeightedItem::blank(Weight::MIN));
        column.len() - 1
    }

    pub fn update_item_text(
        &mut self,
        side: Side,
        option: &str,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), DomainError> {
        item_mut(self.column_mut(side, option), side.list_name(), index)?.text = text.into();
        Ok(())
    }

    pub fn update_item_weight(
        &mut self,
        side: Side,
        option: &str,
        index: usize,
        weight: i64,
    ) -> Result<(), DomainError> {
        item_mut(self.column_mut(side, option), side.list_name(), index)?.weight =
            Weight::new(weight);
        Ok(())
    }

    /// Sets the multiplier for an option; values below 1 are raised to 1.
    pub fn set_multiplier(&mut self, option: &str, multiplier: u32) {
        self.weights.insert(option.to_string(), multiplier.max(1));
    }

    /// The multiplier for an option, 1 when unset.
    pub fn multiplier(&self, option: &str) -> u32 {
        self.weights.get(option).copied().unwrap_or(1)
    }
}

fn merge_column(map: &mut HashMap<String, Vec<WeightedItem>>, from: &str, to: &str) {
    if let Some(items) = map.remove(from) {
        map.entry(to.to_string()).or_default().extend(items);
    }
}

/// Builder for constructing ProsConsMatrix instances.
#[derive(Debug, Default)]
pub struct ProsConsMatrixBuilder {
    matrix: ProsConsMatrix,
}

impl ProsConsMatrixBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.matrix.title = title.into();
        self
    }

    pub fn options(mut self, names: Vec<impl Into<String>>) -> Self {
        self.matrix.options = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn pro(mut self, option: &str, text: impl Into<String>, weight: i64) -> Self {
        self.matrix
            .column_mut(Side::Pro, option)
            .push(WeightedItem::new(text, Weight::new(weight)));
        self
    }

    pub fn con(mut self, option: &str, text: impl Into<String>, weight: i64) -> Self {
        self.matrix
            .column_mut(Side::Con, option)
            .push(WeightedItem::new(text, Weight::new(weight)));
        self
    }

    pub fn multiplier(mut self, option: &str, multiplier: u32) -> Self {
        self.matrix.set_multiplier(option, multiplier);
        self
    }

    pub fn build(self) -> ProsConsMatrix {
        self.matrix
    }
}
