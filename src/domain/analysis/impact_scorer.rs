//! Impact Scorer - risk-weighted score for the guided path.

use serde::{Deserialize, Serialize};

use crate::domain::decision::{qualifying, DecisionOption, ImpactCategory, WeightedItem};
use crate::domain::foundation::Percentage;

/// Average returned for a category with no qualifying items.
pub const NEUTRAL_AVERAGE: f64 = 3.0;

/// Blend coefficient for the short-term average.
pub const SHORT_TERM_COEFFICIENT: f64 = 0.25;

/// Blend coefficient for the long-term average.
pub const LONG_TERM_COEFFICIENT: f64 = 0.15;

/// Blend coefficient for the risk average (subtracted).
pub const RISK_COEFFICIENT: f64 = 0.60;

/// Per-category averages for one option.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryAverages {
    pub short_term: f64,
    pub long_term: f64,
    pub risks: f64,
}

/// Impact scoring functions.
pub struct ImpactScorer;

impl ImpactScorer {
    /// Mean weight of items whose text is non-blank.
    ///
    /// # Edge Cases
    /// - Empty list or only blank items: returns 3.0
    pub fn category_average(items: &[WeightedItem]) -> f64 {
        let (sum, count) = qualifying(items).fold((0.0, 0usize), |(sum, count), item| {
            (sum + item.weight.as_f64(), count + 1)
        });
        if count == 0 {
            NEUTRAL_AVERAGE
        } else {
            sum / count as f64
        }
    }

    /// Averages for all three categories of an option.
    pub fn averages(option: &DecisionOption) -> CategoryAverages {
        CategoryAverages {
            short_term: Self::category_average(option.impacts(ImpactCategory::ShortTerm)),
            long_term: Self::category_average(option.impacts(ImpactCategory::LongTerm)),
            risks: Self::category_average(option.impacts(ImpactCategory::Risks)),
        }
    }

    /// Blends category averages into a 0-100 score.
    ///
    /// # Algorithm
    /// `round(((st*0.25 + lt*0.15 - risk*0.60) + 3) / 6 * 100)`, clamped to 0..=100.
    pub fn score_from_averages(averages: &CategoryAverages) -> Percentage {
        let blended = averages.short_term * SHORT_TERM_COEFFICIENT
            + averages.long_term * LONG_TERM_COEFFICIENT
            - averages.risks * RISK_COEFFICIENT;
        Percentage::from_rounded((blended + 3.0) / 6.0 * 100.0)
    }

    /// Score for one option.
    pub fn score(option: &DecisionOption) -> Percentage {
        Self::score_from_averages(&Self::averages(option))
    }
}
