//! Pros/Cons Analyzer - weighted split and net score for the worksheet.

use serde::{Deserialize, Serialize};

use crate::domain::decision::{qualifying_weight_sum, ProsConsMatrix, Side, WeightedItem};
use crate::domain::foundation::Percentage;

/// Share of total weight held by pros and by cons. Always sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProsConsRatio {
    pub pros: Percentage,
    pub cons: Percentage,
}

impl ProsConsRatio {
    /// The 50/50 split used when nothing has been weighed.
    pub const EVEN: Self = Self {
        pros: Percentage::HALF,
        cons: Percentage::HALF,
    };
}

/// Pros/cons analysis functions.
pub struct ProsConsAnalyzer;

impl ProsConsAnalyzer {
    /// Computes the weighted pros/cons split.
    ///
    /// # Algorithm
    /// `pros = round(pros_sum / (pros_sum + cons_sum) * 100)`, `cons = 100 - pros`.
    /// Only non-blank items count.
    ///
    /// # Edge Cases
    /// - Total weight of zero: 50/50
    pub fn ratio(pros: &[WeightedItem], cons: &[WeightedItem]) -> ProsConsRatio {
        let pros_sum = qualifying_weight_sum(pros);
        let cons_sum = qualifying_weight_sum(cons);
        let total = pros_sum + cons_sum;
        if total == 0 {
            return ProsConsRatio::EVEN;
        }
        let pros_pct = Percentage::from_rounded(f64::from(pros_sum) / f64::from(total) * 100.0);
        ProsConsRatio {
            pros: pros_pct,
            cons: pros_pct.complement(),
        }
    }

    /// Split for one worksheet option.
    pub fn option_ratio(matrix: &ProsConsMatrix, option: &str) -> ProsConsRatio {
        Self::ratio(matrix.items(Side::Pro, option), matrix.items(Side::Con, option))
    }

    /// Net score for one worksheet option: `(pros_sum - cons_sum) * multiplier`.
    pub fn net_score(matrix: &ProsConsMatrix, option: &str) -> i64 {
        let pros = i64::from(qualifying_weight_sum(matrix.items(Side::Pro, option)));
        let cons = i64::from(qualifying_weight_sum(matrix.items(Side::Con, option)));
        (pros - cons) * i64::from(matrix.multiplier(option))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Weight;
    use proptest::prelude::*;

    fn scenario() -> ProsConsMatrix {
        ProsConsMatrix::builder()
            .options(vec!["A", "B"])
            .pro("A", "cheap", 5)
            .pro("A", "close", 3)
            .con("A", "small", 2)
            .pro("B", "big", 2)
            .con("B", "far", 5)
            .con("B", "pricey", 3)
            .build()
    }

    #[test]
    fn scenario_ratios_match() {
        let matrix = scenario();
        let a = ProsConsAnalyzer::option_ratio(&matrix, "A");
        let b = ProsConsAnalyzer::option_ratio(&matrix, "B");
        assert_eq!((a.pros.value(), a.cons.value()), (80, 20));
        assert_eq!((b.pros.value(), b.cons.value()), (20, 80));
    }

    #[test]
    fn scenario_net_scores() {
        let matrix = scenario();
        assert_eq!(ProsConsAnalyzer::net_score(&matrix, "A"), 6);
        assert_eq!(ProsConsAnalyzer::net_score(&matrix, "B"), -6);
    }

    #[test]
    fn zero_total_is_even_split() {
        assert_eq!(ProsConsAnalyzer::ratio(&[], &[]), ProsConsRatio::EVEN);
        let blank = vec![WeightedItem::new(" ", Weight::MAX)];
        assert_eq!(ProsConsAnalyzer::ratio(&blank, &blank), ProsConsRatio::EVEN);
    }

    #[test]
    fn unknown_option_is_even_and_zero() {
        let matrix = scenario();
        assert_eq!(ProsConsAnalyzer::option_ratio(&matrix, "Z"), ProsConsRatio::EVEN);
        assert_eq!(ProsConsAnalyzer::net_score(&matrix, "Z"), 0);
    }

    #[test]
    fn multiplier_scales_net_score() {
        let matrix = ProsConsMatrix::builder()
            .options(vec!["A"])
            .pro("A", "x", 4)
            .con("A", "y", 1)
            .multiplier("A", 3)
            .build();
        assert_eq!(ProsConsAnalyzer::net_score(&matrix, "A"), 9);
    }

    #[test]
    fn one_third_rounds_to_33() {
        let pros = vec![WeightedItem::new("p", Weight::new(1))];
        let cons = vec![WeightedItem::new("c", Weight::new(2))];
        let ratio = ProsConsAnalyzer::ratio(&pros, &cons);
        assert_eq!((ratio.pros.value(), ratio.cons.value()), (33, 67));
    }

    fn weighted_items() -> impl Strategy<Value = Vec<WeightedItem>> {
        prop::collection::vec(("[a-z ]{0,5}", 1i64..=5), 0..10).prop_map(|raw| {
            raw.into_iter()
                .map(|(text, w)| WeightedItem::new(text, Weight::new(w)))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn percentages_always_sum_to_100(pros in weighted_items(), cons in weighted_items()) {
            let ratio = ProsConsAnalyzer::ratio(&pros, &cons);
            prop_assert_eq!(u32::from(ratio.pros.value()) + u32::from(ratio.cons.value()), 100);
        }
    }
}
