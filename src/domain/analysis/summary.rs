//! Per-option summaries with the recommended option flagged.

use serde::{Deserialize, Serialize};

use super::impact_scorer::{CategoryAverages, ImpactScorer};
use super::pros_cons_analyzer::{ProsConsAnalyzer, ProsConsRatio};
use super::selection::select_best_index;
use crate::domain::decision::{DecisionOption, ProsConsMatrix};
use crate::domain::foundation::Percentage;

/// Score card for one option on the guided path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionSummary {
    pub text: String,
    pub averages: CategoryAverages,
    pub score: Percentage,
    pub recommended: bool,
}

/// Score card for one option on the worksheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorksheetSummary {
    pub option: String,
    pub ratio: ProsConsRatio,
    pub net_score: i64,
    pub recommended: bool,
}

/// Scores every option and flags the best one.
///
/// Returns an empty list for no options; exactly one entry is recommended
/// otherwise.
pub fn summarize_options(options: &[DecisionOption]) -> Vec<OptionSummary> {
    let mut summaries: Vec<OptionSummary> = options
        .iter()
        .map(|option| {
            let averages = ImpactScorer::averages(option);
            OptionSummary {
                text: option.text.clone(),
                averages,
                score: ImpactScorer::score_from_averages(&averages),
                recommended: false,
            }
        })
        .collect();

    if let Some(best) = select_best_index(&summaries, |s| s.score) {
        summaries[best].recommended = true;
    }
    summaries
}

/// Scores every worksheet option by net score and flags the best one.
pub fn summarize_worksheet(matrix: &ProsConsMatrix) -> Vec<WorksheetSummary> {
    let mut summaries: Vec<WorksheetSummary> = matrix
        .options
        .iter()
        .map(|option| WorksheetSummary {
            option: option.clone(),
            ratio: ProsConsAnalyzer::option_ratio(matrix, option),
            net_score: ProsConsAnalyzer::net_score(matrix, option),
            recommended: false,
        })
        .collect();

    if let Some(best) = select_best_index(&summaries, |s| s.net_score) {
        summaries[best].recommended = true;
    }
    summaries
}
