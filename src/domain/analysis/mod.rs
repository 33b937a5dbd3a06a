//! Analysis Module - Pure domain services for scoring options.
//!
//! # Components
//!
//! - `ImpactScorer` - category averages and the risk-weighted 0-100 score
//! - `ProsConsAnalyzer` - weighted pros/cons split and net score
//! - `select_best` - linear best-option scan, ties keep the earlier option
//! - `summarize_options` / `summarize_worksheet` - score cards with the
//!   recommended option flagged
//!
//! All functions are pure. None of them fail: empty or blank input resolves
//! to the neutral defaults (average 3, split 50/50).

mod impact_scorer;
mod pros_cons_analyzer;
mod selection;
mod summary;

pub use impact_scorer::{
    CategoryAverages, ImpactScorer, LONG_TERM_COEFFICIENT, NEUTRAL_AVERAGE, RISK_COEFFICIENT,
    SHORT_TERM_COEFFICIENT,
};
pub use pros_cons_analyzer::{ProsConsAnalyzer, ProsConsRatio};
pub use selection::{select_best, select_best_index};
pub use summary::{summarize_options, summarize_worksheet, OptionSummary, WorksheetSummary};
