//! DecisionStep enum representing the six screens of the guided path.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// The guided decision path, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStep {
    UnderstandDecision,
    ClarifyPriorities,
    ExploreOptions,
    EvaluateOutcomes,
    DecisionConfidence,
    MakeDecision,
}

impl DecisionStep {
    /// Returns all steps in canonical order.
    pub fn all() -> &'static [DecisionStep] {
        &[
            DecisionStep::UnderstandDecision,
            DecisionStep::ClarifyPriorities,
            DecisionStep::ExploreOptions,
            DecisionStep::EvaluateOutcomes,
            DecisionStep::DecisionConfidence,
            DecisionStep::MakeDecision,
        ]
    }

    /// Returns the 0-based index of this step in the canonical order.
    pub fn order_index(&self) -> usize {
        match self {
            DecisionStep::UnderstandDecision => 0,
            DecisionStep::ClarifyPriorities => 1,
            DecisionStep::ExploreOptions => 2,
            DecisionStep::EvaluateOutcomes => 3,
            DecisionStep::DecisionConfidence => 4,
            DecisionStep::MakeDecision => 5,
        }
    }

    /// Returns the next step in order, if any.
    pub fn next(&self) -> Option<DecisionStep> {
        Self::all().get(self.order_index() + 1).copied()
    }

    /// Returns the previous step in order, if any.
    pub fn previous(&self) -> Option<DecisionStep> {
        let idx = self.order_index();
        if idx == 0 {
            None
        } else {
            Self::all().get(idx - 1).copied()
        }
    }

    /// Route path the step is mounted at.
    pub fn path(&self) -> &'static str {
        match self {
            DecisionStep::UnderstandDecision => "/",
            DecisionStep::ClarifyPriorities => "/clarify-priorities",
            DecisionStep::ExploreOptions => "/explore-options",
            DecisionStep::EvaluateOutcomes => "/evaluate-outcomes",
            DecisionStep::DecisionConfidence => "/decision-confidence",
            DecisionStep::MakeDecision => "/make-decision",
        }
    }

    /// Resolves a route path to its step.
    ///
    /// A single trailing slash is tolerated (`/make-decision/`).
    pub fn from_path(path: &str) -> Result<DecisionStep, ValidationError> {
        let normalized = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };
        Self::all()
            .iter()
            .find(|step| step.path() == normalized)
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format("path", format!("no step is mounted at '{}'", path))
            })
    }

    /// Page heading for the step.
    pub fn title(&self) -> &'static str {
        match self {
            DecisionStep::UnderstandDecision => "Understand Your Decision",
            DecisionStep::ClarifyPriorities => "Clarify Your Priorities",
            DecisionStep::ExploreOptions => "Explore Your Options",
            DecisionStep::EvaluateOutcomes => "Evaluate Potential Outcomes",
            DecisionStep::DecisionConfidence => "Decision Confidence",
            DecisionStep::MakeDecision => "Make Your Decision",
        }
    }

    /// Steps that render per-option data and cannot be shown without options.
    pub fn requires_options(&self) -> bool {
        matches!(
            self,
            DecisionStep::EvaluateOutcomes | DecisionStep::DecisionConfidence
        )
    }
}

impl fmt::Display for DecisionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_six_steps_in_order() {
        let all = DecisionStep::all();
        assert_eq!(all.len(), 6);
        for (idx, step) in all.iter().enumerate() {
            assert_eq!(step.order_index(), idx);
        }
    }

    #[test]
    fn next_and_previous_walk_the_path() {
        assert_eq!(
            DecisionStep::UnderstandDecision.next(),
            Some(DecisionStep::ClarifyPriorities)
        );
        assert_eq!(DecisionStep::MakeDecision.next(), None);
        assert_eq!(DecisionStep::UnderstandDecision.previous(), None);
        assert_eq!(
            DecisionStep::MakeDecision.previous(),
            Some(DecisionStep::DecisionConfidence)
        );
    }

    #[test]
    fn paths_match_routes() {
        assert_eq!(DecisionStep::UnderstandDecision.path(), "/");
        assert_eq!(DecisionStep::EvaluateOutcomes.path(), "/evaluate-outcomes");
        assert_eq!(DecisionStep::MakeDecision.path(), "/make-decision");
    }

    #[test]
    fn from_path_resolves_every_step() {
        for step in DecisionStep::all() {
            assert_eq!(DecisionStep::from_path(step.path()).unwrap(), *step);
        }
        assert_eq!(
            DecisionStep::from_path("/explore-options/").unwrap(),
            DecisionStep::ExploreOptions
        );
    }

    #[test]
    fn from_path_rejects_unknown_route() {
        assert!(DecisionStep::from_path("/matrix").is_err());
        assert!(DecisionStep::from_path("").is_err());
    }

    #[test]
    fn only_scoring_steps_require_options() {
        let requiring: Vec<_> = DecisionStep::all()
            .iter()
            .filter(|s| s.requires_options())
            .collect();
        assert_eq!(
            requiring,
            vec![&DecisionStep::EvaluateOutcomes, &DecisionStep::DecisionConfidence]
        );
    }

    #[test]
    fn serializes_to_snake_case_json() {
        let json = serde_json::to_string(&DecisionStep::DecisionConfidence).unwrap();
        assert_eq!(json, "\"decision_confidence\"");
    }
}
