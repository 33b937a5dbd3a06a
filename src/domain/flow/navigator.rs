//! DecisionFlow - where the user is on the guided path.

use serde::{Deserialize, Serialize};

use crate::domain::decision::DecisionState;
use crate::domain::foundation::{DecisionStep, DomainError, ErrorCode};

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Navigation {
    /// The requested step is now current.
    Arrived(DecisionStep),
    /// The requested step needs options that do not exist yet.
    Redirected {
        requested: DecisionStep,
        to: DecisionStep,
    },
}

impl Navigation {
    /// The step that ended up current.
    pub fn current(&self) -> DecisionStep {
        match self {
            Navigation::Arrived(step) => *step,
            Navigation::Redirected { to, .. } => *to,
        }
    }

    pub fn was_redirected(&self) -> bool {
        matches!(self, Navigation::Redirected { .. })
    }
}

/// Current position on the guided path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionFlow {
    current: DecisionStep,
}

impl DecisionFlow {
    /// Starts on Understand Decision.
    pub fn new() -> Self {
        Self {
            current: DecisionStep::UnderstandDecision,
        }
    }

    pub fn current(&self) -> DecisionStep {
        self.current
    }

    /// Moves to any step, redirecting to Explore Options when the target
    /// shows per-option data and the decision has no options.
    pub fn navigate_to(&mut self, target: DecisionStep, state: &DecisionState) -> Navigation {
        let navigation = if target.requires_options() && !state.has_options() {
            tracing::debug!(requested = ?target, "No options entered, redirecting to option entry");
            Navigation::Redirected {
                requested: target,
                to: DecisionStep::ExploreOptions,
            }
        } else {
            Navigation::Arrived(target)
        };
        self.current = navigation.current();
        navigation
    }

    /// Resolves a route path and navigates to it.
    pub fn navigate_to_path(
        &mut self,
        path: &str,
        state: &DecisionState,
    ) -> Result<Navigation, DomainError> {
        let target = DecisionStep::from_path(path)?;
        Ok(self.navigate_to(target, state))
    }

    /// "Next Step".
    pub fn advance(&mut self, state: &DecisionState) -> Result<Navigation, DomainError> {
        let next = self.current.next().ok_or_else(|| {
            DomainError::new(ErrorCode::InvalidNavigation, "Already on the last step")
                .with_detail("step", format!("{:?}", self.current))
        })?;
        Ok(self.navigate_to(next, state))
    }

    /// "Back".
    pub fn go_back(&mut self, state: &DecisionState) -> Result<Navigation, DomainError> {
        let previous = self.current.previous().ok_or_else(|| {
            DomainError::new(ErrorCode::InvalidNavigation, "Already on the first step")
                .with_detail("step", format!("{:?}", self.current))
        })?;
        Ok(self.navigate_to(previous, state))
    }
}

impl Default for DecisionFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_options() -> DecisionState {
        let mut state = DecisionState::new();
        state.set_options(["A", "B"]);
        state
    }

    #[test]
    fn starts_on_first_step() {
        assert_eq!(DecisionFlow::new().current(), DecisionStep::UnderstandDecision);
    }

    #[test]
    fn evaluate_without_options_redirects_to_explore() {
        let mut flow = DecisionFlow::new();
        let nav = flow.navigate_to(DecisionStep::EvaluateOutcomes, &DecisionState::new());
        assert_eq!(
            nav,
            Navigation::Redirected {
                requested: DecisionStep::EvaluateOutcomes,
                to: DecisionStep::ExploreOptions,
            }
        );
        assert_eq!(flow.current(), DecisionStep::ExploreOptions);
    }

    #[test]
    fn confidence_without_options_redirects_to_explore() {
        let mut flow = DecisionFlow::new();
        let nav = flow.navigate_to(DecisionStep::DecisionConfidence, &DecisionState::new());
        assert!(nav.was_redirected());
        assert_eq!(nav.current(), DecisionStep::ExploreOptions);
    }

    #[test]
    fn make_decision_is_reachable_without_options() {
        let mut flow = DecisionFlow::new();
        let nav = flow.navigate_to(DecisionStep::MakeDecision, &DecisionState::new());
        assert_eq!(nav, Navigation::Arrived(DecisionStep::MakeDecision));
    }

    #[test]
    fn advance_from_explore_without_options_stays_on_explore() {
        let mut flow = DecisionFlow::new();
        let state = DecisionState::new();
        flow.navigate_to(DecisionStep::ExploreOptions, &state);
        let nav = flow.advance(&state).unwrap();
        assert!(nav.was_redirected());
        assert_eq!(flow.current(), DecisionStep::ExploreOptions);
    }

    #[test]
    fn walks_the_whole_path_with_options() {
        let mut flow = DecisionFlow::new();
        let state = state_with_options();
        while flow.current() != DecisionStep::MakeDecision {
            let nav = flow.advance(&state).unwrap();
            assert!(!nav.was_redirected());
        }
        assert!(flow.advance(&state).is_err());
    }

    #[test]
    fn go_back_from_first_step_fails() {
        let mut flow = DecisionFlow::new();
        let err = flow.go_back(&DecisionState::new()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidNavigation);
    }

    #[test]
    fn navigate_to_path_resolves_routes() {
        let mut flow = DecisionFlow::new();
        let nav = flow
            .navigate_to_path("/decision-confidence", &state_with_options())
            .unwrap();
        assert_eq!(nav, Navigation::Arrived(DecisionStep::DecisionConfidence));
        assert!(flow.navigate_to_path("/nowhere", &DecisionState::new()).is_err());
    }
}
