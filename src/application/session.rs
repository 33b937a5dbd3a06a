//! DecisionSession - the application state behind one run of the app.
//!
//! Holds everything the screens edit, plus the injected clock and
//! environment. Persistence goes through the handlers, not the session.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::analysis::{summarize_options, summarize_worksheet, OptionSummary, WorksheetSummary};
use crate::domain::celebration::{Celebration, DEFAULT_CONFETTI_DURATION};
use crate::domain::decision::{
    ConfidenceCheck, DecisionState, FinalDecisionForm, FinalizedDecision, OptionDraft,
    PriorityList, ProsConsMatrix,
};
use crate::domain::flow::{DecisionFlow, Navigation, WorksheetTab};
use crate::domain::foundation::{DecisionStep, DomainError, ErrorCode};
use crate::domain::sharing::{share_message, ShareLink, DEFAULT_APP_NAME};
use crate::ports::{Clock, PlatformEnvironment};

/// Knobs that come from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub celebration_duration: Duration,
    pub app_name: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            celebration_duration: DEFAULT_CONFETTI_DURATION,
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }
}

/// One user's decision in progress.
pub struct DecisionSession {
    state: DecisionState,
    draft: OptionDraft,
    priorities: PriorityList,
    confidence: ConfidenceCheck,
    final_form: FinalDecisionForm,
    finalized: Option<FinalizedDecision>,
    celebration: Celebration,
    flow: DecisionFlow,
    worksheet: ProsConsMatrix,
    worksheet_tab: WorksheetTab,
    clock: Arc<dyn Clock>,
    environment: Arc<dyn PlatformEnvironment>,
    settings: SessionSettings,
}

impl DecisionSession {
    pub fn new(
        clock: Arc<dyn Clock>,
        environment: Arc<dyn PlatformEnvironment>,
        settings: SessionSettings,
    ) -> Self {
        Self {
            state: DecisionState::new(),
            draft: OptionDraft::new(),
            priorities: PriorityList::new(),
            confidence: ConfidenceCheck::new(),
            final_form: FinalDecisionForm::new(),
            finalized: None,
            celebration: Celebration::new(),
            flow: DecisionFlow::new(),
            worksheet: ProsConsMatrix::new(),
            worksheet_tab: WorksheetTab::default(),
            clock,
            environment,
            settings,
        }
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    // === Decision state ===

    pub fn decision(&self) -> &DecisionState {
        &self.state
    }

    pub fn decision_mut(&mut self) -> &mut DecisionState {
        &mut self.state
    }

    pub fn draft(&self) -> &OptionDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut OptionDraft {
        &mut self.draft
    }

    /// Writes the drafted names into the decision. Returns the option count.
    pub fn submit_options(&mut self) -> usize {
        let count = self.draft.submit(&mut self.state);
        tracing::debug!(options = count, "Options submitted");
        count
    }

    pub fn priorities(&self) -> &PriorityList {
        &self.priorities
    }

    pub fn priorities_mut(&mut self) -> &mut PriorityList {
        &mut self.priorities
    }

    /// Replaces the priority list, e.g. with one loaded from storage.
    pub fn set_priorities(&mut self, priorities: PriorityList) {
        self.priorities = priorities;
    }

    pub fn confidence(&self) -> &ConfidenceCheck {
        &self.confidence
    }

    pub fn confidence_mut(&mut self) -> &mut ConfidenceCheck {
        &mut self.confidence
    }

    // === Navigation ===

    pub fn current_step(&self) -> DecisionStep {
        self.flow.current()
    }

    /// Jumps to a step. Arriving on Explore Options reloads the draft.
    pub fn navigate_to(&mut self, step: DecisionStep) -> Navigation {
        let navigation = self.flow.navigate_to(step, &self.state);
        self.on_arrival(navigation);
        navigation
    }

    pub fn navigate_to_path(&mut self, path: &str) -> Result<Navigation, DomainError> {
        let navigation = self.flow.navigate_to_path(path, &self.state)?;
        self.on_arrival(navigation);
        Ok(navigation)
    }

    /// "Next Step". Leaving Explore Options submits the drafted names first.
    pub fn next_step(&mut self) -> Result<Navigation, DomainError> {
        if self.flow.current() == DecisionStep::ExploreOptions {
            self.submit_options();
        }
        let navigation = self.flow.advance(&self.state)?;
        self.on_arrival(navigation);
        Ok(navigation)
    }

    pub fn previous_step(&mut self) -> Result<Navigation, DomainError> {
        let navigation = self.flow.go_back(&self.state)?;
        self.on_arrival(navigation);
        Ok(navigation)
    }

    fn on_arrival(&mut self, navigation: Navigation) {
        if navigation.current() == DecisionStep::ExploreOptions {
            self.draft = OptionDraft::from_state(&self.state);
        }
        tracing::info!(step = %navigation.current(), redirected = navigation.was_redirected(), "Step shown");
    }

    // === Evaluation ===

    /// Score cards for every option, best one flagged.
    pub fn option_summaries(&self) -> Vec<OptionSummary> {
        summarize_options(self.state.options())
    }

    pub fn recommended_option(&self) -> Option<OptionSummary> {
        self.option_summaries().into_iter().find(|s| s.recommended)
    }

    // === Finalisation ===

    pub fn final_form(&self) -> &FinalDecisionForm {
        &self.final_form
    }

    pub fn final_form_mut(&mut self) -> &mut FinalDecisionForm {
        &mut self.final_form
    }

    pub fn finalized(&self) -> Option<&FinalizedDecision> {
        self.finalized.as_ref()
    }

    /// Commits the final form and starts the celebration.
    ///
    /// # Errors
    ///
    /// `DecisionIncomplete` when choice, reasoning or next steps is blank.
    pub fn finalize(&mut self) -> Result<&FinalizedDecision, DomainError> {
        let now = self.clock.now();
        let decision = self.final_form.finalize(now).map_err(|err| {
            tracing::debug!(error = %err, "Finalize rejected");
            DomainError::new(ErrorCode::DecisionIncomplete, err.to_string())
                .with_detail("missing", self.final_form.missing_fields().join(","))
        })?;

        self.celebration.start(now, self.settings.celebration_duration);
        tracing::info!(choice = %decision.choice, "Decision finalized");

        Ok(&*self.finalized.insert(decision))
    }

    pub fn celebration(&self) -> &Celebration {
        &self.celebration
    }

    /// Applies due timers against the clock. True if confetti just hid.
    pub fn tick(&mut self) -> bool {
        let hidden = self.celebration.tick(self.clock.now());
        if hidden {
            tracing::debug!("Confetti hidden");
        }
        hidden
    }

    pub fn close_celebration(&mut self) {
        self.celebration.close_modal();
    }

    pub fn open_share(&mut self) {
        self.celebration.open_share();
    }

    pub fn close_share(&mut self) {
        self.celebration.close_share();
    }

    /// Message for the share panel, from the finalized choice or the form.
    pub fn share_message(&self) -> String {
        let choice = self
            .finalized
            .as_ref()
            .map(|d| d.choice.as_str())
            .unwrap_or_else(|| self.final_form.choice.trim());
        share_message(&self.settings.app_name, choice)
    }

    /// Links for every platform, pointing at the current page.
    pub fn share_links(&self) -> Vec<ShareLink> {
        ShareLink::build_all(&self.environment.current_url(), &self.share_message())
    }

    // === Worksheet ===

    pub fn worksheet(&self) -> &ProsConsMatrix {
        &self.worksheet
    }

    pub fn worksheet_mut(&mut self) -> &mut ProsConsMatrix {
        &mut self.worksheet
    }

    pub fn worksheet_tab(&self) -> WorksheetTab {
        self.worksheet_tab
    }

    pub fn select_worksheet_tab(&mut self, tab: WorksheetTab) {
        self.worksheet_tab = tab;
    }

    pub fn worksheet_summaries(&self) -> Vec<WorksheetSummary> {
        summarize_worksheet(&self.worksheet)
    }
}
