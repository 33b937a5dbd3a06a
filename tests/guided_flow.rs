//! End-to-end run through the guided path using in-memory adapters.

use std::sync::Arc;
use std::time::Duration;

use decision_mate::adapters::{InMemoryKeyValueStore, ManualClock, StaticEnvironment, StubIdentityProvider};
use decision_mate::application::{AppContext, SavePrioritiesCommand, SessionSettings, SignInCommand, ToggleThemeCommand};
use decision_mate::domain::decision::ImpactCategory;
use decision_mate::domain::flow::Navigation;
use decision_mate::domain::foundation::{DecisionStep, ErrorCode, Timestamp};
use decision_mate::domain::sharing::SharePlatform;
use decision_mate::ports::KeyValueStore;

fn context() -> (AppContext, InMemoryKeyValueStore, ManualClock) {
    let store = InMemoryKeyValueStore::new();
    let clock = ManualClock::new(Timestamp::from_unix_millis(1_700_000_000_000));
    let context = AppContext::new(
        Arc::new(store.clone()),
        Arc::new(StubIdentityProvider::new("client-123").unwrap()),
        Arc::new(StaticEnvironment::new(true, "https://decisions.example/make-decision")),
        Arc::new(clock.clone()),
        SessionSettings::default(),
    );
    (context, store, clock)
}

#[tokio::test]
async fn full_guided_decision() {
    let (context, store, clock) = context();
    let mut session = context.start_session().await;

    // Understand
    session.decision_mut().set_title("Where to live");
    session.decision_mut().set_importance("Sets my commute for years");
    session.decision_mut().set_urgency(4);

    // Evaluate is not reachable yet
    let navigation = session.navigate_to(DecisionStep::EvaluateOutcomes);
    assert_eq!(
        navigation,
        Navigation::Redirected {
            requested: DecisionStep::EvaluateOutcomes,
            to: DecisionStep::ExploreOptions,
        }
    );

    // Clarify priorities, persisted
    session.navigate_to(DecisionStep::ClarifyPriorities);
    session.priorities_mut().update_text(0, "Short commute").unwrap();
    session.priorities_mut().update_weight(0, 5).unwrap();
    context
        .save_priorities()
        .handle(SavePrioritiesCommand {
            priorities: session.priorities().clone(),
        })
        .await
        .unwrap();

    // Explore options
    session.next_step().unwrap();
    assert_eq!(session.current_step(), DecisionStep::ExploreOptions);
    session.draft_mut().update(0, "City flat").unwrap();
    let row = session.draft_mut().add();
    session.draft_mut().update(row, "Suburb house").unwrap();
    let extra = session.draft_mut().add();
    session.draft_mut().update(extra, "   ").unwrap();

    // Evaluate outcomes
    let navigation = session.next_step().unwrap();
    assert_eq!(navigation, Navigation::Arrived(DecisionStep::EvaluateOutcomes));
    assert_eq!(session.decision().option_names(), vec!["City flat", "Suburb house"]);

    let decision = session.decision_mut();
    decision
        .update_impact_text(0, ImpactCategory::ShortTerm, 0, "Walk to work")
        .unwrap();
    decision
        .update_impact_weight(0, ImpactCategory::ShortTerm, 0, 5)
        .unwrap();
    decision
        .update_impact_text(0, ImpactCategory::LongTerm, 0, "Rent keeps rising")
        .unwrap();
    decision
        .update_impact_weight(0, ImpactCategory::LongTerm, 0, 5)
        .unwrap();
    decision
        .update_impact_text(0, ImpactCategory::Risks, 0, "Noise")
        .unwrap();
    decision
        .update_impact_weight(0, ImpactCategory::Risks, 0, 1)
        .unwrap();
    decision
        .update_impact_text(1, ImpactCategory::Risks, 0, "Mortgage")
        .unwrap();
    decision
        .update_impact_weight(1, ImpactCategory::Risks, 0, 5)
        .unwrap();

    let summaries = session.option_summaries();
    assert_eq!(summaries[0].score.value(), 73);
    assert_eq!(summaries[1].score.value(), 20);
    assert_eq!(session.recommended_option().unwrap().text, "City flat");

    // Confidence
    session.next_step().unwrap();
    session.confidence_mut().set_level(80);
    session.confidence_mut().set_would_help("Visit the suburb on a weekday");
    assert_eq!(session.confidence().level.value(), 80);

    // Make the decision
    session.next_step().unwrap();
    assert_eq!(session.current_step(), DecisionStep::MakeDecision);
    assert!(session.next_step().is_err());

    session.final_form_mut().choice = "City flat".to_string();
    let err = session.finalize().unwrap_err();
    assert_eq!(err.code, ErrorCode::DecisionIncomplete);

    session.final_form_mut().reasoning = "Commute matters most".to_string();
    session.final_form_mut().next_steps = "Call the landlord".to_string();
    let finalized = session.finalize().unwrap().clone();
    assert_eq!(finalized.choice, "City flat");
    assert!(session.celebration().confetti_visible());
    assert!(session.celebration().modal_open());

    clock.advance(Duration::from_secs(5));
    assert!(session.tick());
    assert!(!session.celebration().confetti_visible());

    // Share
    session.open_share();
    let links = session.share_links();
    let email = links
        .iter()
        .find(|l| l.platform == SharePlatform::Email)
        .unwrap();
    assert!(email.href.starts_with("mailto:?subject="));
    assert!(email.href.contains("City%20flat"));

    // Priorities survive into a new session
    assert!(store.get("priorities").await.unwrap().is_some());
    let next_session = context.start_session().await;
    assert_eq!(next_session.priorities().items()[0].text, "Short commute");
}

#[tokio::test]
async fn theme_and_identity_persist_locally() {
    let (context, store, _clock) = context();

    let theme = context.load_theme().handle().await;
    assert!(theme.dark_mode);

    let toggled = context
        .toggle_theme()
        .handle(ToggleThemeCommand { current: theme })
        .await
        .unwrap();
    assert!(!toggled.dark_mode);
    assert!(!context.load_theme().handle().await.dark_mode);
    assert_eq!(
        store.get("theme-storage").await.unwrap().as_deref(),
        Some(r#"{"state":{"isDarkMode":false},"version":0}"#)
    );

    assert!(context.load_user().handle().await.is_none());
    let user = context
        .sign_in()
        .handle(SignInCommand {
            credential: r#"{"sub":"u-1","name":"Sam","email":"sam@example.com"}"#.to_string(),
        })
        .await
        .unwrap();
    assert_eq!(context.load_user().handle().await, Some(user));

    context.sign_out().handle().await.unwrap();
    assert!(context.load_user().handle().await.is_none());
}
