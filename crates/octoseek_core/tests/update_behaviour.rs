use std::sync::Once;

use octoseek_core::{update, Effect, MotionPhase, Msg, SearchOutcome, WidgetState};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(seek_logging::initialize_for_tests);
}

fn edit(state: WidgetState, text: &str) -> (WidgetState, Vec<Effect>) {
    update(state, Msg::InputEdited(text.to_string()))
}

fn settle(state: WidgetState, token: u64) -> (WidgetState, Vec<Effect>) {
    update(state, Msg::DebounceElapsed { token })
}

#[test]
fn burst_of_edits_searches_only_the_final_text() {
    init_logging();
    let state = WidgetState::new();

    let (state, effects) = edit(state, "o");
    assert_eq!(effects, vec![Effect::ArmDebounce { token: 1 }]);
    let (state, effects) = edit(state, "oc");
    assert_eq!(effects, vec![Effect::ArmDebounce { token: 2 }]);
    let (state, effects) = edit(state, "oct");
    assert_eq!(effects, vec![Effect::ArmDebounce { token: 3 }]);

    // Window 1 was superseded twice over; its firing must stay inert.
    let (state, effects) = settle(state, 1);
    assert!(effects.is_empty());
    assert_eq!(state.effective_query(), "");

    let (state, effects) = settle(state, 3);
    assert_eq!(
        effects,
        vec![Effect::IssueSearch {
            request: 1,
            query: "oct".to_string(),
        }]
    );
    assert_eq!(state.effective_query(), "oct");
    assert!(state.is_loading());
}

#[test]
fn repeating_the_same_text_is_a_noop() {
    init_logging();
    let (state, _effects) = edit(WidgetState::new(), "octo");

    let (state, effects) = edit(state, "octo");
    assert!(effects.is_empty());

    // The original window is still armed and settles normally.
    let (_state, effects) = settle(state, 1);
    assert_eq!(
        effects,
        vec![Effect::IssueSearch {
            request: 1,
            query: "octo".to_string(),
        }]
    );
}

#[test]
fn empty_input_never_issues_a_search() {
    init_logging();
    let state = WidgetState::new();

    let (state, effects) = edit(state, "");
    assert!(effects.is_empty());

    let (state, effects) = edit(state, "a");
    assert_eq!(effects, vec![Effect::ArmDebounce { token: 1 }]);

    // Nothing is in flight yet, so clearing produces no cancel either.
    let (state, effects) = edit(state, "");
    assert!(effects.is_empty());

    // The armed window fires after the clear and must stay inert.
    let (state, effects) = settle(state, 1);
    assert!(effects.is_empty());
    assert_eq!(state.effective_query(), "");
    assert!(state.view().rows.is_empty());
}

#[test]
fn clearing_the_input_cancels_the_in_flight_search() {
    init_logging();
    let (state, _effects) = edit(WidgetState::new(), "octocat");
    let (state, _effects) = settle(state, 1);
    assert!(state.is_loading());

    let (state, effects) = edit(state, "");
    assert_eq!(effects, vec![Effect::CancelSearch { request: 1 }]);
    assert!(!state.is_loading());
    assert_eq!(state.motion_phase(), MotionPhase::Idle);
    assert!(state.view().rows.is_empty());
}

#[test]
fn settling_on_the_unchanged_effective_query_is_a_noop() {
    init_logging();
    let (state, _effects) = edit(WidgetState::new(), "octocat");
    let (state, _effects) = settle(state, 1);
    let (state, _effects) = update(
        state,
        Msg::SearchCompleted {
            request: 1,
            outcome: SearchOutcome::Empty,
        },
    );

    // Wander away and back before either window settles.
    let (state, _effects) = edit(state, "octocat2");
    let (state, effects) = edit(state, "octocat");
    assert_eq!(effects, vec![Effect::ArmDebounce { token: 3 }]);

    let (state, effects) = settle(state, 3);
    assert!(effects.is_empty());
    assert!(!state.is_loading());
    assert_eq!(state.effective_query(), "octocat");
}

#[test]
fn new_settle_supersedes_the_in_flight_request() {
    init_logging();
    let (state, _effects) = edit(WidgetState::new(), "a");
    let (state, effects) = settle(state, 1);
    assert_eq!(
        effects,
        vec![Effect::IssueSearch {
            request: 1,
            query: "a".to_string(),
        }]
    );

    let (state, _effects) = edit(state, "ab");
    let (state, effects) = settle(state, 2);
    assert_eq!(
        effects,
        vec![
            Effect::CancelSearch { request: 1 },
            Effect::IssueSearch {
                request: 2,
                query: "ab".to_string(),
            },
        ]
    );
    assert!(state.is_loading());
    assert_eq!(state.effective_query(), "ab");
}
