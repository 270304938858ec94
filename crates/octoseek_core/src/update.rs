use crate::{Effect, Msg, WidgetState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: WidgetState, msg: Msg) -> (WidgetState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputEdited(text) => {
            if text == state.input() {
                return (state, Vec::new());
            }
            state.set_input(text);
            if state.input().is_empty() {
                // Clearing the field wipes the effective query and results,
                // forgets the pending window, and cancels anything in flight.
                match state.clear_search() {
                    Some(request) => vec![Effect::CancelSearch { request }],
                    None => Vec::new(),
                }
            } else {
                let token = state.arm_debounce();
                vec![Effect::ArmDebounce { token }]
            }
        }
        Msg::DebounceElapsed { token } => {
            if !state.take_pending_debounce(token) {
                // A later edit superseded this window.
                return (state, Vec::new());
            }
            let query = state.input().to_owned();
            if query.is_empty() || query == state.effective_query() {
                return (state, Vec::new());
            }
            let (request, superseded) = state.begin_search(query.clone());
            let mut effects = Vec::with_capacity(2);
            if let Some(stale) = superseded {
                effects.push(Effect::CancelSearch { request: stale });
            }
            effects.push(Effect::IssueSearch { request, query });
            effects
        }
        Msg::SearchCompleted { request, outcome } => {
            state.apply_completion(request, outcome);
            Vec::new()
        }
    };

    (state, effects)
}
