#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search input box (full current text).
    InputEdited(String),
    /// The debounce window armed by `Effect::ArmDebounce` ran out.
    DebounceElapsed { token: crate::DebounceToken },
    /// Engine completion for an issued search.
    SearchCompleted {
        request: crate::RequestId,
        outcome: crate::SearchOutcome,
    },
}
