use crate::MotionPhase;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetViewModel {
    pub input: String,
    pub effective_query: String,
    pub loading: bool,
    pub phase: MotionPhase,
    /// Total match count reported by the service, when the last search hit.
    pub total: Option<u32>,
    pub rows: Vec<ResultRowView>,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRowView {
    pub login: String,
    pub display_name: String,
    pub avatar_url: String,
    pub profile_url: String,
    pub repository_count: u32,
}

/// One-line status shown when a finished search produced no rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    NoMatches { query: String },
    SearchFailed { reason: String },
}
