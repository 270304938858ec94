use std::time::Duration;

use crate::view_model::{Notice, ResultRowView, WidgetViewModel};

/// Inactivity window between the last edit and the effective-query update.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(400);

pub type DebounceToken = u64;
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub profile_url: String,
    pub repository_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Hits { total: u32, hits: Vec<Account> },
    Empty,
    Failed { reason: String },
}

/// What to do with accounts that have no display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamePolicy {
    /// Drop nameless accounts from the rendered list.
    #[default]
    NamedOnly,
    /// Render nameless accounts with the login standing in for the name.
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPhase {
    #[default]
    Idle,
    Pulsing,
    Settled,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetState {
    input: String,
    effective_query: String,
    pending_debounce: Option<DebounceToken>,
    token_seq: DebounceToken,
    in_flight: Option<RequestId>,
    request_seq: RequestId,
    outcome: Option<SearchOutcome>,
    name_policy: NamePolicy,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name_policy(policy: NamePolicy) -> Self {
        Self {
            name_policy: policy,
            ..Self::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn effective_query(&self) -> &str {
        &self.effective_query
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Motion phase derived from (loading, hit count, input).
    ///
    /// The hit count is taken before the name policy is applied, so the panel
    /// grows whenever the service matched anything at all.
    pub fn motion_phase(&self) -> MotionPhase {
        if self.in_flight.is_some() {
            MotionPhase::Pulsing
        } else if self.hit_count() > 0 {
            MotionPhase::Settled
        } else {
            MotionPhase::Idle
        }
    }

    fn hit_count(&self) -> usize {
        match &self.outcome {
            Some(SearchOutcome::Hits { hits, .. }) => hits.len(),
            _ => 0,
        }
    }

    pub(crate) fn set_input(&mut self, text: String) {
        self.input = text;
    }

    pub(crate) fn arm_debounce(&mut self) -> DebounceToken {
        self.token_seq += 1;
        self.pending_debounce = Some(self.token_seq);
        self.token_seq
    }

    /// Consumes the pending window if `token` is still the latest one.
    pub(crate) fn take_pending_debounce(&mut self, token: DebounceToken) -> bool {
        if self.pending_debounce == Some(token) {
            self.pending_debounce = None;
            true
        } else {
            false
        }
    }

    /// Drops the effective query, pending window and results; returns the
    /// in-flight request id, if any, so the caller can cancel it.
    pub(crate) fn clear_search(&mut self) -> Option<RequestId> {
        self.effective_query.clear();
        self.pending_debounce = None;
        self.outcome = None;
        self.in_flight.take()
    }

    /// Makes `query` effective and allocates a fresh request generation.
    /// Returns the new id and the superseded in-flight id, if any.
    pub(crate) fn begin_search(&mut self, query: String) -> (RequestId, Option<RequestId>) {
        let superseded = self.in_flight.take();
        self.request_seq += 1;
        self.in_flight = Some(self.request_seq);
        self.effective_query = query;
        (self.request_seq, superseded)
    }

    /// Applies a completion if `request` is still the current generation.
    /// Stale completions leave the state untouched.
    pub(crate) fn apply_completion(&mut self, request: RequestId, outcome: SearchOutcome) -> bool {
        if self.in_flight != Some(request) {
            return false;
        }
        self.in_flight = None;
        self.outcome = Some(outcome);
        true
    }

    pub fn view(&self) -> WidgetViewModel {
        let rows = match &self.outcome {
            Some(SearchOutcome::Hits { hits, .. }) => hits
                .iter()
                .filter_map(|account| row_for(account, self.name_policy))
                .collect(),
            _ => Vec::new(),
        };
        let total = match &self.outcome {
            Some(SearchOutcome::Hits { total, .. }) => Some(*total),
            _ => None,
        };
        let notice = if self.in_flight.is_some() {
            // A fresh search is underway; stale notices would flicker.
            None
        } else {
            match &self.outcome {
                Some(SearchOutcome::Empty) => Some(Notice::NoMatches {
                    query: self.effective_query.clone(),
                }),
                Some(SearchOutcome::Failed { reason }) => Some(Notice::SearchFailed {
                    reason: reason.clone(),
                }),
                _ => None,
            }
        };

        WidgetViewModel {
            input: self.input.clone(),
            effective_query: self.effective_query.clone(),
            loading: self.in_flight.is_some(),
            phase: self.motion_phase(),
            total,
            rows,
            notice,
        }
    }
}

fn row_for(account: &Account, policy: NamePolicy) -> Option<ResultRowView> {
    let display_name = match (&account.name, policy) {
        (Some(name), _) => name.clone(),
        (None, NamePolicy::All) => account.login.clone(),
        (None, NamePolicy::NamedOnly) => return None,
    };
    Some(ResultRowView {
        login: account.login.clone(),
        display_name,
        avatar_url: account.avatar_url.clone(),
        profile_url: account.profile_url.clone(),
        repository_count: account.repository_count,
    })
}
