use std::time::Instant;

use octoseek_core::{Account, Effect, Msg, SearchOutcome};
use octoseek_engine::{
    EngineEvent, EngineHandle, SearchError, SearchOutput, SearchSettings, UserAccount,
};
use seek_logging::{seek_info, seek_warn};

use crate::debounce::DebounceClock;

/// Executes core effects against the engine and the debounce clock, and
/// turns whatever comes back into messages for the next update.
pub struct EffectRunner {
    engine: EngineHandle,
    clock: DebounceClock,
}

impl EffectRunner {
    pub fn new(settings: SearchSettings) -> Result<Self, SearchError> {
        Ok(Self {
            engine: EngineHandle::new(settings)?,
            clock: DebounceClock::default(),
        })
    }

    pub fn run(&mut self, effects: Vec<Effect>, now: Instant) {
        for effect in effects {
            match effect {
                Effect::ArmDebounce { token } => {
                    self.clock.arm(token, now);
                }
                Effect::IssueSearch { request, query } => {
                    seek_info!("IssueSearch request={} query={}", request, query);
                    self.engine.search(request, query);
                }
                Effect::CancelSearch { request } => {
                    seek_info!("CancelSearch request={}", request);
                    self.engine.cancel(request);
                }
            }
        }
    }

    /// Drains everything that became due or arrived since the last tick.
    pub fn poll(&mut self, now: Instant) -> Vec<Msg> {
        let mut msgs = Vec::new();
        if let Some(token) = self.clock.poll(now) {
            msgs.push(Msg::DebounceElapsed { token });
        }
        while let Some(event) = self.engine.try_recv() {
            let EngineEvent::SearchCompleted { request, result } = event;
            if let Err(err) = &result {
                seek_warn!("search request={} failed: {}", request, err);
            }
            msgs.push(Msg::SearchCompleted {
                request,
                outcome: outcome_from_result(result),
            });
        }
        msgs
    }
}

fn outcome_from_result(result: Result<SearchOutput, SearchError>) -> SearchOutcome {
    match result {
        Ok(output) if output.accounts.is_empty() => SearchOutcome::Empty,
        Ok(output) => SearchOutcome::Hits {
            total: output.total,
            hits: output
                .accounts
                .into_iter()
                .map(account_from_engine)
                .collect(),
        },
        Err(err) => SearchOutcome::Failed {
            reason: err.to_string(),
        },
    }
}

fn account_from_engine(account: UserAccount) -> Account {
    Account {
        login: account.login,
        name: account.name,
        avatar_url: account.avatar_url,
        profile_url: account.profile_url,
        repository_count: account.repository_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn engine_account(login: &str) -> UserAccount {
        UserAccount {
            login: login.to_string(),
            name: Some(format!("Name of {login}")),
            avatar_url: format!("https://avatars.example.com/{login}"),
            profile_url: format!("https://github.com/{login}"),
            repository_count: 2,
        }
    }

    #[test]
    fn zero_accounts_map_to_empty() {
        let outcome = outcome_from_result(Ok(SearchOutput {
            total: 0,
            accounts: vec![],
        }));
        assert_eq!(outcome, SearchOutcome::Empty);
    }

    #[test]
    fn accounts_map_to_hits_in_order() {
        let output = SearchOutput {
            total: 40,
            accounts: vec![engine_account("a"), engine_account("b")],
        };
        match outcome_from_result(Ok(output)) {
            SearchOutcome::Hits { total, hits } => {
                assert_eq!(total, 40);
                assert_eq!(hits[0].login, "a");
                assert_eq!(hits[1].login, "b");
                assert_eq!(hits[0].name.as_deref(), Some("Name of a"));
            }
            other => panic!("expected hits, got {other:?}"),
        }
    }

    #[test]
    fn errors_map_to_failed_with_a_reason() {
        let outcome = outcome_from_result(Err(SearchError::HttpStatus(502)));
        assert_eq!(
            outcome,
            SearchOutcome::Failed {
                reason: "http status 502".to_string()
            }
        );
    }
}
