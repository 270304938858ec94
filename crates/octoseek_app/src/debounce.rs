use std::time::Instant;

use octoseek_core::{DebounceToken, DEBOUNCE_WINDOW};

/// Hosts the widget's single debounce window.
///
/// Re-arming supersedes the previous window, so at most one token is ever
/// waiting and only the latest armed token can fire.
#[derive(Debug, Default)]
pub struct DebounceClock {
    pending: Option<(DebounceToken, Instant)>,
}

impl DebounceClock {
    pub fn arm(&mut self, token: DebounceToken, now: Instant) {
        self.pending = Some((token, now + DEBOUNCE_WINDOW));
    }

    /// Returns the armed token once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<DebounceToken> {
        match self.pending {
            Some((token, deadline)) if now >= deadline => {
                self.pending = None;
                Some(token)
            }
            _ => None,
        }
    }
}
