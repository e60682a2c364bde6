//! Generic async request/response wrapper, one instance per panel.
//!
//! Requests carry a monotonically increasing sequence id. The requester
//! itself neither queues nor rejects concurrent calls -- the session
//! coordinator gates entry to keep each panel single-flight -- but it
//! does enforce supersession: the last request issued wins, and a stale
//! resolution (an older, slower response arriving after a newer request
//! was issued) is ignored rather than clobbering the newer result.

use serde::{Deserialize, Serialize};

use crate::error::SuggestionError;
use crate::suggest::strip_surrounding_quotes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionStatus {
    Idle,
    Pending,
    Ready,
    /// Explicit retry state; the panel offers resubmission.
    Failed,
}

/// Sequence id of an issued request. Resolutions quote it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(pub u64);

/// Per-panel request state.
#[derive(Debug)]
pub struct SuggestionRequester {
    status: SuggestionStatus,
    result: Option<String>,
    last_issued: u64,
    strip_quotes: bool,
}

impl Default for SuggestionRequester {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionRequester {
    pub fn new() -> Self {
        Self {
            status: SuggestionStatus::Idle,
            result: None,
            last_issued: 0,
            strip_quotes: false,
        }
    }

    /// Requester that strips surrounding quotes from results before
    /// exposing them (the life-hack panel's normalization rule).
    pub fn quote_stripping() -> Self {
        Self {
            strip_quotes: true,
            ..Self::new()
        }
    }

    pub fn status(&self) -> SuggestionStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == SuggestionStatus::Pending
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Issue a new request: bump the sequence, clear any prior result,
    /// go Pending. Issuing while Pending supersedes the in-flight
    /// request (its eventual resolution will be stale).
    pub fn begin(&mut self) -> Ticket {
        self.last_issued += 1;
        self.status = SuggestionStatus::Pending;
        self.result = None;
        Ticket(self.last_issued)
    }

    /// Apply a resolution. Returns `false` if the ticket is stale and
    /// the resolution was discarded.
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        outcome: Result<String, SuggestionError>,
    ) -> bool {
        if ticket.0 != self.last_issued {
            return false;
        }

        match outcome {
            Ok(text) => {
                let text = if self.strip_quotes {
                    strip_surrounding_quotes(&text).to_string()
                } else {
                    text
                };
                self.result = Some(text);
                self.status = SuggestionStatus::Ready;
            }
            Err(_) => {
                self.result = None;
                self.status = SuggestionStatus::Failed;
            }
        }
        true
    }

    /// View cleared: drop the result and return to Idle.
    pub fn clear(&mut self) {
        self.status = SuggestionStatus::Idle;
        self.result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn err() -> SuggestionError {
        SuggestionError::EmptyResponse
    }

    #[test]
    fn resolve_sets_ready_and_replaces_result() {
        let mut req = SuggestionRequester::new();
        let a = req.begin();
        assert!(req.is_pending());
        assert!(req.result().is_none());

        assert!(req.resolve(a, Ok("omelette".to_string())));
        assert_eq!(req.status(), SuggestionStatus::Ready);
        assert_eq!(req.result(), Some("omelette"));

        let b = req.begin();
        assert!(req.resolve(b, Ok("frittata".to_string())));
        assert_eq!(req.result(), Some("frittata"));
    }

    #[test]
    fn stale_resolution_is_discarded() {
        let mut req = SuggestionRequester::new();
        let a = req.begin();
        let b = req.begin();

        // A resolves after B was issued: stale, ignored.
        assert!(!req.resolve(a, Ok("old".to_string())));
        assert!(req.is_pending());

        assert!(req.resolve(b, Ok("new".to_string())));
        assert_eq!(req.result(), Some("new"));

        // A's even later arrival still changes nothing.
        assert!(!req.resolve(a, Ok("older".to_string())));
        assert_eq!(req.result(), Some("new"));
    }

    #[test]
    fn failure_enters_retry_state_without_partial_result() {
        let mut req = SuggestionRequester::new();
        let a = req.begin();
        assert!(req.resolve(a, Err(err())));
        assert_eq!(req.status(), SuggestionStatus::Failed);
        assert!(req.result().is_none());

        // Retry allowed.
        let b = req.begin();
        assert!(req.resolve(b, Ok("works now".to_string())));
        assert_eq!(req.status(), SuggestionStatus::Ready);
    }

    #[test]
    fn stale_failure_does_not_clobber_newer_result() {
        let mut req = SuggestionRequester::new();
        let a = req.begin();
        let b = req.begin();
        assert!(req.resolve(b, Ok("fresh".to_string())));
        assert!(!req.resolve(a, Err(err())));
        assert_eq!(req.status(), SuggestionStatus::Ready);
        assert_eq!(req.result(), Some("fresh"));
    }

    #[test]
    fn quote_stripping_applies_on_resolve() {
        let mut req = SuggestionRequester::quote_stripping();
        let a = req.begin();
        req.resolve(a, Ok("\"drink water first thing\"".to_string()));
        assert_eq!(req.result(), Some("drink water first thing"));
    }

    #[test]
    fn clear_returns_to_idle() {
        let mut req = SuggestionRequester::new();
        let a = req.begin();
        req.resolve(a, Ok("text".to_string()));
        req.clear();
        assert_eq!(req.status(), SuggestionStatus::Idle);
        assert!(req.result().is_none());
    }
}
