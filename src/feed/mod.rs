// SPDX-License-Identifier: MPL-2.0
//! News feed domain: article model, HTTP client, fetch lifecycle, and
//! bounded navigation over the fetched list.

pub mod article;
pub mod client;
pub mod navigator;

pub use article::{Article, FeedResponse};
pub use navigator::ArticleNavigator;

use crate::error::Error;

/// Lifecycle of the one-shot feed fetch.
///
/// The state only ever advances forward: `NotRequested` → `Pending` →
/// `Resolved`. There is no operation that deactivates or re-triggers the
/// fetch, which makes the swipe-commit handler idempotent for free: a
/// commit observed in any state other than `NotRequested` changes nothing.
#[derive(Debug, Clone, Default)]
pub enum FetchState {
    /// No commit has been observed yet; the swipe gate is on screen.
    #[default]
    NotRequested,
    /// The request is in flight; the gate stays on screen until it lands.
    Pending,
    /// The request finished. Errors are terminal for this app lifetime.
    Resolved(Result<ArticleNavigator, Error>),
}

impl FetchState {
    /// Whether the fetch has not completed (successfully or not) yet.
    /// While this holds, the swipe gate is the active screen.
    pub fn is_unresolved(&self) -> bool {
        !matches!(self, FetchState::Resolved(_))
    }

    /// Whether the request is currently in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_not_requested() {
        let state = FetchState::default();
        assert!(matches!(state, FetchState::NotRequested));
        assert!(state.is_unresolved());
        assert!(!state.is_pending());
    }

    #[test]
    fn pending_is_unresolved() {
        let state = FetchState::Pending;
        assert!(state.is_unresolved());
        assert!(state.is_pending());
    }

    #[test]
    fn resolved_is_not_unresolved() {
        let state = FetchState::Resolved(Ok(ArticleNavigator::new(Vec::new())));
        assert!(!state.is_unresolved());
        assert!(!state.is_pending());
    }
}
