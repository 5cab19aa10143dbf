//! Route-entry check consulted before any protected view renders.

use super::Route;
use crate::session::SessionStore;
use tracing::debug;

/// Outcome of the guard for one navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    RedirectToLogin,
}

/// Decides whether `route` may be entered with the current session.
///
/// Unprotected routes always proceed; protected ones need an authenticated session.
pub fn check(route: &Route, session: &SessionStore) -> GuardDecision {
    if route.requires_auth && !session.is_authenticated() {
        debug!(path = route.path, "Guard redirect");
        GuardDecision::RedirectToLogin
    } else {
        GuardDecision::Proceed
    }
}
