//! # Session Store
//!
//! Tracks who is logged in. The session is a two-state machine:
//!
//! ```text
//!              login(name, secret)            (both non-empty)
//!  Anonymous ───────────────────────▶ Authenticated { principal }
//!      ▲                                      │
//!      └──────────────── logout() ────────────┘
//! ```
//!
//! There is no credential verification: any non-empty pair is accepted. Nothing is
//! fetched remotely and no error message is stored; a refused login is reported to
//! the caller only.

pub mod error;

pub use error::*;

use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};

/// The logged-in identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub name: String,
}

/// Current authentication state.
///
/// "Authenticated" and "has a principal" are the same fact, so they cannot drift apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated { principal: Principal },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { principal } => Some(principal),
        }
    }
}

/// Cloneable handle on the application's session.
///
/// All clones share one state. Observers can [`subscribe`](SessionStore::subscribe)
/// to be told about logins and logouts.
#[derive(Clone)]
pub struct SessionStore {
    state: Arc<watch::Sender<Session>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Starts anonymous.
    pub fn new() -> Self {
        let (state, _) = watch::channel(Session::Anonymous);
        Self {
            state: Arc::new(state),
        }
    }

    /// Authenticates `name` if both `name` and `secret` are non-empty.
    ///
    /// A refused attempt leaves the session untouched.
    pub fn login(&self, name: &str, secret: &str) -> Result<Principal, SessionError> {
        if name.is_empty() {
            warn!("Login refused: missing username");
            return Err(SessionError::MissingName);
        }
        if secret.is_empty() {
            warn!(name, "Login refused: missing password");
            return Err(SessionError::MissingSecret);
        }

        let principal = Principal {
            name: name.to_string(),
        };
        self.state.send_replace(Session::Authenticated {
            principal: principal.clone(),
        });
        info!(name, "Logged in");
        Ok(principal)
    }

    /// Returns to `Anonymous` from any state.
    pub fn logout(&self) {
        let previous = self.state.send_replace(Session::Anonymous);
        if let Some(principal) = previous.principal() {
            info!(name = %principal.name, "Logged out");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn principal(&self) -> Option<Principal> {
        self.state.borrow().principal().cloned()
    }

    pub fn current(&self) -> Session {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }
}
