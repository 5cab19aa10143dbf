//! Error types for the session store.

use thiserror::Error;

/// Reasons a login attempt is refused.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Username is required")]
    MissingName,

    #[error("Password is required")]
    MissingSecret,
}
