//! Error types for the User store.

use store_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The store task is no longer running.
    #[error("User store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<FrameworkError> for UserError {
    fn from(e: FrameworkError) -> Self {
        UserError::StoreUnavailable(e.to_string())
    }
}
