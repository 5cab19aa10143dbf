//! # Framework Errors
//!
//! Two families of errors live here. [`FrameworkError`] describes failures of the
//! store plumbing itself (the store task went away). [`RemoteError`] describes failures
//! of a [`RemoteCollection`](crate::RemoteCollection) call and is what ends up,
//! rendered as text, in a store's error slot.

/// Errors that can occur within the store framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
}

/// Failure of a single remote collection request.
///
/// The three variants match the three ways a request can go wrong:
/// it never completed, it completed with a non-success status, or the
/// body could not be read as the expected shape.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RemoteError {
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("Request to {url} returned status {status}")]
    Response { url: String, status: u16 },

    #[error("Could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl RemoteError {
    pub fn transport(url: impl Into<String>, message: impl ToString) -> Self {
        RemoteError::Transport {
            url: url.into(),
            message: message.to_string(),
        }
    }

    pub fn decode(url: impl Into<String>, message: impl ToString) -> Self {
        RemoteError::Decode {
            url: url.into(),
            message: message.to_string(),
        }
    }
}
