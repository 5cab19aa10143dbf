//! Error types for the Product store.

use store_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The product title is empty or whitespace.
    #[error("Product title is required")]
    MissingTitle,

    /// The price is negative, NaN or infinite.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// The store task is no longer running.
    #[error("Product store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        ProductError::StoreUnavailable(e.to_string())
    }
}
