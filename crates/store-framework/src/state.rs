//! # Store State
//!
//! The published shape of every resource store: an ordered collection, an
//! in-flight flag and the last error message.

/// Snapshot of a resource store.
///
/// A successful operation always clears `error`. A failed one never touches
/// `items`. The two are otherwise independent: a store can show stale items
/// next to an error message.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreState<T> {
    pub(crate) items: Vec<T>,
    pub(crate) loading: bool,
    pub(crate) error: Option<String>,
}

impl<T> Default for StoreState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

impl<T> StoreState<T> {
    /// Items in display order, most recently added first.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Number of items. Always derived from `items`.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
