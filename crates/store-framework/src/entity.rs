//! # StoreEntity Trait
//!
//! The `StoreEntity` trait is the contract every remote resource (Product, User, ...)
//! implements to be held by the generic [`ResourceStore`](crate::ResourceStore).
//!
//! # Architecture Note
//! The store loop, the loading flag handling and the error slot are written *once*
//! in [`crate::store`]. A resource only has to say how to identify a record, how to
//! check a create payload, and how to merge the caller's payload with whatever the
//! server echoed back.
//!
//! Associated types keep payloads apart: a `Product` store takes a `NewProduct`,
//! and the compiler refuses any other create payload.

use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record must implement to be managed by a `ResourceStore`.
pub trait StoreEntity: Clone + Debug + DeserializeOwned + Send + Sync + 'static {
    /// The unique identifier for this record.
    ///
    /// Must round-trip through `u64` so the store can synthesize local ids
    /// for freshly created records.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u64> + Into<u64>;

    /// The payload sent to the remote collection to create a record.
    ///
    /// Read-only resources use [`ReadOnly`].
    type Create: Serialize + Clone + Send + Sync + Debug;

    fn id(&self) -> &Self::Id;

    /// Checks a create payload before any request is issued.
    ///
    /// The returned message lands in the store's error slot.
    fn validate(_input: &Self::Create) -> Result<(), String> {
        Ok(())
    }

    /// Builds the stored record from the decoded server echo.
    ///
    /// The caller's `input` wins over any echoed field, and `id` is the
    /// locally issued identifier.
    fn from_created(echo: Self, input: Self::Create, id: Self::Id) -> Self;
}

/// Create payload for resources that cannot be created.
///
/// It has no values, so an `add` can never be constructed for such a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOnly {}

impl Serialize for ReadOnly {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        match *self {}
    }
}
