//! # Remote Collections
//!
//! A `RemoteCollection` is the only way a store talks to the outside world.
//! Production code uses [`HttpCollection`](crate::http::HttpCollection); tests
//! use [`MockRemote`](crate::mock::MockRemote).

use crate::entity::StoreEntity;
use crate::error::RemoteError;
use async_trait::async_trait;

/// Read/create/delete access to one remote resource collection.
///
/// Implementations surface failures immediately: no retries, no timeouts
/// beyond whatever the transport does by default.
#[async_trait]
pub trait RemoteCollection<T: StoreEntity>: Send + Sync {
    /// Fetches the whole collection.
    async fn list(&self) -> Result<Vec<T>, RemoteError>;

    /// Creates a record and returns the server's representation of it.
    async fn create(&self, payload: &T::Create) -> Result<T, RemoteError>;

    /// Deletes the record with the given id.
    async fn remove(&self, id: &T::Id) -> Result<(), RemoteError>;
}
