//! # User Store
//!
//! Mirrors the remote `users` collection. This is the simplest store in the system:
//! it only fetches, so its client exposes no create or delete surface.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use store_framework::{RemoteCollection, ResourceStore};

/// Creates a new User store and its client.
pub fn new<R>(remote: R, buffer_size: usize) -> (ResourceStore<User>, UserClient)
where
    R: RemoteCollection<User> + 'static,
{
    let (store, generic_client) = ResourceStore::new(buffer_size, remote);
    (store, UserClient::new(generic_client))
}
