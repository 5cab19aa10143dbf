//! # Store Messages
//!
//! The requests a [`StoreClient`](crate::StoreClient) sends to its
//! [`ResourceStore`](crate::ResourceStore).

use crate::entity::StoreEntity;
use crate::state::StoreState;
use tokio::sync::oneshot;

/// One-shot channel carrying the state published when the operation settled.
pub type Response<T> = oneshot::Sender<StoreState<T>>;

/// Operations a resource store understands.
///
/// Every variant answers with the post-operation snapshot. Failures are
/// reported through the snapshot's error slot, never through the channel.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    /// Replace the collection with the remote one.
    FetchAll { respond_to: Response<T> },
    /// Create a record remotely and prepend it locally.
    Add {
        input: T::Create,
        respond_to: Response<T>,
    },
    /// Delete a record remotely, then locally.
    Remove { id: T::Id, respond_to: Response<T> },
}
