//! # Generic Client
//!
//! This module defines the generic handle for communicating with a store.

use crate::entity::StoreEntity;
use crate::error::FrameworkError;
use crate::message::StoreRequest;
use crate::state::StoreState;
use tokio::sync::{mpsc, oneshot, watch};

/// ## StoreClient
///
/// The `StoreClient<T>` is the only handle views get on a `ResourceStore<T>`. Mutating
/// operations travel over an mpsc channel and resolve to the snapshot published when
/// they settled. Reads (`snapshot`, `count`, ...) go straight to the latest published
/// state without a round-trip.
///
/// * **Cloneable**: holds a sender and a `watch` receiver, both cheap to clone.
/// * **Never throws remote failures**: a failed fetch still resolves to `Ok(state)`
///   with `state.error()` set. `Err` only means the store itself is gone.
pub struct StoreClient<T: StoreEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
    snapshots: watch::Receiver<StoreState<T>>,
}

impl<T: StoreEntity> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            snapshots: self.snapshots.clone(),
        }
    }
}

impl<T: StoreEntity> StoreClient<T> {
    pub fn new(
        sender: mpsc::Sender<StoreRequest<T>>,
        snapshots: watch::Receiver<StoreState<T>>,
    ) -> Self {
        Self { sender, snapshots }
    }

    pub async fn fetch_all(&self) -> Result<StoreState<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::FetchAll { respond_to })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)
    }

    pub async fn add(&self, input: T::Create) -> Result<StoreState<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Add { input, respond_to })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)
    }

    pub async fn remove(&self, id: T::Id) -> Result<StoreState<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Remove { id, respond_to })
            .await
            .map_err(|_| FrameworkError::StoreClosed)?;
        response.await.map_err(|_| FrameworkError::StoreDropped)
    }

    /// The most recently published state.
    pub fn snapshot(&self) -> StoreState<T> {
        self.snapshots.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.snapshots.borrow().count()
    }

    pub fn is_loading(&self) -> bool {
        self.snapshots.borrow().loading()
    }

    pub fn error(&self) -> Option<String> {
        self.snapshots.borrow().error.clone()
    }

    /// Observes every state the store publishes from now on.
    pub fn subscribe(&self) -> watch::Receiver<StoreState<T>> {
        self.snapshots.clone()
    }
}
