//! # Generic Resource Store
//!
//! This module defines `ResourceStore`, the "server" half of a store. It owns the
//! state for one remote collection and processes requests sequentially, so the
//! state needs no lock: it is only ever touched from inside the store's own task.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::message::StoreRequest;
use crate::remote::RemoteCollection;
use crate::state::StoreState;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// The generic store that mirrors one remote collection.
///
/// # Architecture Note
/// The store owns the receiving end of the request channel and the sending end of
/// a `watch` channel. Every mutation is published through `watch`, so observers
/// (see [`StoreClient::subscribe`]) see intermediate states such as
/// `loading == true` while a fetch is in flight.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceStore::new()` returns the `store` and its `client`.
/// 2.  **Run**: spawn `store.run()` in a background task.
/// 3.  **Use**: clone the client wherever the data is needed.
/// 4.  **Stop**: drop every client; `run()` returns once the channel closes.
///
/// ```rust,ignore
/// let (store, client) = ResourceStore::<Product>::new(32, remote);
/// let handle = tokio::spawn(store.run());
///
/// let state = client.fetch_all().await?;
/// println!("{} products", state.count());
///
/// drop(client);
/// handle.await?;
/// ```
///
/// # Operations
///
/// * **FetchAll**: raises `loading`, clears `error`, lists the remote collection and
///   replaces `items` wholesale. On failure `items` stay as they were. `loading` is
///   lowered on every exit path by a drop guard.
/// * **Add**: validates the payload, creates it remotely, issues a local id, overlays
///   the payload onto the echo and prepends the record. `loading` is untouched.
/// * **Remove**: deletes remotely and, only once that succeeded, drops every local
///   record with that id.
pub struct ResourceStore<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    remote: Box<dyn RemoteCollection<T>>,
    state: watch::Sender<StoreState<T>>,
    next_id: u64,
}

impl<T: StoreEntity> ResourceStore<T> {
    /// Creates a new `ResourceStore` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the request channel. When it is full, client
    ///   calls wait for space.
    /// * `remote` - The collection this store mirrors.
    pub fn new<R>(buffer_size: usize, remote: R) -> (Self, StoreClient<T>)
    where
        R: RemoteCollection<T> + 'static,
    {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (state, snapshots) = watch::channel(StoreState::default());
        let store = Self {
            receiver,
            remote: Box::new(remote),
            state,
            next_id: 1,
        };
        (store, StoreClient::new(sender, snapshots))
    }

    /// Runs the store's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // "Product" rather than "resource_dashboard::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            let respond_to = match msg {
                StoreRequest::FetchAll { respond_to } => {
                    self.fetch_all(entity_type).await;
                    respond_to
                }
                StoreRequest::Add { input, respond_to } => {
                    self.add(entity_type, input).await;
                    respond_to
                }
                StoreRequest::Remove { id, respond_to } => {
                    self.remove(entity_type, id).await;
                    respond_to
                }
            };
            let snapshot = self.state.borrow().clone();
            let _ = respond_to.send(snapshot);
        }

        info!(entity_type, size = self.state.borrow().count(), "Shutdown");
    }

    async fn fetch_all(&mut self, entity_type: &str) {
        let _loading = LoadingGuard::begin(&self.state);
        debug!(entity_type, "FetchAll");

        match self.remote.list().await {
            Ok(items) => {
                let highest = items
                    .iter()
                    .map(|item| -> u64 { item.id().clone().into() })
                    .max();
                if let Some(highest) = highest {
                    self.next_id = self.next_id.max(highest + 1);
                }
                let size = items.len();
                self.state.send_modify(|s| {
                    s.items = items;
                    s.error = None;
                });
                info!(entity_type, size, "Fetched");
            }
            Err(e) => {
                warn!(entity_type, error = %e, "FetchAll failed");
                self.record_error(e.to_string());
            }
        }
    }

    async fn add(&mut self, entity_type: &str, input: T::Create) {
        debug!(entity_type, ?input, "Add");
        if let Err(reason) = T::validate(&input) {
            warn!(entity_type, error = %reason, "Add rejected");
            self.record_error(reason);
            return;
        }

        match self.remote.create(&input).await {
            Ok(echo) => {
                let id = T::Id::from(self.next_id);
                self.next_id += 1;
                let item = T::from_created(echo, input, id.clone());
                self.state.send_modify(|s| {
                    s.items.insert(0, item);
                    s.error = None;
                });
                info!(entity_type, %id, size = self.state.borrow().count(), "Created");
            }
            Err(e) => {
                warn!(entity_type, error = %e, "Add failed");
                self.record_error(e.to_string());
            }
        }
    }

    async fn remove(&mut self, entity_type: &str, id: T::Id) {
        debug!(entity_type, %id, "Remove");
        match self.remote.remove(&id).await {
            Ok(()) => {
                self.state.send_modify(|s| {
                    s.items.retain(|item| item.id() != &id);
                    s.error = None;
                });
                info!(entity_type, %id, size = self.state.borrow().count(), "Deleted");
            }
            Err(e) => {
                warn!(entity_type, %id, error = %e, "Remove failed");
                self.record_error(e.to_string());
            }
        }
    }

    fn record_error(&self, message: String) {
        self.state.send_modify(|s| s.error = Some(message));
    }
}

/// Holds `loading == true` for as long as it lives.
struct LoadingGuard<'a, T> {
    state: &'a watch::Sender<StoreState<T>>,
}

impl<'a, T> LoadingGuard<'a, T> {
    fn begin(state: &'a watch::Sender<StoreState<T>>) -> Self {
        state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });
        Self { state }
    }
}

impl<T> Drop for LoadingGuard<'_, T> {
    fn drop(&mut self) {
        self.state.send_modify(|s| s.loading = false);
    }
}
