use crate::{FrameworkError, StoreClient, StoreEntity, StoreState};
use async_trait::async_trait;
use tokio::sync::watch;

/// Trait for resource-specific stores to inherit the common operations.
///
/// Wrappers such as `ProductStore` only provide `inner()` and `map_error()`;
/// fetching, snapshots and subscriptions come for free.
#[async_trait]
pub trait StoreAccess<T: StoreEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<FrameworkError> + Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Replace the local collection with the remote one.
    #[tracing::instrument(skip(self))]
    async fn fetch_all(&self) -> Result<StoreState<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().fetch_all().await.map_err(Self::Error::from)
    }

    fn snapshot(&self) -> StoreState<T> {
        self.inner().snapshot()
    }

    fn count(&self) -> usize {
        self.inner().count()
    }

    fn subscribe(&self) -> watch::Receiver<StoreState<T>> {
        self.inner().subscribe()
    }
}
