use crate::model::User;
use crate::user_store::UserError;
use async_trait::async_trait;
use store_framework::{StoreAccess, StoreClient, StoreState};
use tracing::{debug, instrument};

/// Client for the read-only User store.
#[derive(Clone)]
pub struct UserClient {
    inner: StoreClient<User>,
}

impl UserClient {
    pub fn new(inner: StoreClient<User>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn fetch_users(&self) -> Result<StoreState<User>, UserError> {
        debug!("Sending request");
        self.fetch_all().await
    }

    pub fn total_users(&self) -> usize {
        self.count()
    }
}

#[async_trait]
impl StoreAccess<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &StoreClient<User> {
        &self.inner
    }
}
