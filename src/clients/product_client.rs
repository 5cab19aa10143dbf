//! # Product Client
//!
//! Provides a high-level API for the `Product` store. It wraps a
//! `StoreClient<Product>` and exposes the catalogue operations views use.
use crate::model::{NewProduct, Product, ProductId};
use crate::product_store::ProductError;
use async_trait::async_trait;
use store_framework::{StoreAccess, StoreClient, StoreState};
use tracing::{debug, instrument};

/// Client for interacting with the Product store.
#[derive(Clone)]
pub struct ProductClient {
    inner: StoreClient<Product>,
}

impl ProductClient {
    pub fn new(inner: StoreClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl StoreAccess<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &StoreClient<Product> {
        &self.inner
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Result<StoreState<Product>, ProductError> {
        debug!("Sending request");
        self.fetch_all().await
    }

    /// Creates a product remotely and prepends it to the catalogue.
    ///
    /// Invalid payloads and remote failures both end up in the returned
    /// state's error slot; `Err` means the store is gone.
    #[instrument(skip(self, product), fields(title = %product.title))]
    pub async fn add_product(&self, product: NewProduct) -> Result<StoreState<Product>, ProductError> {
        debug!(?product, "add_product called");
        Ok(self.inner.add(product).await?)
    }

    #[instrument(skip(self))]
    pub async fn remove_product(&self, id: ProductId) -> Result<StoreState<Product>, ProductError> {
        debug!("Sending request");
        Ok(self.inner.remove(id).await?)
    }

    pub fn total_products(&self) -> usize {
        self.count()
    }
}
