//! # Product Store
//!
//! Holds the product catalogue mirrored from the remote `products` collection.
//!
//! ## Structure
//!
//! - [`entity`] - [`StoreEntity`](store_framework::StoreEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] for validation and store failures
//! - [`new()`] - Factory function that creates the store and its client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (store, client) = product_store::new(HttpCollection::new(http, products_url), 32);
//! tokio::spawn(store.run());
//!
//! let state = client.fetch_products().await?;
//! let state = client.add_product(NewProduct::new("Desk Lamp", 39.5)).await?;
//! assert_eq!(state.items()[0].title, "Desk Lamp");
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use store_framework::{RemoteCollection, ResourceStore};

/// Creates a new Product store and its client.
pub fn new<R>(remote: R, buffer_size: usize) -> (ResourceStore<Product>, ProductClient)
where
    R: RemoteCollection<Product> + 'static,
{
    let (store, generic_client) = ResourceStore::new(buffer_size, remote);
    (store, ProductClient::new(generic_client))
}
