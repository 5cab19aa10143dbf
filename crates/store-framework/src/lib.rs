//! # Store Framework
//!
//! Generic building blocks for client-side resource stores: a state holder per remote
//! collection that exposes the current items, an in-flight flag and an error slot.
//!
//! ## Core Concepts
//!
//! - [`StoreEntity`]: what a record must provide (id, payload validation, echo overlay).
//! - [`ResourceStore`]: the store task. It owns the state and processes one request at a time.
//! - [`StoreClient`]: the cloneable handle. Operations resolve to the settled [`StoreState`].
//! - [`RemoteCollection`]: the list/create/remove seam, implemented over HTTP by
//!   [`HttpCollection`] and in memory by [`mock::MockRemote`].
//!
//! ## Error Model
//!
//! Remote failures never escape a store operation. They are rendered into the store's
//! error slot and the previous items stay in place. The only `Err` a caller sees is a
//! [`FrameworkError`], meaning the store task is no longer running.

pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod http;
pub mod message;
pub mod mock;
pub mod remote;
pub mod state;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use client::StoreClient;
pub use client_trait::StoreAccess;
pub use entity::{ReadOnly, StoreEntity};
pub use error::{FrameworkError, RemoteError};
pub use http::HttpCollection;
pub use message::{Response, StoreRequest};
pub use remote::RemoteCollection;
pub use state::StoreState;
pub use store::ResourceStore;
