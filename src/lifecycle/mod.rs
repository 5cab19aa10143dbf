//! # System Lifecycle
//!
//! Stores don't exist in a vacuum: something has to start them, hand their clients
//! to the views, and stop them again. [`Dashboard`] is that something.
//!
//! ## Startup
//!
//! 1. **Create** each store with its remote collection (`product_store::new`, `user_store::new`).
//! 2. **Spawn** each store's `run()` loop in its own Tokio task.
//! 3. **Wire** the session into the router so navigation is guarded.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients**: closes the sender side of each store's channel.
//! 2. **Stores detect closure**: `receiver.recv()` returns `None`, they log their final size.
//! 3. **Await completion**: every store task is joined; a panicked task is reported.
//!
//! Clones of the clients handed out to views keep a store alive, so drop them
//! before calling [`Dashboard::shutdown`].
//!
//! ## Observability
//!
//! Logging is set up once per process with
//! [`setup_tracing`](store_framework::tracing::setup_tracing).

pub mod dashboard;

pub use dashboard::*;
