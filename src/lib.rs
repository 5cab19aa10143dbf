//! # Resource Dashboard
//!
//! Client-side state for a small catalogue dashboard: a product store, a read-only
//! user store, an authentication session and a guarded route table. The stores
//! mirror the collections of a public demo REST API.
//!
//! ## Module Tour
//!
//! ### 1. The Data ([`model`])
//! Plain records ([`Product`](model::Product), [`User`](model::User)) and the
//! create payload ([`NewProduct`](model::NewProduct)).
//!
//! ### 2. The Stores ([`product_store`], [`user_store`])
//! [`StoreEntity`](store_framework::StoreEntity) implementations and factories built on
//! the generic [`ResourceStore`](store_framework::ResourceStore).
//!
//! ### 3. The Interface ([`clients`])
//! Typed wrappers views talk to: [`ProductClient`](clients::ProductClient) and
//! [`UserClient`](clients::UserClient). Every operation resolves to the settled state;
//! remote failures show up in its error slot rather than as an `Err`.
//!
//! ### 4. Access Control ([`session`], [`router`])
//! The login state machine and the route-entry check that redirects anonymous
//! visitors to `/login`.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! [`Dashboard`](lifecycle::Dashboard) starts the stores, wires the session into the
//! router and shuts everything down.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! DASHBOARD_API_BASE=http://localhost:3000 RUST_LOG=debug cargo run
//! ```

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod product_store;
pub mod router;
pub mod session;
pub mod user_store;
