//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the subscriber used by the demo binary and by anyone
//! embedding the stores.
//!
//! ## What Gets Traced
//!
//! - **Store Lifecycle**: startup and shutdown with the final collection size
//! - **Operations**: FetchAll, Add and Remove with `entity_type`, `id` and `size` fields
//! - **Failures**: remote and validation errors at `warn` with `error = %e`
//! - **HTTP**: response status per request at `debug`
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # one line per settled operation
//! RUST_LOG=debug cargo run     # payloads and HTTP statuses
//! RUST_LOG=store_framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a fetch followed by an add looks like:
//!
//! ```text
//! INFO Store started entity_type="Product"
//! INFO Fetched entity_type="Product" size=20
//! INFO Created entity_type="Product" id=product_21 size=21
//! ```

/// Initializes the tracing subscriber, filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type already says where a line came from
        .compact()
        .init();
}
