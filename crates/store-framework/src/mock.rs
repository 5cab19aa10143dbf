//! # Mock Remote & Testing Guide
//!
//! `MockRemote<T>` implements [`RemoteCollection<T>`] entirely in memory. You queue the
//! responses you want, hand the mock to a real `ResourceStore`, and assert on the
//! snapshots the store publishes. No network, no sleeps.
//!
//! ## When to use the Mock vs HTTP
//!
//! | Feature | MockRemote | HttpCollection |
//! |---------|------------|----------------|
//! | **Speed** | Instant | Network bound |
//! | **Determinism** | 100% Deterministic | Depends on the server |
//! | **Error Injection** | Easy (`return_err`) | Needs a misbehaving server |
//! | **Use Case** | Store and wrapper logic | The HTTP mapping itself |
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut remote = MockRemote::<Product>::new();
//! remote.expect_list().return_ok(vec![widget()]);
//! remote.expect_remove(ProductId(1)).return_err(RemoteError::Response {
//!     url: "https://fakestoreapi.com/products/1".into(),
//!     status: 500,
//! });
//!
//! let (store, client) = ResourceStore::new(8, remote.clone());
//! tokio::spawn(store.run());
//!
//! assert_eq!(client.fetch_all().await?.count(), 1);
//! assert!(client.remove(ProductId(1)).await?.error().is_some());
//! remote.verify();
//! ```
//!
//! ## Observing in-flight state
//!
//! [`ListExpectationBuilder::return_when`] holds the response back until a
//! `oneshot` fires, which lets a test look at the store while `loading` is raised.

use crate::entity::StoreEntity;
use crate::error::RemoteError;
use crate::remote::RemoteCollection;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected remote call and its scripted response.
enum Expectation<T: StoreEntity> {
    List {
        gate: Option<oneshot::Receiver<()>>,
        response: Result<Vec<T>, RemoteError>,
    },
    Create {
        response: Result<T, RemoteError>,
    },
    Remove {
        id: T::Id,
        response: Result<(), RemoteError>,
    },
}

impl<T: StoreEntity> Expectation<T> {
    fn name(&self) -> &'static str {
        match self {
            Expectation::List { .. } => "list",
            Expectation::Create { .. } => "create",
            Expectation::Remove { .. } => "remove",
        }
    }
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A scripted remote collection.
///
/// Clones share the same expectation queue, so a test can keep one clone for
/// `verify()` and give another to the store.
pub struct MockRemote<T: StoreEntity> {
    expectations: Queue<T>,
    created: Arc<Mutex<Vec<T::Create>>>,
}

impl<T: StoreEntity> Clone for MockRemote<T> {
    fn clone(&self) -> Self {
        Self {
            expectations: self.expectations.clone(),
            created: self.created.clone(),
        }
    }
}

impl<T: StoreEntity> Default for MockRemote<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> MockRemote<T> {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(VecDeque::new())),
            created: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Expects a `list` call.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` call.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `remove` call for `id`.
    pub fn expect_remove(&mut self, id: T::Id) -> RemoveExpectationBuilder<T> {
        RemoveExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Payloads received by `create`, in call order.
    pub fn created_payloads(&self) -> Vec<T::Create> {
        self.created.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn next(&self, called: &str) -> Expectation<T> {
        let mut exps = self.expectations.lock().unwrap();
        match exps.pop_front() {
            Some(expectation) => expectation,
            None => panic!("Unexpected {} call: no expectations left", called),
        }
    }
}

#[async_trait]
impl<T: StoreEntity> RemoteCollection<T> for MockRemote<T> {
    async fn list(&self) -> Result<Vec<T>, RemoteError> {
        match self.next("list") {
            Expectation::List { gate, response } => {
                if let Some(gate) = gate {
                    // A dropped sender releases the gate too
                    let _ = gate.await;
                }
                response
            }
            other => panic!("Expected {} call, got list", other.name()),
        }
    }

    async fn create(&self, payload: &T::Create) -> Result<T, RemoteError> {
        match self.next("create") {
            Expectation::Create { response } => {
                self.created.lock().unwrap().push(payload.clone());
                response
            }
            other => panic!("Expected {} call, got create", other.name()),
        }
    }

    async fn remove(&self, id: &T::Id) -> Result<(), RemoteError> {
        match self.next("remove") {
            Expectation::Remove {
                id: expected,
                response,
            } => {
                assert_eq!(&expected, id, "remove called with unexpected id");
                response
            }
            other => panic!("Expected {} call, got remove", other.name()),
        }
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: StoreEntity> {
    expectations: Queue<T>,
}

impl<T: StoreEntity> ListExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, items: Vec<T>) {
        self.push(None, Ok(items));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: RemoteError) {
        self.push(None, Err(error));
    }

    /// Returns `items` only once `gate` fires (or its sender is dropped).
    pub fn return_when(self, gate: oneshot::Receiver<()>, items: Vec<T>) {
        self.push(Some(gate), Ok(items));
    }

    fn push(self, gate: Option<oneshot::Receiver<()>>, response: Result<Vec<T>, RemoteError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::List { gate, response });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: StoreEntity> {
    expectations: Queue<T>,
}

impl<T: StoreEntity> CreateExpectationBuilder<T> {
    /// Sets the server echo returned for the created record.
    pub fn return_ok(self, echo: T) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Create { response: Ok(echo) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: RemoteError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Create {
            response: Err(error),
        });
    }
}

/// Builder for `remove` expectations.
pub struct RemoveExpectationBuilder<T: StoreEntity> {
    id: T::Id,
    expectations: Queue<T>,
}

impl<T: StoreEntity> RemoveExpectationBuilder<T> {
    /// Sets the expectation to succeed.
    pub fn return_ok(self) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Remove {
            id: self.id,
            response: Ok(()),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: RemoteError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Remove {
            id: self.id,
            response: Err(error),
        });
    }
}
