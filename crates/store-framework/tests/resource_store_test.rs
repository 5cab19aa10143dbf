use serde::{Deserialize, Serialize};
use std::fmt;
use store_framework::mock::MockRemote;
use store_framework::{RemoteError, ResourceStore, StoreEntity};
use tokio::sync::oneshot;

// --- Test Entity ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
struct BookId(u64);

impl From<u64> for BookId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<BookId> for u64 {
    fn from(id: BookId) -> Self {
        id.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Book {
    id: BookId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    shelf: String,
}

#[derive(Debug, Clone, Serialize)]
struct BookCreate {
    title: String,
}

impl StoreEntity for Book {
    type Id = BookId;
    type Create = BookCreate;

    fn id(&self) -> &BookId {
        &self.id
    }

    fn validate(input: &BookCreate) -> Result<(), String> {
        if input.title.is_empty() {
            return Err("Title is required".to_string());
        }
        Ok(())
    }

    fn from_created(echo: Self, input: BookCreate, id: BookId) -> Self {
        Self {
            id,
            title: input.title,
            shelf: echo.shelf,
        }
    }
}

fn book(id: u64, title: &str) -> Book {
    Book {
        id: BookId(id),
        title: title.to_string(),
        shelf: String::new(),
    }
}

fn create(title: &str) -> BookCreate {
    BookCreate {
        title: title.to_string(),
    }
}

fn server_error() -> RemoteError {
    RemoteError::Response {
        url: "http://library/books".to_string(),
        status: 500,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_fetch_all_replaces_items() {
    let mut remote = MockRemote::<Book>::new();
    remote
        .expect_list()
        .return_ok(vec![book(1, "Dune"), book(2, "Emma")]);
    remote.expect_list().return_ok(vec![book(3, "Ulysses")]);

    let (store, client) = ResourceStore::new(8, remote.clone());
    let handle = tokio::spawn(store.run());

    let state = client.fetch_all().await.unwrap();
    assert_eq!(state.items(), &[book(1, "Dune"), book(2, "Emma")]);
    assert_eq!(state.error(), None);
    assert!(!state.loading());

    // Snapshot replace, not a merge
    let state = client.fetch_all().await.unwrap();
    assert_eq!(state.items(), &[book(3, "Ulysses")]);
    assert_eq!(client.count(), 1);

    remote.verify();
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_fetch_failure_keeps_previous_items() {
    let mut remote = MockRemote::<Book>::new();
    remote.expect_list().return_ok(vec![book(1, "Dune")]);
    remote.expect_list().return_err(RemoteError::transport(
        "http://library/books",
        "connection refused",
    ));

    let (store, client) = ResourceStore::new(8, remote.clone());
    tokio::spawn(store.run());

    client.fetch_all().await.unwrap();
    let state = client.fetch_all().await.unwrap();

    assert_eq!(state.items(), &[book(1, "Dune")]);
    let error = state.error().expect("error should be recorded");
    assert!(error.contains("connection refused"));
    assert!(!state.loading());
    remote.verify();
}

#[tokio::test]
async fn test_loading_is_raised_while_fetch_in_flight() {
    let mut remote = MockRemote::<Book>::new();
    let (release, gate) = oneshot::channel();
    remote.expect_list().return_when(gate, vec![book(1, "Dune")]);

    let (store, client) = ResourceStore::new(8, remote.clone());
    tokio::spawn(store.run());

    let mut states = client.subscribe();
    let fetching = tokio::spawn({
        let client = client.clone();
        async move { client.fetch_all().await }
    });

    states.wait_for(|s| s.loading()).await.unwrap();
    assert!(client.is_loading());
    assert_eq!(client.count(), 0);

    release.send(()).unwrap();
    let state = fetching.await.unwrap().unwrap();
    assert!(!state.loading());
    assert!(!client.is_loading());
    assert_eq!(state.count(), 1);
}

#[tokio::test]
async fn test_successful_fetch_clears_previous_error() {
    let mut remote = MockRemote::<Book>::new();
    remote.expect_list().return_err(server_error());
    remote.expect_list().return_ok(vec![book(1, "Dune")]);

    let (store, client) = ResourceStore::new(8, remote.clone());
    tokio::spawn(store.run());

    let failed = client.fetch_all().await.unwrap();
    assert!(failed.error().unwrap().contains("500"));

    let recovered = client.fetch_all().await.unwrap();
    assert_eq!(recovered.error(), None);
    assert_eq!(recovered.count(), 1);
}

#[tokio::test]
async fn test_add_prepends_with_caller_values_and_unique_id() {
    let mut remote = MockRemote::<Book>::new();
    remote
        .expect_list()
        .return_ok(vec![book(4, "Dune"), book(9, "Emma")]);
    // The demo server echoes a constant id and its own field values
    let mut echo = book(21, "server title");
    echo.shelf = "B2".to_string();
    remote.expect_create().return_ok(echo.clone());
    remote.expect_create().return_ok(echo);

    let (store, client) = ResourceStore::new(8, remote.clone());
    tokio::spawn(store.run());

    client.fetch_all().await.unwrap();
    let state = client.add(create("Middlemarch")).await.unwrap();

    assert_eq!(state.count(), 3);
    let added = &state.items()[0];
    assert_eq!(added.title, "Middlemarch");
    assert_eq!(added.shelf, "B2");
    assert!(!state.loading());
    assert_eq!(state.error(), None);
    // Past every fetched id
    assert_eq!(added.id, BookId(10));

    let state = client.add(create("Persuasion")).await.unwrap();
    assert_eq!(state.items()[0].title, "Persuasion");
    assert_eq!(state.items()[1].title, "Middlemarch");
    let mut ids: Vec<_> = state.items().iter().map(|b| b.id).collect();
    ids.sort_by_key(|id| id.0);
    ids.dedup();
    assert_eq!(ids.len(), 4, "identifiers must be unique");

    assert_eq!(remote.created_payloads().len(), 2);
    remote.verify();
}

#[tokio::test]
async fn test_add_failure_leaves_items_unchanged() {
    let mut remote = MockRemote::<Book>::new();
    remote.expect_list().return_ok(vec![book(1, "Dune")]);
    remote.expect_create().return_err(server_error());

    let (store, client) = ResourceStore::new(8, remote.clone());
    tokio::spawn(store.run());

    client.fetch_all().await.unwrap();
    let state = client.add(create("Middlemarch")).await.unwrap();

    assert_eq!(state.items(), &[book(1, "Dune")]);
    assert!(state.error().is_some());
    remote.verify();
}

#[tokio::test]
async fn test_invalid_payload_never_reaches_remote() {
    let remote = MockRemote::<Book>::new();

    let (store, client) = ResourceStore::new(8, remote.clone());
    tokio::spawn(store.run());

    let state = client.add(create("")).await.unwrap();

    assert_eq!(state.error(), Some("Title is required"));
    assert!(state.is_empty());
    assert!(remote.created_payloads().is_empty());
    remote.verify();
}

#[tokio::test]
async fn test_remove_drops_matching_item() {
    let mut remote = MockRemote::<Book>::new();
    remote
        .expect_list()
        .return_ok(vec![book(1, "Dune"), book(2, "Emma")]);
    remote.expect_remove(BookId(1)).return_ok();
    remote.expect_remove(BookId(42)).return_ok();

    let (store, client) = ResourceStore::new(8, remote.clone());
    tokio::spawn(store.run());

    client.fetch_all().await.unwrap();
    let state = client.remove(BookId(1)).await.unwrap();
    assert_eq!(state.items(), &[book(2, "Emma")]);

    // Absent id: nothing to drop
    let state = client.remove(BookId(42)).await.unwrap();
    assert_eq!(state.count(), 1);
    assert_eq!(state.error(), None);
    remote.verify();
}

#[tokio::test]
async fn test_remove_failure_keeps_item() {
    let mut remote = MockRemote::<Book>::new();
    remote.expect_list().return_ok(vec![book(1, "Dune")]);
    remote.expect_remove(BookId(1)).return_err(server_error());

    let (store, client) = ResourceStore::new(8, remote.clone());
    tokio::spawn(store.run());

    client.fetch_all().await.unwrap();
    let state = client.remove(BookId(1)).await.unwrap();

    assert_eq!(state.items(), &[book(1, "Dune")]);
    assert!(state.error().unwrap().contains("500"));
    remote.verify();
}

#[tokio::test]
async fn test_count_tracks_items_across_operations() {
    let mut remote = MockRemote::<Book>::new();
    remote
        .expect_list()
        .return_ok(vec![book(1, "Dune"), book(2, "Emma")]);
    remote.expect_create().return_ok(book(0, ""));
    remote.expect_remove(BookId(2)).return_ok();
    remote.expect_create().return_err(server_error());
    remote.expect_list().return_err(server_error());

    let (store, client) = ResourceStore::new(8, remote.clone());
    tokio::spawn(store.run());

    let states = vec![
        client.fetch_all().await.unwrap(),
        client.add(create("Middlemarch")).await.unwrap(),
        client.remove(BookId(2)).await.unwrap(),
        client.add(create("Persuasion")).await.unwrap(),
        client.fetch_all().await.unwrap(),
    ];

    let counts: Vec<_> = states.iter().map(|s| s.count()).collect();
    assert_eq!(counts, vec![2, 3, 2, 2, 2]);
    for state in &states {
        assert_eq!(state.count(), state.items().len());
    }
    assert_eq!(client.count(), client.snapshot().items().len());
    remote.verify();
}

#[tokio::test]
async fn test_store_stops_when_clients_dropped() {
    let remote = MockRemote::<Book>::new();
    let (store, client) = ResourceStore::new(8, remote);
    let handle = tokio::spawn(store.run());

    let second = client.clone();
    drop(client);
    assert!(!handle.is_finished());
    drop(second);

    handle.await.unwrap();
}
