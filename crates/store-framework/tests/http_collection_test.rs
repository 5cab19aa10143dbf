use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use store_framework::{HttpCollection, RemoteCollection, RemoteError, StoreEntity};
use tokio::net::TcpListener;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
struct ItemId(u64);

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ItemId> for u64 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Item {
    id: ItemId,
    name: String,
}

#[derive(Debug, Clone, Serialize)]
struct ItemCreate {
    name: String,
}

impl StoreEntity for Item {
    type Id = ItemId;
    type Create = ItemCreate;

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn from_created(_echo: Self, input: ItemCreate, id: ItemId) -> Self {
        Self {
            id,
            name: input.name,
        }
    }
}

async fn list_items() -> Json<Value> {
    Json(json!([
        { "id": 1, "name": "anvil" },
        { "id": 2, "name": "bellows" }
    ]))
}

async fn create_item(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    // Echo the payload back with a constant id, like the demo API
    let name = body["name"].as_str().unwrap_or_default().to_string();
    (StatusCode::OK, Json(json!({ "id": 21, "name": name })))
}

async fn delete_item(Path(id): Path<u64>) -> StatusCode {
    if id == 1 {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn malformed() -> &'static str {
    "{ not json"
}

/// Serves a tiny collection API on an ephemeral port and returns its root.
async fn spawn_server() -> Url {
    let app = Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/:id", delete(delete_item))
        .route("/broken", get(malformed));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Url::parse(&format!("http://{}/", addr)).unwrap()
}

fn collection(root: &Url, path: &str) -> HttpCollection<Item> {
    HttpCollection::new(Client::new(), root.join(path).unwrap())
}

#[tokio::test]
async fn test_list_decodes_json_array() {
    let root = spawn_server().await;
    let items = collection(&root, "items").list().await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, ItemId(1));
    assert_eq!(items[1].name, "bellows");
}

#[tokio::test]
async fn test_create_posts_payload_and_returns_echo() {
    let root = spawn_server().await;
    let payload = ItemCreate {
        name: "crucible".to_string(),
    };

    let echo = collection(&root, "items").create(&payload).await.unwrap();

    assert_eq!(echo.id, ItemId(21));
    assert_eq!(echo.name, "crucible");
}

#[tokio::test]
async fn test_remove_targets_item_path() {
    let root = spawn_server().await;
    let items = collection(&root, "items");

    items.remove(&ItemId(1)).await.unwrap();

    let missing = items.remove(&ItemId(5)).await.unwrap_err();
    match missing {
        RemoteError::Response { url, status } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/items/5"));
        }
        other => panic!("Expected Response error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unknown_route_is_response_error() {
    let root = spawn_server().await;
    let result = collection(&root, "nowhere").list().await;

    assert!(matches!(
        result,
        Err(RemoteError::Response { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let root = spawn_server().await;
    let result = collection(&root, "broken").list().await;

    assert!(matches!(result, Err(RemoteError::Decode { .. })));
}

#[tokio::test]
async fn test_refused_connection_is_transport_error() {
    // Bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let root = Url::parse(&format!("http://{}/", addr)).unwrap();
    let result = collection(&root, "items").list().await;

    assert!(matches!(result, Err(RemoteError::Transport { .. })));
}
