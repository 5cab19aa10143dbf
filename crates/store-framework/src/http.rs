//! # HTTP Remote Collection
//!
//! [`HttpCollection`] implements [`RemoteCollection`] over a JSON REST endpoint:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | `list`    | `GET {base}` |
//! | `create`  | `POST {base}` with a JSON body |
//! | `remove`  | `DELETE {base}/{id}` (body ignored) |

use crate::entity::StoreEntity;
use crate::error::RemoteError;
use crate::remote::RemoteCollection;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use tracing::debug;

/// A remote collection reached over HTTP.
pub struct HttpCollection<T> {
    http: Client,
    base: Url,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for HttpCollection<T> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base: self.base.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: StoreEntity> HttpCollection<T> {
    /// Creates a collection rooted at `base` (e.g. `https://fakestoreapi.com/products`).
    ///
    /// The `Client` is shared so several collections reuse one connection pool.
    pub fn new(http: Client, base: Url) -> Self {
        Self {
            http,
            base,
            _entity: PhantomData,
        }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn collection_url(&self) -> String {
        self.base.as_str().trim_end_matches('/').to_string()
    }

    fn item_url(&self, id: &T::Id) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    /// Sends the request and rejects non-success statuses.
    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Response, RemoteError> {
        let response = request
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| RemoteError::transport(url, e))?;

        let status = response.status();
        debug!(%url, status = status.as_u16(), "Response");
        if !status.is_success() {
            return Err(RemoteError::Response {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn read_json<D: DeserializeOwned>(response: Response, url: &str) -> Result<D, RemoteError> {
        let body = response
            .bytes()
            .await
            .map_err(|e| RemoteError::transport(url, e))?;
        serde_json::from_slice(&body).map_err(|e| RemoteError::decode(url, e))
    }
}

#[async_trait]
impl<T: StoreEntity> RemoteCollection<T> for HttpCollection<T> {
    async fn list(&self) -> Result<Vec<T>, RemoteError> {
        let url = self.collection_url();
        let response = self.send(self.http.get(&url), &url).await?;
        Self::read_json(response, &url).await
    }

    async fn create(&self, payload: &T::Create) -> Result<T, RemoteError> {
        let url = self.collection_url();
        let response = self.send(self.http.post(&url).json(payload), &url).await?;
        Self::read_json(response, &url).await
    }

    async fn remove(&self, id: &T::Id) -> Result<(), RemoteError> {
        let url = self.item_url(id);
        self.send(self.http.delete(&url), &url).await?;
        Ok(())
    }
}
