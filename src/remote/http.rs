//! HTTP implementation of [`RemoteCollection`] over a JSON REST collection.

use super::{RemoteCollection, RemoteError};
use crate::framework::RemoteEntity;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::marker::PhantomData;
use std::time::Duration;
use tracing::{debug, instrument};

/// A REST collection such as `http://localhost:3001/products`.
#[derive(Debug)]
pub struct HttpCollection<T> {
    base: Url,
    http: Client,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for HttpCollection<T> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            http: self.http.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: RemoteEntity> HttpCollection<T> {
    /// Creates a client for the collection at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed or cannot carry path segments,
    /// or if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RemoteError> {
        let base = Url::parse(base_url).map_err(|e| {
            RemoteError::Transport(format!("invalid collection URL {base_url}: {e}"))
        })?;
        if base.cannot_be_a_base() {
            return Err(RemoteError::Transport(format!(
                "collection URL {base_url} cannot carry a path"
            )));
        }
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base,
            http,
            _entity: PhantomData,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn item_url(&self, id: &impl Display) -> Result<Url, RemoteError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| {
                RemoteError::Transport(format!("cannot address items under {}", self.base))
            })?
            .pop_if_empty()
            .push(&id.to_string());
        Ok(url)
    }
}

/// Turns a non-2xx response into a [`RemoteError::Status`].
async fn ensure_success(response: Response) -> Result<Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(RemoteError::from_status(status.as_u16(), &body))
}

async fn decode<R: DeserializeOwned>(response: Response) -> Result<R, RemoteError> {
    let response = ensure_success(response).await?;
    Ok(response.json::<R>().await?)
}

#[async_trait]
impl<T: RemoteEntity> RemoteCollection<T> for HttpCollection<T> {
    #[instrument(skip(self), fields(url = %self.base))]
    async fn list(&self) -> Result<Vec<T>, RemoteError> {
        debug!("GET collection");
        let response = self.http.get(self.base.clone()).send().await?;
        decode(response).await
    }

    #[instrument(skip(self))]
    async fn get(&self, id: &T::Id) -> Result<Option<T>, RemoteError> {
        let url = self.item_url(id)?;
        debug!(%url, "GET item");
        let response = self.http.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        decode(response).await.map(Some)
    }

    #[instrument(skip(self, draft))]
    async fn create(&self, draft: &T::Draft) -> Result<T, RemoteError> {
        debug!(?draft, "POST collection");
        let response = self.http.post(self.base.clone()).json(draft).send().await?;
        decode(response).await
    }

    #[instrument(skip(self, record))]
    async fn replace(&self, id: &T::Id, record: &T) -> Result<T, RemoteError> {
        let url = self.item_url(id)?;
        debug!(%url, ?record, "PUT item");
        let response = self.http.put(url).json(record).send().await?;
        decode(response).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &T::Id) -> Result<(), RemoteError> {
        let url = self.item_url(id)?;
        debug!(%url, "DELETE item");
        let response = self.http.delete(url).send().await?;
        ensure_success(response).await.map(|_| ())
    }
}
