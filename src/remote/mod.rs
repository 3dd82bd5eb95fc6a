//! # Remote Resource Client
//!
//! The boundary to the REST collection that owns the source of truth.
//!
//! | Operation | Request | Response |
//! |-----------|---------|----------|
//! | [`list`](RemoteCollection::list) | `GET collection` | JSON array |
//! | [`get`](RemoteCollection::get) | `GET collection/{id}` | JSON record, 404 means absent |
//! | [`create`](RemoteCollection::create) | `POST collection` | JSON record with server-assigned id |
//! | [`replace`](RemoteCollection::replace) | `PUT collection/{id}` | JSON record (authoritative) |
//! | [`delete`](RemoteCollection::delete) | `DELETE collection/{id}` | empty |
//!
//! [`HttpCollection`] talks to a real server. Tests use
//! [`MockRemote`](crate::framework::mock::MockRemote) instead.

pub mod error;
pub mod http;

pub use error::*;
pub use http::*;

use crate::framework::RemoteEntity;
use async_trait::async_trait;

/// A remote collection of `T` records.
///
/// Implementations perform I/O only; they never touch the local cache.
#[async_trait]
pub trait RemoteCollection<T: RemoteEntity>: Send + Sync + 'static {
    /// Fetches the whole collection.
    async fn list(&self) -> Result<Vec<T>, RemoteError>;

    /// Fetches one record. `Ok(None)` when the server reports it missing.
    async fn get(&self, id: &T::Id) -> Result<Option<T>, RemoteError>;

    /// Submits a new record; the response carries the assigned identifier.
    async fn create(&self, draft: &T::Draft) -> Result<T, RemoteError>;

    /// Replaces a record wholesale and returns the server's stored version.
    async fn replace(&self, id: &T::Id, record: &T) -> Result<T, RemoteError>;

    async fn delete(&self, id: &T::Id) -> Result<(), RemoteError>;
}
