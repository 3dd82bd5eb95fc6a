//! # Catalog Store
//!
//! The exclusive owner of the local product collection.
//!
//! ## Overview
//!
//! The store is a [`ResourceActor<Product>`](crate::framework::ResourceActor): one task
//! that holds `{ items, loading, error }` and applies every change in sequence.
//! Callers never touch the collection; they dispatch intents through a
//! [`CatalogClient`] and read copies of [`CatalogState`].
//!
//! ## Structure
//!
//! - [`entity`] - [`RemoteEntity`](crate::framework::RemoteEntity) implementation for [`Product`]
//! - [`error`] - [`CatalogError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Rules
//!
//! - `fetch_all` is the only operation that replaces the whole collection.
//! - `update` replaces one item with the server's response, never with the submitted record.
//! - `delete` removes the item only after the server confirmed.
//! - `create` leaves the collection alone; reconcile with a refetch.
//! - Any failure leaves `items` untouched and sets `error`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use catalog_sync::catalog_store;
//! use catalog_sync::clients::ActorClient;
//! use catalog_sync::model::{Product, ProductId};
//! use catalog_sync::remote::HttpCollection;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let remote = HttpCollection::<Product>::new(
//!         "http://localhost:3001/products",
//!         Duration::from_secs(10),
//!     )?;
//!     let (actor, client) = catalog_store::new(Arc::new(remote), 32);
//!     tokio::spawn(actor.run());
//!
//!     client.fetch_all().await?;
//!     client.delete(ProductId::from(1)).await?;
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CatalogClient;
use crate::framework::{CollectionState, ResourceActor};
use crate::model::Product;
use crate::remote::RemoteCollection;
use std::sync::Arc;

/// Snapshot of the store as handed to consumers.
pub type CatalogState = CollectionState<Product>;

/// Creates a new catalog store actor and its client.
pub fn new(
    remote: Arc<dyn RemoteCollection<Product>>,
    buffer_size: usize,
) -> (ResourceActor<Product>, CatalogClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, remote);
    (actor, CatalogClient::new(generic_client))
}
