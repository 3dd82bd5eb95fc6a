//! # Catalog Client
//!
//! Provides a high-level API for interacting with the catalog store.
//! It wraps a `ResourceClient<Product>` and exposes catalog-specific methods.
use crate::catalog_store::{CatalogError, CatalogState};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Product, ProductDraft};
use crate::projection::{self, SortMode};
use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{debug, info, instrument};

/// Client for interacting with the catalog store.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Product>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CatalogError::from(e)
    }
}

impl CatalogClient {
    /// Replace the cached collection with the server's.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError> {
        debug!("Sending request");
        self.inner.fetch_all().await.map_err(CatalogError::from)
    }

    /// Submit a new product.
    ///
    /// The returned product is the server's; the cache is not touched. Call
    /// [`fetch_all`](Self::fetch_all) to reconcile.
    #[instrument(skip(self))]
    pub async fn create(&self, draft: ProductDraft) -> Result<Product, CatalogError> {
        debug!("Sending request");
        let created = self
            .inner
            .create(draft.normalized())
            .await
            .map_err(CatalogError::from)?;
        info!(id = %created.id, "Product created");
        Ok(created)
    }

    /// Submit a full replacement; the cache takes the server's response.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub async fn update(&self, product: Product) -> Result<Product, CatalogError> {
        debug!(?product, "Sending request");
        self.inner.update(product).await.map_err(CatalogError::from)
    }

    pub async fn dismiss_error(&self) -> Result<(), CatalogError> {
        self.inner.dismiss_error().await.map_err(CatalogError::from)
    }

    /// The most recently published state.
    pub fn current(&self) -> CatalogState {
        self.inner.current()
    }

    pub fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.inner.subscribe()
    }

    /// The list view of the current state.
    pub fn project(&self, query: &str, mode: SortMode) -> Vec<Product> {
        projection::project(&self.current().items, query, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockRemote;
    use crate::model::ProductId;
    use crate::remote::RemoteError;

    fn start(mock: &MockRemote<Product>) -> CatalogClient {
        let (actor, client) = crate::catalog_store::new(mock.remote(), 10);
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn test_create_trims_the_name() {
        let mut mock = MockRemote::<Product>::new();
        mock.expect_create().return_ok(Product::new(9, "Desk", 0));
        let client = start(&mock);

        client.create(ProductDraft::new("  Desk  ")).await.unwrap();

        assert_eq!(mock.created()[0]["name"], "Desk");
        mock.verify();
    }

    #[tokio::test]
    async fn test_create_failure_carries_server_message() {
        let mut mock = MockRemote::<Product>::new();
        mock.expect_create().return_err(RemoteError::from_status(
            400,
            r#"{"message":"Name already used"}"#,
        ));
        let client = start(&mock);

        let result = client.create(ProductDraft::new("Desk")).await;
        assert_eq!(result, Err(CatalogError::Remote("Name already used".into())));
        let state = client.snapshot().await.unwrap();
        assert_eq!(state.error.as_deref(), Some("Name already used"));
    }

    #[tokio::test]
    async fn test_empty_name_is_a_validation_error() {
        let mock = MockRemote::<Product>::new();
        let client = start(&mock);

        let result = client.create(ProductDraft::new("   ")).await;
        assert_eq!(result, Err(CatalogError::Validation("Name is required".into())));
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    async fn test_project_reads_the_published_state() {
        let mut mock = MockRemote::<Product>::new();
        mock.expect_list().return_ok(vec![
            Product::new(1, "Banana", 3),
            Product::new(2, "apple", 5),
        ]);
        let client = start(&mock);
        client.fetch_all().await.unwrap();

        let view = client.project("AN", SortMode::default());
        let ids: Vec<ProductId> = view.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![ProductId::from(1)]);
    }
}
