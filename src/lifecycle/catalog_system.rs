use crate::catalog_store::{self, CatalogError};
use crate::clients::CatalogClient;
use crate::detail::DetailSynchronizer;
use crate::lifecycle::CatalogConfig;
use crate::model::{Product, ProductId};
use crate::remote::{HttpCollection, RemoteCollection};
use std::sync::{Arc, OnceLock};
use tokio::task::JoinHandle;
use tracing::{error, info};

static GLOBAL: OnceLock<CatalogSystem> = OnceLock::new();

/// The runtime orchestrator for the catalog.
///
/// `CatalogSystem` is responsible for:
/// - **Wiring**: building the remote client from a [`CatalogConfig`]
/// - **Lifecycle**: spawning the store actor and stopping it again
/// - **Sharing**: handing out [`CatalogClient`] clones and detail synchronizers
///
/// Both constructors spawn a task and must be called inside a Tokio runtime.
///
/// # Example
///
/// ```rust,no_run
/// use catalog_sync::lifecycle::{CatalogConfig, CatalogSystem};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = CatalogSystem::new(&CatalogConfig::default())?;
///     system.catalog_client.fetch_all().await?;
///
///     let mut detail = system.synchronizer(1);
///     detail.load().await?;
///
///     drop(detail);
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct CatalogSystem {
    /// Client for the catalog store actor.
    pub catalog_client: CatalogClient,

    handle: JoinHandle<()>,
}

impl CatalogSystem {
    /// Start the store over the HTTP collection named by `config`.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let remote = HttpCollection::<Product>::new(&config.api_url, config.request_timeout)?;
        info!(url = %remote.base_url(), "Starting catalog system");
        Ok(Self::with_remote(Arc::new(remote), config.channel_capacity))
    }

    /// Start the store over any remote collection.
    pub fn with_remote(remote: Arc<dyn RemoteCollection<Product>>, capacity: usize) -> Self {
        let (actor, catalog_client) = catalog_store::new(remote, capacity);
        let handle = tokio::spawn(actor.run());
        Self {
            catalog_client,
            handle,
        }
    }

    /// A detail synchronizer for one product, sharing this system's store.
    pub fn synchronizer(&self, id: impl Into<ProductId>) -> DetailSynchronizer {
        DetailSynchronizer::new(self.catalog_client.clone(), id)
    }

    /// Make this system the process-wide instance returned by [`global`](Self::global).
    ///
    /// Fails if another system was installed first; the rejected system is dropped
    /// and its store stops once its clients are gone.
    pub fn install(self) -> Result<&'static Self, CatalogError> {
        GLOBAL
            .set(self)
            .map_err(|_| CatalogError::Setup("a catalog system is already installed".into()))?;
        info!("Catalog system installed");
        GLOBAL
            .get()
            .ok_or_else(|| CatalogError::Setup("catalog system was not installed".into()))
    }

    /// The installed system, if any.
    pub fn global() -> Option<&'static Self> {
        GLOBAL.get()
    }

    /// Gracefully shuts down the store.
    ///
    /// Drops this system's client, which closes the intent channel once no other
    /// clone is alive, then waits for the actor to apply its in-flight requests
    /// and exit.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down catalog system...");
        drop(self.catalog_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Catalog system shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ActorClient;
    use crate::framework::mock::MockRemote;
    use crate::lifecycle::CatalogConfig;

    #[tokio::test]
    async fn test_shutdown_waits_for_the_actor() {
        let mut mock = MockRemote::<Product>::new();
        mock.expect_list().return_ok(vec![Product::new(1, "Lamp", 1)]);
        let system = CatalogSystem::with_remote(mock.remote(), 4);

        system.catalog_client.fetch_all().await.unwrap();
        assert_eq!(system.catalog_client.snapshot().await.unwrap().len(), 1);

        system.shutdown().await.unwrap();
        mock.verify();
    }

    #[tokio::test]
    async fn test_invalid_url_is_a_setup_error() {
        let config = CatalogConfig::default().with_api_url("not a url");
        assert!(matches!(
            CatalogSystem::new(&config),
            Err(CatalogError::Setup(_))
        ));
    }

    #[tokio::test]
    async fn test_install_only_once() {
        let first = CatalogSystem::with_remote(MockRemote::<Product>::new().remote(), 4);
        let installed = first.install().unwrap();
        assert!(std::ptr::eq(installed, CatalogSystem::global().unwrap()));

        let second = CatalogSystem::with_remote(MockRemote::<Product>::new().remote(), 4);
        assert!(matches!(second.install(), Err(CatalogError::Setup(_))));
    }
}
