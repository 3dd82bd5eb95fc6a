use crate::framework::{CollectionState, FrameworkError, RemoteEntity, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
///
/// This trait reduces boilerplate by providing default implementations for the
/// operations whose shape does not depend on the resource: loading one record,
/// deleting one, and reading the cached state.
#[async_trait]
pub trait ActorClient<T: RemoteEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Load one record from the server. `Ok(None)` when it does not exist.
    #[tracing::instrument(skip(self))]
    async fn fetch_one(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().fetch_one(id).await.map_err(Self::map_error)
    }

    /// Delete a record; the cache drops it once the server confirms.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// The cached state, ordered after every request sent before this call.
    async fn snapshot(&self) -> Result<CollectionState<T>, Self::Error> {
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
