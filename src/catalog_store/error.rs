//! Error types for the catalog store.

use crate::framework::FrameworkError;
use crate::remote::RemoteError;
use thiserror::Error;

/// Errors surfaced by [`CatalogClient`](crate::clients::CatalogClient) operations.
///
/// Every variant displays as a message fit for a toast or banner.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The input was rejected before any request was made.
    #[error("{0}")]
    Validation(String),

    /// The remote collection reported a failure.
    #[error("{0}")]
    Remote(String),

    /// The remote client could not be constructed.
    #[error("Remote client setup failed: {0}")]
    Setup(String),

    /// An error occurred while communicating with the store actor.
    #[error("Catalog store unavailable: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CatalogError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Validation(msg) => CatalogError::Validation(msg),
            FrameworkError::Remote(msg) => CatalogError::Remote(msg),
            other @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                CatalogError::ActorCommunicationError(other.to_string())
            }
        }
    }
}

impl From<RemoteError> for CatalogError {
    fn from(e: RemoteError) -> Self {
        CatalogError::Setup(e.to_string())
    }
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::ActorCommunicationError(msg)
    }
}
