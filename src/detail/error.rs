//! Error types for the detail synchronizer.

use crate::model::{CommentId, ProductId};
use thiserror::Error;

/// Errors that can occur while working on a single product.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DetailError {
    /// The server has no product with this identifier.
    #[error("No product found: {0}")]
    NotFound(ProductId),

    /// The action needs a loaded product.
    #[error("Product {0} is not loaded")]
    NotLoaded(ProductId),

    /// The action is not allowed in the current phase.
    #[error("Cannot {action} while {phase}")]
    InvalidPhase {
        action: &'static str,
        phase: &'static str,
    },

    #[error("Comment cannot be empty")]
    EmptyComment,

    #[error("Comment {0} not found")]
    CommentNotFound(CommentId),

    /// The edit was rejected before any request was made.
    #[error("{0}")]
    Validation(String),

    /// Loading from the server failed.
    #[error("{0}")]
    Load(String),

    /// Saving to the server failed; the product was left as it was.
    #[error("{0}")]
    Save(String),
}
