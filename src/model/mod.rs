//! Pure data structures for the catalog: identifiers, [`Product`], [`Comment`] and the
//! create/edit payload [`ProductDraft`].
//!
//! [`Product`] implements [`RemoteEntity`](crate::framework::RemoteEntity) in
//! [`catalog_store::entity`](crate::catalog_store::entity).

pub mod comment;
pub mod id;
mod lenient;
pub mod product;

pub use comment::*;
pub use id::*;
pub use product::*;
