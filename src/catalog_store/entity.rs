//! [`RemoteEntity`] implementation for the [`Product`] domain type.
//!
//! This is what lets the generic [`ResourceActor`](crate::framework::ResourceActor)
//! cache products: the identifier, the creation payload, and the local checks that
//! run before anything is sent.
//!
//! Replacements are not checked here. A replacement carries the server's own copy
//! with one change applied, and whatever the server already holds is submitted back
//! as is; the change itself is checked where it is built (see
//! [`detail::draft`](crate::detail::draft)).

use crate::framework::RemoteEntity;
use crate::model::{Product, ProductDraft, ProductId};

impl RemoteEntity for Product {
    type Id = ProductId;
    type Draft = ProductDraft;
    const NOUN: &'static str = "product";
    const PLURAL: &'static str = "products";

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Rejects drafts without a name or with negative dimensions.
    fn validate_draft(draft: &ProductDraft) -> Result<(), String> {
        draft.validate()
    }
}
