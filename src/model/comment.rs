use crate::model::lenient;
use crate::model::{CommentId, ProductId};
use serde::{Deserialize, Serialize};

/// A comment embedded in a [`Product`](crate::model::Product).
///
/// Comments are not an addressable resource: they are created and removed only by
/// replacing the whole owning product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub product_id: ProductId,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub description: String,
    /// Display timestamp, stored as the text it was rendered with.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub date: String,
}

impl Comment {
    pub fn new(
        id: CommentId,
        product_id: ProductId,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            product_id,
            description: description.into(),
            date: date.into(),
        }
    }
}
