//! Represents a product in the catalog.
//!
//! # Remote Entity
//! [`Product`] implements the [`RemoteEntity`](crate::framework::RemoteEntity) trait,
//! allowing it to be cached by a [`ResourceActor`](crate::framework::ResourceActor).
//! Creation goes through [`ProductDraft`]; every later change is a whole-record
//! replacement, including changes to the embedded [`Comment`] list.

use crate::model::lenient;
use crate::model::{Comment, CommentId, ProductId};
use serde::{Deserialize, Serialize};

/// Physical dimensions. Either side may be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    fn validate(&self) -> Result<(), String> {
        for (side, value) in [("width", self.width), ("height", self.height)] {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(format!("Size {side} must be a nonnegative number"));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::count")]
    pub count: i64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub size: Size,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub weight: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub comments: Vec<Comment>,
}

impl Product {
    /// Creates a new Product with no comments.
    ///
    /// # Arguments
    /// * `id` - Identifier (normally assigned by the server)
    /// * `name` - Display name
    /// * `count` - Units in stock
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, count: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            count,
            image_url: String::new(),
            size: Size::default(),
            weight: String::new(),
            comments: Vec::new(),
        }
    }

    /// Applies an edit dialog's fields, keeping this product's identifier and comments.
    pub fn with_draft(&self, draft: ProductDraft) -> Self {
        Self {
            id: self.id.clone(),
            name: draft.name,
            count: draft.count,
            image_url: draft.image_url,
            size: draft.size,
            weight: draft.weight,
            comments: self.comments.clone(),
        }
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    pub fn comment(&self, id: &CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| &c.id == id)
    }
}

/// Payload for creating a product, and the field set of the edit dialog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub count: i64,
    pub image_url: String,
    pub size: Size,
    pub weight: String,
    pub comments: Vec<Comment>,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Prefills the edit dialog from an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            count: product.count,
            image_url: product.image_url.clone(),
            size: product.size,
            weight: product.weight.clone(),
            comments: product.comments.clone(),
        }
    }

    pub fn with_count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
        self.weight = weight.into();
        self
    }

    /// Trims the name, as it is stored.
    pub fn normalized(mut self) -> Self {
        let trimmed = self.name.trim();
        if trimmed.len() != self.name.len() {
            self.name = trimmed.to_string();
        }
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        self.size.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_sparse_records() {
        let product: Product = serde_json::from_value(json!({
            "id": "9",
            "name": "Lamp",
            "count": "4",
            "imageUrl": null,
            "size": { "width": 10 },
        }))
        .unwrap();

        assert_eq!(product.id, ProductId::from(9));
        assert_eq!(product.count, 4);
        assert_eq!(product.image_url, "");
        assert_eq!(product.size.width, Some(10.0));
        assert_eq!(product.size.height, None);
        assert!(product.comments.is_empty());
    }

    #[test]
    fn encodes_the_wire_shape() {
        let product = Product::new(1, "Chair", 3).with_comments(vec![Comment::new(
            CommentId::from(10),
            ProductId::from(1),
            "sturdy",
            "1/2/2024, 10:00:00 AM",
        )]);

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Chair",
                "count": 3,
                "imageUrl": "",
                "size": {},
                "weight": "",
                "comments": [{
                    "id": 10,
                    "productId": 1,
                    "description": "sturdy",
                    "date": "1/2/2024, 10:00:00 AM",
                }],
            })
        );
    }

    #[test]
    fn draft_validation() {
        assert!(ProductDraft::new("  ").validate().is_err());
        assert!(ProductDraft::new("Desk")
            .with_size(Size::new(-1.0, 2.0))
            .validate()
            .is_err());
        assert!(ProductDraft::new("Desk").validate().is_ok());
        assert_eq!(ProductDraft::new("  Desk ").normalized().name, "Desk");
    }

    #[test]
    fn edits_keep_identity_and_comments() {
        let original = Product::new(5, "Old", 1).with_comments(vec![Comment::new(
            CommentId::from(1),
            ProductId::from(5),
            "keep me",
            "",
        )]);

        let edited = original.with_draft(ProductDraft::new("New").with_count(8));
        assert_eq!(edited.id, original.id);
        assert_eq!(edited.name, "New");
        assert_eq!(edited.count, 8);
        assert_eq!(edited.comments, original.comments);
    }
}
