//! Draft builders for the read-modify-write protocol.
//!
//! Each function takes the current product and returns a new, complete product value
//! to submit as a replacement. The input is never modified, so a failed submission
//! leaves nothing to roll back.

use super::DetailError;
use crate::model::{Comment, CommentId, Product};
use std::collections::HashSet;

/// The next comment identifier for `comments`.
///
/// One more than the largest numeric identifier in the list (string identifiers
/// that spell integers count), or `1` for a list without numeric identifiers. When
/// the largest identifier is `i64::MAX` the smallest unused positive one is taken
/// instead. The result is unique within the list no matter how fast comments are
/// added.
pub fn next_comment_id(comments: &[Comment]) -> CommentId {
    let used: HashSet<i64> = comments.iter().filter_map(|c| c.id.as_int()).collect();
    let next = match used.iter().copied().max() {
        None => 1,
        Some(max) => match max.checked_add(1) {
            Some(next) => next.max(1),
            None => (1..=i64::MAX).find(|n| !used.contains(n)).unwrap_or(1),
        },
    };
    CommentId::from(next)
}

/// A copy of `product` with a new comment appended.
///
/// Only the new comment is checked. Whatever the product already holds is carried
/// over unchanged, even entries the server accepted without text.
///
/// # Errors
/// [`DetailError::EmptyComment`] when `text` is blank after trimming.
/// [`DetailError::Validation`] when the new identifier is already taken.
pub fn append_comment(
    product: &Product,
    text: &str,
    date: impl Into<String>,
) -> Result<Product, DetailError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DetailError::EmptyComment);
    }
    let id = next_comment_id(&product.comments);
    if product.comment(&id).is_some() {
        return Err(DetailError::Validation(format!("Comment id {id} is already used")));
    }
    let comment = Comment::new(
        id,
        product.id.clone(),
        text,
        date,
    );
    let mut comments = product.comments.clone();
    comments.push(comment);
    Ok(product.clone().with_comments(comments))
}

/// A copy of `product` without the comment `id`; every other comment keeps its place.
///
/// # Errors
/// [`DetailError::CommentNotFound`] when no comment has this identifier.
pub fn remove_comment(product: &Product, id: &CommentId) -> Result<Product, DetailError> {
    if product.comment(id).is_none() {
        return Err(DetailError::CommentNotFound(id.clone()));
    }
    let comments = product
        .comments
        .iter()
        .filter(|c| &c.id != id)
        .cloned()
        .collect();
    Ok(product.clone().with_comments(comments))
}
