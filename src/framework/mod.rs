//! Generic framework for caching a remote resource collection.
//!
//! This module provides the building blocks for a single-writer local cache of a
//! REST collection: the entity contract, the sequential executor that owns the
//! cached state, and the client used to dispatch intents to it.
//!
//! # Main Components
//!
//! - [`RemoteEntity`] - Trait that record types implement to be cached
//! - [`ResourceActor`] - Generic actor that owns a [`CollectionState`]
//! - [`ResourceClient`] - Type-safe, cloneable handle for sending requests
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for a scriptable stand-in for the remote collection.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
