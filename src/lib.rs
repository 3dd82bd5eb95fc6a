//! # Catalog Sync
//!
//! > **A client-side catalog manager built on a resource-oriented actor.**
//!
//! This crate keeps a local, eventually consistent copy of a remote REST collection of
//! products, each carrying an ordered list of comments, and lets callers search, sort,
//! create, edit and delete products and comments.
//!
//! ## 🏗️ Design
//!
//! ### One owner for the collection
//! The product collection lives inside a single [`ResourceActor`](framework::ResourceActor).
//! Every change, whether asked for by a caller or delivered by a finished request, is
//! applied by that one task in sequence. Callers hold a cloneable
//! [`CatalogClient`](clients::CatalogClient) and read copies of the state.
//!
//! ### The server is the source of truth
//! The local collection is a cache. A fetch replaces it wholesale; an update replaces one
//! item with what the server returned; a delete removes the item only after the server
//! confirmed it. Nothing is applied optimistically.
//!
//! ### Comments are part of the product
//! There is no comment endpoint. The [`detail`] module adds or removes a comment by
//! building a complete new product and submitting it as a replacement.
//!
//! ### Completion order
//! Requests run concurrently in their own tasks and are applied in the order they
//! complete, not the order they were issued. A slow response can overwrite newer state.
//! There is no version check; the last write wins.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic store actor, its client and the [`MockRemote`](framework::mock::MockRemote)
//! used by tests.
//!
//! ### 2. The Wire ([`remote`])
//! [`RemoteCollection`](remote::RemoteCollection) and its HTTP implementation.
//!
//! ### 3. The Data ([`model`])
//! [`Product`](model::Product), [`Comment`](model::Comment) and their identifiers.
//!
//! ### 4. The Store ([`catalog_store`], [`clients`])
//! The product store and the typed client over it.
//!
//! ### 5. The Views ([`projection`], [`detail`])
//! The filtered and sorted list, and the single-product synchronizer.
//!
//! ### 6. The Orchestrator ([`lifecycle`])
//! Configuration, startup, shutdown and logging.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # List products whose name contains "lamp", largest count first
//! RUST_LOG=info catalog-sync list --query lamp --sort nameAsc_countDesc
//!
//! # Add a comment to product 1
//! catalog-sync comment 1 "Arrived in one piece"
//! ```

pub mod catalog_store;
pub mod clients;
pub mod detail;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod projection;
pub mod remote;
