//! # System Lifecycle
//!
//! Starting, sharing and stopping the catalog store.
//!
//! - [`CatalogConfig`] - where the products collection lives and how long to wait for it
//! - [`CatalogSystem`] - spawns the store actor over a remote client and hands out clients
//! - [`setup_tracing`] - initializes logging for the binary
//!
//! ## Shutdown
//!
//! The store actor stops once every client handle is dropped and no request is in
//! flight. [`CatalogSystem::shutdown`] drops its own client and waits for the actor
//! task, so it only returns after clones held elsewhere are gone too.
//!
//! A system installed with [`CatalogSystem::install`] lives for the rest of the
//! process and needs no teardown.

pub mod catalog_system;
pub mod config;
pub mod tracing;

pub use catalog_system::*;
pub use config::*;
pub use tracing::*;
