//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing`
//! crate for the library and the command-line front end.
//!
//! ## Configuration
//!
//! A compact format that hides the module prefix (`with_target(false)`), filtered by
//! the `RUST_LOG` environment variable.
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: startup and shutdown with the final item count
//! - **Requests**: every intent at debug, every applied completion at info or warn
//! - **Detail actions**: loads, saves and comment changes with the product id
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info catalog-sync list
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug catalog-sync show 1
//!
//! # Only the store
//! RUST_LOG=catalog_sync::framework=debug catalog-sync list
//! ```
//!
//! With `RUST_LOG=debug` the client wrappers record the submitted record once at the
//! start of the call:
//!
//! ```text
//! DEBUG update{id=1}: Sending request product=Product { .. }
//!  INFO update{id=1}: Updated entity_type="Product" id=1
//! ```

/// Initialize the global subscriber. Call once, from the binary.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
