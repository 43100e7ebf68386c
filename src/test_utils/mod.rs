//! Test utilities for post-shortcodes
//!
//! This module provides the in-memory host doubles used throughout the
//! test suites: a [`MetadataStore`](crate::host::MetadataStore) backed by a
//! hash map, a store whose every operation fails, and a builder-style
//! [`ContentContext`](crate::host::ContentContext) fixture describing a
//! post.
//!
//! It is compiled for unit tests automatically and exposed to the
//! integration suites through the `test-utils` cargo feature.

pub mod context;
pub mod store;

pub use context::PostFixture;
pub use store::{FailingStore, InMemoryStore};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Installs the tracing subscriber at most once regardless of how many
/// tests call it. Respects the `RUST_LOG` environment variable when no
/// explicit level is given.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(format!("post_shortcodes={level}"))
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        };

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}
