//! Trait seams implemented by the host platform.
//!
//! The crate never talks to the platform directly. The host hands each
//! shortcode invocation a [`ContentContext`] describing the post currently
//! being rendered, and a [`MetadataStore`] for per-post key/value lookups
//! (custom fields, plus the guard's nesting flag). Both seams follow the
//! platform's own semantics: absent values are empty strings, and only the
//! store's mutating operations are fallible.
//!
//! # Implementing the seams
//!
//! A typical host adapter wraps whatever request-scoped handles the
//! platform exposes:
//!
//! ```rust,no_run
//! use post_shortcodes::core::ItemId;
//! use post_shortcodes::host::ContentContext;
//!
//! struct RequestPost {
//!     id: ItemId,
//!     permalink: String,
//!     title: String,
//! }
//!
//! impl ContentContext for RequestPost {
//!     fn id(&self) -> ItemId {
//!         self.id
//!     }
//!     fn permalink(&self) -> String {
//!         self.permalink.clone()
//!     }
//!     fn title(&self) -> String {
//!         self.title.clone()
//!     }
//!     fn excerpt(&self) -> String {
//!         String::new()
//!     }
//!     fn featured_image_url(&self, _size: Option<&str>) -> String {
//!         String::new()
//!     }
//! }
//! ```

use tracing::warn;

use crate::core::{ItemId, StoreError};

/// Read-only accessors for the content item currently being rendered.
///
/// Every accessor returns an owned `String`, empty when the platform has no
/// value (a post without an excerpt, a post without a featured image). The
/// expanders treat empty exactly like the platform does: the fragment is
/// still emitted, just with an empty attribute value.
pub trait ContentContext {
    /// The item's identifier in the host platform.
    fn id(&self) -> ItemId;

    /// Canonical URL of the item.
    fn permalink(&self) -> String;

    /// Title of the item.
    fn title(&self) -> String;

    /// Excerpt of the item, empty when none is set.
    fn excerpt(&self) -> String;

    /// URL of the item's featured image.
    ///
    /// With `size` the platform-specific named size variant is returned
    /// (e.g. `"large"`, `"thumbnail"`); `None` means the full-size image.
    /// Empty when the item has no featured image or the named size does not
    /// exist.
    fn featured_image_url(&self, size: Option<&str>) -> String;
}

/// Per-item key/value store contract.
///
/// Backs both custom-field lookups on the render path and the nesting flag
/// on the save path. `read` distinguishes "no value" (`Ok(None)`) from a
/// backend failure (`Err`); callers on the render path collapse both to an
/// empty string via [`meta_or_empty`].
pub trait MetadataStore {
    /// Read the value stored for `key` on `item`, `None` when absent.
    fn read(&self, item: ItemId, key: &str) -> Result<Option<String>, StoreError>;

    /// Create or overwrite the value stored for `key` on `item`.
    fn write(&mut self, item: ItemId, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value stored for `key` on `item`. Deleting an absent key
    /// is not an error.
    fn delete(&mut self, item: ItemId, key: &str) -> Result<(), StoreError>;
}

/// Custom-field lookup with the render path's error model.
///
/// A missing value and a failed read both yield the empty string; the
/// failure is logged at warn level and never propagated, so a broken store
/// degrades to empty markup fragments rather than a render error.
pub fn meta_or_empty(store: &dyn MetadataStore, item: ItemId, key: &str) -> String {
    match store.read(item, key) {
        Ok(Some(value)) => value,
        Ok(None) => String::new(),
        Err(err) => {
            warn!("metadata read failed for item {item} key '{key}': {err}");
            String::new()
        }
    }
}
