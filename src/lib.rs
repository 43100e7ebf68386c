//! post-shortcodes - Content shortcodes for CMS post bodies
//!
//! A plugin-style library that supplies two template-generation shortcodes
//! (`link_with_content` and `image_with_src`) and a save-time content guard
//! for a blogging platform. The host platform parses `[name attr="value"]`
//! tokens out of post content and dispatches them through the
//! [`shortcodes::ShortcodeRegistry`]; each registered expander turns its
//! parameter map into an HTML fragment using values drawn from the current
//! post.
//!
//! # Architecture Overview
//!
//! The crate sits behind two trait seams the host implements:
//! - [`host::ContentContext`] - read-only accessors for the post being
//!   rendered (id, permalink, title, excerpt, featured image)
//! - [`host::MetadataStore`] - the per-post key/value store backing custom
//!   fields and the guard's nesting flag
//!
//! Everything downstream of those seams lives here:
//! - [`shortcodes`] - registry plus the two expanders and their typed
//!   attribute structs
//! - [`guard`] - detects shortcodes nested inside HTML attribute values,
//!   persists the per-post flag, and appends the editorial warning to the
//!   host's post-updated messages
//! - [`sanitize`] - attribute/URL escaping and the permissive post-body
//!   HTML sanitizer the expanders emit through
//! - [`plugin`] - the facade wiring registration, the save hook, and the
//!   admin-message filter together
//! - [`config`] - TOML-backed plugin configuration (documentation links
//!   advertised in the guard warning)
//!
//! # Error Model
//!
//! The render path never fails: every shortcode parameter is an optional
//! string defaulting to empty, and a missing or unreadable custom field
//! collapses to an empty fragment. Only the metadata store surface is
//! fallible ([`core::StoreError`]), and only the save path propagates it.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::collections::HashMap;
//! use post_shortcodes::plugin::ShortcodesPlugin;
//! use post_shortcodes::shortcodes::ShortcodeRegistry;
//! # use post_shortcodes::host::{ContentContext, MetadataStore};
//! # fn host_context() -> Box<dyn ContentContext> { unimplemented!() }
//! # fn host_store() -> Box<dyn MetadataStore> { unimplemented!() }
//!
//! let plugin = ShortcodesPlugin::default();
//! let mut registry = ShortcodeRegistry::new();
//! plugin.register_shortcodes(&mut registry);
//!
//! let ctx = host_context();
//! let store = host_store();
//!
//! // The host's token parser produced this parameter map from
//! // [link_with_content link_class="more"].
//! let mut params = HashMap::new();
//! params.insert("link_class".to_string(), "more".to_string());
//!
//! let markup = registry.expand("link_with_content", &params, ctx.as_ref(), store.as_ref());
//! assert!(markup.is_some());
//! ```

// Shared types and errors
pub mod core;

// Host-implemented trait seams
pub mod host;

// Plugin configuration
pub mod config;

// Markup sanitization consumed by the expanders
pub mod sanitize;

// Shortcode registry and expanders
pub mod shortcodes;

// Save-time attribute nesting guard and admin warning
pub mod guard;

// Host wiring facade
pub mod plugin;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
