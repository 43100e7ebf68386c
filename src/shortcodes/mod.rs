//! Shortcode registry and the two template-generation expanders.
//!
//! The host platform owns token parsing: it locates `[name attr="value"]`
//! tokens in post content, splits them into a name and a [`ParameterMap`],
//! and dispatches through a [`ShortcodeRegistry`]. This module supplies the
//! registry plus the two handlers the plugin registers:
//!
//! - [`link_with_content`](link) - an anchor tag built from the current
//!   post, e.g. `[link_with_content]` renders
//!   `<a href="<permalink>" title="<title>">title</a>`
//! - [`image_with_src`](image) - an image tag, optionally wrapped in an
//!   anchor, defaulting to the post's featured image
//!
//! Both expanders are stateless: each invocation materializes its
//! parameter map into a typed attribute struct (unknown keys ignored,
//! missing keys defaulted, some defaults computed from the post) and
//! returns a markup string. They never fail; see the crate-level error
//! model.

use std::collections::HashMap;

use tracing::debug;

use crate::host::{ContentContext, MetadataStore};

pub mod image;
pub mod link;


pub use image::{ImageAttrs, expand_image_with_src};
pub use link::{LinkAttrs, expand_link_with_content};

/// Shortcode name handled by [`link::expand_link_with_content`].
pub const LINK_WITH_CONTENT: &str = "link_with_content";

/// Shortcode name handled by [`image::expand_image_with_src`].
pub const IMAGE_WITH_SRC: &str = "image_with_src";

/// Attribute map for one shortcode invocation, as produced by the host's
/// token parser. Keys outside an expander's recognized set are ignored.
pub type ParameterMap = HashMap<String, String>;

/// Expander invoked by the registry for one token occurrence.
pub type ShortcodeHandler =
    Box<dyn Fn(&ParameterMap, &dyn ContentContext, &dyn MetadataStore) -> String>;

/// Name → handler table the host dispatches parsed tokens through.
///
/// Registration follows the host dispatcher's semantics: registering a name
/// twice replaces the earlier handler.
#[derive(Default)]
pub struct ShortcodeRegistry {
    handlers: HashMap<String, ShortcodeHandler>,
}

impl ShortcodeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register `handler` for the shortcode `name`, replacing any handler
    /// previously registered under that name.
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&ParameterMap, &dyn ContentContext, &dyn MetadataStore) -> String + 'static,
    {
        let name = name.into();
        debug!("registering shortcode '{name}'");
        self.handlers.insert(name, Box::new(handler));
    }

    /// Expand one token occurrence.
    ///
    /// Returns `None` when no handler is registered for `name`; the host
    /// leaves the raw token in place in that case.
    pub fn expand(
        &self,
        name: &str,
        params: &ParameterMap,
        ctx: &dyn ContentContext,
        store: &dyn MetadataStore,
    ) -> Option<String> {
        match self.handlers.get(name) {
            Some(handler) => {
                debug!("expanding shortcode '{name}' for item {}", ctx.id());
                Some(handler(params, ctx, store))
            }
            None => {
                debug!("no handler registered for shortcode '{name}'");
                None
            }
        }
    }

    /// Names with a registered handler, in no particular order.
    pub fn names(&self) -> Vec<&str> {
        self.handlers.keys().map(String::as_str).collect()
    }
}

/// Presence test matching the platform's attribute semantics: a parameter
/// is "set" when its value is non-empty.
pub(crate) fn is_set(value: &str) -> bool {
    !value.is_empty()
}
