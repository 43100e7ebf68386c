//! Host wiring for the shortcode plugin.
//!
//! [`ShortcodesPlugin`] is the single object a host adapter holds. It owns
//! the [`PluginConfig`] and exposes the three integration points the
//! platform's plugin lifecycle calls into:
//!
//! 1. at startup, [`register_shortcodes`](ShortcodesPlugin::register_shortcodes)
//!    installs both handlers into the host's dispatch registry;
//! 2. when a post is saved, [`content_saved`](ShortcodesPlugin::content_saved)
//!    runs the attribute-nesting guard over the raw content;
//! 3. when the post editor renders its confirmation message,
//!    [`filter_updated_messages`](ShortcodesPlugin::filter_updated_messages)
//!    appends the editorial warning for flagged posts.

use tracing::debug;

use crate::config::PluginConfig;
use crate::core::{ItemId, StoreError};
use crate::guard;
use crate::guard::UpdatedMessages;
use crate::host::MetadataStore;
use crate::shortcodes::{
    IMAGE_WITH_SRC, LINK_WITH_CONTENT, ShortcodeRegistry, expand_image_with_src,
    expand_link_with_content,
};

/// The plugin facade; one instance per host process.
#[derive(Debug, Default)]
pub struct ShortcodesPlugin {
    config: PluginConfig,
}

impl ShortcodesPlugin {
    /// Create a plugin with explicit configuration.
    pub fn new(config: PluginConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Install `link_with_content` and `image_with_src` into `registry`.
    pub fn register_shortcodes(&self, registry: &mut ShortcodeRegistry) {
        registry.register(LINK_WITH_CONTENT, expand_link_with_content);
        registry.register(IMAGE_WITH_SRC, expand_image_with_src);
    }

    /// Save hook: recompute the nesting flag for `item` from `content`.
    ///
    /// Revision saves are ignored entirely; the flag keeps whatever state
    /// the last real save left it in.
    pub fn content_saved(
        &self,
        store: &mut dyn MetadataStore,
        item: ItemId,
        content: &str,
        is_revision: bool,
    ) -> Result<(), StoreError> {
        if is_revision {
            debug!("skipping revision save of item {item}");
            return Ok(());
        }

        guard::inspect_saved_content(store, item, content)
    }

    /// Admin-message filter: append the warning block for a flagged,
    /// currently-viewed item. Mutates `messages` in place and returns it,
    /// matching the host's filter contract.
    pub fn filter_updated_messages<'a>(
        &self,
        store: &dyn MetadataStore,
        viewed: Option<ItemId>,
        messages: &'a mut UpdatedMessages,
    ) -> &'a mut UpdatedMessages {
        guard::append_attribute_warning(store, viewed, messages, &self.config)
    }
}
