//! Save-time guard for shortcodes nested inside HTML attribute values.
//!
//! The platform stopped expanding shortcodes placed inside attribute
//! values, so `<a href="[the_permalink]">` silently renders the raw token.
//! This module detects that authoring pattern when a post is saved,
//! persists a per-post flag in the metadata store, and appends an
//! editorial warning to the host's post-updated confirmation messages
//! while the flag is set.
//!
//! Detection is a deliberate textual heuristic, not a parser: it looks for
//! a quote character immediately followed by `[` anywhere in the raw
//! content. That false-positives on attribute values that merely start
//! with a bracket and false-negatives when whitespace separates the quote
//! from the token. Editors have tuned their content around exactly these
//! boundaries, so the heuristic must not be "improved".
//!
//! The flag has no lifecycle of its own: every save recomputes it from the
//! current content, writing `yes` or deleting the key.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use tracing::debug;

use crate::config::PluginConfig;
use crate::core::{ItemId, StoreError};
use crate::host::{MetadataStore, meta_or_empty};

/// Metadata key the nesting flag is stored under. The leading underscore
/// marks it as hidden from the host's custom-field editor.
pub const FLAG_META_KEY: &str = "_shortcode_in_attr";

/// Value stored when the flag is set.
pub const FLAG_VALUE: &str = "yes";

/// Outcome codes of the host's ten post-save confirmation variants
/// (created, updated, restored, scheduled, and so on).
pub const OUTCOME_CODES: RangeInclusive<u8> = 1..=10;

/// The host's post-updated confirmation messages, keyed by outcome code.
pub type UpdatedMessages = BTreeMap<u8, String>;

/// Whether `content` contains any shortcode token opener at all.
///
/// Empty content counts as shortcode-free.
pub fn has_shortcodes(content: &str) -> bool {
    !content.is_empty() && content.contains('[')
}

/// Whether `content` nests a shortcode token inside an attribute value.
///
/// Matches a quote immediately followed by `[`:
///
/// ```text
/// <a href="[the_permalink]" title="[the_title]">x</a>   -> true
/// <a href='[the_permalink]'>x</a>                       -> true
/// <a href='https://example.com'>[the_title]</a>         -> false
/// ```
pub fn has_shortcodes_in_attributes(content: &str) -> bool {
    content.contains("=\"[") || content.contains("='[")
}

/// Recompute the nesting flag for `item` from freshly saved `content`.
///
/// Shortcode-free content and content without attribute nesting both clear
/// the flag; nested content sets it to [`FLAG_VALUE`]. Saving the same
/// content twice yields the same flag state both times.
pub fn inspect_saved_content(
    store: &mut dyn MetadataStore,
    item: ItemId,
    content: &str,
) -> Result<(), StoreError> {
    if !has_shortcodes(content) {
        store.delete(item, FLAG_META_KEY)?;
        return Ok(());
    }

    if !has_shortcodes_in_attributes(content) {
        store.delete(item, FLAG_META_KEY)?;
        return Ok(());
    }

    debug!("item {item} nests shortcodes inside attribute values, flagging");
    store.write(item, FLAG_META_KEY, FLAG_VALUE)
}

/// Whether the nesting flag is currently set for `item`.
pub fn is_flagged(store: &dyn MetadataStore, item: ItemId) -> bool {
    meta_or_empty(store, item, FLAG_META_KEY) == FLAG_VALUE
}

/// The fixed warning block appended to flagged posts' confirmation
/// messages, linking to the documentation pages from `config`.
pub fn warning_block(config: &PluginConfig) -> String {
    format!(
        "<p><strong>Warning</strong>: It looks like you have used shortcodes within HTML \
         attributes on this post. Shortcodes placed inside attribute values are no longer \
         expanded. If you are not using nested shortcodes (i.e. within a [loop], [columns], \
         [accordions] or [tabs]) you should still be ok, however if you ARE within one of \
         those, this may not produce the output you expect. Please see the \
         <a href=\"{}\" title=\"\">[link_with_content]</a> and \
         <a href=\"{}\" title=\"\">[image_with_src]</a> shortcodes for more information on \
         possible alternatives.</p>",
        config.link_docs_url, config.image_docs_url,
    )
}

/// Append the warning block to every confirmation variant when the flag is
/// set for the item currently being viewed.
///
/// `viewed` is the item whose admin page is rendering, `None` when the
/// current admin page is not about a single item; in that case, and for
/// unflagged items, the messages pass through untouched. All ten variants
/// receive the identical suffix, so whichever outcome the host picks
/// carries the warning.
pub fn append_attribute_warning<'a>(
    store: &dyn MetadataStore,
    viewed: Option<ItemId>,
    messages: &'a mut UpdatedMessages,
    config: &PluginConfig,
) -> &'a mut UpdatedMessages {
    let Some(item) = viewed else {
        return messages;
    };

    if !is_flagged(store, item) {
        return messages;
    }

    let block = warning_block(config);
    for code in OUTCOME_CODES {
        messages.entry(code).or_default().push_str(&block);
    }

    messages
}
