//! The `link_with_content` shortcode.
//!
//! Renders an anchor tag from the current post. With no parameters it
//! produces a permalink with the title as both link text and title
//! attribute:
//!
//! ```text
//! [link_with_content]
//! <a target="_self" href="<permalink>" title="<title>" class=""><title></a>
//! ```
//!
//! The link text, the href, and decoration around the anchor are all
//! overridable per invocation; see [`LinkAttrs`] for the recognized keys.

use crate::host::{ContentContext, MetadataStore, meta_or_empty};
use crate::sanitize::{escape_attribute, escape_url, sanitize_post_html};

use super::{ParameterMap, is_set};

/// Recognized parameters of `link_with_content`.
///
/// All values are strings; a flag-like parameter counts as set when its
/// value is non-empty. Defaults:
///
/// | key                  | default            |
/// |----------------------|--------------------|
/// | `link`               | post permalink     |
/// | `content`            | post title         |
/// | `content_is_cf`      | unset (custom-field key for the link text) |
/// | `content_is_excerpt` | unset (flag: use the post excerpt)         |
/// | `link_class`         | empty              |
/// | `link_before`        | empty (markup before the anchor)           |
/// | `link_after`         | empty (markup after the anchor)            |
/// | `link_target`        | `_self`            |
/// | `link_is_id`         | unset (flag: link target is the post id)   |
/// | `link_is_cf`         | unset (custom-field key for the href)      |
/// | `link_prefix`        | empty (prepended to the href)              |
/// | `after_url`          | empty (appended after the `link` value)    |
#[derive(Debug, Clone)]
pub struct LinkAttrs {
    pub link: String,
    pub content: String,
    pub content_is_cf: String,
    pub content_is_excerpt: String,
    pub link_class: String,
    pub link_before: String,
    pub link_after: String,
    pub link_target: String,
    pub link_is_id: String,
    pub link_is_cf: String,
    pub link_prefix: String,
    pub after_url: String,
}

impl LinkAttrs {
    /// Materialize the attribute set for one invocation.
    ///
    /// Missing keys fall back to their defaults; `link` and `content`
    /// defaults are computed from the current post. Unknown keys in
    /// `params` are ignored. A key supplied with an empty value stays
    /// empty; the default applies only when the key is absent.
    pub fn from_params(params: &ParameterMap, ctx: &dyn ContentContext) -> Self {
        let get = |key: &str| params.get(key).cloned().unwrap_or_default();
        Self {
            link: params.get("link").cloned().unwrap_or_else(|| ctx.permalink()),
            content: params.get("content").cloned().unwrap_or_else(|| ctx.title()),
            content_is_cf: get("content_is_cf"),
            content_is_excerpt: get("content_is_excerpt"),
            link_class: get("link_class"),
            link_before: get("link_before"),
            link_after: get("link_after"),
            link_target: params
                .get("link_target")
                .cloned()
                .unwrap_or_else(|| "_self".to_string()),
            link_is_id: get("link_is_id"),
            link_is_cf: get("link_is_cf"),
            link_prefix: get("link_prefix"),
            after_url: get("after_url"),
        }
    }
}

/// Expand one `link_with_content` token into anchor markup.
///
/// The link text is resolved from exactly one source, checked in order:
/// `content_is_cf` (custom field), `content_is_excerpt` (post excerpt),
/// then the `content` value. The href is composed from `link_prefix` plus
/// the independent `after_url` / plain-link / `link_is_id` / `link_is_cf`
/// conditionals; those conditionals are not mutually exclusive, and when an
/// author sets several flags at once their fragments concatenate in that
/// order. That concatenation is long-standing observable behavior.
pub fn expand_link_with_content(
    params: &ParameterMap,
    ctx: &dyn ContentContext,
    store: &dyn MetadataStore,
) -> String {
    let attrs = LinkAttrs::from_params(params, ctx);
    let mut content = String::new();

    if is_set(&attrs.link_before) {
        content.push_str(&sanitize_post_html(&attrs.link_before));
    }

    // Link text: exactly one source, custom field checked first.
    let link_content = if is_set(&attrs.content_is_cf) {
        meta_or_empty(store, ctx.id(), &escape_attribute(&attrs.content_is_cf))
    } else if is_set(&attrs.content_is_excerpt) {
        ctx.excerpt()
    } else {
        attrs.content.clone()
    };

    let mut href = String::new();

    if is_set(&attrs.link_prefix) {
        href.push_str(&attrs.link_prefix);
    }

    // after_url rides on the link value itself.
    if is_set(&attrs.after_url) {
        href.push_str(&escape_url(&attrs.link));
        href.push_str(&escape_attribute(&attrs.after_url));
    }

    // With none of the redirecting flags set, the href is the link value.
    if !is_set(&attrs.link_is_id) && !is_set(&attrs.link_is_cf) && !is_set(&attrs.after_url) {
        href.push_str(&attrs.link);
    }

    if is_set(&attrs.link_is_id) {
        href.push_str(&ctx.id().to_string());
    }

    if is_set(&attrs.link_is_cf) && !is_set(&attrs.after_url) {
        href.push_str(&meta_or_empty(
            store,
            ctx.id(),
            &escape_attribute(&attrs.link_is_cf),
        ));
    }

    let main_link = format!(
        r#"<a target="{}" href="{}" title="{}" class="{}">{}</a>"#,
        escape_attribute(&attrs.link_target),
        escape_url(&href),
        escape_attribute(&attrs.content),
        escape_attribute(&attrs.link_class),
        sanitize_post_html(&link_content),
    );
    content.push_str(&main_link);

    if is_set(&attrs.link_after) {
        content.push_str(&sanitize_post_html(&attrs.link_after));
    }

    content
}
