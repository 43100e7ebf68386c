//! The `image_with_src` shortcode.
//!
//! Renders an image tag, optionally wrapped in an anchor. With no
//! parameters it produces the post's featured image on its own:
//!
//! ```text
//! [image_with_src]
//! <img src="<featured image url>" alt="" class="" />
//! ```
//!
//! Supplying any of `link`, `with_permalink`, or `link_is_cf` wraps the
//! image in an anchor; `with_permalink` overrides `link` when both are set.

use crate::host::{ContentContext, MetadataStore, meta_or_empty};
use crate::sanitize::{escape_attribute, escape_url, sanitize_post_html};

use super::{ParameterMap, is_set};

/// Recognized parameters of `image_with_src`.
///
/// All values are strings; a flag-like parameter counts as set when its
/// value is non-empty. Defaults:
///
/// | key               | default               |
/// |-------------------|-----------------------|
/// | `link`            | unset (explicit href) |
/// | `link_title`      | post title            |
/// | `with_permalink`  | unset (flag: href is the post permalink)     |
/// | `after_permalink` | empty (appended to the permalink href)       |
/// | `link_class`      | empty                 |
/// | `link_target`     | `_self`               |
/// | `link_is_cf`      | unset (custom-field key for the href)        |
/// | `img_url`         | featured image URL    |
/// | `img_url_is_cf`   | unset (custom-field key for the src)         |
/// | `img_class`       | empty                 |
/// | `img_class_is_cf` | unset (custom-field key for the class)       |
/// | `img_alt`         | empty                 |
/// | `img_alt_is_cf`   | unset (custom-field key for the alt text)    |
/// | `img_before`      | empty (markup before the image)              |
/// | `img_after`       | empty (markup after the image)               |
/// | `img_size`        | unset (named featured-image size variant)    |
#[derive(Debug, Clone)]
pub struct ImageAttrs {
    pub link: String,
    pub link_title: String,
    pub with_permalink: String,
    pub after_permalink: String,
    pub link_class: String,
    pub link_target: String,
    pub link_is_cf: String,
    pub img_url: String,
    pub img_url_is_cf: String,
    pub img_class: String,
    pub img_class_is_cf: String,
    pub img_alt: String,
    pub img_alt_is_cf: String,
    pub img_before: String,
    pub img_after: String,
    pub img_size: String,
}

impl ImageAttrs {
    /// Materialize the attribute set for one invocation.
    ///
    /// Missing keys fall back to their defaults; `link_title` and
    /// `img_url` defaults are computed from the current post. Unknown keys
    /// in `params` are ignored.
    pub fn from_params(params: &ParameterMap, ctx: &dyn ContentContext) -> Self {
        let get = |key: &str| params.get(key).cloned().unwrap_or_default();
        Self {
            link: get("link"),
            link_title: params
                .get("link_title")
                .cloned()
                .unwrap_or_else(|| ctx.title()),
            with_permalink: get("with_permalink"),
            after_permalink: get("after_permalink"),
            link_class: get("link_class"),
            link_target: params
                .get("link_target")
                .cloned()
                .unwrap_or_else(|| "_self".to_string()),
            link_is_cf: get("link_is_cf"),
            img_url: params
                .get("img_url")
                .cloned()
                .unwrap_or_else(|| ctx.featured_image_url(None)),
            img_url_is_cf: get("img_url_is_cf"),
            img_class: get("img_class"),
            img_class_is_cf: get("img_class_is_cf"),
            img_alt: get("img_alt"),
            img_alt_is_cf: get("img_alt_is_cf"),
            img_before: get("img_before"),
            img_after: get("img_after"),
            img_size: get("img_size"),
        }
    }
}

/// Expand one `image_with_src` token into image (and optional anchor)
/// markup.
///
/// Source resolution is sequential overwrite: `img_size` replaces the
/// default featured-image URL with the named size variant, then
/// `img_url_is_cf` replaces whatever is there with the custom-field value,
/// so the custom field wins when both are set. `img_class` and `img_alt`
/// follow the same rule with their `_is_cf` counterparts.
///
/// When an anchor wraps the image, the opening tag is chosen by three
/// guarded branches (permalink, explicit link, custom field), each of
/// which overwrites the pending anchor rather than appending a second one.
/// Exactly one opening tag is ever emitted; `with_permalink` beats `link`
/// when both are set.
pub fn expand_image_with_src(
    params: &ParameterMap,
    ctx: &dyn ContentContext,
    store: &dyn MetadataStore,
) -> String {
    let mut attrs = ImageAttrs::from_params(params, ctx);
    let mut content = String::new();

    // Named size variant of the featured image.
    if is_set(&attrs.img_size) {
        attrs.img_url = ctx.featured_image_url(Some(&escape_attribute(&attrs.img_size)));
    }

    // Custom-field overrides; img_size and img_url are both ignored when
    // img_url_is_cf is set.
    if is_set(&attrs.img_url_is_cf) {
        attrs.img_url = meta_or_empty(store, ctx.id(), &escape_attribute(&attrs.img_url_is_cf));
    }

    if is_set(&attrs.img_class_is_cf) {
        attrs.img_class = meta_or_empty(store, ctx.id(), &escape_attribute(&attrs.img_class_is_cf));
    }

    if is_set(&attrs.img_alt_is_cf) {
        attrs.img_alt = meta_or_empty(store, ctx.id(), &escape_attribute(&attrs.img_alt_is_cf));
    }

    let wrap_in_anchor =
        is_set(&attrs.link) || is_set(&attrs.with_permalink) || is_set(&attrs.link_is_cf);

    if wrap_in_anchor {
        let mut anchor = String::new();

        // Each branch overwrites the pending opening tag; the guards keep
        // with_permalink ahead of link ahead of link_is_cf.
        if is_set(&attrs.with_permalink) {
            anchor = format!(
                r#"<a target="{}" href="{}{}" title="{}" class="{}">"#,
                escape_attribute(&attrs.link_target),
                escape_url(&ctx.permalink()),
                escape_url(&attrs.after_permalink),
                escape_attribute(&attrs.link_title),
                escape_attribute(&attrs.link_class),
            );
        }

        if is_set(&attrs.link) && !is_set(&attrs.with_permalink) {
            anchor = format!(
                r#"<a target="{}" href="{}" title="{}" class="{}">"#,
                escape_attribute(&attrs.link_target),
                escape_url(&attrs.link),
                escape_attribute(&attrs.link_title),
                escape_attribute(&attrs.link_class),
            );
        }

        if is_set(&attrs.link_is_cf) && !is_set(&attrs.link) && !is_set(&attrs.with_permalink) {
            let custom_field =
                meta_or_empty(store, ctx.id(), &escape_attribute(&attrs.link_is_cf));
            anchor = format!(
                r#"<a target="{}" href="{}" title="{}" class="{}">"#,
                escape_attribute(&attrs.link_target),
                escape_url(&custom_field),
                escape_attribute(&attrs.link_title),
                escape_attribute(&attrs.link_class),
            );
        }

        content.push_str(&anchor);
    }

    if is_set(&attrs.img_before) {
        content.push_str(&sanitize_post_html(&attrs.img_before));
    }

    let main_image = format!(
        r#"<img src="{}" alt="{}" class="{}" />"#,
        escape_url(&attrs.img_url),
        escape_attribute(&attrs.img_alt),
        escape_attribute(&attrs.img_class),
    );
    content.push_str(&main_image);

    if is_set(&attrs.img_after) {
        content.push_str(&sanitize_post_html(&attrs.img_after));
    }

    if wrap_in_anchor {
        content.push_str("</a>");
    }

    content
}
