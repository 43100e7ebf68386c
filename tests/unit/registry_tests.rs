//! Registry dispatch tests.

use post_shortcodes::host::{ContentContext, MetadataStore};
use post_shortcodes::plugin::ShortcodesPlugin;
use post_shortcodes::shortcodes::{
    IMAGE_WITH_SRC, LINK_WITH_CONTENT, ParameterMap, ShortcodeRegistry,
};
use post_shortcodes::test_utils::{InMemoryStore, PostFixture};

fn registry_with_plugin() -> ShortcodeRegistry {
    let mut registry = ShortcodeRegistry::new();
    ShortcodesPlugin::default().register_shortcodes(&mut registry);
    registry
}

#[test]
fn test_plugin_registers_both_shortcodes() {
    let registry = registry_with_plugin();
    let mut names = registry.names();
    names.sort_unstable();
    assert_eq!(names, vec![IMAGE_WITH_SRC, LINK_WITH_CONTENT]);
}

#[test]
fn test_expand_dispatches_to_matching_handler() {
    let registry = registry_with_plugin();
    let post = PostFixture::new(1)
        .with_permalink("https://blog.example.edu/p/")
        .with_title("T");
    let store = InMemoryStore::new();

    let link = registry
        .expand(LINK_WITH_CONTENT, &ParameterMap::new(), &post, &store)
        .unwrap();
    assert!(link.starts_with("<a "));
    assert!(link.ends_with("</a>"));

    let image = registry
        .expand(IMAGE_WITH_SRC, &ParameterMap::new(), &post, &store)
        .unwrap();
    assert!(image.starts_with("<img "));
}

#[test]
fn test_unknown_shortcode_returns_none() {
    let registry = registry_with_plugin();
    let post = PostFixture::new(1);
    let store = InMemoryStore::new();

    assert!(registry.expand("gallery", &ParameterMap::new(), &post, &store).is_none());
}

#[test]
fn test_reregistration_replaces_handler() {
    let mut registry = registry_with_plugin();
    registry.register(
        LINK_WITH_CONTENT,
        |_params: &ParameterMap, _ctx: &dyn ContentContext, _store: &dyn MetadataStore| {
            "replaced".to_string()
        },
    );

    let post = PostFixture::new(1);
    let store = InMemoryStore::new();
    let html = registry
        .expand(LINK_WITH_CONTENT, &ParameterMap::new(), &post, &store)
        .unwrap();
    assert_eq!(html, "replaced");
}
