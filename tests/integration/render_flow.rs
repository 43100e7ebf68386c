//! Rendering flows: the host parses tokens out of post content and
//! dispatches them through the registry; these tests drive that path with
//! the parameter maps the parser would produce.

use post_shortcodes::host::MetadataStore;
use post_shortcodes::plugin::ShortcodesPlugin;
use post_shortcodes::shortcodes::{
    IMAGE_WITH_SRC, LINK_WITH_CONTENT, ParameterMap, ShortcodeRegistry,
};
use post_shortcodes::test_utils::{InMemoryStore, PostFixture, init_test_logging};

fn setup() -> (ShortcodeRegistry, PostFixture, InMemoryStore) {
    init_test_logging(None);

    let mut registry = ShortcodeRegistry::new();
    ShortcodesPlugin::default().register_shortcodes(&mut registry);

    let post = PostFixture::new(314)
        .with_permalink("https://blog.example.edu/2015/announcement/")
        .with_title("Fall Announcement")
        .with_excerpt("Registration opens Monday.")
        .with_featured_image("https://blog.example.edu/media/announce.jpg")
        .with_sized_image("large", "https://blog.example.edu/media/announce-1024.jpg");

    (registry, post, InMemoryStore::new())
}

fn params(pairs: &[(&str, &str)]) -> ParameterMap {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn test_default_link_token_round_trip() {
    let (registry, post, store) = setup();

    // [link_with_content]
    let html = registry
        .expand(LINK_WITH_CONTENT, &ParameterMap::new(), &post, &store)
        .unwrap();

    assert_eq!(
        html,
        "<a target=\"_self\" href=\"https://blog.example.edu/2015/announcement/\" \
         title=\"Fall Announcement\" class=\"\">Fall Announcement</a>"
    );
}

#[test]
fn test_decorated_link_token() {
    let (registry, post, mut store) = setup();
    store.write(314, "registration_url", "https://apply.example.edu/fall").unwrap();

    // [link_with_content link_is_cf="registration_url" content="Register now"
    //                    link_class="button" link_target="_blank"]
    let html = registry
        .expand(
            LINK_WITH_CONTENT,
            &params(&[
                ("link_is_cf", "registration_url"),
                ("content", "Register now"),
                ("link_class", "button"),
                ("link_target", "_blank"),
            ]),
            &post,
            &store,
        )
        .unwrap();

    assert_eq!(
        html,
        "<a target=\"_blank\" href=\"https://apply.example.edu/fall\" \
         title=\"Register now\" class=\"button\">Register now</a>"
    );
}

#[test]
fn test_image_token_with_permalink_wrap() {
    let (registry, post, store) = setup();

    // [image_with_src with_permalink="1" img_size="large" img_alt="Banner"]
    let html = registry
        .expand(
            IMAGE_WITH_SRC,
            &params(&[("with_permalink", "1"), ("img_size", "large"), ("img_alt", "Banner")]),
            &post,
            &store,
        )
        .unwrap();

    assert_eq!(
        html,
        "<a target=\"_self\" href=\"https://blog.example.edu/2015/announcement/\" \
         title=\"Fall Announcement\" class=\"\">\
         <img src=\"https://blog.example.edu/media/announce-1024.jpg\" alt=\"Banner\" class=\"\" />\
         </a>"
    );
}

#[test]
fn test_unregistered_token_is_left_to_the_host() {
    let (registry, post, store) = setup();
    assert!(registry.expand("caption", &ParameterMap::new(), &post, &store).is_none());
}
