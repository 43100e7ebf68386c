//! Save → flag → admin-warning flows.

use post_shortcodes::config::PluginConfig;
use post_shortcodes::guard::{FLAG_META_KEY, FLAG_VALUE, OUTCOME_CODES, UpdatedMessages, warning_block};
use post_shortcodes::host::MetadataStore;
use post_shortcodes::plugin::ShortcodesPlugin;
use post_shortcodes::test_utils::{InMemoryStore, init_test_logging};

const NESTED_CONTENT: &str =
    r#"<p>Latest news</p><a href="[the_permalink]" title="[the_title]">[the_title]</a>"#;

const CLEAN_CONTENT: &str =
    r#"<p>Latest news</p><a href="https://blog.example.edu/news/">[the_title]</a>"#;

fn host_messages() -> UpdatedMessages {
    OUTCOME_CODES.map(|code| (code, format!("Post outcome {code}."))).collect()
}

#[test]
fn test_save_flags_and_admin_view_warns() {
    init_test_logging(None);

    let plugin = ShortcodesPlugin::default();
    let mut store = InMemoryStore::new();

    plugin.content_saved(&mut store, 10, NESTED_CONTENT, false).unwrap();
    assert_eq!(store.read(10, FLAG_META_KEY).unwrap().as_deref(), Some(FLAG_VALUE));

    let mut messages = host_messages();
    plugin.filter_updated_messages(&store, Some(10), &mut messages);

    let block = warning_block(plugin.config());
    for code in OUTCOME_CODES {
        assert!(messages[&code].ends_with(&block), "variant {code} missing the warning");
    }
}

#[test]
fn test_clean_save_leaves_messages_untouched() {
    let plugin = ShortcodesPlugin::default();
    let mut store = InMemoryStore::new();

    plugin.content_saved(&mut store, 10, CLEAN_CONTENT, false).unwrap();
    assert!(store.read(10, FLAG_META_KEY).unwrap().is_none());

    let mut messages = host_messages();
    let before = messages.clone();
    plugin.filter_updated_messages(&store, Some(10), &mut messages);
    assert_eq!(messages, before);
}

#[test]
fn test_fixing_content_clears_flag_and_warning() {
    let plugin = ShortcodesPlugin::default();
    let mut store = InMemoryStore::new();

    plugin.content_saved(&mut store, 10, NESTED_CONTENT, false).unwrap();
    assert_eq!(store.read(10, FLAG_META_KEY).unwrap().as_deref(), Some(FLAG_VALUE));

    // The author removes the nested shortcodes and saves again.
    plugin.content_saved(&mut store, 10, CLEAN_CONTENT, false).unwrap();
    assert!(store.read(10, FLAG_META_KEY).unwrap().is_none());

    let mut messages = host_messages();
    let before = messages.clone();
    plugin.filter_updated_messages(&store, Some(10), &mut messages);
    assert_eq!(messages, before);
}

#[test]
fn test_saving_twice_is_idempotent() {
    let plugin = ShortcodesPlugin::default();
    let mut store = InMemoryStore::new();

    plugin.content_saved(&mut store, 10, NESTED_CONTENT, false).unwrap();
    let first = store.read(10, FLAG_META_KEY).unwrap();
    plugin.content_saved(&mut store, 10, NESTED_CONTENT, false).unwrap();
    let second = store.read(10, FLAG_META_KEY).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_revision_save_is_ignored() {
    let plugin = ShortcodesPlugin::default();
    let mut store = InMemoryStore::new();

    plugin.content_saved(&mut store, 10, NESTED_CONTENT, false).unwrap();
    assert_eq!(store.read(10, FLAG_META_KEY).unwrap().as_deref(), Some(FLAG_VALUE));

    // A revision snapshot without the nesting must not clear the flag.
    plugin.content_saved(&mut store, 10, CLEAN_CONTENT, true).unwrap();
    assert_eq!(store.read(10, FLAG_META_KEY).unwrap().as_deref(), Some(FLAG_VALUE));
}

#[test]
fn test_warning_only_applies_to_viewed_item() {
    let plugin = ShortcodesPlugin::default();
    let mut store = InMemoryStore::new();

    plugin.content_saved(&mut store, 10, NESTED_CONTENT, false).unwrap();

    // A different item's admin page, and a listing page with no item.
    let mut messages = host_messages();
    let before = messages.clone();
    plugin.filter_updated_messages(&store, Some(11), &mut messages);
    assert_eq!(messages, before);
    plugin.filter_updated_messages(&store, None, &mut messages);
    assert_eq!(messages, before);
}

#[test]
fn test_configured_docs_urls_appear_in_warning() {
    let config = PluginConfig::from_toml_str(
        "link_docs_url = \"https://wiki.example.edu/l\"\nimage_docs_url = \"https://wiki.example.edu/i\"\n",
    )
    .unwrap();
    let plugin = ShortcodesPlugin::new(config);
    let mut store = InMemoryStore::new();

    plugin.content_saved(&mut store, 10, NESTED_CONTENT, false).unwrap();

    let mut messages = host_messages();
    plugin.filter_updated_messages(&store, Some(10), &mut messages);
    assert!(messages[&1].contains("https://wiki.example.edu/l"));
    assert!(messages[&1].contains("https://wiki.example.edu/i"));
}
