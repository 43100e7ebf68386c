//! Plugin configuration tests.

use anyhow::Result;
use post_shortcodes::config::PluginConfig;

#[test]
fn test_default_docs_urls_are_set() {
    let config = PluginConfig::default();
    assert!(config.link_docs_url.contains("link_with_content"));
    assert!(config.image_docs_url.contains("image_with_src"));
}

#[test]
fn test_empty_toml_yields_defaults() -> Result<()> {
    let config = PluginConfig::from_toml_str("")?;
    assert_eq!(config, PluginConfig::default());
    Ok(())
}

#[test]
fn test_partial_override_keeps_other_default() -> Result<()> {
    let config = PluginConfig::from_toml_str(
        r#"link_docs_url = "https://wiki.example.edu/shortcodes/link""#,
    )?;
    assert_eq!(config.link_docs_url, "https://wiki.example.edu/shortcodes/link");
    assert_eq!(config.image_docs_url, PluginConfig::default().image_docs_url);
    Ok(())
}

#[test]
fn test_invalid_toml_is_an_error() {
    assert!(PluginConfig::from_toml_str("link_docs_url = ").is_err());
}

#[test]
fn test_load_from_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("shortcodes.toml");
    std::fs::write(
        &path,
        "link_docs_url = \"https://wiki.example.edu/l\"\nimage_docs_url = \"https://wiki.example.edu/i\"\n",
    )?;

    let config = PluginConfig::load(&path)?;
    assert_eq!(config.link_docs_url, "https://wiki.example.edu/l");
    assert_eq!(config.image_docs_url, "https://wiki.example.edu/i");
    Ok(())
}

#[test]
fn test_load_missing_file_reports_path() {
    let err = PluginConfig::load(std::path::Path::new("/nonexistent/shortcodes.toml"))
        .unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/shortcodes.toml"));
}
