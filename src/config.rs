//! Plugin configuration.
//!
//! The crate has one tunable surface: the documentation links advertised in
//! the guard's editorial warning. Site operators point these at their own
//! documentation; everything else about the shortcodes is fixed behavior.
//!
//! Configuration is TOML, loaded by the host from wherever it keeps plugin
//! settings:
//!
//! ```toml
//! link_docs_url = "https://wiki.example.edu/shortcodes/link_with_content"
//! image_docs_url = "https://wiki.example.edu/shortcodes/image_with_src"
//! ```
//!
//! Missing keys keep their defaults, so an empty string (or an absent
//! file handled by the host) yields [`PluginConfig::default`].

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_LINK_DOCS_URL: &str =
    "https://docs.example.org/content-management/shortcodes/link_with_content";
const DEFAULT_IMAGE_DOCS_URL: &str =
    "https://docs.example.org/content-management/shortcodes/image_with_src";

/// Settings consumed by the guard's warning block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PluginConfig {
    /// Documentation page linked for `[link_with_content]`.
    #[serde(default = "default_link_docs_url")]
    pub link_docs_url: String,

    /// Documentation page linked for `[image_with_src]`.
    #[serde(default = "default_image_docs_url")]
    pub image_docs_url: String,
}

fn default_link_docs_url() -> String {
    DEFAULT_LINK_DOCS_URL.to_string()
}

fn default_image_docs_url() -> String {
    DEFAULT_IMAGE_DOCS_URL.to_string()
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            link_docs_url: default_link_docs_url(),
            image_docs_url: default_image_docs_url(),
        }
    }
}

impl PluginConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("failed to parse plugin configuration")
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read plugin configuration from {}", path.display()))?;
        Self::from_toml_str(&raw)
    }
}
