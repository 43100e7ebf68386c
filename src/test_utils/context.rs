//! Builder-style post fixture implementing [`ContentContext`].

use std::collections::HashMap;

use crate::core::ItemId;
use crate::host::ContentContext;

/// A post the shortcode expanders can render against.
///
/// Unset accessors return empty strings, matching the platform's behavior
/// for posts without an excerpt or featured image.
///
/// ```rust
/// use post_shortcodes::host::ContentContext;
/// use post_shortcodes::test_utils::PostFixture;
///
/// let post = PostFixture::new(42)
///     .with_permalink("https://blog.example.edu/hello-world/")
///     .with_title("Hello World");
///
/// assert_eq!(post.id(), 42);
/// assert_eq!(post.excerpt(), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PostFixture {
    id: ItemId,
    permalink: String,
    title: String,
    excerpt: String,
    featured_image: String,
    sized_images: HashMap<String, String>,
}

impl PostFixture {
    /// Create a fixture for the item `id` with every field empty.
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn with_permalink(mut self, permalink: impl Into<String>) -> Self {
        self.permalink = permalink.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    /// Set the full-size featured image URL.
    pub fn with_featured_image(mut self, url: impl Into<String>) -> Self {
        self.featured_image = url.into();
        self
    }

    /// Register a named size variant of the featured image.
    pub fn with_sized_image(mut self, size: impl Into<String>, url: impl Into<String>) -> Self {
        self.sized_images.insert(size.into(), url.into());
        self
    }
}

impl ContentContext for PostFixture {
    fn id(&self) -> ItemId {
        self.id
    }

    fn permalink(&self) -> String {
        self.permalink.clone()
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn excerpt(&self) -> String {
        self.excerpt.clone()
    }

    fn featured_image_url(&self, size: Option<&str>) -> String {
        match size {
            Some(name) => self.sized_images.get(name).cloned().unwrap_or_default(),
            None => self.featured_image.clone(),
        }
    }
}
