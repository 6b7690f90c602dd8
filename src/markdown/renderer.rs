//! Markdown rendering with callout paragraphs.

use anyhow::{Context, Result};
use comrak::{Arena, Options};
use std::path::Path;

use super::callout;

/// Renders markdown to HTML with GitHub Flavored Markdown extensions.
///
/// Parses into a comrak AST, rewrites callout paragraphs (`<> text`) and
/// paragraphs carrying an attribute list, then formats the tree as HTML.
/// Paragraphs without either render exactly as plain comrak would.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with GitHub Flavored Markdown options.
    ///
    /// Configures GFM extensions and rendering settings:
    /// - Tables, strikethrough, autolinks, task lists, footnotes
    /// - Raw HTML passthrough, required for callout blocks and link cards
    /// - Smart punctuation off so attribute list quotes stay literal
    pub fn new() -> Self {
        let mut options = Options::default();

        // Extension options (GFM features)
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;
        options.extension.description_lists = true;

        // Render options (page sources are trusted)
        options.render.unsafe_ = true;

        Self { options }
    }

    /// Options used for parsing and formatting.
    pub fn options(&self) -> &Options<'a> {
        &self.options
    }

    /// Renders markdown content to HTML string.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Rendered HTML with callout paragraphs as styled `<div>` blocks
    ///
    /// # Errors
    ///
    /// Returns error if the AST cannot be formatted
    pub fn render(&self, content: &str) -> Result<String> {
        let arena = Arena::new();
        let root = comrak::parse_document(&arena, content, &self.options);

        callout::apply(&arena, root, &self.options).context("Failed to rewrite callouts")?;

        let mut html = Vec::new();
        comrak::format_html(root, &self.options, &mut html).context("Failed to format HTML")?;
        String::from_utf8(html).context("Rendered HTML is not valid UTF8")
    }

    /// Renders markdown file at given path.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or rendering fails
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read markdown file")?;
        self.render(&content)
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}
