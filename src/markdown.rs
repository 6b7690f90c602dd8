//! Markdown rendering with callout paragraphs.
//!
//! This module renders Markdown using comrak with GFM extensions and a pass
//! over the parsed tree that turns `<> ` paragraphs into styled callout
//! blocks and applies `{: ...}` attribute lists to paragraphs.

mod attributes;
mod callout;
mod renderer;

pub use attributes::{BlockAttributes, format_block_html};
pub use callout::{CALLOUT_MARKER, CALLOUT_STYLE, merge_callout_style};
pub use renderer::MarkdownRenderer;
