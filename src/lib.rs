//! Markdown callouts and link cards for static sites.

mod assets;
pub mod components;
mod config;
mod error;
mod generators;
pub mod link_card;
mod logging;
mod markdown;
mod tags;
mod util;

pub use assets::{STYLESHEET, write_css_assets};
pub use config::Config;
pub use error::LinkCardError;
pub use generators::{GeneratedPage, collect_markdown_files, generate_site, render_page};
pub use link_card::{LinkCardOptions, LinkCardRenderer, PageMetadata, ProblemCache};
pub use logging::initialize_logging;
pub use markdown::{
    BlockAttributes, CALLOUT_MARKER, CALLOUT_STYLE, MarkdownRenderer, format_block_html,
    merge_callout_style,
};
pub use tags::{expand_link_cards, link_card_urls};
pub use util::extract_title;
