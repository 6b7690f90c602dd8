//! Template tag expansion for page sources.
//!
//! Pages embed link cards with `{% linkcard <url> %}`. Tags are replaced
//! before Markdown rendering, so the card markup reaches comrak as a raw
//! HTML block.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static LINKCARD_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{%-?\s*linkcard\s+(\S+)\s*-?%\}").expect("linkcard tag pattern is valid")
});

/// Replaces every `{% linkcard <url> %}` tag with the output of `render`.
///
/// Text outside tags is copied unchanged.
pub fn expand_link_cards<F>(source: &str, mut render: F) -> String
where
    F: FnMut(&str) -> String,
{
    LINKCARD_TAG
        .replace_all(source, |caps: &Captures<'_>| render(&caps[1]))
        .into_owned()
}

/// URLs referenced by link card tags, in order of appearance.
pub fn link_card_urls(source: &str) -> Vec<&str> {
    LINKCARD_TAG
        .captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}
