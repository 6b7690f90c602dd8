//! Page metadata extraction from HTML documents.

use scraper::{Html, Selector};
use url::Url;

use crate::error::{LinkCardError, Result};

/// Description used when a page declares none.
///
/// A single space keeps the description block from collapsing in the card
/// layout.
pub const EMPTY_DESCRIPTION: &str = " ";

/// Metadata shown on a link card.
///
/// Every field is populated before rendering. Missing values are filled with
/// the URL (title), a single space (description) or the empty string (image).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub domain: String,
}

/// Returns the first value that is present and not blank, trimmed.
pub fn first_non_empty<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
}

/// Single place in a document a metadata field may come from.
#[derive(Debug, Clone, Copy)]
enum Lookup {
    /// `content` attribute of the first element matching the selector.
    MetaContent(&'static str),
    /// Text of the first element matching the selector.
    Text(&'static str),
}

const TITLE_LOOKUPS: &[Lookup] = &[
    Lookup::MetaContent(r#"meta[property="og:title"]"#),
    Lookup::Text("title"),
];

const DESCRIPTION_LOOKUPS: &[Lookup] = &[
    Lookup::MetaContent(r#"meta[property="og:description"]"#),
    Lookup::MetaContent(r#"meta[name="description"]"#),
];

const IMAGE_LOOKUPS: &[Lookup] = &[Lookup::MetaContent(r#"meta[property="og:image"]"#)];

/// Extracts Open Graph metadata from a fetched page.
///
/// Field priority:
/// - title: `og:title`, then `<title>`, then the URL itself
/// - description: `og:description`, then `meta[name=description]`, then a space
/// - image: `og:image`, then empty
/// - domain: host component of `url`
///
/// # Errors
///
/// Returns error if `url` does not parse or has no host.
pub fn extract_page_metadata(url: &str, html: &str) -> Result<PageMetadata> {
    let domain = host_of(url)?;
    let document = Html::parse_document(html);

    Ok(PageMetadata {
        title: resolve(&document, TITLE_LOOKUPS).unwrap_or_else(|| url.to_string()),
        description: resolve(&document, DESCRIPTION_LOOKUPS)
            .unwrap_or_else(|| EMPTY_DESCRIPTION.to_string()),
        image_url: resolve(&document, IMAGE_LOOKUPS).unwrap_or_default(),
        domain,
    })
}

/// Returns the host component of an absolute URL.
///
/// # Errors
///
/// Returns error if the URL is malformed or carries no host.
pub fn host_of(url: &str) -> Result<String> {
    let parsed = Url::parse(url)?;
    parsed
        .host_str()
        .map(String::from)
        .ok_or_else(|| LinkCardError::MissingHost(url.to_string()))
}

/// Evaluates lookups in order and stops at the first non-blank value.
fn resolve(document: &Html, lookups: &[Lookup]) -> Option<String> {
    lookups.iter().find_map(|lookup| {
        let value = match *lookup {
            Lookup::MetaContent(selector) => meta_content(document, selector),
            Lookup::Text(selector) => element_text(document, selector),
        }?;
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

fn meta_content(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(String::from)
}

fn element_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>())
}
