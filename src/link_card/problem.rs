//! Baekjoon problem pages resolved through the solved.ac lookup API.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

use super::metadata::{PageMetadata, first_non_empty};
use crate::error::{LinkCardError, Result};

/// Host shown on cards for judge problems.
pub const PROBLEM_DOMAIN: &str = "www.acmicpc.net";

static PROBLEM_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:www\.)?acmicpc\.net/problem/(\d+)$")
        .expect("problem URL pattern is valid")
});

/// Returns the numeric problem id when `url` is a judge problem page.
pub fn problem_id(url: &str) -> Option<&str> {
    PROBLEM_URL
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str())
}

/// Builds the lookup endpoint for a single problem id.
pub fn lookup_url(api_base: &str, id: &str) -> String {
    format!(
        "{}/problem/lookup?problemIds={}",
        api_base.trim_end_matches('/'),
        id
    )
}

/// Builds the page URL for a problem id on the judge site.
pub fn problem_page_url(site: &str, id: &str) -> String {
    format!("{}/problem/{}", site.trim_end_matches('/'), id)
}

/// One entry of the lookup API response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProblemEntry {
    #[serde(default)]
    title_ko: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    titles: Vec<LocalizedTitle>,
}

#[derive(Debug, Deserialize)]
struct LocalizedTitle {
    #[serde(default)]
    title: Option<String>,
}

impl ProblemEntry {
    /// Korean title, then the primary title, then any localized title.
    fn display_name(&self) -> Option<&str> {
        let localized = self.titles.iter().map(|t| t.title.as_deref());
        first_non_empty(
            [self.title_ko.as_deref(), self.title.as_deref()]
                .into_iter()
                .chain(localized),
        )
    }
}

/// Converts a lookup API response body into card metadata.
///
/// # Errors
///
/// Returns error if the body is not a JSON array of problems or the array is
/// empty.
pub fn parse_lookup(id: &str, body: &str, image_url: &str) -> Result<PageMetadata> {
    let entries: Vec<ProblemEntry> = serde_json::from_str(body)?;
    let entry = entries
        .first()
        .ok_or_else(|| LinkCardError::EmptyLookup(id.to_string()))?;

    let name = entry.display_name().unwrap_or(id);

    Ok(PageMetadata {
        title: format!("{}번: {}", id, name),
        description: name.to_string(),
        image_url: image_url.to_string(),
        domain: PROBLEM_DOMAIN.to_string(),
    })
}
