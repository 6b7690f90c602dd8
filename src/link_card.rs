//! Link card rendering for `{% linkcard %}` tags.
//!
//! A card is resolved in two stages. Baekjoon problem URLs first go through
//! the solved.ac lookup API with results cached for the build. Everything
//! else, and any problem lookup that fails, is resolved by fetching the page
//! and reading its Open Graph tags. Resolution errors never escape
//! [`LinkCardRenderer::render`]; they become an inline error paragraph.

mod cache;
mod fetch;
mod metadata;
mod problem;

pub use cache::ProblemCache;
pub use fetch::Fetcher;
pub use metadata::{EMPTY_DESCRIPTION, PageMetadata, extract_page_metadata, first_non_empty};
pub use problem::{PROBLEM_DOMAIN, lookup_url, parse_lookup, problem_id, problem_page_url};

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::components::link_card::{card, card_error};
use crate::error::{LinkCardError, Result};

/// Default base URL of the solved.ac API.
pub const DEFAULT_LOOKUP_API: &str = "https://solved.ac/api/v3";

/// Default judge site scraped when a problem lookup fails.
pub const DEFAULT_PROBLEM_SITE: &str = "https://www.acmicpc.net";

/// Default thumbnail for judge problem cards, the API exposes no per-problem image.
pub const DEFAULT_PROBLEM_IMAGE: &str = "https://static.solved.ac/logo.svg";

/// Default connect and read timeout for outbound requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Network and presentation settings for link card resolution.
#[derive(Debug, Clone)]
pub struct LinkCardOptions {
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    /// Skip TLS certificate checks when scraping pages. Off unless opted in.
    pub accept_invalid_certs: bool,
    /// Base URL of the problem lookup API.
    pub lookup_api: String,
    /// Thumbnail used for every judge problem card.
    pub problem_image: String,
    /// Base URL of the judge site, fetched when a problem lookup fails.
    pub problem_site: String,
}

impl Default for LinkCardOptions {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_TIMEOUT,
            read_timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
            lookup_api: DEFAULT_LOOKUP_API.to_string(),
            problem_image: DEFAULT_PROBLEM_IMAGE.to_string(),
            problem_site: DEFAULT_PROBLEM_SITE.to_string(),
        }
    }
}

/// Resolves URLs to metadata and renders link card fragments.
///
/// One renderer is meant to be shared by every page of a build so the
/// problem cache spans the whole build.
pub struct LinkCardRenderer {
    fetcher: Fetcher,
    cache: Arc<ProblemCache>,
    options: LinkCardOptions,
}

impl LinkCardRenderer {
    /// Creates a renderer with an empty problem cache.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP clients cannot be built.
    pub fn new(options: LinkCardOptions) -> Result<Self> {
        Self::with_cache(options, Arc::new(ProblemCache::new()))
    }

    /// Creates a renderer backed by an existing problem cache.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP clients cannot be built.
    pub fn with_cache(options: LinkCardOptions, cache: Arc<ProblemCache>) -> Result<Self> {
        let fetcher = Fetcher::new(&options)?;
        Ok(Self {
            fetcher,
            cache,
            options,
        })
    }

    /// Problem cache shared by this renderer.
    pub fn cache(&self) -> &Arc<ProblemCache> {
        &self.cache
    }

    /// Renders the link card for `raw_url`.
    ///
    /// Never fails: when metadata cannot be resolved the result is
    /// `<p>LinkCard Error: <message></p>`.
    pub fn render(&self, raw_url: &str) -> String {
        let url = raw_url.trim();
        match self.resolve(url) {
            Ok(metadata) => card(url, &metadata).into_string(),
            Err(err) => {
                warn!(url, error = %err, "Failed to resolve link card");
                card_error(&err.to_string()).into_string()
            }
        }
    }

    /// Resolves metadata for a trimmed URL.
    ///
    /// Judge problem URLs try the lookup API first and fall back to
    /// scraping the problem page on the configured judge site when that
    /// fails. Scraped metadata keeps the card URL's host as its domain.
    ///
    /// # Errors
    ///
    /// Returns error when page scraping, the final stage, fails.
    pub fn resolve(&self, url: &str) -> Result<PageMetadata> {
        let Some(id) = problem_id(url) else {
            return self.resolve_page(url);
        };

        match self.resolve_problem(url) {
            Ok(metadata) => Ok(metadata),
            Err(err) => {
                debug!(url, error = %err, "Problem lookup failed, scraping page instead");
                let page = problem_page_url(&self.options.problem_site, id);
                let html = self.fetcher.fetch_page(&page)?;
                extract_page_metadata(url, &html)
            }
        }
    }

    /// Resolves a judge problem through the cache or the lookup API.
    ///
    /// # Errors
    ///
    /// Returns error if `url` is not a problem page, the API call fails, or
    /// the response holds no problem.
    pub fn resolve_problem(&self, url: &str) -> Result<PageMetadata> {
        let id = problem_id(url).ok_or_else(|| LinkCardError::NotAProblemUrl(url.to_string()))?;

        if let Some(cached) = self.cache.get(id) {
            debug!(id, "Problem cache hit");
            return Ok(cached);
        }

        let body = self
            .fetcher
            .fetch_json(&lookup_url(&self.options.lookup_api, id))?;
        let metadata = parse_lookup(id, &body, &self.options.problem_image)?;

        Ok(self.cache.insert(id, metadata))
    }

    /// Resolves metadata by fetching and scraping the page.
    ///
    /// # Errors
    ///
    /// Returns error if the page cannot be fetched or the URL has no host.
    pub fn resolve_page(&self, url: &str) -> Result<PageMetadata> {
        let html = self.fetcher.fetch_page(url)?;
        extract_page_metadata(url, &html)
    }
}
