//! Blocking HTTP clients for page scraping and problem lookups.

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use tracing::{debug, warn};

use super::LinkCardOptions;
use crate::error::Result;

/// Browser identity sent when scraping pages, some hosts answer 403 otherwise.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36";

const PAGE_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const PAGE_ACCEPT_LANGUAGE: &str = "ko-KR,ko;q=0.9";

const API_USER_AGENT: &str = "Mozilla/5.0";
const API_ACCEPT: &str = "application/json";

/// Pair of HTTP clients used during link card resolution.
///
/// The page client impersonates a browser and may skip certificate checks
/// when [`LinkCardOptions::accept_invalid_certs`] is set. The API client
/// always verifies certificates.
pub struct Fetcher {
    page_client: Client,
    api_client: Client,
}

impl Fetcher {
    /// Builds both clients from link card options.
    ///
    /// # Errors
    ///
    /// Returns error if the TLS backend cannot be initialized.
    pub fn new(options: &LinkCardOptions) -> Result<Self> {
        if options.accept_invalid_certs {
            warn!("TLS certificate verification disabled for link card page fetches");
        }

        let mut page_headers = HeaderMap::new();
        page_headers.insert(ACCEPT, HeaderValue::from_static(PAGE_ACCEPT));
        page_headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(PAGE_ACCEPT_LANGUAGE));

        let page_client = Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .default_headers(page_headers)
            .connect_timeout(options.connect_timeout)
            .timeout(options.read_timeout)
            .danger_accept_invalid_certs(options.accept_invalid_certs)
            .build()?;

        let mut api_headers = HeaderMap::new();
        api_headers.insert(ACCEPT, HeaderValue::from_static(API_ACCEPT));

        let api_client = Client::builder()
            .user_agent(API_USER_AGENT)
            .default_headers(api_headers)
            .connect_timeout(options.connect_timeout)
            .timeout(options.read_timeout)
            .build()?;

        Ok(Self {
            page_client,
            api_client,
        })
    }

    /// Fetches page markup for metadata scraping.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, timeout, or non-success status.
    pub fn fetch_page(&self, url: &str) -> Result<String> {
        debug!(url, "Fetching page");
        let body = self
            .page_client
            .get(url)
            .send()?
            .error_for_status()?
            .text()?;
        Ok(body)
    }

    /// Fetches a JSON document from the problem lookup API.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, timeout, or non-success status.
    pub fn fetch_json(&self, url: &str) -> Result<String> {
        debug!(url, "Querying lookup API");
        let body = self
            .api_client
            .get(url)
            .send()?
            .error_for_status()?
            .text()?;
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_page_sends_browser_headers() {
        // Arrange
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/article")
            .match_header("user-agent", BROWSER_USER_AGENT)
            .match_header("accept", PAGE_ACCEPT)
            .match_header("accept-language", PAGE_ACCEPT_LANGUAGE)
            .with_status(200)
            .with_body("<title>ok</title>")
            .create();
        let fetcher = Fetcher::new(&LinkCardOptions::default()).expect("Should build clients");

        // Act
        let body = fetcher
            .fetch_page(&format!("{}/article", server.url()))
            .expect("Should fetch page");

        // Assert
        mock.assert();
        assert_eq!(body, "<title>ok</title>");
    }

    #[test]
    fn test_fetch_json_sends_api_headers() {
        // Arrange
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/lookup")
            .match_header("user-agent", API_USER_AGENT)
            .match_header("accept", API_ACCEPT)
            .with_status(200)
            .with_body("[]")
            .create();
        let fetcher = Fetcher::new(&LinkCardOptions::default()).expect("Should build clients");

        // Act
        let body = fetcher
            .fetch_json(&format!("{}/lookup", server.url()))
            .expect("Should fetch JSON");

        // Assert
        mock.assert();
        assert_eq!(body, "[]");
    }

    #[test]
    fn test_fetch_page_rejects_error_status() {
        // Arrange
        let mut server = mockito::Server::new();
        let _mock = server.mock("GET", "/missing").with_status(404).create();
        let fetcher = Fetcher::new(&LinkCardOptions::default()).expect("Should build clients");

        // Act
        let result = fetcher.fetch_page(&format!("{}/missing", server.url()));

        // Assert
        let err = result.expect_err("404 should be an error");
        assert!(err.to_string().contains("404"), "Unexpected error: {}", err);
    }
}
