//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::link_card::{
    DEFAULT_LOOKUP_API, DEFAULT_PROBLEM_IMAGE, DEFAULT_PROBLEM_SITE, LinkCardOptions,
};

/// Command line configuration for cardmark.
#[derive(Debug, Clone, Parser)]
#[command(name = "cardmark", version, about, long_about = None)]
pub struct Config {
    /// Markdown file or directory of Markdown pages
    #[arg(default_value = ".")]
    pub input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "_site")]
    pub output: PathBuf,

    /// Render a single link card for URL to stdout instead of building pages
    #[arg(long, value_name = "URL")]
    pub card: Option<String>,

    /// Connect and read timeout for link card requests, in seconds
    #[arg(long, default_value_t = 5)]
    pub timeout: u64,

    /// Base URL of the solved.ac API
    #[arg(long, default_value = DEFAULT_LOOKUP_API)]
    pub lookup_api: String,

    /// Thumbnail for judge problem cards
    #[arg(long, default_value = DEFAULT_PROBLEM_IMAGE)]
    pub problem_image: String,

    /// Judge site scraped when a problem lookup fails
    #[arg(long, default_value = DEFAULT_PROBLEM_SITE)]
    pub problem_site: String,

    /// Skip TLS certificate verification when scraping pages
    #[arg(long)]
    pub insecure_tls: bool,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log errors only
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the timeout is zero, or if pages are to be built
    /// from an input path that does not exist.
    pub fn validate(&self) -> Result<()> {
        if self.timeout == 0 {
            bail!("Timeout must be at least one second");
        }

        if self.card.is_none() && !self.input.exists() {
            bail!("Input path does not exist: {}", self.input.display());
        }

        Ok(())
    }

    /// Builds link card options from command line settings.
    pub fn link_card_options(&self) -> LinkCardOptions {
        let timeout = Duration::from_secs(self.timeout);
        LinkCardOptions {
            connect_timeout: timeout,
            read_timeout: timeout,
            accept_invalid_certs: self.insecure_tls,
            lookup_api: self.lookup_api.clone(),
            problem_image: self.problem_image.clone(),
            problem_site: self.problem_site.clone(),
        }
    }
}
