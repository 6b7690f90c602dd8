//! Logging initialization.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::Config;

/// Returns the log level selected by command line flags.
pub fn level_for(config: &Config) -> Level {
    if config.verbose {
        Level::DEBUG
    } else if config.quiet {
        Level::ERROR
    } else {
        Level::WARN
    }
}

/// Installs the global tracing subscriber writing to stderr.
///
/// Stdout stays clean for `--card` output.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
pub fn initialize_logging(config: &Config) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level_for(config))
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_level_for_flags() {
        let default = Config::try_parse_from(["cardmark"]).expect("Should parse");
        let verbose = Config::try_parse_from(["cardmark", "--verbose"]).expect("Should parse");
        let quiet = Config::try_parse_from(["cardmark", "--quiet"]).expect("Should parse");

        assert_eq!(level_for(&default), Level::WARN);
        assert_eq!(level_for(&verbose), Level::DEBUG);
        assert_eq!(level_for(&quiet), Level::ERROR);
    }
}
