//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const LINK_CARD: &str = include_str!("../assets/link-card.css");

/// File name of the bundled stylesheet inside the assets directory.
pub const STYLESHEET: &str = "cardmark.css";

/// Writes the bundled stylesheet to the assets directory
///
/// The `my_link_card*` rules are the styling contract for link card
/// fragments.
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir).context("Failed to create assets directory")?;
    write_bundled(assets_dir, STYLESHEET, &[BASE, LINK_CARD])
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
