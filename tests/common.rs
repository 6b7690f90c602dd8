//! Shared test utilities for integration tests.

use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Creates a temporary site source tree.
///
/// # Arguments
///
/// * `pages`: Pairs of relative path and Markdown content
///
/// # Returns
///
/// Temporary directory containing the pages
///
/// # Errors
///
/// Returns error if directories or files cannot be created
pub fn create_site(pages: &[(&str, &str)]) -> Result<TempDir> {
    let dir = TempDir::new()?;
    for (path, content) in pages {
        write_page(dir.path(), path, content)?;
    }
    Ok(dir)
}

fn write_page(root: &Path, relative: &str, content: &str) -> Result<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
