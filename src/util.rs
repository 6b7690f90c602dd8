//! Utility functions for cardmark

use std::path::{Component, Path};

/// Calculates relative path depth for generated HTML pages.
///
/// Determines how many `../` prefixes are needed to reach the site root
/// from a page at `relative_path` (relative to the output directory).
///
/// # Arguments
///
/// * `relative_path`: Page path relative to the site root
///
/// # Returns
///
/// Number of directory levels needed to traverse back to root
pub fn calculate_depth(relative_path: &Path) -> usize {
    relative_path
        .parent()
        .map(|parent| {
            parent
                .components()
                .filter(|c| matches!(c, Component::Normal(_)))
                .count()
        })
        .unwrap_or(0)
}

/// Returns the `../` prefix that leads from a page back to the site root.
pub fn root_prefix(relative_path: &Path) -> String {
    "../".repeat(calculate_depth(relative_path))
}

/// Extracts the page title from the first ATX level one heading.
///
/// Only a `# ` line outside fenced code blocks counts. Closing `#`
/// sequences are dropped.
///
/// # Arguments
///
/// * `markdown`: Page source
///
/// # Returns
///
/// Heading text, or `None` when the page has no level one heading
pub fn extract_title(markdown: &str) -> Option<String> {
    let mut in_fence = false;

    for line in markdown.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("# ") {
            let title = rest.trim().trim_end_matches('#').trim_end();
            if !title.is_empty() {
                return Some(title.to_string());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_level_page() {
        assert_eq!(calculate_depth(Path::new("index.html")), 0);
        assert_eq!(root_prefix(Path::new("index.html")), "");
    }

    #[test]
    fn test_nested_page() {
        assert_eq!(calculate_depth(Path::new("posts/hello.html")), 1);
        assert_eq!(calculate_depth(Path::new("posts/2024/hello.html")), 2);
        assert_eq!(root_prefix(Path::new("posts/2024/hello.html")), "../../");
    }

    #[test]
    fn test_extract_title_first_heading() {
        let markdown = "intro\n\n# Solving 1000\n\n# Second";
        assert_eq!(extract_title(markdown), Some("Solving 1000".to_string()));
    }

    #[test]
    fn test_extract_title_strips_closing_hashes() {
        assert_eq!(extract_title("# Notes ##"), Some("Notes".to_string()));
    }

    #[test]
    fn test_extract_title_ignores_fenced_code_and_subheadings() {
        let markdown = "```sh\n# not a title\n```\n## Sub\n";
        assert_eq!(extract_title(markdown), None);
    }
}
