//! HTML page generation for Markdown sources.

use anyhow::{Context, Result};
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::assets::{STYLESHEET, write_css_assets};
use crate::components::layout::page_wrapper;
use crate::config::Config;
use crate::link_card::LinkCardRenderer;
use crate::markdown::MarkdownRenderer;
use crate::tags::{expand_link_cards, link_card_urls};
use crate::util::{extract_title, root_prefix};

/// Page written during a site build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    /// Markdown source path
    pub source: PathBuf,
    /// HTML path relative to the output directory
    pub output: PathBuf,
    /// Page title
    pub title: String,
}

/// Collects Markdown sources under `input`.
///
/// A file input yields itself. A directory is walked recursively, skipping
/// entries whose name starts with `.` or `_` (hidden files, build output,
/// layouts). Results are sorted for stable builds.
///
/// # Arguments
///
/// * `input`: Markdown file or directory
///
/// # Returns
///
/// Pairs of source path and path relative to the input root
///
/// # Errors
///
/// Returns error if a directory cannot be read
pub fn collect_markdown_files(input: &Path) -> Result<Vec<(PathBuf, PathBuf)>> {
    if input.is_file() {
        let name = input
            .file_name()
            .with_context(|| format!("Input has no file name: {}", input.display()))?;
        return Ok(vec![(input.to_path_buf(), PathBuf::from(name))]);
    }

    let mut files = Vec::new();
    walk(input, Path::new(""), &mut files)?;
    files.sort();
    Ok(files)
}

fn walk(dir: &Path, relative: &Path, files: &mut Vec<(PathBuf, PathBuf)>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let name = entry.file_name();
        let name_str = name.to_string_lossy();
        if name_str.starts_with('.') || name_str.starts_with('_') {
            continue;
        }

        let path = entry.path();
        let rel = relative.join(&name);
        if path.is_dir() {
            walk(&path, &rel, files)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            files.push((path, rel));
        }
    }

    Ok(())
}

/// Renders a single page source into a complete HTML document.
///
/// Link card tags are expanded first, then the Markdown is rendered and
/// wrapped in the page layout.
///
/// # Arguments
///
/// * `source`: Markdown page source
/// * `output`: HTML path relative to the site root, used for asset links
/// * `fallback_title`: Title when the page has no level one heading
/// * `markdown`: Markdown renderer
/// * `render_card`: Link card renderer for tag expansion
///
/// # Returns
///
/// Page title and document markup
///
/// # Errors
///
/// Returns error if Markdown rendering fails
pub fn render_page<F>(
    source: &str,
    output: &Path,
    fallback_title: &str,
    markdown: &MarkdownRenderer<'_>,
    render_card: F,
) -> Result<(String, Markup)>
where
    F: FnMut(&str) -> String,
{
    let expanded = expand_link_cards(source, render_card);
    let body = markdown
        .render(&expanded)
        .context("Failed to render Markdown")?;

    let title = extract_title(source).unwrap_or_else(|| fallback_title.to_string());
    let stylesheet = format!("{}assets/{}", root_prefix(output), STYLESHEET);

    let page = page_wrapper(&title, &[stylesheet.as_str()], &body);
    Ok((title, page))
}

/// Builds HTML pages for every Markdown source in the configured input.
///
/// One link card renderer is shared by all pages, so each judge problem is
/// looked up at most once per build.
///
/// # Errors
///
/// Returns error if sources cannot be read or output cannot be written.
/// Link card failures do not fail the build.
pub fn generate_site(config: &Config) -> Result<Vec<GeneratedPage>> {
    let cards = LinkCardRenderer::new(config.link_card_options())
        .context("Failed to initialize link card renderer")?;
    let markdown = MarkdownRenderer::new();

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;
    write_css_assets(&config.output.join("assets"))?;

    let sources = collect_markdown_files(&config.input)?;
    let mut pages = Vec::with_capacity(sources.len());

    for (source_path, relative) in sources {
        let source = fs::read_to_string(&source_path)
            .with_context(|| format!("Failed to read {}", source_path.display()))?;

        let output = relative.with_extension("html");
        let fallback_title = relative
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        debug!(
            source = %source_path.display(),
            cards = link_card_urls(&source).len(),
            "Rendering page"
        );
        let (title, page) = render_page(&source, &output, &fallback_title, &markdown, |url| {
            cards.render(url)
        })
        .with_context(|| format!("Failed to render {}", source_path.display()))?;

        let target = config.output.join(&output);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&target, page.into_string())
            .with_context(|| format!("Failed to write {}", target.display()))?;

        info!(page = %output.display(), "Wrote page");
        pages.push(GeneratedPage {
            source: source_path,
            output,
            title,
        });
    }

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_markdown_files_single_file() {
        // Arrange
        let dir = tempfile::TempDir::new().expect("Should create temp dir");
        let file = dir.path().join("post.md");
        fs::write(&file, "# Post").expect("Should write");

        // Act
        let files = collect_markdown_files(&file).expect("Should collect");

        // Assert
        assert_eq!(files, vec![(file, PathBuf::from("post.md"))]);
    }

    #[test]
    fn test_collect_markdown_files_walks_and_skips() {
        // Arrange
        let dir = tempfile::TempDir::new().expect("Should create temp dir");
        let root = dir.path();
        fs::create_dir_all(root.join("posts")).expect("Should create dir");
        fs::create_dir_all(root.join("_site")).expect("Should create dir");
        fs::create_dir_all(root.join(".git")).expect("Should create dir");
        fs::write(root.join("index.md"), "").expect("Should write");
        fs::write(root.join("notes.txt"), "").expect("Should write");
        fs::write(root.join("posts/b.md"), "").expect("Should write");
        fs::write(root.join("posts/a.md"), "").expect("Should write");
        fs::write(root.join("_site/old.md"), "").expect("Should write");
        fs::write(root.join(".git/x.md"), "").expect("Should write");

        // Act
        let files = collect_markdown_files(root).expect("Should collect");

        // Assert
        let relative: Vec<_> = files.iter().map(|(_, rel)| rel.clone()).collect();
        assert_eq!(
            relative,
            vec![
                PathBuf::from("index.md"),
                PathBuf::from("posts/a.md"),
                PathBuf::from("posts/b.md"),
            ]
        );
    }

    #[test]
    fn test_render_page_expands_cards_and_callouts() {
        // Arrange
        let markdown = MarkdownRenderer::new();
        let source = "# Weekly notes\n\n<> Read this first\n\n{% linkcard https://example.com %}\n";

        // Act
        let (title, page) = render_page(
            source,
            Path::new("posts/weekly.html"),
            "weekly",
            &markdown,
            |url| format!("<div class=\"my_link_card\">{}</div>", url),
        )
        .expect("Should render page");
        let html = page.into_string();

        // Assert
        assert_eq!(title, "Weekly notes");
        assert!(html.contains(r#"href="../assets/cardmark.css""#), "{}", html);
        assert!(html.contains("<h1>Weekly notes</h1>"), "{}", html);
        assert!(html.contains(">Read this first</div>"), "{}", html);
        assert!(
            html.contains("<div class=\"my_link_card\">https://example.com</div>"),
            "{}",
            html
        );
    }

    #[test]
    fn test_render_page_fallback_title() {
        // Arrange
        let markdown = MarkdownRenderer::new();

        // Act
        let (title, _) = render_page(
            "no heading here",
            Path::new("about.html"),
            "about",
            &markdown,
            |_| String::new(),
        )
        .expect("Should render page");

        // Assert
        assert_eq!(title, "about");
    }
}
