//! Page layout wrapper component

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Wraps rendered page content with standard HTML structure
///
/// Provides DOCTYPE, head and container structure for every generated
/// page. The body is inserted verbatim since it is already HTML produced by
/// the Markdown renderer.
///
/// # Arguments
///
/// * `title`: Page title text
/// * `stylesheets`: CSS file paths relative to the page
/// * `body`: Rendered page HTML
///
/// # Returns
///
/// Complete HTML document
pub fn page_wrapper(title: &str, stylesheets: &[&str], body: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ko" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @for stylesheet in stylesheets {
                    link rel="stylesheet" href=(stylesheet);
                }
            }
            body {
                main class="container" {
                    (PreEscaped(body))
                }
            }
        }
    }
}
