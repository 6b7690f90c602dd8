//! Link card fragment

use maud::{Markup, html};

use crate::link_card::PageMetadata;

/// Renders a link card for resolved page metadata
///
/// The class names form the contract with the site stylesheet and must stay
/// stable. A transparent overlay anchor covers the whole card so any click
/// opens the target in a new tab. When the page has no image, the thumbnail
/// shows the first two letters of the domain instead.
///
/// # Arguments
///
/// * `url`: Target URL (already trimmed)
/// * `metadata`: Fully populated card metadata
///
/// # Returns
///
/// Link card markup
pub fn card(url: &str, metadata: &PageMetadata) -> Markup {
    let background = format!("background-image: url('{}')", metadata.image_url);

    html! {
        div class="my_link_card" {
            a class="my_link_card_overlay"
                href=(url)
                target="_blank"
                rel="noopener noreferrer"
                aria-label=(metadata.title) {}

            div class="my_link_card_thumb" {
                div class="my_link_card_bg" style=(background) {
                    @if metadata.image_url.is_empty() {
                        span class="my_link_card_fallback" { (fallback_label(&metadata.domain)) }
                    }
                }
            }

            div class="my_link_card_body" {
                div class="my_link_card_title" { (metadata.title) }
                div class="my_link_card_desc" { (metadata.description) }
                div class="my_link_card_domain" { (metadata.domain) }
            }
        }
    }
}

/// Renders the inline error shown in place of a card
pub fn card_error(message: &str) -> Markup {
    html! {
        p { "LinkCard Error: " (message) }
    }
}

/// Upper-cased first two characters of the domain.
fn fallback_label(domain: &str) -> String {
    domain.chars().take(2).collect::<String>().to_uppercase()
}
