//! Callout paragraphs and paragraph attribute lists.
//!
//! Runs over the parsed comrak tree before HTML formatting. A paragraph
//! whose text starts with `<> ` loses the marker and is emitted as a styled
//! `<div>`. A paragraph ending in an attribute list is emitted as `<p>` with
//! those attributes. Every other paragraph is left untouched so comrak
//! renders it exactly as it would without this pass.
//!
//! comrak drops the `<p>` of paragraphs in tight lists. An attributed
//! paragraph keeps its `<p>` there, since the attributes need an element.

use anyhow::{Context, Result};
use comrak::nodes::{Ast, AstNode, NodeHtmlBlock, NodeValue};
use comrak::{Arena, Options, arena_tree::Node};
use regex::Regex;
use std::cell::RefCell;
use std::sync::LazyLock;

use super::attributes::{BlockAttributes, format_block_html};

/// Prefix that turns a paragraph into a callout.
pub const CALLOUT_MARKER: &str = "<> ";

/// Declarations appended to the callout's `style` attribute.
pub const CALLOUT_STYLE: &str = "background-color: red; padding: 0.5rem 0.75rem;";

/// Indentation per enclosing block container.
const INDENT_WIDTH: usize = 2;

/// HTML block type for generic block-level markup (CommonMark type 6).
const HTML_BLOCK_TYPE: u8 = 6;

static MARKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A<>\s+").expect("marker pattern is valid"));

/// Rewrites callout and attributed paragraphs under `root`.
///
/// # Errors
///
/// Returns error if inline content of a rewritten paragraph cannot be
/// formatted.
pub fn apply<'a>(arena: &'a Arena<AstNode<'a>>, root: &'a AstNode<'a>, options: &Options) -> Result<()> {
    let paragraphs: Vec<_> = root
        .descendants()
        .filter(|node| matches!(node.data.borrow().value, NodeValue::Paragraph))
        .collect();

    for paragraph in paragraphs {
        convert_paragraph(arena, paragraph, options)?;
    }

    Ok(())
}

/// Converts one paragraph, leaving it in place when it is neither a callout
/// nor attributed.
fn convert_paragraph<'a>(
    arena: &'a Arena<AstNode<'a>>,
    paragraph: &'a AstNode<'a>,
    options: &Options,
) -> Result<()> {
    coalesce_text(paragraph);

    let attributes = take_attribute_list(paragraph);
    let is_callout = strip_marker(paragraph);

    if !is_callout && attributes.is_none() {
        return Ok(());
    }

    let mut attributes = attributes.unwrap_or_default();
    let inner = render_children(paragraph, options)?;
    let indent = block_depth(paragraph) * INDENT_WIDTH;

    let html = if is_callout {
        merge_callout_style(&mut attributes);
        format_block_html("div", &attributes, &inner, indent)
    } else {
        format_block_html("p", &attributes, &inner, indent)
    };

    replace_with_html(arena, paragraph, html);
    Ok(())
}

/// Appends the callout declarations to any existing inline style.
pub fn merge_callout_style(attributes: &mut BlockAttributes) {
    let style = match attributes.get("style") {
        Some(existing) if !existing.is_empty() => format!("{}; {}", existing, CALLOUT_STYLE),
        _ => CALLOUT_STYLE.to_string(),
    };
    attributes.set("style", style);
}

/// Merges adjacent text children so the first text run is a single node.
///
/// The inline parser may split `<>` into separate text nodes. Merging them
/// does not change the rendered output.
fn coalesce_text<'a>(paragraph: &'a AstNode<'a>) {
    let mut current = paragraph.first_child();

    while let Some(node) = current {
        if let Some(next) = node.next_sibling() {
            let merged = {
                let mut data = node.data.borrow_mut();
                let sibling = next.data.borrow();
                match (&mut data.value, &sibling.value) {
                    (NodeValue::Text(text), NodeValue::Text(following)) => {
                        text.push_str(following);
                        true
                    }
                    _ => false,
                }
            };

            if merged {
                next.detach();
                continue;
            }
        }

        current = node.next_sibling();
    }
}

/// Removes a trailing `{: ...}` line and returns its attributes.
fn take_attribute_list<'a>(paragraph: &'a AstNode<'a>) -> Option<BlockAttributes> {
    let last = paragraph.last_child()?;
    let attributes = match &last.data.borrow().value {
        NodeValue::Text(text) => BlockAttributes::parse(text)?,
        _ => return None,
    };

    let line_break = last.previous_sibling()?;
    if !matches!(
        line_break.data.borrow().value,
        NodeValue::SoftBreak | NodeValue::LineBreak
    ) {
        return None;
    }

    line_break.detach();
    last.detach();
    Some(attributes)
}

/// Strips the callout marker from the first text child in place.
fn strip_marker<'a>(paragraph: &'a AstNode<'a>) -> bool {
    let Some(first) = paragraph.first_child() else {
        return false;
    };

    let mut data = first.data.borrow_mut();
    let NodeValue::Text(text) = &mut data.value else {
        return false;
    };

    if !text.starts_with(CALLOUT_MARKER) {
        return false;
    }

    let stripped = MARKER_PATTERN.replace(text, "").into_owned();
    *text = stripped;
    true
}

/// Formats the inline children of a block as HTML.
fn render_children<'a>(node: &'a AstNode<'a>, options: &Options) -> Result<String> {
    let mut buffer = Vec::new();
    for child in node.children() {
        comrak::format_html(child, options, &mut buffer)
            .context("Failed to format paragraph content")?;
    }
    String::from_utf8(buffer).context("Paragraph content is not valid UTF8")
}

/// Number of block containers enclosing `node`, excluding the document.
fn block_depth<'a>(node: &'a AstNode<'a>) -> usize {
    node.ancestors()
        .skip(1)
        .filter(|ancestor| !matches!(ancestor.data.borrow().value, NodeValue::Document))
        .count()
}

fn replace_with_html<'a>(arena: &'a Arena<AstNode<'a>>, node: &'a AstNode<'a>, literal: String) {
    let start = node.data.borrow().sourcepos.start;
    let block = NodeValue::HtmlBlock(NodeHtmlBlock {
        block_type: HTML_BLOCK_TYPE,
        literal,
    });
    let replacement = arena.alloc(Node::new(RefCell::new(Ast::new(block, start))));
    node.insert_before(replacement);
    node.detach();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_callout_style_without_existing() {
        // Arrange
        let mut attrs = BlockAttributes::default();

        // Act
        merge_callout_style(&mut attrs);

        // Assert
        assert_eq!(attrs.get("style"), Some(CALLOUT_STYLE));
    }

    #[test]
    fn test_merge_callout_style_with_existing() {
        // Arrange
        let mut attrs = BlockAttributes::parse(r#"{: style="color:blue"}"#).expect("Should parse");

        // Act
        merge_callout_style(&mut attrs);

        // Assert
        assert_eq!(
            attrs.get("style"),
            Some("color:blue; background-color: red; padding: 0.5rem 0.75rem;")
        );
    }

    #[test]
    fn test_merge_callout_style_with_empty_existing() {
        // Arrange
        let mut attrs = BlockAttributes::parse(r#"{: style=""}"#).expect("Should parse");

        // Act
        merge_callout_style(&mut attrs);

        // Assert
        assert_eq!(attrs.get("style"), Some(CALLOUT_STYLE));
    }

    #[test]
    fn test_marker_pattern_strips_all_whitespace() {
        assert_eq!(MARKER_PATTERN.replace("<>   Hello", ""), "Hello");
        assert_eq!(MARKER_PATTERN.replace("<> \tHi <> there", ""), "Hi <> there");
    }
}
