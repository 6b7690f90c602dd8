//! Block attribute lists attached to paragraphs.
//!
//! A paragraph may end with a line such as `{: style="color:blue" .note #intro}`.
//! The line is removed from the output and its attributes are applied to the
//! rendered block element.

use regex::Regex;
use std::sync::LazyLock;

static ATTRIBUTE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\.([\w-]+)|#([\w-]+)|([\w-]+)=(?:"([^"]*)"|'([^']*)')"#)
        .expect("attribute token pattern is valid")
});

/// Ordered HTML attributes of a block element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockAttributes {
    entries: Vec<(String, String)>,
}

impl BlockAttributes {
    /// Parses an attribute list line.
    ///
    /// Accepts `.class`, `#id` and `name="value"` (or single quoted) tokens
    /// separated by whitespace inside `{:` and `}`. Class tokens accumulate.
    /// Returns `None` when the text is not entirely an attribute list.
    pub fn parse(text: &str) -> Option<Self> {
        let inner = text.trim().strip_prefix("{:")?.strip_suffix('}')?;

        let mut attributes = Self::default();
        let mut last_end = 0;

        for caps in ATTRIBUTE_TOKEN.captures_iter(inner) {
            let whole = caps.get(0)?;
            if !inner[last_end..whole.start()].trim().is_empty() {
                return None;
            }
            last_end = whole.end();

            if let Some(class) = caps.get(1) {
                let merged = match attributes.get("class") {
                    Some(existing) => format!("{} {}", existing, class.as_str()),
                    None => class.as_str().to_string(),
                };
                attributes.set("class", merged);
            } else if let Some(id) = caps.get(2) {
                attributes.set("id", id.as_str());
            } else if let Some(name) = caps.get(3) {
                let value = caps.get(4).or_else(|| caps.get(5)).map_or("", |v| v.as_str());
                attributes.set(name.as_str(), value);
            }
        }

        if !inner[last_end..].trim().is_empty() {
            return None;
        }

        Some(attributes)
    }

    /// Returns the value of attribute `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sets attribute `name`, keeping its original position when present.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes as ` name="value"` pairs with escaped values.
    pub fn to_html(&self) -> String {
        self.entries
            .iter()
            .map(|(name, value)| format!(" {}=\"{}\"", name, escape_attribute(value)))
            .collect()
    }
}

/// Formats a block element with attributes, indented by `indent` spaces.
pub fn format_block_html(tag: &str, attributes: &BlockAttributes, body: &str, indent: usize) -> String {
    format!(
        "{}<{}{}>{}</{}>\n",
        " ".repeat(indent),
        tag,
        attributes.to_html(),
        body,
        tag
    )
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
