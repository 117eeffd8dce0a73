/*!
 * Frontmatter codec.
 *
 * Recognizes the `---` delimited header at the top of a Markdown/MDX document,
 * decodes its restricted `key: value` syntax, and encodes data back into the
 * canonical header layout.
 *
 * The decoder is deliberately narrow:
 * - top-level `key: value` lines become scalars (values trimmed, quotes kept)
 * - a `key:` line without value opens a nested mapping for indented lines
 * - inside that mapping, a `subkey:` line without value opens one more level for
 *   lines indented further (this is how `sidebar.badge` is written)
 * - anything deeper, list items (`- item`) and block scalars are dropped
 *
 * The encoder emits a fixed field subset in a fixed order and drops every other key.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use super::model::{FrontmatterData, FrontmatterMap, FrontmatterValue};
use crate::translation::TitleTranslator;

/// Frontmatter delimiter line
pub const DELIMITER: &str = "---";

static BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A---\n(.*?)\n---\n(.*)\z").unwrap()
});

static KEY_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9_]+):\s*(.*)$").unwrap()
});

static NESTED_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\s+)([A-Za-z0-9_]+):\s*(.*)$").unwrap()
});

/// A document split into its frontmatter text and body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontmatterBlock<'a> {
    /// Text between the delimiter lines, without the delimiters
    pub frontmatter: &'a str,

    /// Everything after the closing delimiter line
    pub body: &'a str,

    /// Byte offset in the document where the body starts
    pub body_offset: usize,
}

/// Split a document into frontmatter and body.
///
/// Returns `None` unless the document starts with a `---` line and contains a
/// later `---` line terminated by a newline.
pub fn split(content: &str) -> Option<FrontmatterBlock<'_>> {
    let captures = BLOCK_REGEX.captures(content)?;
    let frontmatter = captures.get(1)?;
    let body = captures.get(2)?;

    Some(FrontmatterBlock {
        frontmatter: frontmatter.as_str(),
        body: body.as_str(),
        body_offset: body.start(),
    })
}

/// Whether the text already starts with a frontmatter delimiter
pub fn has_frontmatter(content: &str) -> bool {
    content.starts_with(DELIMITER)
}

/// Decode frontmatter text (without delimiters) into structured data
pub fn decode(frontmatter: &str) -> FrontmatterData {
    let mut data = FrontmatterData::new();
    let mut open: Option<OpenKey> = None;

    for line in frontmatter.split('\n') {
        if let Some(captures) = KEY_LINE_REGEX.captures(line) {
            if let Some(previous) = open.take() {
                previous.close_into(&mut data);
            }

            let key = &captures[1];
            let value = captures[2].trim();
            if value.is_empty() {
                open = Some(OpenKey::new(key));
            } else {
                data.insert(key, FrontmatterValue::scalar(value));
            }
            continue;
        }

        if let Some(current) = open.as_mut() {
            if let Some(captures) = NESTED_LINE_REGEX.captures(line) {
                let indent = captures[1].chars().count();
                current.push(indent, &captures[2], captures[3].trim());
            }
        }
    }

    if let Some(last) = open.take() {
        last.close_into(&mut data);
    }

    data
}

/// Encode data into a delimited frontmatter block.
///
/// The title is `title_override` when given and non-empty, otherwise the source
/// title passed through `translator`. The result starts and ends with a `---`
/// line and has no trailing newline.
pub fn encode(
    data: &FrontmatterData,
    title_override: Option<&str>,
    translator: &TitleTranslator,
) -> String {
    let mut lines: Vec<String> = vec![DELIMITER.to_string()];

    let source_title = data.scalar("title").unwrap_or("");
    let title = title_override
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| translator.translate(source_title));
    lines.push(format!("title: {}", title));

    if let Some(description) = non_empty_scalar(data.get("description")) {
        lines.push(format!("description: {}", description));
    }

    if let Some(sidebar) = data.mapping("sidebar") {
        let sidebar_lines = encode_sidebar(sidebar);
        if !sidebar_lines.is_empty() {
            lines.push("sidebar:".to_string());
            lines.extend(sidebar_lines);
        }
    }

    if let Some(last_updated) = non_empty_scalar(data.get("lastUpdated")) {
        lines.push(format!("lastUpdated: {}", last_updated));
    }

    lines.push(DELIMITER.to_string());
    lines.join("\n")
}

fn encode_sidebar(sidebar: &FrontmatterMap) -> Vec<String> {
    let mut lines = Vec::new();

    // An empty order is still written; only a missing one is skipped.
    if let Some(order) = sidebar.get("order").and_then(FrontmatterValue::as_scalar) {
        lines.push(format!("  order: {}", order));
    }

    if let Some(badge) = sidebar.get("badge").and_then(FrontmatterValue::as_mapping) {
        let text = non_empty_scalar(badge.get("text"));
        let variant = non_empty_scalar(badge.get("variant"));
        if text.is_some() || variant.is_some() {
            lines.push("  badge:".to_string());
            if let Some(text) = text {
                lines.push(format!("    text: {}", text));
            }
            if let Some(variant) = variant {
                lines.push(format!("    variant: {}", variant));
            }
        }
    }

    lines
}

fn non_empty_scalar(value: Option<&FrontmatterValue>) -> Option<&str> {
    value
        .and_then(FrontmatterValue::as_scalar)
        .filter(|value| !value.is_empty())
}

/// Top-level key waiting for indented lines
struct OpenKey {
    key: String,
    entries: FrontmatterMap,
    sub: Option<OpenSubKey>,
    /// Indent of an unsupported third-level key whose children are being skipped
    dropped_indent: Option<usize>,
}

/// Second-level key waiting for further-indented lines
struct OpenSubKey {
    key: String,
    indent: usize,
    entries: FrontmatterMap,
}

impl OpenKey {
    fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            entries: FrontmatterMap::new(),
            sub: None,
            dropped_indent: None,
        }
    }

    fn push(&mut self, indent: usize, key: &str, value: &str) {
        if let Some(dropped) = self.dropped_indent {
            if indent > dropped {
                return;
            }
            self.dropped_indent = None;
        }

        if let Some(sub) = self.sub.as_mut() {
            if indent > sub.indent {
                if value.is_empty() {
                    self.dropped_indent = Some(indent);
                } else {
                    sub.entries.insert(key.to_string(), FrontmatterValue::scalar(value));
                }
                return;
            }
            self.close_sub();
        }

        if value.is_empty() {
            self.sub = Some(OpenSubKey {
                key: key.to_string(),
                indent,
                entries: FrontmatterMap::new(),
            });
        } else {
            self.entries.insert(key.to_string(), FrontmatterValue::scalar(value));
        }
    }

    fn close_sub(&mut self) {
        if let Some(sub) = self.sub.take() {
            let value = if sub.entries.is_empty() {
                FrontmatterValue::scalar("")
            } else {
                FrontmatterValue::Mapping(sub.entries)
            };
            self.entries.insert(sub.key, value);
        }
    }

    /// A key that collected no nested lines is not stored at all
    fn close_into(mut self, data: &mut FrontmatterData) {
        self.close_sub();
        if !self.entries.is_empty() {
            data.insert(self.key, FrontmatterValue::Mapping(self.entries));
        }
    }
}
