/*!
 * Duplicate heading removal.
 *
 * The site renders the frontmatter title as the page heading, so a leading
 * `# Title` line that repeats it is removed. Two strategies are tried in order:
 *
 * 1. a pattern match for the heading right after the frontmatter block, allowing
 *    blank lines in between and exact title text
 * 2. a line scan that inspects only the first non-blank line after the closing
 *    delimiter and compares the heading text exactly or case-insensitively
 */

use log::{error, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tokio::fs;

use super::report::{FileReport, SkipReason};
use crate::errors::DocumentError;
use crate::frontmatter::{self, DELIMITER};

static TITLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?s)\A---\n.*?title:\s*["']?([^"'\n]+)["']?.*?\n---"#).unwrap()
});

/// Pull the title straight out of the frontmatter text.
///
/// Unlike the full decoder this tolerates a quoted value.
pub fn extract_title(content: &str) -> Option<String> {
    let captures = TITLE_REGEX.captures(content)?;
    let title = captures.get(1)?.as_str().trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// Remove a leading level-1 heading that repeats `title`.
///
/// Returns the new content, or `None` when no heading was removed.
pub fn remove_duplicate_heading(content: &str, title: &str) -> Option<String> {
    strip_heading_after_frontmatter(content, title)
        .or_else(|| strip_first_line_heading(content, title))
}

fn strip_heading_after_frontmatter(content: &str, title: &str) -> Option<String> {
    let block = frontmatter::split(content)?;
    let pattern = Regex::new(&format!(
        r"\A((?:[ \t]*\n)*)[ \t]*#[ \t]*{}[ \t]*\n",
        regex::escape(title)
    ))
    .ok()?;

    let captures = pattern.captures(block.body)?;
    let heading = captures.get(0)?;
    let blank_lines = captures.get(1)?;

    let offset = block.body_offset;
    let mut result = String::with_capacity(content.len());
    result.push_str(&content[..offset + blank_lines.end()]);
    result.push_str(&content[offset + heading.end()..]);
    Some(result)
}

fn strip_first_line_heading(content: &str, title: &str) -> Option<String> {
    let mut lines: Vec<&str> = content.split('\n').collect();
    let closing = lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| **line == DELIMITER)
        .map(|(index, _)| index)?;

    let (index, first) = lines
        .iter()
        .enumerate()
        .skip(closing + 1)
        .map(|(index, line)| (index, line.trim()))
        .find(|(_, line)| !line.is_empty())?;

    let heading = first.strip_prefix("# ")?.trim();
    if heading == title || heading.to_lowercase() == title.to_lowercase() {
        lines.remove(index);
        Some(lines.join("\n"))
    } else {
        None
    }
}

/// Removes duplicate title headings across a document tree
#[derive(Debug, Clone, Default)]
pub struct HeadingDedupe {
    dry_run: bool,
}

impl HeadingDedupe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute outcomes without writing anything
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub async fn process_file(&self, path: &Path) -> FileReport {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) => {
                let err = DocumentError::io(path, e);
                error!("Error processing {}: {}", path.display(), err);
                return FileReport::failed(path, err);
            }
        };

        let Some(title) = extract_title(&content) else {
            warn!("No title found: {}", path.display());
            return FileReport::skipped(path, SkipReason::MissingTitle);
        };

        let updated = match remove_duplicate_heading(&content, &title) {
            Some(updated) if updated != content => updated,
            _ => return FileReport::unchanged(path),
        };

        if self.dry_run {
            info!("Would fix: {}", path.display());
            return FileReport::updated(path);
        }

        match fs::write(path, updated).await {
            Ok(()) => {
                info!("Fixed: {}", path.display());
                FileReport::updated(path)
            }
            Err(e) => {
                let err = DocumentError::io(path, e);
                error!("Error processing {}: {}", path.display(), err);
                FileReport::failed(path, err)
            }
        }
    }
}
