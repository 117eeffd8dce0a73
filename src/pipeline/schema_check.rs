/*!
 * Frontmatter schema check.
 *
 * Mirrors what the site's content loader requires from every document it
 * picks up: a frontmatter block with a title, and a `sidebar` that is a mapping
 * when present. Never writes.
 */

use log::{error, warn};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tokio::fs;

use super::report::{FileOutcome, FileReport};
use crate::errors::DocumentError;
use crate::frontmatter::{self, FrontmatterValue};

/// Ways a document can violate the frontmatter schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaViolation {
    MissingFrontmatter,
    MissingTitle,
    SidebarNotMapping,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::MissingFrontmatter => "missing frontmatter",
            Self::MissingTitle => "missing title",
            Self::SidebarNotMapping => "sidebar is not a mapping",
        };
        f.write_str(text)
    }
}

/// Check one document's text, returning the first violation found
pub fn check_document(content: &str) -> Result<(), SchemaViolation> {
    let block = frontmatter::split(content).ok_or(SchemaViolation::MissingFrontmatter)?;
    let data = frontmatter::decode(block.frontmatter);

    if data.title().is_none() {
        return Err(SchemaViolation::MissingTitle);
    }
    if let Some(FrontmatterValue::Scalar(_)) = data.get("sidebar") {
        return Err(SchemaViolation::SidebarNotMapping);
    }
    Ok(())
}

/// Schema check over a document tree
#[derive(Debug, Clone, Default)]
pub struct SchemaCheck;

impl SchemaCheck {
    pub fn new() -> Self {
        Self
    }

    pub async fn process_file(&self, path: &Path) -> FileReport {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) => {
                let err = DocumentError::io(path, e);
                error!("Error checking {}: {}", path.display(), err);
                return FileReport::failed(path, err);
            }
        };

        match check_document(&content) {
            Ok(()) => FileReport::unchanged(path),
            Err(violation) => {
                warn!("Invalid frontmatter ({}): {}", violation, path.display());
                FileReport::new(path, FileOutcome::Violation(violation))
            }
        }
    }
}
