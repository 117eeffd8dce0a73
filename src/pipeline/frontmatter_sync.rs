/*!
 * Frontmatter synchronization between locale trees.
 *
 * For every localized document without frontmatter, the document at the same
 * relative path in the source-locale tree is read, its frontmatter is decoded,
 * re-encoded with a translated title, and prepended to the localized body.
 * Existing frontmatter is never overwritten.
 */

use log::{debug, error, info, warn};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::report::{FileReport, SkipReason};
use crate::errors::DocumentError;
use crate::frontmatter;
use crate::translation::TitleTranslator;

/// Injects missing frontmatter into a target-locale tree
#[derive(Debug, Clone)]
pub struct FrontmatterSync {
    source_root: PathBuf,
    target_root: PathBuf,
    translator: TitleTranslator,
    dry_run: bool,
    source_tag: String,
}

impl FrontmatterSync {
    pub fn new<P1, P2>(source_root: P1, target_root: P2, translator: TitleTranslator) -> Self
    where
        P1: Into<PathBuf>,
        P2: Into<PathBuf>,
    {
        Self {
            source_root: source_root.into(),
            target_root: target_root.into(),
            translator,
            dry_run: false,
            source_tag: "EN".to_string(),
        }
    }

    /// Compute outcomes without writing anything
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Label of the source locale used in log lines (e.g. `EN`)
    pub fn source_tag(mut self, tag: impl Into<String>) -> Self {
        self.source_tag = tag.into();
        self
    }

    pub fn target_root(&self) -> &Path {
        &self.target_root
    }

    /// Path of a target document relative to the target root
    pub fn relative_path<'a>(&self, target: &'a Path) -> Option<&'a Path> {
        target.strip_prefix(&self.target_root).ok()
    }

    /// Source-locale document at the same relative path as `target`
    pub fn counterpart_path(&self, target: &Path) -> Option<PathBuf> {
        self.relative_path(target)
            .map(|relative| self.source_root.join(relative))
    }

    /// Build the new target text from source and target contents.
    ///
    /// Returns the reason for leaving the target alone when nothing can be
    /// synthesized.
    pub fn synthesize(&self, source: &str, target: &str) -> Result<String, SkipReason> {
        if frontmatter::has_frontmatter(target) {
            return Err(SkipReason::AlreadySynchronized);
        }

        let block = frontmatter::split(source).ok_or(SkipReason::UnparsableFrontmatter)?;
        let data = frontmatter::decode(block.frontmatter);
        if data.title().is_none() {
            return Err(SkipReason::MissingTitle);
        }

        let header = frontmatter::encode(&data, None, &self.translator);
        Ok(format!("{}\n\n{}\n", header, target.trim()))
    }

    /// Synchronize one target-locale document
    pub async fn process_file(&self, target: &Path) -> FileReport {
        let relative = self
            .relative_path(target)
            .unwrap_or(target)
            .display()
            .to_string();

        let Some(source) = self.counterpart_path(target) else {
            error!("Error processing {}: outside of {}", relative, self.target_root.display());
            return FileReport::failed(target, format!("not below {}", self.target_root.display()));
        };

        // Both reads are independent; the write waits for both.
        let (target_read, source_read) = tokio::join!(
            fs::read_to_string(target),
            fs::read_to_string(&source)
        );

        let target_content = match target_read {
            Ok(content) => content,
            Err(e) => {
                let err = DocumentError::io(target, e);
                error!("Error processing {}: {}", relative, err);
                return FileReport::failed(target, err);
            }
        };

        if frontmatter::has_frontmatter(&target_content) {
            info!("Skipping (has frontmatter): {}", relative);
            return FileReport::skipped(target, SkipReason::AlreadySynchronized);
        }

        let source_content = match source_read {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("No {} equivalent: {}", self.source_tag, relative);
                return FileReport::skipped(target, SkipReason::MissingCounterpart);
            }
            Err(e) => {
                let err = DocumentError::io(&source, e);
                error!("Error processing {}: {}", relative, err);
                return FileReport::failed(target, err);
            }
        };

        let updated = match self.synthesize(&source_content, &target_content) {
            Ok(updated) => updated,
            Err(SkipReason::UnparsableFrontmatter) => {
                warn!("No {} frontmatter: {}", self.source_tag, relative);
                return FileReport::skipped(target, SkipReason::UnparsableFrontmatter);
            }
            Err(reason) => {
                warn!("Skipping ({}): {}", reason, relative);
                return FileReport::skipped(target, reason);
            }
        };

        if self.dry_run {
            info!("Would add frontmatter: {}", relative);
            return FileReport::updated(target);
        }

        match fs::write(target, updated).await {
            Ok(()) => {
                info!("Added frontmatter: {}", relative);
                FileReport::updated(target)
            }
            Err(e) => {
                let err = DocumentError::io(target, e);
                error!("Error processing {}: {}", relative, err);
                FileReport::failed(target, err)
            }
        }
    }
}
