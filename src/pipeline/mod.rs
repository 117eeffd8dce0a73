/*!
 * Batch pipelines over document trees.
 *
 * Each pipeline pulls paths from a [`DocumentWalker`], runs a per-file
 * read → transform → conditional write cycle, and turns every file into a
 * [`FileReport`]. Files are independent, so up to `concurrency` of them are in
 * flight at once.
 *
 * - `frontmatter_sync`: inject missing frontmatter into a localized tree
 * - `heading_dedupe`: remove a leading heading that repeats the title
 * - `schema_check`: verify documents satisfy the site's frontmatter schema
 * - `report`: per-file outcomes and batch summaries
 */

pub mod frontmatter_sync;
pub mod heading_dedupe;
pub mod report;
pub mod schema_check;

use futures::stream::{self, StreamExt};
use std::future::Future;
use std::path::PathBuf;
use std::pin::pin;

use crate::errors::WalkError;
use crate::file_utils::DocumentWalker;

pub use frontmatter_sync::FrontmatterSync;
pub use heading_dedupe::{extract_title, remove_duplicate_heading, HeadingDedupe};
pub use report::{BatchSummary, FileOutcome, FileReport, SkipReason};
pub use schema_check::{check_document, SchemaCheck, SchemaViolation};

/// Run `process` for every document the walker yields.
///
/// `on_report` sees each report as soon as its file completes. The returned
/// reports are sorted by path. A walk error stops the batch.
pub async fn run_batch<F, Fut>(
    walker: &DocumentWalker,
    concurrency: usize,
    mut on_report: impl FnMut(&FileReport),
    process: F,
) -> Result<Vec<FileReport>, WalkError>
where
    F: Fn(PathBuf) -> Fut,
    Fut: Future<Output = FileReport>,
{
    let process = &process;
    let mut results = pin!(
        stream::iter(walker.iter())
            .map(|entry| async move {
                match entry {
                    Ok(path) => Ok(process(path).await),
                    Err(e) => Err(e),
                }
            })
            .buffer_unordered(concurrency.max(1))
    );

    let mut reports = Vec::new();
    while let Some(result) = results.next().await {
        let report = result?;
        on_report(&report);
        reports.push(report);
    }

    reports.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(reports)
}
