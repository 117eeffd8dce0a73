/*!
 * End-to-end duplicate heading removal tests
 */

use anyhow::Result;

use docsync::app_controller::Controller;
use docsync::pipeline::{FileOutcome, HeadingDedupe, SkipReason};

use crate::common::DocsTree;

fn controller(tree: &DocsTree) -> Controller {
    Controller::with_config(tree.config()).unwrap().show_progress(false)
}

#[tokio::test]
async fn test_runDedupe_shouldRemoveHeadingsInBothLocales() -> Result<()> {
    let tree = DocsTree::new()?;
    tree.write_en("install.md", "---\ntitle: Installation\n---\n\n# Installation\n\nRun it.\n");
    tree.write_cs("install.md", "---\ntitle: Instalace\n---\n\n# Instalace\n\nSpusťte.\n");

    let summary = controller(&tree).run_dedupe().await?;

    assert_eq!(summary.processed, 2);
    assert_eq!(summary.modified, 2);
    assert_eq!(tree.read_en("install.md"), "---\ntitle: Installation\n---\n\n\nRun it.\n");
    assert_eq!(tree.read_cs("install.md"), "---\ntitle: Instalace\n---\n\n\nSpusťte.\n");
    Ok(())
}

#[tokio::test]
async fn test_runDedupe_shouldDescendIntoMetaAndIndexPages() -> Result<()> {
    let tree = DocsTree::new()?;
    tree.write_en("meta/about.md", "---\ntitle: About\n---\n# About\nText\n");
    tree.write_en("index.mdx", "---\ntitle: Home\n---\n# Home\nText\n");

    let summary = controller(&tree).run_dedupe().await?;

    assert_eq!(summary.modified, 2);
    assert_eq!(tree.read_en("meta/about.md"), "---\ntitle: About\n---\nText\n");
    assert_eq!(tree.read_en("index.mdx"), "---\ntitle: Home\n---\nText\n");
    Ok(())
}

#[tokio::test]
async fn test_runDedupe_withDifferentHeading_shouldLeaveFileUnchanged() -> Result<()> {
    let tree = DocsTree::new()?;
    let content = "---\ntitle: Installation\n---\n\n# Getting Started\n\nText\n";
    tree.write_en("install.md", content);

    let summary = controller(&tree).run_dedupe().await?;

    assert_eq!(summary.modified, 0);
    assert_eq!(summary.unchanged, 1);
    assert_eq!(tree.read_en("install.md"), content);
    Ok(())
}

#[tokio::test]
async fn test_runDedupe_withoutTitle_shouldSkip() -> Result<()> {
    let tree = DocsTree::new()?;
    tree.write_en("no-title.md", "# Heading only\n");

    let summary = controller(&tree).run_dedupe().await?;

    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.issues[0].outcome, FileOutcome::Skipped(SkipReason::MissingTitle));
    assert_eq!(tree.read_en("no-title.md"), "# Heading only\n");
    Ok(())
}

#[tokio::test]
async fn test_runDedupe_withDryRun_shouldNotWrite() -> Result<()> {
    let tree = DocsTree::new()?;
    let content = "---\ntitle: Installation\n---\n# Installation\nText\n";
    tree.write_en("install.md", content);

    let summary = controller(&tree).dry_run(true).run_dedupe().await?;

    assert_eq!(summary.modified, 1);
    assert_eq!(tree.read_en("install.md"), content);
    Ok(())
}

#[tokio::test]
async fn test_processFile_appliedTwice_shouldBeIdempotent() -> Result<()> {
    let tree = DocsTree::new()?;
    let path = tree.write_en("quoted.md", "---\ntitle: \"Quick Start\"\n---\n# quick start\nText\n");
    let dedupe = HeadingDedupe::new();

    let first = dedupe.process_file(&path).await;
    let second = dedupe.process_file(&path).await;

    assert_eq!(first.outcome, FileOutcome::Updated);
    assert_eq!(second.outcome, FileOutcome::Unchanged);
    assert_eq!(tree.read_en("quoted.md"), "---\ntitle: \"Quick Start\"\n---\nText\n");
    Ok(())
}
