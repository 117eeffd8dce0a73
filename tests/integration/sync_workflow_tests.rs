/*!
 * End-to-end frontmatter synchronization tests
 */

use anyhow::Result;

use docsync::app_controller::Controller;
use docsync::pipeline::{FileOutcome, FrontmatterSync, SkipReason};
use docsync::translation::TitleTranslator;

use crate::common::{self, CS_INSTALLATION_BODY, DocsTree, EN_INSTALLATION};

fn controller(tree: &DocsTree) -> Controller {
    Controller::with_config(tree.config()).unwrap().show_progress(false)
}

#[tokio::test]
async fn test_runSync_withMissingFrontmatter_shouldPrependTranslatedHeader() -> Result<()> {
    let tree = DocsTree::new()?;
    tree.write_en("guide/installation.mdx", EN_INSTALLATION);
    tree.write_cs("guide/installation.mdx", CS_INSTALLATION_BODY);

    let summary = controller(&tree).run_sync().await?;

    assert_eq!(summary.processed, 1);
    assert_eq!(summary.modified, 1);
    assert_eq!(
        tree.read_cs("guide/installation.mdx"),
        "---\ntitle: Instalace\ndescription: How to install\nsidebar:\n  order: 2\n  badge:\n    text: New\n    variant: tip\n---\n\n# Instalace\n\nSpusťte instalátor.\n"
    );
    // the source tree is never written
    assert_eq!(tree.read_en("guide/installation.mdx"), EN_INSTALLATION);
    Ok(())
}

#[tokio::test]
async fn test_runSync_withExistingFrontmatter_shouldLeaveFileByteForByte() -> Result<()> {
    let tree = DocsTree::new()?;
    let existing = "---\ntitle: Vlastní název\n---\n\r\nObsah  \n\n\n";
    tree.write_en("intro.md", "---\ntitle: Introduction\n---\nBody\n");
    tree.write_cs("intro.md", existing);

    let summary = controller(&tree).run_sync().await?;

    assert_eq!(summary.modified, 0);
    assert_eq!(summary.skipped, 1);
    assert_eq!(tree.read_cs("intro.md"), existing);
    Ok(())
}

#[tokio::test]
async fn test_runSync_withoutEnglishCounterpart_shouldSkipAndKeepFile() -> Result<()> {
    let tree = DocsTree::new()?;
    tree.write_cs("only-czech.md", "Jen česky\n");

    let summary = controller(&tree).run_sync().await?;

    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.issues.len(), 1);
    assert_eq!(summary.issues[0].outcome, FileOutcome::Skipped(SkipReason::MissingCounterpart));
    assert_eq!(tree.read_cs("only-czech.md"), "Jen česky\n");
    Ok(())
}

#[tokio::test]
async fn test_runSync_shouldIgnoreMetaDirsAndIndexPages() -> Result<()> {
    let tree = DocsTree::new()?;
    for relative in ["meta/authors.md", "index.mdx", "guide/index.md"] {
        tree.write_en(relative, "---\ntitle: Introduction\n---\n");
        tree.write_cs(relative, "Obsah\n");
    }

    let summary = controller(&tree).run_sync().await?;

    assert_eq!(summary.processed, 0);
    for relative in ["meta/authors.md", "index.mdx", "guide/index.md"] {
        assert_eq!(tree.read_cs(relative), "Obsah\n");
    }
    Ok(())
}

#[tokio::test]
async fn test_runSync_withDryRun_shouldReportWithoutWriting() -> Result<()> {
    let tree = DocsTree::new()?;
    tree.write_en("quick-start.md", "---\ntitle: Quick Start\n---\n");
    tree.write_cs("quick-start.md", "Obsah\n");

    let summary = controller(&tree).dry_run(true).run_sync().await?;

    assert!(summary.dry_run);
    assert_eq!(summary.modified, 1);
    assert_eq!(tree.read_cs("quick-start.md"), "Obsah\n");
    Ok(())
}

#[tokio::test]
async fn test_runSync_appliedTwice_shouldChangeNothingTheSecondTime() -> Result<()> {
    let tree = DocsTree::new()?;
    tree.write_en("a.md", EN_INSTALLATION);
    tree.write_cs("a.md", "A\n");
    tree.write_en("b.md", "---\ntitle: CLI Reference\n---\n");
    tree.write_cs("b.md", "B\n");

    let first = controller(&tree).run_sync().await?;
    let after_first = (tree.read_cs("a.md"), tree.read_cs("b.md"));
    let second = controller(&tree).run_sync().await?;

    assert_eq!(first.modified, 2);
    assert_eq!(second.modified, 0);
    assert_eq!(second.skipped, 2);
    assert_eq!((tree.read_cs("a.md"), tree.read_cs("b.md")), after_first);
    Ok(())
}

#[tokio::test]
async fn test_runSync_withConcurrency_shouldMatchSequentialResult() -> Result<()> {
    let sequential = DocsTree::new()?;
    let concurrent = DocsTree::new()?;
    for tree in [&sequential, &concurrent] {
        for index in 0..12 {
            tree.write_en(&format!("page-{index:02}.md"), "---\ntitle: Installation\n---\n");
            tree.write_cs(&format!("page-{index:02}.md"), &format!("Strana {index}\n"));
        }
        tree.write_cs("orphan.md", "Sirotek\n");
    }

    let first = controller(&sequential).run_sync().await?;
    let mut config = concurrent.config();
    config.concurrency = 8;
    let second = Controller::with_config(config)?.show_progress(false).run_sync().await?;

    assert_eq!(first.modified, second.modified);
    assert_eq!(first.skipped, second.skipped);
    for index in 0..12 {
        let relative = format!("page-{index:02}.md");
        assert_eq!(sequential.read_cs(&relative), concurrent.read_cs(&relative));
    }
    Ok(())
}

#[tokio::test]
async fn test_runSync_withMissingTargetRoot_shouldFail() -> Result<()> {
    let tree = DocsTree::new()?;
    let mut config = tree.config();
    config.target_dir = tree.docs_dir().join("de");

    let result = Controller::with_config(config)?.show_progress(false).run_sync().await;
    assert!(result.is_err());
    Ok(())
}

#[tokio::test]
async fn test_processFile_withSourceWithoutFrontmatter_shouldSkip() -> Result<()> {
    let tree = DocsTree::new()?;
    tree.write_en("plain.md", "# Plain\n");
    let target = tree.write_cs("plain.md", "Obsah\n");

    let sync = FrontmatterSync::new(tree.en_dir(), tree.cs_dir(), TitleTranslator::czech());
    let report = sync.process_file(&target).await;

    assert_eq!(report.outcome, FileOutcome::Skipped(SkipReason::UnparsableFrontmatter));
    assert_eq!(tree.read_cs("plain.md"), "Obsah\n");
    Ok(())
}

#[tokio::test]
async fn test_runSync_withIssuesLog_shouldRecordSkips() -> Result<()> {
    let tree = DocsTree::new()?;
    tree.write_cs("orphan.md", "Sirotek\n");
    let log_path = tree.temp_dir.path().join("issues.log");

    let mut config = tree.config();
    config.issues_log = Some(log_path.clone());
    Controller::with_config(config)?.show_progress(false).run_sync().await?;

    let log = common::read_test_file(tree.temp_dir.path(), "issues.log");
    assert!(log.contains("no source-language equivalent"));
    assert!(log.contains("orphan.md"));
    Ok(())
}
