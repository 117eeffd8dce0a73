/*!
 * End-to-end frontmatter schema check tests
 */

use anyhow::Result;

use docsync::app_controller::Controller;
use docsync::pipeline::{FileOutcome, SchemaViolation};

use crate::common::DocsTree;

fn controller(tree: &DocsTree) -> Controller {
    Controller::with_config(tree.config()).unwrap().show_progress(false)
}

#[tokio::test]
async fn test_runCheck_withValidTree_shouldBeClean() -> Result<()> {
    let tree = DocsTree::new()?;
    tree.write_en("a.md", "---\ntitle: A\nsidebar:\n  order: 1\n---\n");
    tree.write_cs("a.md", "---\ntitle: A\n---\n");

    let summary = controller(&tree).run_check().await?;

    assert_eq!(summary.processed, 2);
    assert_eq!(summary.violations, 0);
    assert!(summary.is_clean());
    Ok(())
}

#[tokio::test]
async fn test_runCheck_shouldReportEachViolationWithoutWriting() -> Result<()> {
    let tree = DocsTree::new()?;
    tree.write_cs("missing.md", "Obsah\n");
    tree.write_cs("untitled.md", "---\ndescription: x\n---\n");
    tree.write_en("scalar-sidebar.md", "---\ntitle: A\nsidebar: hidden\n---\n");
    tree.write_en("ok.md", "---\ntitle: Ok\n---\n");

    let summary = controller(&tree).run_check().await?;

    assert_eq!(summary.processed, 4);
    assert_eq!(summary.violations, 3);
    assert!(!summary.is_clean());

    let outcomes: Vec<_> = summary
        .issues
        .iter()
        .map(|report| {
            let name = report.path.file_name().unwrap().to_string_lossy().to_string();
            (name, report.outcome.clone())
        })
        .collect();
    assert_eq!(
        outcomes,
        vec![
            ("missing.md".to_string(), FileOutcome::Violation(SchemaViolation::MissingFrontmatter)),
            ("untitled.md".to_string(), FileOutcome::Violation(SchemaViolation::MissingTitle)),
            ("scalar-sidebar.md".to_string(), FileOutcome::Violation(SchemaViolation::SidebarNotMapping)),
        ]
    );
    assert_eq!(tree.read_cs("missing.md"), "Obsah\n");
    Ok(())
}

#[tokio::test]
async fn test_runCheck_shouldIgnoreMetaDirectories() -> Result<()> {
    let tree = DocsTree::new()?;
    tree.write_en("meta/notes.md", "no frontmatter\n");

    let summary = controller(&tree).run_check().await?;

    assert_eq!(summary.processed, 0);
    assert!(summary.is_clean());
    Ok(())
}
