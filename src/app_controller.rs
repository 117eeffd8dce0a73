use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::app_config::Config;
use crate::file_utils::{DocumentWalker, FileManager, WalkOptions};
use crate::language_utils;
use crate::pipeline::{self, BatchSummary, FileReport, FrontmatterSync, HeadingDedupe, SchemaCheck};

// @module: Application controller for the document pipelines

/// Runs the batch pipelines with a validated configuration
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Compute outcomes without writing
    dry_run: bool,

    // @field: Draw a spinner while files are processed
    show_progress: bool,
}

impl Controller {
    /// Create a controller for test purposes: default configuration, no spinner
    pub fn new_for_test() -> Result<Self> {
        Ok(Self::with_config(Config::default())?.show_progress(false))
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        Ok(Self {
            config,
            dry_run: false,
            show_progress: true,
        })
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn show_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Add missing frontmatter to every target-locale document
    pub async fn run_sync(&self) -> Result<BatchSummary> {
        let config = &self.config;
        let sync = FrontmatterSync::new(&config.source_dir, &config.target_dir, config.title_translator())
            .dry_run(self.dry_run)
            .source_tag(language_utils::display_tag(&config.source_language));

        info!(
            "Synchronizing frontmatter {} -> {} in {}",
            language_utils::display_tag(&config.source_language),
            language_utils::display_tag(&config.target_language),
            config.target_dir.display()
        );

        self.run_pipeline(&config.target_dir, config.sync_walk_options(), "Synchronizing", |path| {
            let sync = &sync;
            async move { sync.process_file(&path).await }
        })
        .await
    }

    /// Remove leading headings that repeat the frontmatter title
    pub async fn run_dedupe(&self) -> Result<BatchSummary> {
        let dedupe = HeadingDedupe::new().dry_run(self.dry_run);
        info!("Removing duplicate headings in {}", self.config.docs_dir.display());

        self.run_pipeline(&self.config.docs_dir, self.config.dedupe_walk_options(), "Checking headings", |path| {
            let dedupe = &dedupe;
            async move { dedupe.process_file(&path).await }
        })
        .await
    }

    /// Verify every document satisfies the frontmatter schema. Never writes.
    pub async fn run_check(&self) -> Result<BatchSummary> {
        let check = SchemaCheck::new();
        info!("Checking frontmatter in {}", self.config.docs_dir.display());

        self.run_pipeline(&self.config.docs_dir, self.config.check_walk_options(), "Validating", |path| {
            let check = &check;
            async move { check.process_file(&path).await }
        })
        .await
    }

    async fn run_pipeline<F, Fut>(
        &self,
        root: &Path,
        options: WalkOptions,
        label: &str,
        process: F,
    ) -> Result<BatchSummary>
    where
        F: Fn(PathBuf) -> Fut,
        Fut: Future<Output = FileReport>,
    {
        let start_time = Instant::now();
        let walker = DocumentWalker::new(root, options)
            .with_context(|| format!("Cannot walk document tree: {}", root.display()))?;

        let progress_bar = self.create_spinner(label);
        let reports = pipeline::run_batch(
            &walker,
            self.config.concurrency,
            |report| {
                progress_bar.inc(1);
                progress_bar.set_message(
                    report
                        .path
                        .file_name()
                        .map(|name| name.to_string_lossy().to_string())
                        .unwrap_or_default(),
                );
            },
            process,
        )
        .await;
        progress_bar.finish_and_clear();

        let reports = reports.with_context(|| format!("Directory walk failed below {}", root.display()))?;
        let summary = BatchSummary::from_reports(reports, self.dry_run);

        debug!("Batch finished in {:.2?}", start_time.elapsed());
        if summary.is_clean() {
            info!("{}", summary.summary_line());
        } else {
            warn!("{}", summary.summary_line());
        }

        self.write_issues_log(&summary);
        Ok(summary)
    }

    fn create_spinner(&self, label: &str) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let progress_bar = ProgressBar::new_spinner();
        let template_result = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {prefix} {pos} files {msg}")
            .or_else(|_| ProgressStyle::default_spinner().template("{spinner} {prefix} {pos} files {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        progress_bar.set_style(template_result);
        progress_bar.set_prefix(label.to_string());
        progress_bar.enable_steady_tick(Duration::from_millis(100));
        progress_bar
    }

    /// Append every issue of a run to the configured issues log, if any
    fn write_issues_log(&self, summary: &BatchSummary) {
        let Some(path) = &self.config.issues_log else {
            return;
        };

        let lines: Vec<String> = summary
            .issues
            .iter()
            .filter(|report| report.outcome.is_issue())
            .map(FileReport::to_string)
            .collect();
        if lines.is_empty() {
            return;
        }

        // Logged only, the batch result stands
        if let Err(e) = FileManager::append_to_log_file(path, &lines) {
            error!("Failed to write issues log {}: {}", path.display(), e);
        }
    }
}
