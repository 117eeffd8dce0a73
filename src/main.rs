// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, bail};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use docsync::app_config::{self, Config};
use docsync::app_controller::Controller;
use docsync::pipeline::BatchSummary;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add missing frontmatter to localized documents, copied from their source-language originals
    #[command(name = "sync-frontmatter", alias = "sync")]
    SyncFrontmatter,

    /// Remove a leading `# Title` heading that repeats the frontmatter title
    #[command(name = "remove-duplicate-h1", alias = "dedupe")]
    RemoveDuplicateH1,

    /// Verify that every document carries the frontmatter the site requires
    Check,

    /// Generate shell completions for docsync
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options shared by all batch commands
#[derive(Args, Debug)]
struct GlobalOptions {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "docsync.json")]
    config: PathBuf,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Compute outcomes without writing any file
    #[arg(short = 'n', long, global = true)]
    dry_run: bool,

    /// Print the batch summary as JSON on stdout
    #[arg(long, global = true)]
    json: bool,

    /// Root of the source-language documents
    #[arg(long, global = true)]
    source_dir: Option<PathBuf>,

    /// Root of the localized documents
    #[arg(long, global = true)]
    target_dir: Option<PathBuf>,

    /// Root of the whole documentation tree
    #[arg(long, global = true)]
    docs_dir: Option<PathBuf>,

    /// Maximum number of files processed at once
    #[arg(short = 'j', long, global = true)]
    concurrency: Option<usize>,
}

/// docsync - frontmatter maintenance for bilingual documentation trees
///
/// Keeps a localized tree of Markdown/MDX documents consistent with its
/// source-language original.
#[derive(Parser, Debug)]
#[command(name = "docsync")]
#[command(version)]
#[command(about = "Frontmatter maintenance for bilingual documentation trees")]
#[command(long_about = "docsync keeps a localized tree of Markdown/MDX documents consistent with its source-language original.

EXAMPLES:
    docsync sync                               # Add missing frontmatter to the localized tree
    docsync sync --dry-run                     # Show what would change, write nothing
    docsync dedupe                             # Remove headings that repeat the title
    docsync check --json                       # Validate frontmatter, JSON summary on stdout
    docsync --log-level debug sync -j 1        # Sequential run with debug logging
    docsync completions bash > docsync.bash    # Generate bash completions

CONFIGURATION:
    Configuration is read from docsync.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, defaults are used.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    options: GlobalOptions,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        // The logger itself accepts everything; log::set_max_level does the filtering
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Marker and ANSI color for a log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("ERROR", "\x1B[1;31m"),
            Level::Warn => ("WARN ", "\x1B[1;33m"),
            Level::Info => ("INFO ", "\x1B[1;32m"),
            Level::Debug => ("DEBUG", "\x1B[1;36m"),
            Level::Trace => ("TRACE", "\x1B[1;35m"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (marker, color) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, marker, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    let command = match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "docsync", &mut std::io::stdout());
            return Ok(());
        }
        command => command,
    };

    let options = cli.options;
    if let Some(level) = options.log_level {
        log::set_max_level(app_config::LogLevel::from(level).to_level_filter());
    }

    let config = load_config(&options)?;
    if options.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let controller = Controller::with_config(config)?
        .dry_run(options.dry_run)
        .show_progress(!options.json);

    let is_check = matches!(command, Commands::Check);
    let summary = match command {
        Commands::SyncFrontmatter => controller.run_sync().await?,
        Commands::RemoveDuplicateH1 => controller.run_dedupe().await?,
        Commands::Check => controller.run_check().await?,
        Commands::Completions { .. } => return Ok(()),
    };

    print_summary(&summary, options.json)?;

    if is_check && summary.violations > 0 {
        bail!("{} document(s) violate the frontmatter schema", summary.violations);
    }

    Ok(())
}

/// Load the configuration file and apply command line overrides
fn load_config(options: &GlobalOptions) -> Result<Config> {
    let mut config = Config::load_or_default(&options.config)?;

    if let Some(source_dir) = &options.source_dir {
        config.source_dir = source_dir.clone();
    }
    if let Some(target_dir) = &options.target_dir {
        config.target_dir = target_dir.clone();
    }
    if let Some(docs_dir) = &options.docs_dir {
        config.docs_dir = docs_dir.clone();
    }
    if let Some(concurrency) = options.concurrency {
        config.concurrency = concurrency;
    }
    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    }

    Ok(config)
}

fn print_summary(summary: &BatchSummary, json: bool) -> Result<()> {
    if json {
        let output = serde_json::to_string_pretty(summary).context("Failed to serialize batch summary")?;
        println!("{}", output);
    } else {
        println!("{}", summary.summary_line());
    }
    Ok(())
}
