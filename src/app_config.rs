use anyhow::{Context, Result};
use log::{warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::default::Default;
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;
use crate::file_utils::{FileManager, WalkOptions};
use crate::language_utils;
use crate::translation::TitleTranslator;

/// Application configuration module
/// This module handles loading, validating and applying the pipeline settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Language of the tree frontmatter is copied from (ISO)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Language of the tree that receives frontmatter (ISO)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Root of the source-locale documents
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Root of the target-locale documents
    #[serde(default = "default_target_dir")]
    pub target_dir: PathBuf,

    /// Root of the whole documentation tree (all locales)
    #[serde(default = "default_docs_dir")]
    pub docs_dir: PathBuf,

    /// Directory names pruned by synchronization and schema checks
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,

    /// File names that manage their own frontmatter and are never synchronized
    #[serde(default = "default_skip_files")]
    pub skip_files: Vec<String>,

    /// Maximum number of files processed at once
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Extra title translations, merged over the built-in table
    #[serde(default)]
    pub title_overrides: BTreeMap<String, String>,

    /// Optional file that collects warnings and errors of every run
    #[serde(default)]
    pub issues_log: Option<PathBuf>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_target_language() -> String {
    "cs".to_string()
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("packages/docs-content/en")
}

fn default_target_dir() -> PathBuf {
    PathBuf::from("packages/docs-content/cs")
}

fn default_docs_dir() -> PathBuf {
    PathBuf::from("packages/docs-content")
}

fn default_excluded_dirs() -> Vec<String> {
    vec!["meta".to_string()]
}

fn default_skip_files() -> Vec<String> {
    vec!["index.md".to_string(), "index.mdx".to_string()]
}

fn default_concurrency() -> usize {
    4
}

impl Config {
    /// Load the configuration from a JSON file, or fall back to defaults if it does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !FileManager::file_exists(path) {
            warn!("Config file not found at '{}', using defaults.", path.display());
            return Ok(Self::default());
        }

        let content = FileManager::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if language_utils::validate_language_code(&self.source_language).is_err() {
            return Err(ConfigError::InvalidLanguage {
                field: "source_language",
                code: self.source_language.clone(),
            });
        }
        if language_utils::validate_language_code(&self.target_language).is_err() {
            return Err(ConfigError::InvalidLanguage {
                field: "target_language",
                code: self.target_language.clone(),
            });
        }
        if language_utils::language_codes_match(&self.source_language, &self.target_language) {
            return Err(ConfigError::SameLanguage(self.source_language.clone()));
        }

        for (field, dir) in [
            ("source_dir", &self.source_dir),
            ("target_dir", &self.target_dir),
            ("docs_dir", &self.docs_dir),
        ] {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::EmptyDirectory(field));
            }
        }

        if self.concurrency == 0 {
            return Err(ConfigError::InvalidConcurrency);
        }

        Ok(())
    }

    /// Title translator for the target language, with overrides applied
    pub fn title_translator(&self) -> TitleTranslator {
        TitleTranslator::for_language(&self.target_language)
            .with_overrides(self.title_overrides.clone())
    }

    /// Walk settings for the target-locale tree during synchronization
    pub fn sync_walk_options(&self) -> WalkOptions {
        WalkOptions::documents()
            .excluding_dirs(self.excluded_dirs.iter().cloned())
            .skipping_files(self.skip_files.iter().cloned())
    }

    /// Walk settings for duplicate heading removal: every document
    pub fn dedupe_walk_options(&self) -> WalkOptions {
        WalkOptions::documents()
    }

    /// Walk settings for the schema check: what the site loader picks up
    pub fn check_walk_options(&self) -> WalkOptions {
        WalkOptions::documents().excluding_dirs(self.excluded_dirs.iter().cloned())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            source_dir: default_source_dir(),
            target_dir: default_target_dir(),
            docs_dir: default_docs_dir(),
            excluded_dirs: default_excluded_dirs(),
            skip_files: default_skip_files(),
            concurrency: default_concurrency(),
            title_overrides: BTreeMap::new(),
            issues_log: None,
            log_level: LogLevel::default(),
        }
    }
}
