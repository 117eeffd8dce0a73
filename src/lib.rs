/*!
 * # docsync - frontmatter maintenance for bilingual documentation trees
 *
 * A Rust library that keeps a localized tree of Markdown/MDX documents
 * consistent with its source-language original.
 *
 * ## Features
 *
 * - Lazy, restartable walks over document trees with pruned directories
 * - A codec for the restricted YAML-like frontmatter header the site uses
 * - Frontmatter synchronization with translated titles:
 *   - built-in English to Czech title table
 *   - per-project overrides from the configuration file
 * - Removal of leading headings that repeat the frontmatter title
 * - Schema check of the fields the site's content loader requires
 * - Concurrent batch processing where one bad file never aborts the run
 * - ISO 639-1 and ISO 639-2 language code support
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations and the document walker
 * - `frontmatter`: Frontmatter parsing and serialization:
 *   - `frontmatter::codec`: split, decode and encode
 *   - `frontmatter::model`: the decoded key/value model
 * - `translation`: Title translation tables
 * - `pipeline`: Batch runners:
 *   - `pipeline::frontmatter_sync`: frontmatter synchronization
 *   - `pipeline::heading_dedupe`: duplicate heading removal
 *   - `pipeline::schema_check`: frontmatter schema check
 *   - `pipeline::report`: per-file outcomes and summaries
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod frontmatter;
pub mod language_utils;
pub mod pipeline;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, ConfigError, DocumentError, WalkError};
pub use file_utils::{DocumentWalker, WalkOptions};
pub use frontmatter::{FrontmatterData, FrontmatterValue};
pub use language_utils::{get_language_name, language_codes_match, normalize_to_part2t};
pub use pipeline::{BatchSummary, FileOutcome, FileReport, SkipReason};
pub use translation::TitleTranslator;
