use anyhow::{Result, Context};
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::errors::WalkError;

// @module: File and directory utilities

/// Extensions of documents the pipeline touches
pub const DOCUMENT_EXTENSIONS: &[&str] = &[".md", ".mdx"];

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Append lines to a log file, each prefixed with a timestamp
    pub fn append_to_log_file<P: AsRef<Path>>(path: P, lines: &[String]) -> Result<()> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file: {:?}", path.as_ref()))?;

        for line in lines {
            writeln!(file, "[{}] {}", timestamp, line)
                .with_context(|| format!("Failed to write to log file: {:?}", path.as_ref()))?;
        }

        Ok(())
    }
}

/// Which entries a [`DocumentWalker`] yields
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Directory names that are pruned, never descended into
    pub excluded_dirs: Vec<String>,

    /// File names that are never yielded (e.g. `index.mdx`)
    pub skip_files: Vec<String>,

    /// Visit entries sorted by file name instead of listing order
    pub sorted: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            excluded_dirs: Vec::new(),
            skip_files: Vec::new(),
            sorted: true,
        }
    }
}

impl WalkOptions {
    /// Every `.md`/`.mdx` document, no exclusions
    pub fn documents() -> Self {
        Self::default()
    }

    /// Prune directories with any of these names
    pub fn excluding_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_dirs.extend(names.into_iter().map(Into::into));
        self
    }

    /// Never yield files with any of these names
    pub fn skipping_files<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_files.extend(names.into_iter().map(Into::into));
        self
    }

    /// Keep the filesystem's listing order
    pub fn unsorted(mut self) -> Self {
        self.sorted = false;
        self
    }

    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|excluded| excluded == name)
    }

    /// Whether a file with this name is a document to yield
    pub fn accepts_file(&self, name: &str) -> bool {
        is_document_name(name) && !self.skip_files.iter().any(|skipped| skipped == name)
    }
}

/// Whether a file name has a document extension
pub fn is_document_name(name: &str) -> bool {
    DOCUMENT_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Depth-first walk over the documents below a root directory.
///
/// The walker is a description of the walk; every call to [`iter`](Self::iter)
/// starts a fresh lazy traversal.
#[derive(Debug, Clone)]
pub struct DocumentWalker {
    root: PathBuf,
    options: WalkOptions,
}

impl DocumentWalker {
    /// Create a walker, failing if the root is not a readable directory
    pub fn new<P: Into<PathBuf>>(root: P, options: WalkOptions) -> Result<Self, WalkError> {
        let root = root.into();

        let metadata = fs::metadata(&root).map_err(|e| WalkError::DirectoryAccess {
            path: root.clone(),
            reason: e.to_string(),
        })?;
        if !metadata.is_dir() {
            return Err(WalkError::DirectoryAccess {
                path: root,
                reason: "not a directory".to_string(),
            });
        }
        fs::read_dir(&root).map_err(|e| WalkError::DirectoryAccess {
            path: root.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self { root, options })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn options(&self) -> &WalkOptions {
        &self.options
    }

    /// Start a new traversal
    pub fn iter(&self) -> DocumentIter {
        let mut walk = WalkDir::new(&self.root);
        if self.options.sorted {
            walk = walk.sort_by_file_name();
        }

        let excluded = self.options.excluded_dirs.clone();
        let prune: Box<dyn FnMut(&DirEntry) -> bool + Send> = Box::new(move |entry: &DirEntry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !excluded.iter().any(|name| entry.file_name() == name.as_str())
        });

        DocumentIter {
            inner: walk.into_iter().filter_entry(prune),
            options: self.options.clone(),
        }
    }
}

impl<'a> IntoIterator for &'a DocumentWalker {
    type Item = Result<PathBuf, WalkError>;
    type IntoIter = DocumentIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over document paths, created by [`DocumentWalker::iter`]
pub struct DocumentIter {
    inner: walkdir::FilterEntry<walkdir::IntoIter, Box<dyn FnMut(&DirEntry) -> bool + Send>>,
    options: WalkOptions,
}

impl Iterator for DocumentIter {
    type Item = Result<PathBuf, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e.into())),
            };

            if !entry.file_type().is_file() {
                continue;
            }

            if self.options.accepts_file(&entry.file_name().to_string_lossy()) {
                return Some(Ok(entry.into_path()));
            }
        }
    }
}
