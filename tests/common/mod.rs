/*!
 * Common test utilities for the docsync test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use docsync::app_config::Config;

/// English source of the installation page used across tests
pub const EN_INSTALLATION: &str = "---
title: Installation
description: How to install
sidebar:
  order: 2
  badge:
    text: New
    variant: tip
---

# Installation

Run the installer.
";

/// Czech translation of the installation page, without frontmatter
pub const CS_INSTALLATION_BODY: &str = "# Instalace\n\nSpusťte instalátor.\n";

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content, creating parent directories
pub fn create_test_file(dir: &Path, relative: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(relative);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Reads a file below the given directory
pub fn read_test_file(dir: &Path, relative: &str) -> String {
    fs::read_to_string(dir.join(relative)).unwrap()
}

/// Docs tree layout inside a temporary directory: `<tmp>/docs/{en,cs}`
pub struct DocsTree {
    pub temp_dir: TempDir,
}

impl DocsTree {
    pub fn new() -> Result<Self> {
        let temp_dir = create_temp_dir()?;
        fs::create_dir_all(temp_dir.path().join("docs/en"))?;
        fs::create_dir_all(temp_dir.path().join("docs/cs"))?;
        Ok(Self { temp_dir })
    }

    pub fn docs_dir(&self) -> PathBuf {
        self.temp_dir.path().join("docs")
    }

    pub fn en_dir(&self) -> PathBuf {
        self.docs_dir().join("en")
    }

    pub fn cs_dir(&self) -> PathBuf {
        self.docs_dir().join("cs")
    }

    pub fn write_en(&self, relative: &str, content: &str) -> PathBuf {
        create_test_file(&self.en_dir(), relative, content).unwrap()
    }

    pub fn write_cs(&self, relative: &str, content: &str) -> PathBuf {
        create_test_file(&self.cs_dir(), relative, content).unwrap()
    }

    pub fn read_cs(&self, relative: &str) -> String {
        read_test_file(&self.cs_dir(), relative)
    }

    pub fn read_en(&self, relative: &str) -> String {
        read_test_file(&self.en_dir(), relative)
    }

    /// Configuration pointing at this tree, sequential unless changed
    pub fn config(&self) -> Config {
        Config {
            source_dir: self.en_dir(),
            target_dir: self.cs_dir(),
            docs_dir: self.docs_dir(),
            concurrency: 1,
            ..Config::default()
        }
    }
}
