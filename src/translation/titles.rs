/*!
 * Title translation.
 *
 * Titles are translated through a fixed lookup table. Matching is exact and
 * case-sensitive; unknown titles pass through unchanged.
 */

use std::collections::HashMap;

use crate::language_utils;

/// Built-in English to Czech titles of the documentation site
pub const CZECH_TITLES: &[(&str, &str)] = &[
    ("Detection Guide", "Průvodce detekcí"),
    ("Common Issues & False Positives", "Časté problémy a falešné poplachy"),
    ("macOS Detection", "Detekce na macOS"),
    ("Introduction", "Úvod"),
    ("Installation", "Instalace"),
    ("Quick Start", "Rychlý start"),
    ("Threat Overview", "Přehled hrozby"),
    ("Immediate Response", "Okamžitá reakce"),
    ("Cleanup Guide", "Průvodce čištěním"),
    ("Credential Rotation", "Rotace přihlašovacích údajů"),
    ("Remediation Guide", "Průvodce nápravou"),
    ("npm Hardening", "Zabezpečení npm"),
    ("GitHub Actions Security", "Zabezpečení GitHub Actions"),
    ("GitHub Repository Security", "Zabezpečení GitHub repozitáře"),
    ("CI/CD Security", "Zabezpečení CI/CD"),
    ("Prevention Best Practices", "Nejlepší postupy prevence"),
    ("Bun Security Guide", "Průvodce zabezpečením Bun"),
    ("Monorepo Security", "Zabezpečení Monorepa"),
    ("TypeScript & Astro Security", "Zabezpečení TypeScript & Astro"),
    ("Expo & React Native Security", "Zabezpečení Expo & React Native"),
    ("Rust, Go & Tauri Security", "Zabezpečení Rust, Go & Tauri"),
    ("CLI Reference", "Reference CLI"),
    ("Configuration Reference", "Reference konfigurace"),
    ("IOC Database", "Databáze IOC"),
    ("Socket.dev Case Study", "Případová studie Socket.dev"),
    ("Release Workflow", "Workflow vydání"),
];

/// Translates document titles through a read-only lookup table
#[derive(Debug, Clone, Default)]
pub struct TitleTranslator {
    table: HashMap<String, String>,
}

impl TitleTranslator {
    /// Create a translator from an explicit table
    pub fn new(table: HashMap<String, String>) -> Self {
        Self { table }
    }

    /// A translator that returns every title unchanged
    pub fn identity() -> Self {
        Self::default()
    }

    /// A translator backed by the built-in Czech table
    pub fn czech() -> Self {
        Self::from_pairs(CZECH_TITLES)
    }

    /// Pick the built-in table for a target language code.
    ///
    /// Languages without a built-in table get an empty one, so titles are kept.
    pub fn for_language(code: &str) -> Self {
        if language_utils::language_codes_match(code, "cs") {
            Self::czech()
        } else {
            Self::identity()
        }
    }

    fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let table = pairs
            .iter()
            .map(|(source, target)| ((*source).to_string(), (*target).to_string()))
            .collect();
        Self { table }
    }

    /// Merge extra entries over the table; the new entries win
    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.table.extend(overrides);
        self
    }

    /// Translate a title, or return it unchanged when the table has no exact match
    pub fn translate<'a>(&'a self, title: &'a str) -> &'a str {
        self.table.get(title).map(String::as_str).unwrap_or(title)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.table.contains_key(title)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
