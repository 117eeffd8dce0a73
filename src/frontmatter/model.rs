/*!
 * Frontmatter data model.
 *
 * A decoded frontmatter block is a mapping from key to value, where a value is
 * either a scalar string or a nested mapping.
 */

use std::collections::BTreeMap;

/// Nested mapping of frontmatter keys to values
pub type FrontmatterMap = BTreeMap<String, FrontmatterValue>;

/// A single frontmatter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontmatterValue {
    /// Plain text value, trimmed, quotes kept literally
    Scalar(String),

    /// Indented block of `subkey: value` lines
    Mapping(FrontmatterMap),
}

impl FrontmatterValue {
    /// Create a scalar value
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::Scalar(value.into())
    }

    /// Returns the scalar text, if this is a scalar
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::Mapping(_) => None,
        }
    }

    /// Returns the nested mapping, if this is a mapping
    pub fn as_mapping(&self) -> Option<&FrontmatterMap> {
        match self {
            Self::Scalar(_) => None,
            Self::Mapping(map) => Some(map),
        }
    }

    /// Look up a key in a nested mapping
    pub fn get(&self, key: &str) -> Option<&FrontmatterValue> {
        self.as_mapping().and_then(|map| map.get(key))
    }
}

/// Decoded frontmatter of one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontmatterData {
    fields: FrontmatterMap,
}

impl FrontmatterData {
    /// Create empty frontmatter data
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a top-level field
    pub fn insert(&mut self, key: impl Into<String>, value: FrontmatterValue) {
        self.fields.insert(key.into(), value);
    }

    /// Builder-style variant of [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, value: FrontmatterValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&FrontmatterValue> {
        self.fields.get(key)
    }

    /// Scalar value of a top-level field
    pub fn scalar(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FrontmatterValue::as_scalar)
    }

    /// Mapping value of a top-level field
    pub fn mapping(&self, key: &str) -> Option<&FrontmatterMap> {
        self.get(key).and_then(FrontmatterValue::as_mapping)
    }

    /// The document title, when present as a non-empty scalar
    pub fn title(&self) -> Option<&str> {
        self.scalar("title").filter(|title| !title.is_empty())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, FrontmatterValue)> for FrontmatterData {
    fn from_iter<T: IntoIterator<Item = (String, FrontmatterValue)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
