//! Category store model and matching primitives
//!
//! A [`CategoryStore`] maps normalized, unescaped tag names to ordered
//! lists of category names. The store is immutable once built: the host
//! loads it once (see [`crate::infrastructure::table`]) and passes a
//! reference into every category-aware operation.

use crate::domain::tags::Tag;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

/// Read-only tag -> categories mapping.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct CategoryStore {
    entries: HashMap<String, Vec<String>>,
}

impl CategoryStore {
    /// Build a store from in-memory entries.
    pub fn from_entries(entries: HashMap<String, Vec<String>>) -> Self {
        CategoryStore { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the store lists this exact tag name.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Categories of an exact tag name; empty slice when absent.
    pub fn categories(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Categories of an exact tag name as a set, for similarity scoring.
    pub fn category_set(&self, key: &str) -> HashSet<&str> {
        self.categories(key).iter().map(String::as_str).collect()
    }

    /// Categories of a record, looked up by its unescaped normalized form.
    pub fn categories_of(&self, tag: &Tag) -> &[String] {
        self.categories(tag.unescaped_normalized())
    }

    pub fn category_set_of(&self, tag: &Tag) -> HashSet<&str> {
        self.category_set(tag.unescaped_normalized())
    }

    /// Resolve a tag name, falling back to a listed suffix.
    ///
    /// A compound tag that is not listed may still resolve: the first
    /// underscore-delimited segment is stripped repeatedly until a listed
    /// name remains (`dark_long_hair` -> `long_hair`). Returns the matched
    /// key, or `None` when the text is exhausted.
    pub fn flexible_lookup(&self, text: &str) -> Option<&str> {
        if let Some((key, _)) = self.entries.get_key_value(text) {
            return Some(key.as_str());
        }

        let mut rest = text;
        while let Some((_, tail)) = rest.split_once('_') {
            rest = tail;
            if rest.is_empty() {
                break;
            }
            if let Some((key, _)) = self.entries.get_key_value(rest) {
                return Some(key.as_str());
            }
        }
        None
    }

    /// All listed tag names, in arbitrary order.
    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Jaccard similarity of two category sets: `|intersection| / |union|`,
/// defined as 0 when either set is empty.
pub fn match_score(a: &HashSet<&str>, b: &HashSet<&str>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    intersection as f64 / union as f64
}

/// Normalize a user-supplied category list: newlines and periods become
/// commas, each entry is lowercased, trimmed and space->underscored.
pub fn normalize_category_list(text: &str) -> Vec<String> {
    text.replace(['\n', '.'], ",")
        .split(',')
        .map(|entry| entry.trim().to_lowercase().replace(' ', "_"))
        .filter(|entry| !entry.is_empty())
        .collect()
}
