//! Tag records and their canonical text rendering

use super::escape::strip_escapes;
use super::weight::Weight;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One parsed tag with its weight.
///
/// Two records are equal iff their normalized forms are equal; the weight
/// is excluded from equality and hashing so deduplication and membership
/// tests ignore emphasis.
#[derive(Debug, Clone)]
pub struct Tag {
    raw: String,
    weight: Weight,
    normalized: String,
    unescaped_normalized: String,
}

impl Tag {
    /// Build a record from raw tag text (escape pairs restored, as written).
    pub fn new(raw: impl Into<String>, weight: Weight) -> Self {
        let raw = raw.into();
        let lower = raw.to_lowercase();
        let normalized = lower.trim().replace(' ', "_");
        let unescaped_normalized = strip_escapes(&normalized);
        Tag {
            raw,
            weight,
            normalized,
            unescaped_normalized,
        }
    }

    /// Original tag text, case and separators preserved.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }

    pub fn add_weight(&mut self, strength: Weight) {
        self.weight += strength;
    }

    /// Lowercase, space->underscore form with escape sequences preserved.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// [`normalized`](Self::normalized) with escape sequences collapsed to
    /// literal characters; the category table key for this record.
    pub fn unescaped_normalized(&self) -> &str {
        &self.unescaped_normalized
    }

    /// Render this record: bare text at weight 1.0, `(text:weight)`
    /// otherwise. `underscore` converts spaces in the visible name.
    pub fn text(&self, underscore: bool) -> String {
        let mut name = self.raw.clone();
        if underscore {
            name = name.replace(' ', "_");
        }
        if self.weight.is_one() {
            name
        } else {
            format!("({}:{})", name, self.weight)
        }
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

/// Render a sequence, joining records with `", "`.
pub fn render(tags: &[Tag], underscore: bool) -> String {
    tags.iter()
        .map(|tag| tag.text(underscore))
        .collect::<Vec<_>>()
        .join(", ")
}
