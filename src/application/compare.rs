//! Sequence comparison and removal

use crate::domain::tags::{parse, render};

/// Result of comparing two tag sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagComparison {
    /// Tags only in the left input, rendered.
    pub left_unique: String,
    /// Tags only in the right input, rendered.
    pub right_unique: String,
    /// Tags present in both, rendered with the left input's weights.
    pub common: String,
}

/// Split two sequences into left-unique, right-unique and common parts.
/// Membership ignores weight; input order is preserved in each part.
pub fn compare_tags(left: &str, right: &str) -> TagComparison {
    let left = parse(left);
    let right = parse(right);

    let left_unique: Vec<_> = left
        .iter()
        .filter(|tag| !right.contains(tag))
        .cloned()
        .collect();
    let right_unique: Vec<_> = right
        .iter()
        .filter(|tag| !left.contains(tag))
        .cloned()
        .collect();
    let common: Vec<_> = left
        .iter()
        .filter(|tag| right.contains(tag))
        .cloned()
        .collect();

    TagComparison {
        left_unique: render(&left_unique, false),
        right_unique: render(&right_unique, false),
        common: render(&common, false),
    }
}

/// Drop every tag that appears in the exclusion list (weight ignored).
pub fn remove_tags(tags: &str, exclude: &str) -> String {
    let exclude = parse(exclude);
    let kept: Vec<_> = parse(tags)
        .into_iter()
        .filter(|tag| !exclude.contains(tag))
        .collect();
    render(&kept, false)
}
