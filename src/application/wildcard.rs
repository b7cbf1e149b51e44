//! Wildcard tag filtering

use crate::domain::tags::{parse, render, Tag};
use regex::Regex;

/// Keep tags whose normalized name matches a wildcard pattern.
///
/// A pattern containing `*` is compiled to an anchored regex with `*`
/// standing for any run of characters (everything else is matched
/// literally); a bare pattern is a substring match. The pattern is
/// normalized like a tag name first. An empty pattern or empty input
/// passes the input through unchanged.
pub fn wildcard_filter(tags: &str, wildcard: &str) -> String {
    if tags.trim().is_empty() || wildcard.trim().is_empty() {
        return tags.to_string();
    }

    let pattern = wildcard.trim().to_lowercase().replace(' ', "_");
    let list = parse(tags);

    let matched: Vec<Tag> = if pattern.contains('*') {
        let regex = wildcard_regex(&pattern);
        list.into_iter()
            .filter(|tag| regex.is_match(tag.normalized()))
            .collect()
    } else {
        list.into_iter()
            .filter(|tag| tag.normalized().contains(&pattern))
            .collect()
    };

    render(&matched, false)
}

/// Anchored regex for a `*` pattern, with the literal segments escaped.
fn wildcard_regex(pattern: &str) -> Regex {
    let mut source = String::from("^");
    for (idx, segment) in pattern.split('*').enumerate() {
        if idx > 0 {
            source.push_str(".*");
        }
        source.push_str(&regex::escape(segment));
    }
    source.push('$');
    Regex::new(&source).expect("escaped pattern is valid")
}
