//! Tag notation parser
//!
//! Turns a free-form tag string into an ordered sequence of [`Tag`]
//! records. The notation is a comma-separated list of groups; a group is a
//! bare tag name or a parenthesized group which may nest and may end in an
//! explicit `:weight`. Escaped punctuation (`\(`, `\)`, `\:`, `\,`, `\\`)
//! is protected before any structural splitting.
//!
//! Malformed input never fails: unparseable weights become literal tag
//! text and unbalanced parentheses are paired by the shorter run.
//!
//! # Examples
//!
//! ```
//! use tagkit::domain::tags::parse;
//!
//! let tags = parse("1girl, ((long hair)), (sitting:1.5)");
//! assert_eq!(tags.len(), 3);
//! assert_eq!(tags[1].text(true), "(long_hair:1.2)");
//! assert_eq!(tags[2].text(true), "(sitting:1.5)");
//! ```

use super::escape::{escape, unescape};
use super::record::Tag;
use super::weight::Weight;

/// Parse a tag string into records. Empty or whitespace-only input yields
/// an empty sequence.
pub fn parse(text: &str) -> Vec<Tag> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let escaped = escape(trimmed);
    let mut tags = Vec::new();
    for group in split_groups(&escaped) {
        parse_group(&group, &mut tags);
    }
    tags
}

/// Split into top-level groups on commas at parenthesis depth 0.
fn split_groups(text: &str) -> Vec<String> {
    let mut groups = Vec::new();
    let mut current = String::new();
    let mut depth: i64 = 0;

    for ch in text.chars() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        if ch == ',' && depth == 0 {
            push_group(&mut groups, &current);
            current.clear();
        } else {
            current.push(ch);
        }
    }
    push_group(&mut groups, &current);

    groups
}

fn push_group(groups: &mut Vec<String>, raw: &str) {
    let cleaned = raw.trim().trim_matches(',').trim();
    if !cleaned.is_empty() {
        groups.push(cleaned.to_string());
    }
}

/// How the weight suffix of a cleaned group parsed.
enum WeightSuffix {
    /// `:weight` present and numeric; always wins over nesting.
    Explicit(Weight),
    /// `:` present but the right-hand side is not a number; the whole
    /// cleaned group is literal tag text at weight 1.0.
    Malformed,
    /// No colon; nesting depth decides the weight.
    None,
}

fn parse_group(group: &str, out: &mut Vec<Tag>) {
    let leading = group.chars().take_while(|&c| c == '(').count();
    let trailing = group.chars().rev().take_while(|&c| c == ')').count();
    let pairs = leading.min(trailing);

    let clean = clean_tag(group);
    let (tags_part, suffix) = split_weight(&clean);
    let weight = match suffix {
        WeightSuffix::Explicit(weight) => weight,
        WeightSuffix::Malformed => Weight::ONE,
        WeightSuffix::None => Weight::from_nesting(pairs),
    };

    // A parenthesized group can wrap several comma-separated tags that
    // share one weight.
    for name in tags_part.split(',') {
        let name = clean_tag(name);
        if name.is_empty() {
            continue;
        }
        out.push(Tag::new(unescape(&name), weight));
    }
}

/// Strip all leading/trailing parentheses and surrounding whitespace.
fn clean_tag(text: &str) -> String {
    let is_paren = |c: char| c == '(' || c == ')';
    let mut current = text.trim();
    loop {
        let stripped = current.trim_matches(is_paren).trim();
        if stripped == current {
            break;
        }
        current = stripped;
    }
    current.to_string()
}

/// Split a cleaned group once at the first colon and classify the suffix.
fn split_weight(clean: &str) -> (String, WeightSuffix) {
    if let Some((tags_part, weight_part)) = clean.split_once(':') {
        if let Some(weight) = Weight::parse(weight_part) {
            return (tags_part.to_string(), WeightSuffix::Explicit(weight));
        }
        return (clean.to_string(), WeightSuffix::Malformed);
    }
    (clean.to_string(), WeightSuffix::None)
}
