//! Membership tests and first-match switching

use crate::domain::tags::parse;

/// Test whether a `find` sequence is present in `tags`.
///
/// With `match_any` a single shared tag suffices; otherwise every tag in
/// `find` must be present. Membership ignores weight. Returns an explicit
/// found flag; never fails on malformed input.
pub fn contains_tags(tags: &str, find: &str, match_any: bool) -> bool {
    let tags = parse(tags);
    let find = parse(find);

    if match_any {
        find.iter().any(|tag| tags.contains(tag))
    } else {
        find.iter().all(|tag| tags.contains(tag))
    }
}

/// One branch of a [`switch`]: a tag sequence to test and the value to
/// yield when it matches.
#[derive(Debug, Clone)]
pub struct SwitchCase<T> {
    pub tags: String,
    /// Any shared tag matches; when false, every case tag must be present
    /// in the input.
    pub match_any: bool,
    pub value: T,
}

impl<T> SwitchCase<T> {
    pub fn new(tags: impl Into<String>, match_any: bool, value: T) -> Self {
        SwitchCase {
            tags: tags.into(),
            match_any,
            value,
        }
    }
}

/// Return the value of the first case whose tags match the input, or
/// `None` when no case matches (the caller supplies its own default).
pub fn switch<'a, T>(input_tags: &str, cases: &'a [SwitchCase<T>]) -> Option<&'a T> {
    let input = parse(input_tags);

    for case in cases {
        let case_tags = parse(&case.tags);
        let hit = if case.match_any {
            input.iter().any(|tag| case_tags.contains(tag))
        } else {
            !case_tags.is_empty() && case_tags.iter().all(|tag| input.contains(tag))
        };
        if hit {
            return Some(&case.value);
        }
    }
    None
}
