//! Category-weighted tag replacement

use crate::domain::category::{match_score, CategoryStore};
use crate::domain::tags::{parse, render, Tag};

/// Replace tags with their best category match from a candidate list.
///
/// For each input tag the candidate with the highest Jaccard similarity
/// between category sets is chosen; the replacement happens only when
/// that score reaches `threshold`, and the candidate keeps its own text
/// and weight. Candidates that never replaced anything are appended at
/// the end.
pub fn replace_tags(
    tags: &str,
    replacements: &str,
    threshold: f64,
    store: &CategoryStore,
) -> String {
    let input = parse(tags);
    let candidates = parse(replacements);
    let mut used = vec![false; candidates.len()];

    let mut result: Vec<Tag> = Vec::new();
    for tag in input {
        let tag_categories = store.category_set_of(&tag);

        let mut best: Option<(usize, f64)> = None;
        for (idx, candidate) in candidates.iter().enumerate() {
            let candidate_categories = store.category_set_of(candidate);
            let score = match_score(&tag_categories, &candidate_categories);
            if score > best.map_or(0.0, |(_, s)| s) {
                best = Some((idx, score));
            }
        }

        match best {
            Some((idx, score)) if score >= threshold => {
                used[idx] = true;
                result.push(candidates[idx].clone());
            }
            _ => result.push(tag),
        }
    }

    for (idx, candidate) in candidates.iter().enumerate() {
        if !used[idx] {
            result.push(candidate.clone());
        }
    }

    render(&result, false)
}
