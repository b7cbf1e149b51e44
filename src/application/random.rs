//! Same-category random sampling

use crate::domain::category::{normalize_category_list, CategoryStore};
use rand::Rng;

/// Draw up to `count` distinct tag names from the store whose category
/// lists intersect the given categories, in random order.
///
/// Candidates are sorted before drawing so the result depends only on
/// the store contents and the RNG state, letting tests pass a seeded
/// generator.
pub fn sample_by_category<R: Rng + ?Sized>(
    store: &CategoryStore,
    categories: &str,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let targets = normalize_category_list(categories);
    if targets.is_empty() || count == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<&str> = store
        .tag_names()
        .filter(|&name| store.categories(name).iter().any(|c| targets.contains(c)))
        .collect();
    candidates.sort_unstable();

    // Partial Fisher-Yates: only the first `count` slots are drawn
    let take = candidates.len().min(count);
    for slot in 0..take {
        let pick = rng.random_range(slot..candidates.len());
        candidates.swap(slot, pick);
    }
    candidates.truncate(take);

    candidates.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn store() -> CategoryStore {
        let entries: HashMap<String, Vec<String>> = [
            ("sitting", vec!["pose"]),
            ("standing", vec!["pose"]),
            ("lying", vec!["pose"]),
            ("long_hair", vec!["hair_style"]),
        ]
        .into_iter()
        .map(|(k, v)| {
            (
                k.to_string(),
                v.into_iter().map(String::from).collect::<Vec<_>>(),
            )
        })
        .collect();
        CategoryStore::from_entries(entries)
    }

    #[test]
    fn test_sample_draws_only_target_category() {
        let mut rng = StdRng::seed_from_u64(7);
        let sample = sample_by_category(&store(), "pose", 2, &mut rng);
        assert_eq!(sample.len(), 2);
        for name in &sample {
            assert!(store().categories(name).contains(&"pose".to_string()));
        }
    }

    #[test]
    fn test_sample_is_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        let sample = sample_by_category(&store(), "pose", 3, &mut rng);
        let mut unique = sample.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), sample.len());
    }

    #[test]
    fn test_sample_count_exceeds_candidates() {
        let mut rng = StdRng::seed_from_u64(7);
        let sample = sample_by_category(&store(), "hair_style", 10, &mut rng);
        assert_eq!(sample, vec!["long_hair".to_string()]);
    }

    #[test]
    fn test_sample_deterministic_with_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(
            sample_by_category(&store(), "pose", 3, &mut a),
            sample_by_category(&store(), "pose", 3, &mut b)
        );
    }

    #[test]
    fn test_sample_unknown_category_is_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(sample_by_category(&store(), "nonexistent", 3, &mut rng).is_empty());
        assert!(sample_by_category(&store(), "", 3, &mut rng).is_empty());
    }
}
