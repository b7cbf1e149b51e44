//! Category listing

use crate::domain::category::CategoryStore;
use crate::domain::tags::parse;
use std::collections::BTreeSet;

/// The sorted, deduplicated category names of every tag in the input,
/// joined with `", "`. With `flexible`, unlisted compound tags resolve
/// through suffix fallback.
pub fn list_categories(tags: &str, flexible: bool, store: &CategoryStore) -> String {
    let mut found: BTreeSet<&str> = BTreeSet::new();

    for tag in parse(tags) {
        let key = tag.unescaped_normalized();
        let categories = if flexible {
            store
                .flexible_lookup(key)
                .map(|resolved| store.categories(resolved))
                .unwrap_or_default()
        } else {
            store.categories(key)
        };
        found.extend(categories.iter().map(String::as_str));
    }

    found.into_iter().collect::<Vec<_>>().join(", ")
}
