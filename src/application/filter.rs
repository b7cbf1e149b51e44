//! Category-driven filtering and selection

use crate::domain::category::{normalize_category_list, CategoryStore};
use crate::domain::tags::{parse, render, Tag};

/// Keep categorized tags whose categories intersect an include list.
///
/// `include` is a comma-separated category list, or `*` for every
/// categorized tag. A tag carrying any category from `exclude` is dropped
/// even when included, and excluded categories are removed from the
/// include list. Tags absent from the table are always dropped.
pub fn filter_by_category(
    tags: &str,
    include: &str,
    exclude: &str,
    store: &CategoryStore,
) -> String {
    let include_all = include.trim() == "*";
    let exclude_list = normalize_category_list(exclude);
    let mut targets = normalize_category_list(include);
    targets.retain(|category| !exclude_list.contains(category));

    let mut result: Vec<Tag> = Vec::new();
    for tag in parse(tags) {
        let categories = store.categories_of(&tag);
        if categories.is_empty() {
            continue;
        }
        if categories.iter().any(|c| exclude_list.contains(c)) {
            continue;
        }
        if include_all || categories.iter().any(|c| targets.contains(c)) {
            result.push(tag);
        }
    }
    render(&result, false)
}

/// Options for [`select_by_category`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectOptions {
    /// Invert the selection: drop matching tags, keep the rest.
    pub exclude: bool,
    /// Drop tags the table does not list at all.
    pub whitelist_only: bool,
    /// Resolve unlisted compound tags through suffix fallback
    /// ([`CategoryStore::flexible_lookup`]).
    pub flexible: bool,
}

/// Select tags by category membership.
///
/// `categories` is a comma-separated category list, or `*` to keep every
/// listed tag. Unlisted tags pass through unless `whitelist_only` is set;
/// listed tags are kept or dropped according to membership and the
/// `exclude` toggle.
pub fn select_by_category(
    tags: &str,
    categories: &str,
    options: SelectOptions,
    store: &CategoryStore,
) -> String {
    let select_all = categories.trim() == "*";
    let targets = normalize_category_list(categories);

    let mut result: Vec<Tag> = Vec::new();
    for tag in parse(tags) {
        let key = tag.unescaped_normalized();
        let resolved = if store.contains(key) {
            Some(key)
        } else if options.flexible {
            store.flexible_lookup(key)
        } else {
            None
        };

        match resolved {
            Some(resolved_key) => {
                if select_all {
                    result.push(tag);
                    continue;
                }
                let is_target = store
                    .categories(resolved_key)
                    .iter()
                    .any(|c| targets.contains(c));
                if is_target != options.exclude {
                    result.push(tag);
                }
            }
            None => {
                if !options.whitelist_only {
                    result.push(tag);
                }
            }
        }
    }
    render(&result, false)
}
