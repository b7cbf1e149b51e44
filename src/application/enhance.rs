//! Weight enhancement

use crate::domain::category::{normalize_category_list, CategoryStore};
use crate::domain::tags::{parse, render, Weight};

/// Set or add a strength to the weight of every tag present in the
/// `enhance` list (membership ignores weight). With `add_strength` the
/// strength is added to the current weight, otherwise it replaces it.
pub fn enhance_tags(tags: &str, enhance: &str, strength: f64, add_strength: bool) -> String {
    let mut list = parse(tags);
    let enhance_list = parse(enhance);
    let strength = Weight::from_f64(strength);

    for tag in &mut list {
        if enhance_list.contains(tag) {
            if add_strength {
                tag.add_weight(strength);
            } else {
                tag.set_weight(strength);
            }
        }
    }
    render(&list, false)
}

/// Like [`enhance_tags`], but targeting every tag that carries any of the
/// given categories.
pub fn enhance_by_category(
    tags: &str,
    categories: &str,
    strength: f64,
    add_strength: bool,
    store: &CategoryStore,
) -> String {
    let mut list = parse(tags);
    let targets = normalize_category_list(categories);
    let strength = Weight::from_f64(strength);

    for tag in &mut list {
        let tag_categories = store.categories(tag.unescaped_normalized());
        if tag_categories.iter().any(|c| targets.contains(c)) {
            if add_strength {
                tag.add_weight(strength);
            } else {
                tag.set_weight(strength);
            }
        }
    }
    render(&list, false)
}
