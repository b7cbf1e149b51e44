//! Integration tests for the tag notation parser

use tagkit::{parse, Tag, Weight};

#[test]
fn test_empty_and_whitespace_input() {
    assert!(parse("").is_empty());
    assert!(parse("   ").is_empty());
    assert!(parse(",, ,").is_empty());
}

#[test]
fn test_nesting_weight_law() {
    assert_eq!(parse("tag")[0].weight(), Weight::ONE);
    assert_eq!(parse("(tag)")[0].weight(), Weight::from_f64(1.1));
    assert_eq!(parse("((tag))")[0].weight(), Weight::from_f64(1.2));
    assert_eq!(parse("(((tag)))")[0].weight(), Weight::from_f64(1.3));
}

#[test]
fn test_explicit_weight_overrides_nesting() {
    assert_eq!(parse("(tag:1.5)")[0].weight(), Weight::from_f64(1.5));
    assert_eq!(parse("((tag:1.5))")[0].weight(), Weight::from_f64(1.5));
    assert_eq!(parse("(tag:0.5)")[0].weight(), Weight::from_f64(0.5));
}

#[test]
fn test_equality_ignores_weight() {
    assert_eq!(parse("(tag:1.5)")[0], parse("tag")[0]);
    assert_eq!(parse("(Tag:1.5)")[0], parse("tag")[0]);
    assert_ne!(parse("tag")[0], parse("other")[0]);
}

#[test]
fn test_escape_fidelity() {
    let tags = parse("a\\(b\\)");
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].unescaped_normalized(), "a(b)");
    assert_eq!(tags[0].normalized(), "a\\(b\\)");
}

#[test]
fn test_malformed_weight_falls_back_to_literal() {
    let tags = parse("(tag:notanumber)");
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].raw(), "tag:notanumber");
    assert_eq!(tags[0].weight(), Weight::ONE);
}

#[test]
fn test_unbalanced_parentheses_pair_by_minimum() {
    let tags = parse("(((tag)");
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].raw(), "tag");
    assert_eq!(tags[0].weight(), Weight::from_f64(1.1));
}

#[test]
fn test_group_shares_explicit_weight() {
    let tags = parse("(long hair, v:1.2)");
    let pairs: Vec<(&str, Weight)> = tags.iter().map(|t| (t.raw(), t.weight())).collect();
    assert_eq!(
        pairs,
        vec![
            ("long hair", Weight::from_f64(1.2)),
            ("v", Weight::from_f64(1.2)),
        ]
    );
}

#[test]
fn test_mixed_sequence_order_and_weights() {
    let tags = parse("school_uniform, (long hair, v:1.2), (sitting:1.5), attack, ((1girl))");
    let pairs: Vec<(&str, Weight)> = tags.iter().map(|t| (t.raw(), t.weight())).collect();
    assert_eq!(
        pairs,
        vec![
            ("school_uniform", Weight::ONE),
            ("long hair", Weight::from_f64(1.2)),
            ("v", Weight::from_f64(1.2)),
            ("sitting", Weight::from_f64(1.5)),
            ("attack", Weight::ONE),
            ("1girl", Weight::from_f64(1.2)),
        ]
    );
}

#[test]
fn test_records_usable_in_hash_sets() {
    use std::collections::HashSet;
    let set: HashSet<Tag> = parse("a, (b:1.2), a").into_iter().collect();
    assert_eq!(set.len(), 2);
}
