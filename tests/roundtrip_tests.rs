//! Round-trip guarantees between parse and render

use tagkit::{parse, render, Weight};

/// Canonical inputs (explicit weights or weight 1.0, canonical spacing)
/// reproduce their exact text.
#[test]
fn test_exact_roundtrip_canonical() {
    let cases = [
        "1girl",
        "1girl, 1boy",
        "(sitting:1.5)",
        "1girl, (sitting:1.5), school uniform",
        "(standing:0.5), (lying:2.0)",
    ];
    for case in cases {
        assert_eq!(render(&parse(case), false), case, "round trip for {:?}", case);
    }
}

#[test]
fn test_exact_roundtrip_with_escapes() {
    let input = "1girl, 1boy, 2b_\\(nier:automata\\), (9s \\(nier\\:automata\\):1.2)";
    assert_eq!(render(&parse(input), false), input);
}

#[test]
fn test_roundtrip_normalizes_comma_spacing() {
    assert_eq!(render(&parse("a,b ,  c"), false), "a, b, c");
}

/// Nesting-derived weights cannot reconstruct the original parenthesis
/// depth, but the re-parsed sequence is equivalent.
#[test]
fn test_semantic_roundtrip_for_nested_input() {
    let input = "((tag)), (other)";
    let first = parse(input);
    let second = parse(&render(&first, false));

    let key = |tags: &[tagkit::Tag]| -> Vec<(String, Weight)> {
        tags.iter()
            .map(|t| (t.normalized().to_string(), t.weight()))
            .collect()
    };
    assert_eq!(key(&first), key(&second));
    assert_eq!(render(&first, false), "(tag:1.2), (other:1.1)");
}

#[test]
fn test_semantic_roundtrip_is_stable_after_one_pass() {
    // After one render the text is canonical; further passes are identity
    let once = render(&parse("(( messy , input)),x ,"), false);
    let twice = render(&parse(&once), false);
    assert_eq!(once, twice);
}

#[test]
fn test_underscore_rendering_keeps_equivalence() {
    let tags = parse("long hair, (school uniform:1.3)");
    let underscored = render(&tags, true);
    assert_eq!(underscored, "long_hair, (school_uniform:1.3)");
    // Underscored text parses back to equal records
    assert_eq!(parse(&underscored), tags);
}
