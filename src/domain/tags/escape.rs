//! Escape codec for tag notation
//!
//! Tag text may contain literal parentheses, colons, commas and backslashes
//! written as `\(`, `\)`, `\:`, `\,` and `\\`. The parser must not mistake
//! these for structural syntax, so the whole input is passed through
//! [`escape`] once before any splitting, and [`unescape`] restores the
//! original text afterwards.

/// Escape pair -> sentinel mapping.
///
/// The sentinels are private-use codepoints that cannot occur in normal tag
/// text. `\\` comes first: it must be consumed before the shorter-reach
/// pairs so that `\\(` reads as an escaped backslash followed by a
/// structural parenthesis.
const ESCAPES: [(&str, char); 5] = [
    ("\\\\", '\u{e000}'),
    ("\\(", '\u{e001}'),
    ("\\)", '\u{e002}'),
    ("\\:", '\u{e003}'),
    ("\\,", '\u{e004}'),
];

/// Replace every escape pair with its sentinel character.
///
/// Must be applied to the whole input before comma/parenthesis splitting.
pub fn escape(text: &str) -> String {
    let mut out = text.to_string();
    for (pair, sentinel) in ESCAPES {
        out = out.replace(pair, &sentinel.to_string());
    }
    out
}

/// Exact inverse of [`escape`]: restore every backslash pair.
pub fn unescape(text: &str) -> String {
    let mut out = text.to_string();
    for (pair, sentinel) in ESCAPES {
        out = out.replace(sentinel, pair);
    }
    out
}

/// Collapse every escape pair to its literal character (`\(` -> `(`,
/// `\\` -> `\`), producing the form used as a category table key.
pub fn strip_escapes(text: &str) -> String {
    let mut out = escape(text);
    for (pair, sentinel) in ESCAPES {
        let literal = &pair[1..];
        out = out.replace(sentinel, literal);
    }
    out
}
