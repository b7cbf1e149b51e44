//! tagkit - weighted tag-string processing toolkit
//!
//! Parses the comma-delimited, parenthesis-weighted tag notation used by
//! image-generation prompt pipelines into structured records, and offers
//! filter/merge/replace/compare/enhance/randomize operations over those
//! records, backed by a static category lookup table.
//!
//! The escape codec protects literal `\(`, `\)`, `\:`, `\,` and `\\`
//! sequences, and parse/render round-trips are escape-faithful:
//!
//! ```
//! use tagkit::{parse, render};
//!
//! let input = "1girl, 1boy, 2b_\\(nier:automata\\), (9s \\(nier\\:automata\\):1.2)";
//! assert_eq!(render(&parse(input), false), input);
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::category::{match_score, CategoryStore};
pub use domain::tags::{parse, render, Tag, Weight};
pub use error::TagkitError;
