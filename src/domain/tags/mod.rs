//! Tag notation: escape codec, records, weights, parser and serializer

pub mod escape;
pub mod parser;
pub mod record;
pub mod weight;

// Re-export main types
pub use parser::parse;
pub use record::{render, Tag};
pub use weight::Weight;
