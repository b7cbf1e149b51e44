//! Operation layer - thin compositions of the parser, serializer and
//! category store lookups

pub mod categories;
pub mod compare;
pub mod conditional;
pub mod enhance;
pub mod filter;
pub mod merge;
pub mod random;
pub mod replace;
pub mod wildcard;

pub use categories::list_categories;
pub use compare::{compare_tags, remove_tags, TagComparison};
pub use conditional::{contains_tags, switch, SwitchCase};
pub use enhance::{enhance_by_category, enhance_tags};
pub use filter::{filter_by_category, select_by_category, SelectOptions};
pub use merge::merge_tags;
pub use random::sample_by_category;
pub use replace::replace_tags;
pub use wildcard::wildcard_filter;
