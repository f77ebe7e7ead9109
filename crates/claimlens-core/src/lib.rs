//! Core types: keyword taxonomy registry and the built-in complaint-type bootstrap.

pub mod matching;
pub mod registry;
pub mod taxonomy;

pub use matching::{count_hits, matched_keywords};
pub use registry::{KeywordCategory, TaxonomyRegistry};
pub use taxonomy::bootstrap_registry;
