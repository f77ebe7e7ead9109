//! Hybrid indexing: fuses keyword, provision, risk, and applicability
//! signals (plus one optional external embedding) into a single relevance
//! score per document.

mod embed;
mod error;
mod indexer;

pub use embed::{EmbedError, Embedder, HttpEmbedder};
pub use error::IndexError;
pub use indexer::{HybridDocumentIndexer, IndexStatistics, IndexedDocument};
