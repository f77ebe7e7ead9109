//! Deterministic text extraction: provisions, citations, type categorization.

mod categorize;
mod citations;
mod error;
mod provisions;

pub use citations::{Citation, CitationKind};
pub use error::ExtractError;
pub use provisions::{PatternExtractor, Provision, ProvisionScan};
