use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid registered pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}
