use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("invalid registered pattern: {0}")]
    Extract(#[from] claimlens_extract::ExtractError),

    #[error("not supported: {0}")]
    NotSupported(&'static str),
}
