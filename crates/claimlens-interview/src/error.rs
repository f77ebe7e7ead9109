use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterviewError {
    #[error("no saved tree for type {complaint_type:?} in {}", .dir.display())]
    TreeNotFound {
        complaint_type: String,
        dir: PathBuf,
    },

    #[error("missing required fields: {}", .0.join(", "))]
    MissingRequiredFields(Vec<String>),

    #[error("invalid tree {complaint_type:?}: {reason}")]
    InvalidTree {
        complaint_type: String,
        reason: String,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
