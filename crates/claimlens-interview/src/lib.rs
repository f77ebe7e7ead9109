//! Adaptive interviews: per-type question dependency graphs, JSON
//! persistence, and the mirrored seed complaint templates.

mod error;
mod generator;
mod seed;
mod store;
mod templates;
mod tree;

pub use error::InterviewError;
pub use generator::DecisionTreeGenerator;
pub use seed::{SeedComplaint, SeedComplaintTemplate, SeedGenerator};
pub use store::TreeStore;
pub use tree::{DecisionTree, QuestionNode};
