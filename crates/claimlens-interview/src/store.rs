//! Flat JSON persistence for decision trees, one file per type.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::tree::DecisionTree;
use crate::InterviewError;

/// Stores trees as `{complaint_type}_tree.json` in one directory.
pub struct TreeStore {
    dir: PathBuf,
}

impl TreeStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, complaint_type: &str) -> PathBuf {
        self.dir.join(format!("{complaint_type}_tree.json"))
    }

    /// Write a tree, creating the directory if needed. Overwrites any
    /// previous file for the type — regeneration replaces, never patches.
    pub fn save(&self, tree: &DecisionTree) -> Result<PathBuf, InterviewError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(&tree.complaint_type);
        let json = serde_json::to_string_pretty(tree)?;
        fs::write(&path, json)?;
        info!(complaint_type = %tree.complaint_type, path = %path.display(), "saved tree");
        Ok(path)
    }

    pub fn load(&self, complaint_type: &str) -> Result<DecisionTree, InterviewError> {
        let path = self.path_for(complaint_type);
        if !path.exists() {
            return Err(InterviewError::TreeNotFound {
                complaint_type: complaint_type.to_string(),
                dir: self.dir.clone(),
            });
        }
        let json = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load every `*_tree.json` in the directory. A missing directory is an
    /// empty store, not an error; a file that fails to parse is skipped
    /// with a warning rather than failing the whole load.
    pub fn load_all(&self) -> Result<Vec<DecisionTree>, InterviewError> {
        let mut trees = Vec::new();
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(trees),
            Err(e) => return Err(e.into()),
        };
        for entry in entries {
            let path = entry?.path();
            let is_tree_file = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with("_tree.json"));
            if !is_tree_file {
                continue;
            }
            let json = fs::read_to_string(&path)?;
            match serde_json::from_str(&json) {
                Ok(tree) => trees.push(tree),
                Err(e) => warn!(path = %path.display(), error = %e, "skipping malformed tree file"),
            }
        }
        trees.sort_by(|a, b| a.complaint_type.cmp(&b.complaint_type));
        Ok(trees)
    }
}
