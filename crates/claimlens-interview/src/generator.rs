//! Decision-tree generation from the static templates.

use std::collections::BTreeSet;

use claimlens_core::{KeywordCategory, TaxonomyRegistry};
use tracing::warn;

use crate::templates::{self, TreeSpec};
use crate::tree::{DecisionTree, QuestionNode};
use crate::InterviewError;

/// Builds per-type interview trees. Registry keyword hints are snapshotted
/// at construction and attached to root questions for display; they never
/// affect topology.
pub struct DecisionTreeGenerator {
    /// (type, scoped keywords), sorted by type.
    hints: Vec<(String, Vec<String>)>,
}

impl DecisionTreeGenerator {
    pub fn new(registry: &TaxonomyRegistry) -> Self {
        let hints = registry
            .list_types(Some(KeywordCategory::Complaint))
            .into_iter()
            .map(|ty| {
                let kws = registry.type_keywords(KeywordCategory::Complaint, &ty);
                (ty, kws)
            })
            .collect();
        Self { hints }
    }

    /// Generate the tree for a complaint type. Unknown types fall back to
    /// the generic intake template.
    ///
    /// Generation is deterministic: the same type always yields the same
    /// tree for a given registry state. The result is validated before it
    /// is returned.
    pub fn generate(&self, complaint_type: &str) -> Result<DecisionTree, InterviewError> {
        let spec = match templates::find(complaint_type) {
            Some(spec) => spec,
            None => {
                warn!(complaint_type, "no specialized template, using generic intake");
                &templates::GENERIC
            }
        };
        let tree = self.build(complaint_type, spec);
        tree.validate()?;
        Ok(tree)
    }

    /// Generate trees for every registered type.
    pub fn generate_all(&self) -> Result<Vec<DecisionTree>, InterviewError> {
        self.hints
            .iter()
            .map(|(ty, _)| self.generate(ty))
            .collect()
    }

    fn build(&self, complaint_type: &str, spec: &TreeSpec) -> DecisionTree {
        let keyword_hints = self
            .hints
            .iter()
            .find(|(ty, _)| ty == complaint_type)
            .map(|(_, kws)| kws.clone())
            .unwrap_or_default();

        let questions: Vec<QuestionNode> = spec
            .nodes
            .iter()
            .map(|n| QuestionNode {
                id: n.id.to_string(),
                question: n.question.to_string(),
                field: n.field.to_string(),
                required: n.required,
                depends_on: n.depends_on.iter().map(|s| s.to_string()).collect(),
                follow_ups: n.follow_ups.iter().map(|s| s.to_string()).collect(),
                keyword_hints: if spec.roots.contains(&n.id) {
                    keyword_hints.clone()
                } else {
                    Vec::new()
                },
            })
            .collect();

        let required_fields: BTreeSet<String> = questions
            .iter()
            .filter(|q| q.required)
            .map(|q| q.field.clone())
            .collect();
        let optional_fields: BTreeSet<String> = questions
            .iter()
            .filter(|q| !q.required)
            .map(|q| q.field.clone())
            .collect();

        DecisionTree {
            complaint_type: complaint_type.to_string(),
            category: spec.category.to_string(),
            description: spec.description.to_string(),
            root_ids: spec.roots.iter().map(|s| s.to_string()).collect(),
            questions,
            required_fields,
            optional_fields,
        }
    }
}
