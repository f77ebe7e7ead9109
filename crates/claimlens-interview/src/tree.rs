//! Question dependency graphs and adaptive next-question traversal.
//!
//! A "decision tree" here is a dependency graph of interview questions, not
//! a classification tree: a question becomes askable once the fields it
//! depends on have been answered. Answered state lives with the caller; the
//! tree itself is immutable after generation.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::InterviewError;

/// One interview question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionNode {
    pub id: String,
    pub question: String,
    /// Answer slot name, unique within a tree.
    pub field: String,
    pub required: bool,
    /// Field names that must be answered before this question is asked.
    #[serde(default)]
    pub depends_on: Vec<String>,
    /// Question ids surfaced as suggested follow-ups. Display only.
    #[serde(default)]
    pub follow_ups: Vec<String>,
    /// Registry keyword hints. Display only, never alters topology.
    #[serde(default)]
    pub keyword_hints: Vec<String>,
}

/// A complete per-type interview graph.
///
/// Serialization round-trips every field; regeneration replaces the whole
/// value rather than patching it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub complaint_type: String,
    pub category: String,
    pub description: String,
    pub root_ids: Vec<String>,
    /// Questions in authoring order.
    pub questions: Vec<QuestionNode>,
    pub required_fields: BTreeSet<String>,
    pub optional_fields: BTreeSet<String>,
}

impl DecisionTree {
    /// Check structural invariants: unique field names, dependencies and
    /// follow-ups that resolve within the tree, known roots, and an acyclic
    /// dependency relation.
    pub fn validate(&self) -> Result<(), InterviewError> {
        let invalid = |reason: String| InterviewError::InvalidTree {
            complaint_type: self.complaint_type.clone(),
            reason,
        };

        if self.root_ids.is_empty() {
            return Err(invalid("no root questions".into()));
        }

        let mut fields = HashSet::new();
        let mut ids = HashSet::new();
        for node in &self.questions {
            if !fields.insert(node.field.as_str()) {
                return Err(invalid(format!("duplicate field {:?}", node.field)));
            }
            if !ids.insert(node.id.as_str()) {
                return Err(invalid(format!("duplicate id {:?}", node.id)));
            }
        }

        for root in &self.root_ids {
            if !ids.contains(root.as_str()) {
                return Err(invalid(format!("unknown root id {root:?}")));
            }
        }
        for node in &self.questions {
            for dep in &node.depends_on {
                if !fields.contains(dep.as_str()) {
                    return Err(invalid(format!(
                        "question {:?} depends on unknown field {dep:?}",
                        node.id
                    )));
                }
            }
            for follow in &node.follow_ups {
                if !ids.contains(follow.as_str()) {
                    return Err(invalid(format!(
                        "question {:?} lists unknown follow-up {follow:?}",
                        node.id
                    )));
                }
            }
        }

        // Cycle check: repeatedly strip nodes whose dependencies are all
        // already stripped; leftovers form a cycle.
        let mut resolved: HashSet<&str> = HashSet::new();
        loop {
            let before = resolved.len();
            for node in &self.questions {
                if !resolved.contains(node.field.as_str())
                    && node.depends_on.iter().all(|d| resolved.contains(d.as_str()))
                {
                    resolved.insert(node.field.as_str());
                }
            }
            if resolved.len() == self.questions.len() {
                return Ok(());
            }
            if resolved.len() == before {
                let stuck: Vec<&str> = self
                    .questions
                    .iter()
                    .filter(|n| !resolved.contains(n.field.as_str()))
                    .map(|n| n.field.as_str())
                    .collect();
                return Err(invalid(format!("dependency cycle among {stuck:?}")));
            }
        }
    }

    /// Askable questions given the caller's answered-field set.
    ///
    /// Candidates are unanswered questions whose dependencies are all
    /// answered. If any candidate is required, ONLY required candidates are
    /// returned — required and optional questions are never mixed. An empty
    /// result means the interview is complete.
    pub fn next_questions(&self, answered: &BTreeSet<String>) -> Vec<&QuestionNode> {
        let candidates: Vec<&QuestionNode> = self
            .questions
            .iter()
            .filter(|n| {
                !answered.contains(&n.field)
                    && n.depends_on.iter().all(|d| answered.contains(d))
            })
            .collect();

        if candidates.iter().any(|n| n.required) {
            candidates.into_iter().filter(|n| n.required).collect()
        } else {
            candidates
        }
    }

    pub fn is_complete(&self, answered: &BTreeSet<String>) -> bool {
        self.next_questions(answered).is_empty()
    }

    /// required ∪ optional.
    pub fn all_fields(&self) -> BTreeSet<String> {
        self.required_fields
            .union(&self.optional_fields)
            .cloned()
            .collect()
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
