//! Seed complaint templates: fact schemas mirroring the interview trees,
//! used to instantiate concrete sample documents.

use std::collections::BTreeMap;

use claimlens_core::{KeywordCategory, TaxonomyRegistry};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::templates::{self, TreeSpec};
use crate::InterviewError;

/// A per-type fact-template schema.
///
/// Fields mirror the type's interview tree: the same names, the same
/// required/optional split. Optional fields carry defaults used when
/// instantiation supplies no value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedComplaintTemplate {
    pub id: String,
    pub complaint_type: String,
    pub category: String,
    pub description: String,
    pub field_defaults: BTreeMap<String, Value>,
    pub required_fields: Vec<String>,
    pub optional_fields: Vec<String>,
    pub keyword_hints: Vec<String>,
    pub pattern_hints: Vec<String>,
}

/// A concrete instantiated sample complaint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedComplaint {
    pub template_id: String,
    pub complaint_type: String,
    pub category: String,
    pub description: String,
    /// Template defaults overlaid by the supplied values.
    pub key_facts: BTreeMap<String, Value>,
    pub keyword_hints: Vec<String>,
    pub pattern_hints: Vec<String>,
}

impl SeedComplaintTemplate {
    /// Merge `values` over the template defaults.
    ///
    /// Fails when any required field is absent, naming every missing field.
    /// Pure and idempotent for a valid `values` mapping.
    pub fn instantiate(
        &self,
        values: &BTreeMap<String, Value>,
    ) -> Result<SeedComplaint, InterviewError> {
        let missing: Vec<String> = self
            .required_fields
            .iter()
            .filter(|f| !values.contains_key(*f))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(InterviewError::MissingRequiredFields(missing));
        }

        let mut key_facts = self.field_defaults.clone();
        for (field, value) in values {
            key_facts.insert(field.clone(), value.clone());
        }

        Ok(SeedComplaint {
            template_id: self.id.clone(),
            complaint_type: self.complaint_type.clone(),
            category: self.category.clone(),
            description: self.description.clone(),
            key_facts,
            keyword_hints: self.keyword_hints.clone(),
            pattern_hints: self.pattern_hints.clone(),
        })
    }
}

/// Builds seed templates, mirroring [`DecisionTreeGenerator`]'s per-type
/// specialization.
///
/// [`DecisionTreeGenerator`]: crate::DecisionTreeGenerator
pub struct SeedGenerator {
    keyword_hints: Vec<(String, Vec<String>)>,
    pattern_hints: Vec<(String, Vec<String>)>,
}

impl SeedGenerator {
    pub fn new(registry: &TaxonomyRegistry) -> Self {
        let types = registry.list_types(Some(KeywordCategory::Complaint));
        let keyword_hints = types
            .iter()
            .map(|ty| {
                (
                    ty.clone(),
                    registry.type_keywords(KeywordCategory::Complaint, ty),
                )
            })
            .collect();
        let pattern_hints = types
            .iter()
            .map(|ty| {
                // Scope-only patterns: strip the shared global prefix.
                let global = registry.legal_terms(None).len();
                (
                    ty.clone(),
                    registry.legal_terms(Some(ty.as_str())).split_off(global),
                )
            })
            .collect();
        Self {
            keyword_hints,
            pattern_hints,
        }
    }

    /// Template for a complaint type; unknown types use the generic intake
    /// schema.
    pub fn generate(&self, complaint_type: &str) -> SeedComplaintTemplate {
        let spec = match templates::find(complaint_type) {
            Some(spec) => spec,
            None => {
                warn!(complaint_type, "no specialized template, using generic seed");
                &templates::GENERIC
            }
        };
        self.build(complaint_type, spec)
    }

    /// Templates for every registered type.
    pub fn generate_all(&self) -> Vec<SeedComplaintTemplate> {
        self.keyword_hints
            .iter()
            .map(|(ty, _)| self.generate(ty))
            .collect()
    }

    fn build(&self, complaint_type: &str, spec: &TreeSpec) -> SeedComplaintTemplate {
        let required_fields: Vec<String> = spec
            .nodes
            .iter()
            .filter(|n| n.required)
            .map(|n| n.field.to_string())
            .collect();
        let optional_fields: Vec<String> = spec
            .nodes
            .iter()
            .filter(|n| !n.required)
            .map(|n| n.field.to_string())
            .collect();

        // Optional fields default to null; required fields have no default
        // and must be supplied at instantiation.
        let field_defaults: BTreeMap<String, Value> = optional_fields
            .iter()
            .map(|f| (f.clone(), Value::Null))
            .collect();

        let hints_for = |table: &[(String, Vec<String>)]| {
            table
                .iter()
                .find(|(ty, _)| ty == complaint_type)
                .map(|(_, hints)| hints.clone())
                .unwrap_or_default()
        };

        SeedComplaintTemplate {
            id: format!("seed_{complaint_type}"),
            complaint_type: complaint_type.to_string(),
            category: spec.category.to_string(),
            description: spec.description.to_string(),
            field_defaults,
            required_fields,
            optional_fields,
            keyword_hints: hints_for(&self.keyword_hints),
            pattern_hints: hints_for(&self.pattern_hints),
        }
    }
}
