//! DEI-specialized rubric: direct terms, proxy euphemisms, binding language.

use claimlens_core::{KeywordCategory, TaxonomyRegistry, matched_keywords};
use serde::{Deserialize, Serialize};

use crate::scorer::RiskLevel;

/// Fixed applicability domains: (domain, indicator substrings).
///
/// A domain is tagged on ANY indicator hit. The hybrid indexer applies a
/// stricter two-hit rule for its own tagging; the two rules drifted apart
/// independently and both are kept as-is.
const DOMAINS: &[(&str, &[&str])] = &[
    ("hiring", &["hiring", "recruit", "applicant", "job posting"]),
    ("promotion", &["promotion", "advancement", "career ladder"]),
    ("compensation", &["compensation", "salary", "pay equity", "wages"]),
    ("training", &["training", "workshop", "curriculum"]),
    ("admissions", &["admissions", "enrollment", "applicant pool"]),
    ("procurement", &["procurement", "supplier", "vendor"]),
    ("contracting", &["contracting", "contractor", "subcontract"]),
    ("grants", &["grant", "funding program", "award criteria"]),
    ("discipline", &["discipline", "disciplinary", "sanction"]),
];

/// Outcome of a DEI scoring pass, keeping the matched terms for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeiRiskResult {
    pub level: RiskLevel,
    pub direct_hits: Vec<String>,
    pub proxy_hits: Vec<String>,
    pub binding_hits: Vec<String>,
    pub factors: Vec<String>,
}

/// Rubric: `3 ⇔ D ∧ X ∧ B`; `2 ⇔ (D ∨ X) ∧ B`; `1 ⇔ D ∨ X`; else 0.
pub struct DeiRiskScorer {
    direct: Vec<String>,
    proxy: Vec<String>,
    binding: Vec<String>,
}

impl DeiRiskScorer {
    /// Snapshot dei-scoped direct terms plus the global proxy and binding
    /// vocabularies.
    pub fn new(registry: &TaxonomyRegistry) -> Self {
        Self {
            direct: registry.type_keywords(KeywordCategory::Complaint, "dei"),
            proxy: registry.keywords(KeywordCategory::Proxy, None),
            binding: registry.keywords(KeywordCategory::Binding, None),
        }
    }

    pub fn assess(&self, text: &str) -> DeiRiskResult {
        let direct: Vec<String> = matched_keywords(text, &self.direct)
            .into_iter()
            .map(str::to_string)
            .collect();
        let proxy: Vec<String> = matched_keywords(text, &self.proxy)
            .into_iter()
            .map(str::to_string)
            .collect();
        let binding: Vec<String> = matched_keywords(text, &self.binding)
            .into_iter()
            .map(str::to_string)
            .collect();

        let d = !direct.is_empty();
        let x = !proxy.is_empty();
        let b = !binding.is_empty();
        let level = if d && x && b {
            RiskLevel::High
        } else if (d || x) && b {
            RiskLevel::Medium
        } else if d || x {
            RiskLevel::Low
        } else {
            RiskLevel::Minimal
        };

        let mut factors = Vec::new();
        if d {
            factors.push(format!("direct terms: {}", direct.join(", ")));
        }
        if x {
            factors.push(format!("proxy terms: {}", proxy.join(", ")));
        }
        if b {
            factors.push(format!("binding language: {}", binding.join(", ")));
        }

        DeiRiskResult {
            level,
            direct_hits: direct,
            proxy_hits: proxy,
            binding_hits: binding,
            factors,
        }
    }

    /// Tag every domain with at least one indicator hit. First hit
    /// short-circuits the domain.
    pub fn tag_applicability(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        DOMAINS
            .iter()
            .filter(|(_, indicators)| indicators.iter().any(|i| lower.contains(i)))
            .map(|(domain, _)| (*domain).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimlens_core::bootstrap_registry;

    fn scorer() -> DeiRiskScorer {
        DeiRiskScorer::new(&bootstrap_registry())
    }

    #[test]
    fn empty_text_is_minimal() {
        let result = scorer().assess("");
        assert_eq!(result.level, RiskLevel::Minimal);
        assert!(result.direct_hits.is_empty());
    }

    #[test]
    fn direct_alone_is_low() {
        let result = scorer().assess("our diversity statement");
        assert_eq!(result.level, RiskLevel::Low);
    }

    #[test]
    fn direct_plus_binding_is_medium_proxy_raises_to_high() {
        // Direct terms and binding language, no euphemism.
        let base = "All units shall comply with the diversity and equity policy.";
        let result = scorer().assess(base);
        assert_eq!(result.level, RiskLevel::Medium);
        assert!(result.direct_hits.contains(&"diversity".to_string()));
        assert!(result.proxy_hits.is_empty());

        // Adding one proxy term flips the top row of the table.
        let with_proxy = format!("{base} Cultural competence is expected of all staff.");
        let raised = scorer().assess(&with_proxy);
        assert_eq!(raised.level, RiskLevel::High);
        assert!(raised.proxy_hits.contains(&"cultural competence".to_string()));
    }

    #[test]
    fn proxy_plus_binding_is_medium() {
        let result = scorer().assess("training on cultural competence is required");
        assert_eq!(result.level, RiskLevel::Medium);
        assert!(result.direct_hits.is_empty());
    }

    #[test]
    fn applicability_tags_on_single_hit() {
        let tags = scorer().tag_applicability("the hiring pipeline review");
        assert_eq!(tags, ["hiring"]);
    }

    #[test]
    fn applicability_multiple_domains() {
        let tags =
            scorer().tag_applicability("supplier selection and contractor training standards");
        assert_eq!(tags, ["training", "procurement", "contracting"]);
    }

    #[test]
    fn applicability_empty_for_neutral_text() {
        assert!(scorer().tag_applicability("quarterly earnings were flat").is_empty());
    }
}
