//! Complaint-type categorization and the protected-class ontology.

use claimlens_core::count_hits;

use crate::provisions::PatternExtractor;

/// Substrings always checked regardless of the registered taxonomy, kept
/// for compatibility with corpora labelled before types were registrable.
const LEGACY_TYPES: &[&str] = &["disability", "discrimination", "harassment", "retaliation"];

/// Types with more than this many scope-only keywords need two hits; small
/// taxonomies stay usable with a single hit.
const LARGE_TAXONOMY: usize = 10;

/// Fixed protected-class ontology: (class, indicator substrings).
/// Independent of the registry.
const PROTECTED_CLASSES: &[(&str, &[&str])] = &[
    ("race", &["race", "racial"]),
    ("color", &["color", "skin color"]),
    ("religion", &["religion", "religious", "creed"]),
    ("sex", &["sex", "gender", "sexual orientation"]),
    ("national_origin", &["national origin", "nationality", "ancestry"]),
    ("age", &["age discrimination", "over 40", "ageism"]),
    ("disability", &["disability", "disabled", "handicap", "impairment"]),
    ("genetic_information", &["genetic information", "genetic test"]),
    ("pregnancy", &["pregnancy", "pregnant", "childbirth"]),
    ("veteran_status", &["veteran", "military service", "uniformed service"]),
    ("citizenship", &["citizenship", "immigration status"]),
];

impl PatternExtractor {
    /// Categorize text against every registered complaint type.
    ///
    /// A type is included when its scope-only keyword hits reach the
    /// threshold: 2 for large taxonomies (more than 10 scoped keywords),
    /// otherwise 1. The four legacy substrings are always checked and
    /// unioned in. Never empty — falls back to `["general"]`.
    pub fn categorize_complaint_type(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        let mut out: Vec<String> = Vec::new();

        for (ty, keywords) in &self.type_keywords {
            let hits = count_hits(&lower, keywords);
            let threshold = if keywords.len() > LARGE_TAXONOMY { 2 } else { 1 };
            if hits >= threshold {
                out.push(ty.clone());
            }
        }

        for legacy in LEGACY_TYPES {
            if lower.contains(legacy) && !out.iter().any(|t| t == legacy) {
                out.push((*legacy).to_string());
            }
        }

        if out.is_empty() {
            out.push("general".to_string());
        }
        out
    }

    /// Protected classes mentioned in the text, in ontology order.
    pub fn find_protected_classes(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        PROTECTED_CLASSES
            .iter()
            .filter(|(_, indicators)| indicators.iter().any(|i| lower.contains(i)))
            .map(|(class, _)| (*class).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimlens_core::bootstrap_registry;

    fn extractor() -> PatternExtractor {
        PatternExtractor::new(&bootstrap_registry()).unwrap()
    }

    #[test]
    fn categorize_never_empty() {
        assert_eq!(extractor().categorize_complaint_type(""), ["general"]);
        assert_eq!(
            extractor().categorize_complaint_type("an entirely unrelated grocery list"),
            ["general"]
        );
    }

    #[test]
    fn small_taxonomy_needs_one_hit() {
        // "patent" alone categorizes intellectual_property (8 scoped keywords).
        let got = extractor().categorize_complaint_type("they copied our patent");
        assert!(got.iter().any(|t| t == "intellectual_property"), "got {got:?}");
    }

    #[test]
    fn large_taxonomy_needs_two_hits() {
        let ex = extractor();
        // housing has >10 scoped keywords; one hit is not enough.
        let one = ex.categorize_complaint_type("the rent went up");
        assert!(!one.iter().any(|t| t == "housing"), "got {one:?}");
        let two = ex.categorize_complaint_type("the landlord raised the rent");
        assert!(two.iter().any(|t| t == "housing"), "got {two:?}");
    }

    #[test]
    fn legacy_substrings_union_in() {
        let got = extractor().categorize_complaint_type("ongoing harassment at the office");
        assert!(got.iter().any(|t| t == "harassment"));
    }

    #[test]
    fn housing_discrimination_scenario() {
        let text = "Tenant claims housing discrimination based on disability; landlord \
                    retaliated by eviction notice, a violation of the Fair Housing Act.";
        let got = extractor().categorize_complaint_type(text);
        assert!(got.iter().any(|t| t == "housing"), "got {got:?}");
        assert!(got.iter().any(|t| t == "discrimination"), "got {got:?}");
    }

    #[test]
    fn protected_classes_fixed_ontology() {
        let got = extractor()
            .find_protected_classes("denied because of religion and immigration status");
        assert_eq!(got, ["religion", "citizenship"]);
    }

    #[test]
    fn protected_classes_empty_for_neutral_text() {
        assert!(extractor().find_protected_classes("the invoice is overdue").is_empty());
    }
}
