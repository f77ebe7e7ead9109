//! Provision extraction over registered legal-term patterns.
//!
//! The extractor compiles every registered pattern once at construction and
//! is immutable afterwards. Extraction is a pure scan: every match of every
//! selected pattern becomes a [`Provision`] carrying a whitespace-normalized
//! context window.

use std::collections::BTreeSet;

use claimlens_core::{KeywordCategory, TaxonomyRegistry};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ExtractError;
use crate::citations::{Citation, compile_citation_patterns};

/// A text span matching a registered legal-term pattern.
///
/// Ephemeral: produced fresh per extraction call, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provision {
    /// The matched text.
    pub term: String,
    /// Whitespace-normalized window around the match.
    pub context: String,
    /// Byte offset of the match start in the input.
    pub position: usize,
    /// The pattern that produced the match, as registered.
    pub source_pattern: String,
}

/// Result of one provision scan.
#[derive(Debug, Clone, Default)]
pub struct ProvisionScan {
    /// Matches sorted by position; ties resolved by pattern registration
    /// order, then match order within a pattern.
    pub provisions: Vec<Provision>,
    /// Distinct lower-cased matched terms.
    pub distinct_terms: BTreeSet<String>,
    /// Total match count (equals `provisions.len()`).
    pub total: usize,
}

struct CompiledPattern {
    raw: String,
    regex: Regex,
}

struct ScopePatterns {
    scope: String,
    patterns: Vec<CompiledPattern>,
}

/// Regex-driven extractor over the registry's legal-term patterns.
///
/// Also owns the four fixed citation patterns and the snapshots used by
/// [`categorize_complaint_type`](PatternExtractor::categorize_complaint_type).
pub struct PatternExtractor {
    global_patterns: Vec<CompiledPattern>,
    /// Per-scope pattern groups in first-registration order.
    scoped_patterns: Vec<ScopePatterns>,
    pub(crate) citation_patterns: Vec<(crate::CitationKind, Regex)>,
    /// (type, scope-only complaint keywords), sorted by type name.
    pub(crate) type_keywords: Vec<(String, Vec<String>)>,
}

impl PatternExtractor {
    /// Compile every registered pattern. Fails fast on the first pattern
    /// that does not compile.
    pub fn new(registry: &TaxonomyRegistry) -> Result<Self, ExtractError> {
        let mut global_patterns = Vec::new();
        let mut scoped_patterns: Vec<ScopePatterns> = Vec::new();

        for (scope, raw) in registry.legal_terms_for(None) {
            let compiled = CompiledPattern {
                regex: compile(&raw)?,
                raw,
            };
            match scope {
                None => global_patterns.push(compiled),
                Some(scope) => {
                    match scoped_patterns.iter_mut().find(|g| g.scope == scope) {
                        Some(group) => group.patterns.push(compiled),
                        None => scoped_patterns.push(ScopePatterns {
                            scope,
                            patterns: vec![compiled],
                        }),
                    }
                }
            }
        }

        let type_keywords = registry
            .list_types(Some(KeywordCategory::Complaint))
            .into_iter()
            .map(|ty| {
                let kws = registry.type_keywords(KeywordCategory::Complaint, &ty);
                (ty, kws)
            })
            .collect();

        Ok(Self {
            global_patterns,
            scoped_patterns,
            citation_patterns: compile_citation_patterns()?,
            type_keywords,
        })
    }

    /// Scan `text` with the global patterns plus the selected types'
    /// patterns (`None` = every registered type). `context_chars` is the
    /// window width, in characters, taken on each side of the match.
    ///
    /// Unknown type names are skipped with a warning; they never fail the
    /// scan.
    pub fn extract_provisions(
        &self,
        text: &str,
        context_chars: usize,
        types: Option<&[&str]>,
    ) -> ProvisionScan {
        let mut selected: Vec<&CompiledPattern> = self.global_patterns.iter().collect();
        match types {
            None => {
                for group in &self.scoped_patterns {
                    selected.extend(group.patterns.iter());
                }
            }
            Some(names) => {
                for name in names {
                    match self.scoped_patterns.iter().find(|g| g.scope == *name) {
                        Some(group) => selected.extend(group.patterns.iter()),
                        None => warn!(scope = %name, "no patterns registered for type, skipping"),
                    }
                }
            }
        }

        let mut scan = ProvisionScan::default();
        // Patterns are visited in registration order and matches in text
        // order, so a stable sort on position preserves the tie-break
        // contract.
        for pattern in selected {
            for m in pattern.regex.find_iter(text) {
                scan.distinct_terms.insert(m.as_str().to_lowercase());
                scan.provisions.push(Provision {
                    term: m.as_str().to_string(),
                    context: context_window(text, m.start(), m.end(), context_chars),
                    position: m.start(),
                    source_pattern: pattern.raw.clone(),
                });
            }
        }
        scan.provisions.sort_by_key(|p| p.position);
        scan.total = scan.provisions.len();
        scan
    }

    /// Scan for statutory/case citations using the four fixed patterns.
    pub fn extract_citations(&self, text: &str) -> Vec<Citation> {
        crate::citations::extract(self, text)
    }
}

fn compile(raw: &str) -> Result<Regex, ExtractError> {
    Regex::new(raw).map_err(|source| ExtractError::InvalidPattern {
        pattern: raw.to_string(),
        source,
    })
}

/// Cut a window of `context_chars` characters on each side of the match and
/// collapse all internal whitespace to single spaces.
fn context_window(text: &str, start: usize, end: usize, context_chars: usize) -> String {
    let win_start = if context_chars == 0 {
        start
    } else {
        text[..start]
            .char_indices()
            .rev()
            .nth(context_chars - 1)
            .map(|(i, _)| i)
            .unwrap_or(0)
    };
    let win_end = text[end..]
        .char_indices()
        .nth(context_chars)
        .map(|(i, _)| end + i)
        .unwrap_or(text.len());
    text[win_start..win_end]
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimlens_core::bootstrap_registry;

    fn extractor() -> PatternExtractor {
        PatternExtractor::new(&bootstrap_registry()).unwrap()
    }

    #[test]
    fn empty_text_yields_empty_scan() {
        let scan = extractor().extract_provisions("", 50, None);
        assert!(scan.provisions.is_empty());
        assert!(scan.distinct_terms.is_empty());
        assert_eq!(scan.total, 0);
    }

    #[test]
    fn finds_scoped_and_global_matches() {
        let text = "The landlord's conduct is a violation of the Fair Housing Act \
                    and of Section 12 of the lease.";
        let scan = extractor().extract_provisions(text, 30, None);
        assert!(scan.total >= 2, "expected at least 2 matches, got {}", scan.total);
        assert!(scan.distinct_terms.contains("fair housing act"));
        assert!(scan.distinct_terms.iter().any(|t| t.starts_with("section 12")));
    }

    #[test]
    fn results_sorted_by_position() {
        let text = "Section 3 applies. See the Clean Water Act and Section 9.";
        let scan = extractor().extract_provisions(text, 20, None);
        let positions: Vec<usize> = scan.provisions.iter().map(|p| p.position).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn type_selection_restricts_patterns() {
        let text = "The Clean Air Act and the Fair Housing Act both apply.";
        let all = extractor().extract_provisions(text, 20, None);
        let housing_only = extractor().extract_provisions(text, 20, Some(&["housing"]));
        // "fair housing act" matches the housing scope; "clean air act"
        // only the environmental scope. The generic "... Act" global
        // pattern still sees both.
        assert!(all.distinct_terms.contains("clean air act"));
        assert!(housing_only.distinct_terms.contains("fair housing act"));
        assert!(all.total > housing_only.total);
    }

    #[test]
    fn unknown_type_is_skipped_not_fatal() {
        let text = "Section 4 of the agreement.";
        let scan = extractor().extract_provisions(text, 20, Some(&["maritime"]));
        // Global patterns still run.
        assert_eq!(scan.total, 1);
    }

    #[test]
    fn context_window_is_whitespace_normalized() {
        let text = "obligations   under\n\nthe Fair Housing Act\tare   enforceable";
        let scan = extractor().extract_provisions(text, 25, Some(&["housing"]));
        let p = scan
            .provisions
            .iter()
            .find(|p| p.term.eq_ignore_ascii_case("fair housing act"))
            .expect("match");
        assert!(!p.context.contains('\n'));
        assert!(!p.context.contains("  "), "context {:?}", p.context);
    }

    #[test]
    fn duplicate_registration_duplicates_matches() {
        // The registry quirk: appending the same pattern twice doubles its
        // match count.
        let mut reg = bootstrap_registry();
        reg.register_legal_terms(Some("housing"), [r"(?i)fair housing act"]);
        let ex = PatternExtractor::new(&reg).unwrap();
        let scan = ex.extract_provisions("the Fair Housing Act", 10, Some(&["housing"]));
        let fha = scan
            .provisions
            .iter()
            .filter(|p| p.term.eq_ignore_ascii_case("fair housing act"))
            .count();
        assert_eq!(fha, 3, "bootstrap pattern + duplicate + generic Act matcher");
    }

    #[test]
    fn invalid_pattern_fails_construction() {
        let mut reg = TaxonomyRegistry::new();
        reg.register_legal_terms(None, ["(unclosed"]);
        assert!(matches!(
            PatternExtractor::new(&reg),
            Err(ExtractError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn multibyte_text_does_not_panic() {
        let text = "§§§ die Klausel — the Fair Housing Act — § 3 übrigens";
        let scan = extractor().extract_provisions(text, 15, Some(&["housing"]));
        assert!(scan.total >= 1);
    }
}
