//! Keyword and legal-term pattern registry, keyed by category and complaint-type scope.
//!
//! The registry is the system's only configuration surface: it is populated
//! once by [`crate::bootstrap_registry`] (or by caller registrations) before
//! any component reads it, then treated as immutable. Components receive it
//! by explicit `&` injection and snapshot what they need at construction.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Closed set of keyword categories.
///
/// Complaint-type scopes are open-ended strings; the signal categories they
/// scope are not, so the category is a sum type matched exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCategory {
    /// Grievance/claim vocabulary ("complaint", "violation of rights", ...).
    Complaint,
    /// Evidence vocabulary ("witness", "receipt", "correspondence", ...).
    Evidence,
    /// General legal vocabulary ("statute", "jurisdiction", "plaintiff", ...).
    Legal,
    /// Binding language signaling an enforceable obligation ("shall", "must").
    Binding,
    /// High-severity outcomes ("eviction", "termination", "fraud").
    HighSeverity,
    /// Medium-severity outcomes ("denial", "delay", "penalty").
    MediumSeverity,
    /// Euphemism/proxy vocabulary used by the DEI scorer.
    Proxy,
}

impl KeywordCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complaint => "complaint",
            Self::Evidence => "evidence",
            Self::Legal => "legal",
            Self::Binding => "binding",
            Self::HighSeverity => "high_severity",
            Self::MediumSeverity => "medium_severity",
            Self::Proxy => "proxy",
        }
    }
}

/// Process-wide keyword/pattern registry.
///
/// Keywords are sets: re-registration merges and is idempotent. Legal-term
/// patterns are an ordered log: re-registration appends, so registering the
/// same patterns twice duplicates them and inflates provision counts
/// downstream. That quirk is load-bearing for existing corpora and is kept.
///
/// Writes are expected to finish before concurrent reads begin; there is no
/// internal synchronization.
#[derive(Debug, Default, Clone)]
pub struct TaxonomyRegistry {
    /// (category, scope) → keyword set. `None` scope is the global entry.
    keywords: BTreeMap<(KeywordCategory, Option<String>), BTreeSet<String>>,
    /// Flat registration log of legal-term patterns with their scope.
    patterns: Vec<(Option<String>, String)>,
}

impl TaxonomyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge keywords into the (category, scope) set. Idempotent.
    ///
    /// Keywords are stored lower-cased; matching downstream is
    /// case-insensitive substring search.
    pub fn register_keywords<I, S>(&mut self, category: KeywordCategory, items: I, scope: Option<&str>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entry = self
            .keywords
            .entry((category, scope.map(str::to_string)))
            .or_default();
        for item in items {
            entry.insert(item.as_ref().to_lowercase());
        }
    }

    /// Append legal-term patterns for a scope (`None` = global). NOT
    /// idempotent: re-registering appends duplicate entries, which doubles
    /// their match counts in provision extraction.
    pub fn register_legal_terms<I, S>(&mut self, scope: Option<&str>, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let scope = scope.map(str::to_string);
        for pattern in patterns {
            self.patterns
                .push((scope.clone(), pattern.as_ref().to_string()));
        }
    }

    /// Global ∪ scope keywords for a category, sorted.
    pub fn keywords(&self, category: KeywordCategory, scope: Option<&str>) -> Vec<String> {
        let mut merged: BTreeSet<&str> = BTreeSet::new();
        if let Some(global) = self.keywords.get(&(category, None)) {
            merged.extend(global.iter().map(String::as_str));
        }
        if let Some(scope) = scope
            && let Some(scoped) = self.keywords.get(&(category, Some(scope.to_string())))
        {
            merged.extend(scoped.iter().map(String::as_str));
        }
        merged.into_iter().map(str::to_string).collect()
    }

    /// Scope-only keywords for a category, sorted. Used where global
    /// vocabulary would cause cross-type false positives.
    pub fn type_keywords(&self, category: KeywordCategory, scope: &str) -> Vec<String> {
        self.keywords
            .get(&(category, Some(scope.to_string())))
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Legal-term patterns visible to a scope: the global sequence followed
    /// by the scope's sequence, each in original registration order.
    pub fn legal_terms(&self, scope: Option<&str>) -> Vec<String> {
        let mut out: Vec<String> = self
            .patterns
            .iter()
            .filter(|(s, _)| s.is_none())
            .map(|(_, p)| p.clone())
            .collect();
        if let Some(scope) = scope {
            out.extend(
                self.patterns
                    .iter()
                    .filter(|(s, _)| s.as_deref() == Some(scope))
                    .map(|(_, p)| p.clone()),
            );
        }
        out
    }

    /// Legal-term patterns for the given scopes (or every scope when
    /// `scopes` is `None`): global patterns first, then per-scope sequences
    /// in registration order. Each pattern is paired with its scope label.
    pub fn legal_terms_for(&self, scopes: Option<&[&str]>) -> Vec<(Option<String>, String)> {
        let mut out: Vec<(Option<String>, String)> = self
            .patterns
            .iter()
            .filter(|(s, _)| s.is_none())
            .cloned()
            .collect();
        match scopes {
            None => {
                for scope in self.pattern_scopes() {
                    out.extend(
                        self.patterns
                            .iter()
                            .filter(|(s, _)| s.as_deref() == Some(scope.as_str()))
                            .cloned(),
                    );
                }
            }
            Some(selected) => {
                for scope in selected {
                    out.extend(
                        self.patterns
                            .iter()
                            .filter(|(s, _)| s.as_deref() == Some(*scope))
                            .cloned(),
                    );
                }
            }
        }
        out
    }

    /// Every scope ever registered, sorted, optionally restricted to one
    /// keyword category. Without a category filter, pattern-only scopes are
    /// included as well — a type is "known" the moment any scoped entry is
    /// non-empty.
    pub fn list_types(&self, category: Option<KeywordCategory>) -> Vec<String> {
        let mut scopes: BTreeSet<String> = BTreeSet::new();
        for (cat, scope) in self.keywords.keys() {
            if let Some(scope) = scope
                && category.is_none_or(|c| c == *cat)
            {
                scopes.insert(scope.clone());
            }
        }
        if category.is_none() {
            for (scope, _) in &self.patterns {
                if let Some(scope) = scope {
                    scopes.insert(scope.clone());
                }
            }
        }
        scopes.into_iter().collect()
    }

    /// Distinct pattern scopes in first-registration order.
    fn pattern_scopes(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut out = Vec::new();
        for (scope, _) in &self.patterns {
            if let Some(scope) = scope
                && seen.insert(scope.clone())
            {
                out.push(scope.clone());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_registration_is_idempotent() {
        let mut reg = TaxonomyRegistry::new();
        reg.register_keywords(KeywordCategory::Complaint, ["breach", "claim"], None);
        reg.register_keywords(KeywordCategory::Complaint, ["claim", "breach"], None);
        assert_eq!(reg.keywords(KeywordCategory::Complaint, None), ["breach", "claim"]);
    }

    #[test]
    fn keywords_merge_global_and_scope_sorted() {
        let mut reg = TaxonomyRegistry::new();
        reg.register_keywords(KeywordCategory::Complaint, ["violation"], None);
        reg.register_keywords(KeywordCategory::Complaint, ["eviction", "landlord"], Some("housing"));
        assert_eq!(
            reg.keywords(KeywordCategory::Complaint, Some("housing")),
            ["eviction", "landlord", "violation"]
        );
        // Global read is unaffected by scoped entries.
        assert_eq!(reg.keywords(KeywordCategory::Complaint, None), ["violation"]);
    }

    #[test]
    fn type_keywords_exclude_global() {
        let mut reg = TaxonomyRegistry::new();
        reg.register_keywords(KeywordCategory::Complaint, ["violation"], None);
        reg.register_keywords(KeywordCategory::Complaint, ["landlord"], Some("housing"));
        assert_eq!(
            reg.type_keywords(KeywordCategory::Complaint, "housing"),
            ["landlord"]
        );
    }

    #[test]
    fn keywords_are_lowercased() {
        let mut reg = TaxonomyRegistry::new();
        reg.register_keywords(KeywordCategory::Binding, ["SHALL", "Must"], None);
        assert_eq!(reg.keywords(KeywordCategory::Binding, None), ["must", "shall"]);
    }

    #[test]
    fn pattern_registration_preserves_order_and_duplicates() {
        let mut reg = TaxonomyRegistry::new();
        reg.register_legal_terms(Some("housing"), ["Fair Housing Act", "Section 8"]);
        reg.register_legal_terms(Some("housing"), ["Fair Housing Act"]);
        assert_eq!(
            reg.legal_terms(Some("housing")),
            ["Fair Housing Act", "Section 8", "Fair Housing Act"]
        );
    }

    #[test]
    fn legal_terms_global_before_scope() {
        let mut reg = TaxonomyRegistry::new();
        reg.register_legal_terms(Some("housing"), ["Fair Housing Act"]);
        reg.register_legal_terms(None, [r"Section\s+\d+"]);
        assert_eq!(
            reg.legal_terms(Some("housing")),
            [r"Section\s+\d+", "Fair Housing Act"]
        );
    }

    #[test]
    fn legal_terms_for_selected_scopes() {
        let mut reg = TaxonomyRegistry::new();
        reg.register_legal_terms(None, ["global"]);
        reg.register_legal_terms(Some("housing"), ["fha"]);
        reg.register_legal_terms(Some("employment"), ["title vii"]);
        let selected = reg.legal_terms_for(Some(&["employment"]));
        assert_eq!(
            selected,
            vec![
                (None, "global".to_string()),
                (Some("employment".to_string()), "title vii".to_string()),
            ]
        );
        // All scopes: global first, then scopes in first-registration order.
        let all = reg.legal_terms_for(None);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].0, None);
        assert_eq!(all[1].0.as_deref(), Some("housing"));
    }

    #[test]
    fn list_types_filters_by_category() {
        let mut reg = TaxonomyRegistry::new();
        reg.register_keywords(KeywordCategory::Complaint, ["landlord"], Some("housing"));
        reg.register_keywords(KeywordCategory::Evidence, ["paystub"], Some("employment"));
        reg.register_legal_terms(Some("tax_law"), ["26 U.S.C."]);

        assert_eq!(
            reg.list_types(None),
            ["employment", "housing", "tax_law"]
        );
        assert_eq!(reg.list_types(Some(KeywordCategory::Complaint)), ["housing"]);
    }

    // Registry monotonicity: reads after more registrations are supersets
    // of reads after any prefix of the same sequence.
    #[test]
    fn keyword_reads_grow_monotonically() {
        let mut reg = TaxonomyRegistry::new();
        let batches: [&[&str]; 3] = [&["alpha"], &["beta", "gamma"], &["alpha", "delta"]];
        let mut previous: Vec<String> = Vec::new();
        for batch in batches {
            reg.register_keywords(KeywordCategory::Legal, batch.iter().copied(), None);
            let current = reg.keywords(KeywordCategory::Legal, None);
            assert!(
                previous.iter().all(|k| current.contains(k)),
                "prefix read {previous:?} not contained in {current:?}"
            );
            previous = current;
        }
        assert_eq!(previous, ["alpha", "beta", "delta", "gamma"]);
    }
}
