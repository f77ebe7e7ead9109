//! Fixed statutory/case citation patterns.
//!
//! Unlike legal-term provisions, the citation patterns are not registrable:
//! the four kinds below are the closed set.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::provisions::PatternExtractor;

/// Citation kinds recognized by [`PatternExtractor::extract_citations`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CitationKind {
    /// `42 U.S.C. § 3604`
    FederalStatute,
    /// `24 C.F.R. § 100.204`
    Cfr,
    /// `Cal. Civ. Code § 1942`
    StateStatute,
    /// Simplified `Plaintiff v. Defendant` form.
    CaseLaw,
}

impl CitationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FederalStatute => "federal_statute",
            Self::Cfr => "cfr",
            Self::StateStatute => "state_statute",
            Self::CaseLaw => "case_law",
        }
    }
}

/// A citation match. No context window is taken.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citation {
    pub text: String,
    pub kind: CitationKind,
    /// Byte offset of the match start in the input.
    pub position: usize,
}

pub(crate) fn compile_citation_patterns() -> Result<Vec<(CitationKind, Regex)>, crate::ExtractError>
{
    [
        (
            CitationKind::FederalStatute,
            r"\d+\s+U\.S\.C\.\s*§*\s*\d+[A-Za-z0-9().\-]*",
        ),
        (
            CitationKind::Cfr,
            r"\d+\s+C\.F\.R\.\s*§*\s*\d+[A-Za-z0-9().\-]*",
        ),
        (
            CitationKind::StateStatute,
            r"[A-Z][a-z]+\.(?:\s+[A-Z][a-z]+\.)*\s+(?:Code|Stat\.|Rev\. Stat\.)\s*(?:Ann\.)?\s*§+\s*[\d.\-]+",
        ),
        (
            CitationKind::CaseLaw,
            r"[A-Z][A-Za-z]+(?:\s+[A-Z][A-Za-z]+)*\s+v\.\s+[A-Z][A-Za-z]+(?:\s+[A-Z][A-Za-z]+)*",
        ),
    ]
    .into_iter()
    .map(|(kind, raw)| {
        Regex::new(raw)
            .map(|regex| (kind, regex))
            .map_err(|source| crate::ExtractError::InvalidPattern {
                pattern: raw.to_string(),
                source,
            })
    })
    .collect()
}

pub(crate) fn extract(extractor: &PatternExtractor, text: &str) -> Vec<Citation> {
    let mut out = Vec::new();
    for (kind, regex) in &extractor.citation_patterns {
        for m in regex.find_iter(text) {
            out.push(Citation {
                text: m.as_str().to_string(),
                kind: *kind,
                position: m.start(),
            });
        }
    }
    out.sort_by_key(|c| c.position);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimlens_core::bootstrap_registry;

    fn extractor() -> PatternExtractor {
        PatternExtractor::new(&bootstrap_registry()).unwrap()
    }

    #[test]
    fn fixed_patterns_compile() {
        assert_eq!(compile_citation_patterns().unwrap().len(), 4);
    }

    #[test]
    fn federal_statute() {
        let cites = extractor().extract_citations("See 42 U.S.C. § 3604(b) for details.");
        assert_eq!(cites.len(), 1);
        assert_eq!(cites[0].kind, CitationKind::FederalStatute);
        assert!(cites[0].text.starts_with("42 U.S.C."));
    }

    #[test]
    fn cfr() {
        let cites = extractor().extract_citations("Under 24 C.F.R. § 100.204, housing providers...");
        assert_eq!(cites.len(), 1);
        assert_eq!(cites[0].kind, CitationKind::Cfr);
    }

    #[test]
    fn state_statute() {
        let cites = extractor().extract_citations("Cal. Civ. Code § 1942 permits repair-and-deduct.");
        assert!(
            cites.iter().any(|c| c.kind == CitationKind::StateStatute),
            "got {cites:?}"
        );
    }

    #[test]
    fn case_law_simplified() {
        let cites = extractor().extract_citations("As held in Shelley v. Kraemer, covenants...");
        assert!(cites.iter().any(|c| c.kind == CitationKind::CaseLaw));
    }

    #[test]
    fn empty_text() {
        assert!(extractor().extract_citations("").is_empty());
    }

    #[test]
    fn sorted_by_position() {
        let text = "Brown v. Board came before 42 U.S.C. § 2000d.";
        let cites = extractor().extract_citations(text);
        assert!(cites.len() >= 2);
        assert!(cites.windows(2).all(|w| w[0].position <= w[1].position));
    }
}
