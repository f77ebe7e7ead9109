//! Generic risk rubric: a fixed decision table over five signal counts.

use claimlens_core::{KeywordCategory, TaxonomyRegistry, matched_keywords};
use serde::{Deserialize, Serialize};

/// Risk band. Ordinal values 0..=3 are part of the scoring contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Minimal,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn score(&self) -> u8 {
        match self {
            Self::Minimal => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Per-signal counts feeding the decision table. Counts are distinct
/// keywords matched, except `provisions`, which the caller supplies from a
/// provision scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalCounts {
    pub complaint: usize,
    pub binding: usize,
    pub high_severity: usize,
    pub medium_severity: usize,
    pub provisions: usize,
}

/// Outcome of one scoring pass: a pure function of the input text, the
/// provision count, and the registry state at scorer construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskResult {
    pub level: RiskLevel,
    pub counts: SignalCounts,
    /// Triggering signals in fixed order (complaint, binding, high, medium,
    /// provisions).
    pub factors: Vec<String>,
    /// Fixed ordered recommendations for the band.
    pub recommendations: Vec<String>,
}

/// Table-driven scorer over the global signal vocabularies.
pub struct RiskScorer {
    complaint: Vec<String>,
    binding: Vec<String>,
    high_severity: Vec<String>,
    medium_severity: Vec<String>,
}

impl RiskScorer {
    /// Snapshot the global keyword lists. The scorer never re-reads the
    /// registry afterwards.
    pub fn new(registry: &TaxonomyRegistry) -> Self {
        Self {
            complaint: registry.keywords(KeywordCategory::Complaint, None),
            binding: registry.keywords(KeywordCategory::Binding, None),
            high_severity: registry.keywords(KeywordCategory::HighSeverity, None),
            medium_severity: registry.keywords(KeywordCategory::MediumSeverity, None),
        }
    }

    /// Score `text` given a provision count from a prior extraction pass.
    pub fn assess(&self, text: &str, provisions: usize) -> RiskResult {
        let complaint = matched_keywords(text, &self.complaint);
        let binding = matched_keywords(text, &self.binding);
        let high = matched_keywords(text, &self.high_severity);
        let medium = matched_keywords(text, &self.medium_severity);

        let counts = SignalCounts {
            complaint: complaint.len(),
            binding: binding.len(),
            high_severity: high.len(),
            medium_severity: medium.len(),
            provisions,
        };
        let level = score_table(&counts);

        let mut factors = Vec::new();
        if counts.complaint > 0 {
            factors.push(format!("complaint language: {}", complaint.join(", ")));
        }
        if counts.binding > 0 {
            factors.push(format!("binding language: {}", binding.join(", ")));
        }
        if counts.high_severity > 0 {
            factors.push(format!("high-severity outcomes: {}", high.join(", ")));
        }
        if counts.medium_severity > 0 {
            factors.push(format!("medium-severity outcomes: {}", medium.join(", ")));
        }
        if counts.provisions > 0 {
            factors.push(format!("{} statutory provision matches", counts.provisions));
        }

        tracing::debug!(level = level.as_str(), ?counts, "risk assessed");
        RiskResult {
            level,
            counts,
            factors,
            recommendations: recommendations(level),
        }
    }

    /// Whether the text clears the actionability threshold (default Medium).
    pub fn is_actionable(&self, text: &str, provisions: usize, threshold: RiskLevel) -> bool {
        self.assess(text, provisions).level >= threshold
    }
}

/// The decision table. Rows are checked top-down; the first match wins.
fn score_table(c: &SignalCounts) -> RiskLevel {
    let high_combo = c.high_severity > 0 && c.provisions > 0 && c.binding > 0;
    let saturated = c.complaint > 5 && c.binding > 2 && c.provisions > 3;
    if high_combo || saturated {
        return RiskLevel::High;
    }
    if ((c.complaint > 0 || c.medium_severity > 0) && c.binding > 0) || c.provisions > 5 {
        return RiskLevel::Medium;
    }
    if c.complaint > 0 || c.provisions > 0 {
        return RiskLevel::Low;
    }
    RiskLevel::Minimal
}

fn recommendations(level: RiskLevel) -> Vec<String> {
    let items: &[&str] = match level {
        RiskLevel::High => &[
            "Escalate for immediate legal review",
            "Preserve all related documents and communications",
            "Identify applicable filing deadlines",
        ],
        RiskLevel::Medium => &[
            "Schedule a legal consultation",
            "Collect supporting evidence before deadlines lapse",
        ],
        RiskLevel::Low => &[
            "Document the underlying facts while recollection is fresh",
            "Monitor for further incidents",
        ],
        RiskLevel::Minimal => &["No immediate action required"],
    };
    items.iter().map(|s| s.to_string()).collect()
}
