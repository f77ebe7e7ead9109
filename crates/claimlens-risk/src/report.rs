//! Corpus-level reduction of per-document risk results and CSV export.

use std::collections::BTreeMap;
use std::io::Write;

use claimlens_core::{KeywordCategory, TaxonomyRegistry};
use claimlens_extract::Provision;
use serde::Serialize;
use thiserror::Error;

use crate::dei::DeiRiskResult;
use crate::scorer::{RiskLevel, RiskResult};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// One document's scoring results, as handed to the report consumer.
#[derive(Debug, Clone)]
pub struct DocumentRiskRecord {
    pub document_id: String,
    pub risk: RiskResult,
    pub dei: DeiRiskResult,
    pub provisions: Vec<Provision>,
}

impl DocumentRiskRecord {
    /// Provisions whose context window carries binding language.
    pub fn binding_provision_count(&self, binding_vocab: &[String]) -> usize {
        self.provisions
            .iter()
            .filter(|p| {
                let context = p.context.to_lowercase();
                binding_vocab.iter().any(|kw| context.contains(kw.as_str()))
            })
            .count()
    }
}

/// Corpus summary reduced from many per-document records.
#[derive(Debug, Clone, Serialize)]
pub struct RiskReport {
    pub total_documents: usize,
    /// Documents per risk band, every band present.
    pub level_counts: BTreeMap<RiskLevel, usize>,
    /// Documents at or above [`RiskLevel::Medium`].
    pub actionable: usize,
    pub mean_score: f64,
    pub mean_provisions: f64,
}

impl RiskReport {
    /// Pure reduction; an empty corpus yields a zeroed report.
    pub fn from_records(records: &[DocumentRiskRecord]) -> Self {
        let mut level_counts: BTreeMap<RiskLevel, usize> = BTreeMap::new();
        for level in [
            RiskLevel::Minimal,
            RiskLevel::Low,
            RiskLevel::Medium,
            RiskLevel::High,
        ] {
            level_counts.insert(level, 0);
        }

        let mut score_sum = 0usize;
        let mut provision_sum = 0usize;
        let mut actionable = 0usize;
        for record in records {
            *level_counts.entry(record.risk.level).or_default() += 1;
            score_sum += record.risk.level.score() as usize;
            provision_sum += record.provisions.len();
            if record.risk.level >= RiskLevel::Medium {
                actionable += 1;
            }
        }

        let n = records.len();
        let denom = n.max(1) as f64;
        Self {
            total_documents: n,
            level_counts,
            actionable,
            mean_score: score_sum as f64 / denom,
            mean_provisions: provision_sum as f64 / denom,
        }
    }
}

/// Column order is the export contract; downstream consumers index by
/// position as well as header.
const CSV_HEADERS: &[&str] = &[
    "Document ID",
    "Risk Score",
    "Risk Level",
    "DEI Keywords",
    "Proxy Keywords",
    "Binding Keywords",
    "Provisions",
    "Binding Provisions",
];

/// Write the tabular export for a record set.
pub fn write_csv<W: Write>(
    registry: &TaxonomyRegistry,
    records: &[DocumentRiskRecord],
    writer: W,
) -> Result<(), ReportError> {
    let binding_vocab = registry.keywords(KeywordCategory::Binding, None);
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADERS)?;
    for record in records {
        let row = [
            record.document_id.clone(),
            record.risk.level.score().to_string(),
            record.risk.level.as_str().to_string(),
            record.dei.direct_hits.join("; "),
            record.dei.proxy_hits.join("; "),
            record.dei.binding_hits.join("; "),
            record.provisions.len().to_string(),
            record.binding_provision_count(&binding_vocab).to_string(),
        ];
        csv.write_record(&row)?;
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dei::DeiRiskScorer;
    use crate::scorer::RiskScorer;
    use claimlens_core::bootstrap_registry;
    use claimlens_extract::PatternExtractor;

    fn record(id: &str, text: &str) -> DocumentRiskRecord {
        let registry = bootstrap_registry();
        let extractor = PatternExtractor::new(&registry).unwrap();
        let scan = extractor.extract_provisions(text, 60, None);
        DocumentRiskRecord {
            document_id: id.to_string(),
            risk: RiskScorer::new(&registry).assess(text, scan.total),
            dei: DeiRiskScorer::new(&registry).assess(text),
            provisions: scan.provisions,
        }
    }

    #[test]
    fn empty_corpus_reduces_to_zeroes() {
        let report = RiskReport::from_records(&[]);
        assert_eq!(report.total_documents, 0);
        assert_eq!(report.actionable, 0);
        assert_eq!(report.mean_score, 0.0);
        assert_eq!(report.level_counts.len(), 4);
    }

    #[test]
    fn histogram_and_means() {
        let records = vec![
            record("doc-1", ""),
            record("doc-2", "formal complaint about the lease"),
            record(
                "doc-3",
                "wrongful eviction; tenants shall vacate per the Fair Housing Act",
            ),
        ];
        let report = RiskReport::from_records(&records);
        assert_eq!(report.total_documents, 3);
        assert_eq!(report.level_counts[&RiskLevel::Minimal], 1);
        assert_eq!(report.level_counts[&RiskLevel::Low], 1);
        assert_eq!(report.level_counts[&RiskLevel::High], 1);
        assert_eq!(report.actionable, 1);
        assert!(report.mean_score > 1.0 && report.mean_score < 2.0);
    }

    #[test]
    fn csv_has_contract_columns() {
        let registry = bootstrap_registry();
        let records = vec![record(
            "doc-9",
            "diversity training shall be mandatory under the Fair Housing Act",
        )];
        let mut buf = Vec::new();
        write_csv(&registry, &records, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let mut lines = out.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Document ID,Risk Score,Risk Level,DEI Keywords,Proxy Keywords,Binding Keywords,Provisions,Binding Provisions"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("doc-9,"));
        assert!(row.contains("diversity"));
    }

    #[test]
    fn binding_provisions_require_binding_context() {
        let registry = bootstrap_registry();
        let rec = record(
            "doc-4",
            "Tenants shall comply with the Fair Housing Act. Elsewhere, the \
             weather was pleasant for a very long stretch of days and the \
             garden near Section 12 of the park bloomed without incident.",
        );
        let binding = registry.keywords(claimlens_core::KeywordCategory::Binding, None);
        let bound = rec.binding_provision_count(&binding);
        assert!(bound >= 1, "FHA sits next to 'shall comply'");
        assert!(
            bound < rec.provisions.len(),
            "the park reference carries no binding language"
        );
    }
}
