//! Per-document hybrid indexing pipeline and corpus statistics.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use claimlens_core::{KeywordCategory, TaxonomyRegistry, matched_keywords};
use claimlens_extract::{PatternExtractor, Provision};
use claimlens_risk::{RiskLevel, RiskResult, RiskScorer};
use serde::Serialize;
use tracing::{debug, warn};

use crate::embed::Embedder;
use crate::error::IndexError;

/// Relevance fusion weights. Versioned: changing any constant breaks score
/// comparability across documents indexed under the old formula.
const W_KEYWORD: f64 = 0.4;
const W_PROVISION: f64 = 0.2;
const W_RISK: f64 = 0.3;
const W_APPLICABILITY: f64 = 0.1;

const KW_COMPLAINT: f64 = 0.3;
const KW_LEGAL: f64 = 0.2;
const KW_BINDING: f64 = 0.15;
const KW_EVIDENCE: f64 = 0.1;

/// Provision and applicability counts saturating the [0,1] sub-scores.
const PROVISION_SATURATION: f64 = 10.0;
const APPLICABILITY_SATURATION: f64 = 4.0;

/// Distinct scope-keyword matches needed before a type is tagged
/// applicable. Stricter than the DEI scorer's any-hit tagging; the two
/// rules are intentionally not unified.
const APPLICABILITY_MIN_HITS: usize = 2;

/// Everything the pipeline produced for one document.
#[derive(Debug, Clone, Serialize)]
pub struct IndexedDocument {
    pub id: String,
    pub metadata: BTreeMap<String, String>,
    pub embedding: Option<Vec<f32>>,
    pub embedding_available: bool,
    pub complaint_hits: Vec<String>,
    pub evidence_hits: Vec<String>,
    pub legal_hits: Vec<String>,
    pub binding_hits: Vec<String>,
    pub applicability: Vec<String>,
    pub provisions: Vec<Provision>,
    pub risk: RiskResult,
    /// Combined relevance in [0, 1].
    pub relevance: f64,
    pub indexed_at: DateTime<Utc>,
}

/// Pure reduction over a set of indexed documents.
#[derive(Debug, Clone, Serialize)]
pub struct IndexStatistics {
    pub total_documents: usize,
    pub risk_level_counts: BTreeMap<RiskLevel, usize>,
    pub applicability_counts: BTreeMap<String, usize>,
    pub mean_provisions: f64,
    pub mean_relevance: f64,
}

/// Composes the extractor and risk scorer (plus an optional embedder) into
/// one per-document pipeline.
pub struct HybridDocumentIndexer {
    extractor: PatternExtractor,
    risk: RiskScorer,
    complaint: Vec<String>,
    evidence: Vec<String>,
    legal: Vec<String>,
    binding: Vec<String>,
    /// (type, scope-only complaint keywords) for applicability tagging.
    type_keywords: Vec<(String, Vec<String>)>,
    embedder: Option<Arc<dyn Embedder>>,
    context_chars: usize,
}

impl HybridDocumentIndexer {
    /// Snapshot everything from the registry; the indexer never re-reads it.
    pub fn new(
        registry: &TaxonomyRegistry,
        embedder: Option<Arc<dyn Embedder>>,
    ) -> Result<Self, IndexError> {
        let type_keywords = registry
            .list_types(Some(KeywordCategory::Complaint))
            .into_iter()
            .map(|ty| {
                let kws = registry.type_keywords(KeywordCategory::Complaint, &ty);
                (ty, kws)
            })
            .collect();
        Ok(Self {
            extractor: PatternExtractor::new(registry)?,
            risk: RiskScorer::new(registry),
            complaint: registry.keywords(KeywordCategory::Complaint, None),
            evidence: registry.keywords(KeywordCategory::Evidence, None),
            legal: registry.keywords(KeywordCategory::Legal, None),
            binding: registry.keywords(KeywordCategory::Binding, None),
            type_keywords,
            embedder,
            context_chars: 100,
        })
    }

    /// Run the pipeline for one document.
    ///
    /// The embedding call is the only fallible sub-step; failures are
    /// logged and recorded as `embedding_available = false`, and the
    /// deterministic stages always run.
    pub async fn index_document(
        &self,
        id: &str,
        text: &str,
        metadata: BTreeMap<String, String>,
    ) -> IndexedDocument {
        let embedding = match &self.embedder {
            Some(embedder) => match embedder.embed_text(text).await {
                Ok(vector) => Some(vector),
                Err(e) => {
                    warn!(id, error = %e, "embedding failed, indexing without vector");
                    None
                }
            },
            None => None,
        };
        let embedding_available = embedding.is_some();

        let to_owned = |hits: Vec<&str>| hits.into_iter().map(str::to_string).collect();
        let complaint_hits: Vec<String> = to_owned(matched_keywords(text, &self.complaint));
        let evidence_hits: Vec<String> = to_owned(matched_keywords(text, &self.evidence));
        let legal_hits: Vec<String> = to_owned(matched_keywords(text, &self.legal));
        let binding_hits: Vec<String> = to_owned(matched_keywords(text, &self.binding));

        let applicability = self.tag_applicability(text);
        let scan = self.extractor.extract_provisions(text, self.context_chars, None);
        let risk = self.risk.assess(text, scan.total);

        let relevance = self.relevance(
            complaint_hits.len(),
            legal_hits.len(),
            binding_hits.len(),
            evidence_hits.len(),
            scan.total,
            risk.level,
            applicability.len(),
        );
        debug!(id, relevance, risk = risk.level.as_str(), "indexed document");

        IndexedDocument {
            id: id.to_string(),
            metadata,
            embedding,
            embedding_available,
            complaint_hits,
            evidence_hits,
            legal_hits,
            binding_hits,
            applicability,
            provisions: scan.provisions,
            risk,
            relevance,
            indexed_at: Utc::now(),
        }
    }

    /// Cross-document retrieval is not implemented: relevance scores are
    /// comparable, but answering a query needs a vector-store/query-engine
    /// integration this core does not own.
    pub fn search(&self, _query: &str) -> Result<Vec<IndexedDocument>, IndexError> {
        Err(IndexError::NotSupported(
            "search requires a vector-store/query-engine integration",
        ))
    }

    /// Risk histogram, applicability histogram, and corpus means.
    pub fn statistics(&self, documents: &[IndexedDocument]) -> IndexStatistics {
        let mut risk_level_counts: BTreeMap<RiskLevel, usize> = BTreeMap::new();
        for level in [
            RiskLevel::Minimal,
            RiskLevel::Low,
            RiskLevel::Medium,
            RiskLevel::High,
        ] {
            risk_level_counts.insert(level, 0);
        }
        let mut applicability_counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut provision_sum = 0usize;
        let mut relevance_sum = 0.0f64;

        for doc in documents {
            *risk_level_counts.entry(doc.risk.level).or_default() += 1;
            for tag in &doc.applicability {
                *applicability_counts.entry(tag.clone()).or_default() += 1;
            }
            provision_sum += doc.provisions.len();
            relevance_sum += doc.relevance;
        }

        let denom = documents.len().max(1) as f64;
        IndexStatistics {
            total_documents: documents.len(),
            risk_level_counts,
            applicability_counts,
            mean_provisions: provision_sum as f64 / denom,
            mean_relevance: relevance_sum / denom,
        }
    }

    /// Types whose scope-only keywords hit at least twice, sorted by type.
    fn tag_applicability(&self, text: &str) -> Vec<String> {
        self.type_keywords
            .iter()
            .filter(|(_, kws)| matched_keywords(text, kws).len() >= APPLICABILITY_MIN_HITS)
            .map(|(ty, _)| ty.clone())
            .collect()
    }

    #[allow(clippy::too_many_arguments)]
    fn relevance(
        &self,
        complaint: usize,
        legal: usize,
        binding: usize,
        evidence: usize,
        provisions: usize,
        level: RiskLevel,
        tags: usize,
    ) -> f64 {
        let keyword = clamp01(
            KW_COMPLAINT * complaint as f64
                + KW_LEGAL * legal as f64
                + KW_BINDING * binding as f64
                + KW_EVIDENCE * evidence as f64,
        );
        let provision = clamp01(provisions as f64 / PROVISION_SATURATION);
        let risk = f64::from(level.score()) / 3.0;
        let applicability = clamp01(tags as f64 / APPLICABILITY_SATURATION);

        W_KEYWORD * keyword
            + W_PROVISION * provision
            + W_RISK * risk
            + W_APPLICABILITY * applicability
    }
}

fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimlens_core::bootstrap_registry;

    struct FixedEmbedder;

    #[async_trait::async_trait]
    impl Embedder for FixedEmbedder {
        async fn embed_text(&self, _text: &str) -> anyhow::Result<Vec<f32>> {
            Ok(vec![0.1, 0.2, 0.3])
        }
    }

    struct FailingEmbedder;

    #[async_trait::async_trait]
    impl Embedder for FailingEmbedder {
        async fn embed_text(&self, _text: &str) -> anyhow::Result<Vec<f32>> {
            anyhow::bail!("embedding service unavailable")
        }
    }

    fn indexer(embedder: Option<Arc<dyn Embedder>>) -> HybridDocumentIndexer {
        HybridDocumentIndexer::new(&bootstrap_registry(), embedder).unwrap()
    }

    const HOUSING_TEXT: &str = "Tenant claims housing discrimination based on disability; \
         landlord retaliated by eviction notice, a violation of the Fair Housing Act.";

    #[tokio::test]
    async fn embedding_failure_never_aborts_the_pipeline() {
        let idx = indexer(Some(Arc::new(FailingEmbedder)));
        let doc = idx.index_document("doc-1", HOUSING_TEXT, BTreeMap::new()).await;
        assert!(!doc.embedding_available);
        assert!(doc.embedding.is_none());
        // Deterministic stages still ran.
        assert!(!doc.provisions.is_empty());
        assert!(doc.risk.level >= RiskLevel::Medium);
    }

    #[tokio::test]
    async fn embedding_recorded_when_available() {
        let idx = indexer(Some(Arc::new(FixedEmbedder)));
        let doc = idx.index_document("doc-2", HOUSING_TEXT, BTreeMap::new()).await;
        assert!(doc.embedding_available);
        assert_eq!(doc.embedding.as_deref(), Some(&[0.1, 0.2, 0.3][..]));
    }

    #[tokio::test]
    async fn no_embedder_configured_is_fine() {
        let idx = indexer(None);
        let doc = idx.index_document("doc-3", HOUSING_TEXT, BTreeMap::new()).await;
        assert!(!doc.embedding_available);
    }

    #[tokio::test]
    async fn relevance_always_in_unit_interval() {
        let idx = indexer(None);
        let texts = [
            "",
            "x",
            HOUSING_TEXT,
            // Saturating inputs: many keywords, provisions, and tags.
            "complaint claim grievance allegation dispute breach negligence misconduct \
             injury damages harm wrongful unlawful illegal statute regulation ordinance \
             provision pursuant jurisdiction liability remedy plaintiff defendant counsel \
             tribunal shall must required mandatory prohibited binding enforceable \
             witness testimony exhibit receipt document record tenant landlord lease rent \
             employee employer wages workplace Section 1 Section 2 Section 3 Section 4 \
             Section 5 Section 6 Section 7 Section 8 Section 9 Section 10 Section 11 \
             Fair Housing Act Title VII Clean Air Act",
        ];
        for text in texts {
            let doc = idx.index_document("doc", text, BTreeMap::new()).await;
            assert!(
                (0.0..=1.0).contains(&doc.relevance),
                "relevance {} out of bounds for {:?}",
                doc.relevance,
                &text[..text.len().min(40)]
            );
        }
    }

    #[tokio::test]
    async fn empty_text_scores_zero() {
        let idx = indexer(None);
        let doc = idx.index_document("doc-4", "", BTreeMap::new()).await;
        assert_eq!(doc.risk.level, RiskLevel::Minimal);
        assert!(doc.provisions.is_empty());
        assert!(doc.applicability.is_empty());
        assert_eq!(doc.relevance, 0.0);
    }

    #[tokio::test]
    async fn applicability_requires_two_distinct_hits() {
        let idx = indexer(None);
        // One housing keyword only.
        let one = idx.index_document("a", "the rent is due", BTreeMap::new()).await;
        assert!(!one.applicability.iter().any(|t| t == "housing"));
        // Two distinct housing keywords.
        let two = idx
            .index_document("b", "the landlord collects rent", BTreeMap::new())
            .await;
        assert!(two.applicability.iter().any(|t| t == "housing"));
    }

    #[test]
    fn search_is_not_supported() {
        let idx = indexer(None);
        assert!(matches!(
            idx.search("housing"),
            Err(IndexError::NotSupported(_))
        ));
    }

    #[tokio::test]
    async fn statistics_reduce_histograms_and_means() {
        let idx = indexer(None);
        let docs = vec![
            idx.index_document("a", "", BTreeMap::new()).await,
            idx.index_document("b", HOUSING_TEXT, BTreeMap::new()).await,
        ];
        let stats = idx.statistics(&docs);
        assert_eq!(stats.total_documents, 2);
        assert_eq!(stats.risk_level_counts[&RiskLevel::Minimal], 1);
        assert_eq!(
            stats.risk_level_counts.values().sum::<usize>(),
            2,
            "every document lands in exactly one band"
        );
        assert!(stats.applicability_counts.contains_key("housing"));
        assert!(stats.mean_provisions > 0.0);
        assert!(stats.mean_relevance > 0.0);
    }

    #[tokio::test]
    async fn metadata_is_carried_through() {
        let idx = indexer(None);
        let mut meta = BTreeMap::new();
        meta.insert("source".to_string(), "intake-portal".to_string());
        let doc = idx.index_document("doc-5", HOUSING_TEXT, meta).await;
        assert_eq!(doc.metadata["source"], "intake-portal");
    }
}
