use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use claimlens_core::bootstrap_registry;
use claimlens_extract::PatternExtractor;
use claimlens_index::{HttpEmbedder, HybridDocumentIndexer};
use claimlens_interview::{DecisionTreeGenerator, TreeStore};
use claimlens_risk::{DeiRiskScorer, DocumentRiskRecord, RiskReport, RiskScorer, write_csv};

#[derive(Parser)]
#[command(name = "claimlens", version, about = "Deterministic legal document analysis")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a single document: categorization, provisions, risk.
    Analyze {
        file: PathBuf,
        /// Context window width around provision matches, in characters.
        #[arg(long, default_value_t = 100)]
        context: usize,
    },
    /// Index documents and print corpus statistics.
    Index {
        files: Vec<PathBuf>,
        /// Base URL of an embedding service, e.g. http://localhost:8600.
        #[arg(long, env = "CLAIMLENS_EMBED_URL")]
        embed_url: Option<String>,
    },
    /// Generate interview trees for every registered type.
    Trees {
        /// Output directory for {type}_tree.json files.
        #[arg(long, default_value = "trees")]
        out: PathBuf,
    },
    /// Score documents and write the risk report CSV.
    Report {
        files: Vec<PathBuf>,
        #[arg(long, default_value = "risk_report.csv")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("claimlens v{}", env!("CARGO_PKG_VERSION"));

    let registry = bootstrap_registry();
    match Cli::parse().command {
        Command::Analyze { file, context } => {
            let text = fs::read_to_string(&file)?;
            let extractor = PatternExtractor::new(&registry)?;
            let scan = extractor.extract_provisions(&text, context, None);
            let risk = RiskScorer::new(&registry).assess(&text, scan.total);

            println!("types:      {}", extractor.categorize_complaint_type(&text).join(", "));
            let classes = extractor.find_protected_classes(&text);
            if !classes.is_empty() {
                println!("classes:    {}", classes.join(", "));
            }
            println!("provisions: {}", scan.total);
            for p in &scan.provisions {
                println!("  [{}] {} — {}", p.position, p.term, p.context);
            }
            let citations = extractor.extract_citations(&text);
            if !citations.is_empty() {
                println!("citations:  {}", citations.len());
                for c in &citations {
                    println!("  [{}] {} ({})", c.position, c.text, c.kind.as_str());
                }
            }
            println!("risk:       {} ({})", risk.level.as_str(), risk.level.score());
            for factor in &risk.factors {
                println!("  - {factor}");
            }
            for rec in &risk.recommendations {
                println!("  > {rec}");
            }
        }
        Command::Index { files, embed_url } => {
            let embedder = embed_url
                .map(|url| Arc::new(HttpEmbedder::new(url)) as Arc<dyn claimlens_index::Embedder>);
            let indexer = HybridDocumentIndexer::new(&registry, embedder)?;

            let mut docs = Vec::with_capacity(files.len());
            for file in &files {
                let text = fs::read_to_string(file)?;
                let id = file.display().to_string();
                docs.push(indexer.index_document(&id, &text, BTreeMap::new()).await);
            }
            for doc in &docs {
                println!(
                    "{}  relevance={:.3}  risk={}  tags=[{}]",
                    doc.id,
                    doc.relevance,
                    doc.risk.level.as_str(),
                    doc.applicability.join(", ")
                );
            }
            let stats = indexer.statistics(&docs);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        Command::Trees { out } => {
            let store = TreeStore::new(&out);
            let generator = DecisionTreeGenerator::new(&registry);
            for tree in generator.generate_all()? {
                let path = store.save(&tree)?;
                println!("wrote {}", path.display());
            }
        }
        Command::Report { files, out } => {
            let extractor = PatternExtractor::new(&registry)?;
            let risk_scorer = RiskScorer::new(&registry);
            let dei_scorer = DeiRiskScorer::new(&registry);

            let mut records = Vec::with_capacity(files.len());
            for file in &files {
                let text = fs::read_to_string(file)?;
                let scan = extractor.extract_provisions(&text, 100, None);
                records.push(DocumentRiskRecord {
                    document_id: file.display().to_string(),
                    risk: risk_scorer.assess(&text, scan.total),
                    dei: dei_scorer.assess(&text),
                    provisions: scan.provisions,
                });
            }

            let report = RiskReport::from_records(&records);
            println!("{}", serde_json::to_string_pretty(&report)?);
            let writer = fs::File::create(&out)?;
            write_csv(&registry, &records, writer)?;
            println!("wrote {}", out.display());
        }
    }
    Ok(())
}
