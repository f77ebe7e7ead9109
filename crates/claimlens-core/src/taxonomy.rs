//! Built-in complaint-type taxonomy: the one-time bootstrap registration.
//!
//! Adding a complaint type means adding a row here — the algorithms that
//! read the registry never change. Callers that need a custom taxonomy can
//! skip the bootstrap and register their own entries.

use crate::registry::{KeywordCategory, TaxonomyRegistry};

// ── Global (scope-less) signal vocabularies ──

const COMPLAINT: &[&str] = &[
    "complaint",
    "claim",
    "grievance",
    "allegation",
    "dispute",
    "wrongful",
    "unlawful",
    "illegal",
    "breach",
    "negligence",
    "misconduct",
    "injury",
    "damages",
    "harm",
];

const EVIDENCE: &[&str] = &[
    "document",
    "record",
    "email",
    "correspondence",
    "witness",
    "testimony",
    "exhibit",
    "receipt",
    "invoice",
    "photograph",
    "statement",
    "timeline",
];

const LEGAL: &[&str] = &[
    "statute",
    "regulation",
    "ordinance",
    "provision",
    "pursuant",
    "jurisdiction",
    "liability",
    "remedy",
    "plaintiff",
    "defendant",
    "counsel",
    "tribunal",
];

const BINDING: &[&str] = &[
    "shall",
    "must",
    "required",
    "requirement",
    "obligated",
    "obligation",
    "mandatory",
    "mandated",
    "prohibited",
    "enforceable",
    "binding",
    "compelled",
    "violation",
];

const HIGH_SEVERITY: &[&str] = &[
    "termination",
    "eviction",
    "deportation",
    "assault",
    "fraud",
    "retaliation",
    "discrimination",
    "harassment",
    "foreclosure",
    "imprisonment",
    "revocation",
];

const MEDIUM_SEVERITY: &[&str] = &[
    "denial",
    "delay",
    "suspension",
    "warning",
    "demotion",
    "penalty",
    "overcharge",
    "refusal",
    "reduction",
];

/// Euphemism vocabulary read by the DEI scorer as "proxy" signals.
const PROXY: &[&str] = &[
    "cultural competence",
    "sense of belonging",
    "inclusive excellence",
    "underrepresented",
    "lived experience",
    "culturally responsive",
    "representation goals",
    "diverse perspectives",
    "equity-minded",
    "inclusive culture",
    "historically marginalized",
];

// ── Per-type rows: (type, scoped complaint keywords, scoped legal-term patterns) ──

type TypeRow = (&'static str, &'static [&'static str], &'static [&'static str]);

const TYPES: &[TypeRow] = &[
    (
        "housing",
        &[
            "tenant",
            "landlord",
            "lease",
            "rent",
            "eviction",
            "sublet",
            "habitability",
            "security deposit",
            "fair housing",
            "zoning",
            "mortgage",
            "rental",
        ],
        &[
            r"(?i)fair housing act",
            r"(?i)\bsection 8\b",
            r"(?i)quiet enjoyment",
            r"(?i)implied warranty of habitability",
            r"42 U\.S\.C\.\s*§+\s*3604",
        ],
    ),
    (
        "employment",
        &[
            "employee",
            "employer",
            "wrongful termination",
            "wages",
            "overtime",
            "workplace",
            "hostile work environment",
            "promotion",
            "demotion",
            "severance",
            "paycheck",
            "human resources",
        ],
        &[
            r"(?i)title vii",
            r"(?i)fair labor standards act",
            r"(?i)americans with disabilities act",
            r"(?i)family and medical leave act",
            r"29 U\.S\.C\.\s*§+\s*\d+",
        ],
    ),
    (
        "civil_rights",
        &[
            "voting",
            "protest",
            "police",
            "due process",
            "equal protection",
            "civil rights",
            "profiling",
            "search and seizure",
        ],
        &[
            r"(?i)equal protection clause",
            r"(?i)due process clause",
            r"42 U\.S\.C\.\s*§+\s*1983",
            r"(?i)fourteenth amendment",
        ],
    ),
    (
        "consumer",
        &[
            "refund",
            "warranty",
            "defective",
            "scam",
            "billing",
            "debt collector",
            "credit report",
            "predatory",
        ],
        &[
            r"(?i)fair credit reporting act",
            r"(?i)truth in lending act",
            r"(?i)fair debt collection practices act",
            r"(?i)magnuson-moss",
        ],
    ),
    (
        "healthcare",
        &[
            "patient",
            "diagnosis",
            "malpractice",
            "hipaa",
            "insurance claim",
            "hospital",
            "prescription",
            "informed consent",
        ],
        &[
            r"(?i)health insurance portability",
            r"(?i)affordable care act",
            r"(?i)emergency medical treatment",
            r"(?i)standard of care",
        ],
    ),
    (
        "free_speech",
        &[
            "censorship",
            "first amendment",
            "expression",
            "press",
            "assembly",
            "prior restraint",
            "viewpoint",
        ],
        &[
            r"(?i)first amendment",
            r"(?i)prior restraint",
            r"(?i)time, place, and manner",
        ],
    ),
    (
        "immigration",
        &[
            "visa",
            "asylum",
            "deportation",
            "green card",
            "naturalization",
            "detention",
            "uscis",
            "removal proceedings",
        ],
        &[
            r"(?i)immigration and nationality act",
            r"8 U\.S\.C\.\s*§+\s*\d+",
            r"(?i)notice to appear",
        ],
    ),
    (
        "family_law",
        &[
            "custody",
            "divorce",
            "child support",
            "alimony",
            "visitation",
            "guardianship",
            "adoption",
            "domestic",
        ],
        &[
            r"(?i)uniform child custody",
            r"(?i)best interests? of the child",
        ],
    ),
    (
        "criminal_defense",
        &[
            "arrest",
            "bail",
            "indictment",
            "plea",
            "sentencing",
            "probation",
            "parole",
            "miranda",
        ],
        &[
            r"(?i)miranda v\.?\s*arizona",
            r"(?i)fourth amendment",
            r"(?i)speedy trial act",
        ],
    ),
    (
        "tax_law",
        &[
            "audit",
            "deduction",
            "irs",
            "levy",
            "lien",
            "tax return",
            "withholding",
            "penalty abatement",
        ],
        &[
            r"26 U\.S\.C\.\s*§+\s*\d+",
            r"(?i)internal revenue code",
            r"(?i)offer in compromise",
        ],
    ),
    (
        "intellectual_property",
        &[
            "patent",
            "trademark",
            "copyright",
            "infringement",
            "trade secret",
            "licensing",
            "royalty",
            "counterfeit",
        ],
        &[
            r"(?i)lanham act",
            r"(?i)digital millennium copyright act",
            r"35 U\.S\.C\.\s*§+\s*\d+",
            r"(?i)fair use",
        ],
    ),
    (
        "environmental_law",
        &[
            "pollution",
            "emissions",
            "contamination",
            "epa",
            "hazardous waste",
            "cleanup",
            "permit violation",
            "spill",
        ],
        &[
            r"(?i)clean air act",
            r"(?i)clean water act",
            r"(?i)\b(?:superfund|cercla)\b",
            r"(?i)national environmental policy act",
        ],
    ),
    (
        "probate",
        &[
            "estate",
            "will contest",
            "executor",
            "inheritance",
            "intestate",
            "beneficiary",
            "trust administration",
            "probate court",
        ],
        &[
            r"(?i)last will and testament",
            r"(?i)letters testamentary",
            r"(?i)intestate succession",
        ],
    ),
    (
        "dei",
        &[
            "diversity",
            "equity",
            "inclusion",
            "dei",
            "affirmative action",
            "equal opportunity",
            "bias training",
            "underrepresentation",
        ],
        &[
            r"(?i)diversity,?\s+equity,?\s+and inclusion",
            r"(?i)affirmative action",
            r"(?i)disparate impact",
            r"(?i)executive order 11246",
        ],
    ),
];

/// Global legal-term patterns visible to every scope.
const GLOBAL_LEGAL_TERMS: &[&str] = &[
    r"(?i)\bsection\s+\d+[a-z]?\b",
    r"(?i)\barticle\s+(?:[ivxlc]+|\d+)\b",
    r"[A-Z][A-Za-z]+(?:\s+(?:of|and|[A-Z][A-Za-z]+))*\s+Act\b",
];

/// Build the registry for the 14 built-in complaint types.
///
/// Runs once at startup; the result is read-only afterwards and is passed
/// into every component by reference.
pub fn bootstrap_registry() -> TaxonomyRegistry {
    let mut reg = TaxonomyRegistry::new();

    reg.register_keywords(KeywordCategory::Complaint, COMPLAINT, None);
    reg.register_keywords(KeywordCategory::Evidence, EVIDENCE, None);
    reg.register_keywords(KeywordCategory::Legal, LEGAL, None);
    reg.register_keywords(KeywordCategory::Binding, BINDING, None);
    reg.register_keywords(KeywordCategory::HighSeverity, HIGH_SEVERITY, None);
    reg.register_keywords(KeywordCategory::MediumSeverity, MEDIUM_SEVERITY, None);
    reg.register_keywords(KeywordCategory::Proxy, PROXY, None);

    reg.register_legal_terms(None, GLOBAL_LEGAL_TERMS);

    for &(name, keywords, patterns) in TYPES {
        reg.register_keywords(KeywordCategory::Complaint, keywords, Some(name));
        reg.register_legal_terms(Some(name), patterns);
    }

    tracing::info!(types = TYPES.len(), "taxonomy registry bootstrapped");
    reg
}
