//! Hand-authored interview templates, one per specialized complaint type.
//!
//! Topology lives entirely in these static tables. The registry contributes
//! display hints only; changing registered keywords never reshapes a tree.

pub(crate) struct NodeSpec {
    pub id: &'static str,
    pub question: &'static str,
    pub field: &'static str,
    pub required: bool,
    /// Field names answered before this question is asked.
    pub depends_on: &'static [&'static str],
    /// Suggested follow-up question ids.
    pub follow_ups: &'static [&'static str],
}

pub(crate) struct TreeSpec {
    pub complaint_type: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub roots: &'static [&'static str],
    pub nodes: &'static [NodeSpec],
}

const fn node(
    id: &'static str,
    question: &'static str,
    field: &'static str,
    required: bool,
    depends_on: &'static [&'static str],
    follow_ups: &'static [&'static str],
) -> NodeSpec {
    NodeSpec {
        id,
        question,
        field,
        required,
        depends_on,
        follow_ups,
    }
}

pub(crate) const TEMPLATES: &[TreeSpec] = &[
    TreeSpec {
        complaint_type: "housing",
        category: "property",
        description: "Tenancy, habitability, and fair-housing complaints",
        roots: &["h1", "h2"],
        nodes: &[
            node(
                "h1",
                "Describe the housing issue you are experiencing.",
                "incident_description",
                true,
                &[],
                &["h3"],
            ),
            node(
                "h2",
                "Are you a tenant, applicant, or homeowner?",
                "tenancy_status",
                true,
                &[],
                &["h4"],
            ),
            node(
                "h3",
                "Who is the landlord or property manager?",
                "landlord_name",
                true,
                &["incident_description"],
                &[],
            ),
            node(
                "h4",
                "What do the relevant lease terms say?",
                "lease_terms",
                false,
                &["tenancy_status"],
                &[],
            ),
            node(
                "h5",
                "Have you received any notices, such as eviction or rent increase?",
                "notices_received",
                false,
                &["landlord_name"],
                &[],
            ),
            node(
                "h6",
                "What repairs or accommodations have you requested?",
                "requests_made",
                false,
                &["incident_description"],
                &[],
            ),
        ],
    },
    TreeSpec {
        complaint_type: "employment",
        category: "labor",
        description: "Workplace treatment, wages, and termination complaints",
        roots: &["e1", "e2"],
        nodes: &[
            node(
                "e1",
                "Describe what happened at work.",
                "incident_description",
                true,
                &[],
                &["e4"],
            ),
            node(
                "e2",
                "What is your employment status (current, terminated, applicant)?",
                "employment_status",
                true,
                &[],
                &[],
            ),
            node(
                "e3",
                "Who is the employer?",
                "employer_name",
                true,
                &["incident_description"],
                &[],
            ),
            node(
                "e4",
                "What adverse action was taken (termination, demotion, pay cut)?",
                "adverse_action",
                true,
                &["incident_description"],
                &["e5"],
            ),
            node(
                "e5",
                "Did you report the issue to HR or a supervisor?",
                "internal_report",
                false,
                &["adverse_action"],
                &[],
            ),
            node(
                "e6",
                "Were there witnesses to the incidents?",
                "witnesses",
                false,
                &["incident_description"],
                &[],
            ),
        ],
    },
    TreeSpec {
        complaint_type: "civil_rights",
        category: "civil",
        description: "Government conduct and equal-protection complaints",
        roots: &["c1", "c2"],
        nodes: &[
            node(
                "c1",
                "Describe the incident and how your rights were affected.",
                "incident_description",
                true,
                &[],
                &["c3"],
            ),
            node(
                "c2",
                "When did the incident occur?",
                "incident_date",
                true,
                &[],
                &[],
            ),
            node(
                "c3",
                "Which agency, department, or official was involved?",
                "involved_actor",
                true,
                &["incident_description"],
                &[],
            ),
            node(
                "c4",
                "Were you engaged in a protected activity (voting, protest, speech)?",
                "protected_activity",
                false,
                &["incident_description"],
                &[],
            ),
            node(
                "c5",
                "What injuries or losses resulted?",
                "injuries",
                false,
                &["incident_description"],
                &[],
            ),
        ],
    },
    TreeSpec {
        complaint_type: "consumer",
        category: "consumer",
        description: "Defective goods, billing, and debt-collection complaints",
        roots: &["n1", "n2"],
        nodes: &[
            node(
                "n1",
                "What product or service is the complaint about?",
                "product_or_service",
                true,
                &[],
                &["n3"],
            ),
            node(
                "n2",
                "When was the purchase or agreement made?",
                "purchase_date",
                true,
                &[],
                &[],
            ),
            node(
                "n3",
                "Describe the problem with the product or service.",
                "problem_description",
                true,
                &["product_or_service"],
                &["n4"],
            ),
            node(
                "n4",
                "Have you contacted the seller or provider about it?",
                "seller_contacted",
                false,
                &["problem_description"],
                &[],
            ),
            node(
                "n5",
                "What amount is in dispute?",
                "amount_in_dispute",
                false,
                &["problem_description"],
                &[],
            ),
        ],
    },
    TreeSpec {
        complaint_type: "healthcare",
        category: "health",
        description: "Care quality, consent, and coverage complaints",
        roots: &["m1", "m2"],
        nodes: &[
            node(
                "m1",
                "Describe the care or treatment at issue.",
                "care_description",
                true,
                &[],
                &["m3"],
            ),
            node(
                "m2",
                "Which provider or facility was involved?",
                "provider_name",
                true,
                &[],
                &[],
            ),
            node(
                "m3",
                "What harm did you suffer?",
                "harm_suffered",
                true,
                &["care_description"],
                &[],
            ),
            node(
                "m4",
                "Over what dates did the treatment occur?",
                "treatment_dates",
                false,
                &["care_description"],
                &[],
            ),
            node(
                "m5",
                "Have you requested your medical records?",
                "records_requested",
                false,
                &["provider_name"],
                &[],
            ),
        ],
    },
    TreeSpec {
        complaint_type: "free_speech",
        category: "speech",
        description: "Expression, censorship, and assembly complaints",
        roots: &["f1"],
        nodes: &[
            node(
                "f1",
                "Describe the expression that was restricted.",
                "expression_description",
                true,
                &[],
                &["f2"],
            ),
            node(
                "f2",
                "Who restricted or punished the expression?",
                "restricting_party",
                true,
                &["expression_description"],
                &["f4"],
            ),
            node(
                "f3",
                "Where did the expression occur (public forum, workplace, online)?",
                "forum",
                false,
                &["expression_description"],
                &[],
            ),
            node(
                "f4",
                "What consequence followed (removal, discipline, arrest)?",
                "consequence",
                false,
                &["restricting_party"],
                &[],
            ),
        ],
    },
    TreeSpec {
        complaint_type: "immigration",
        category: "immigration",
        description: "Status, proceedings, and benefits complaints",
        roots: &["i1", "i2"],
        nodes: &[
            node(
                "i1",
                "What is your current immigration status?",
                "current_status",
                true,
                &[],
                &[],
            ),
            node(
                "i2",
                "What kind of proceeding or application is involved?",
                "proceeding_type",
                true,
                &[],
                &["i3"],
            ),
            node(
                "i3",
                "What is the next deadline or hearing date?",
                "deadline",
                true,
                &["proceeding_type"],
                &[],
            ),
            node(
                "i4",
                "Have you filed prior applications or appeals?",
                "prior_applications",
                false,
                &["current_status"],
                &[],
            ),
            node(
                "i5",
                "Do you have qualifying family ties in the country?",
                "family_ties",
                false,
                &["current_status"],
                &[],
            ),
        ],
    },
    TreeSpec {
        complaint_type: "family_law",
        category: "family",
        description: "Custody, support, and dissolution matters",
        roots: &["fl1", "fl5"],
        nodes: &[
            node(
                "fl1",
                "Is this about custody, support, divorce, or guardianship?",
                "matter_type",
                true,
                &[],
                &["fl2"],
            ),
            node(
                "fl2",
                "Are children involved, and what are their ages?",
                "children_involved",
                true,
                &["matter_type"],
                &[],
            ),
            node(
                "fl3",
                "Are there existing court orders in this matter?",
                "existing_orders",
                true,
                &["matter_type"],
                &[],
            ),
            node(
                "fl4",
                "Describe both parties' income and support arrangements.",
                "income_details",
                false,
                &["matter_type"],
                &[],
            ),
            node(
                "fl5",
                "Are there any immediate safety concerns?",
                "safety_concerns",
                false,
                &[],
                &[],
            ),
        ],
    },
    TreeSpec {
        complaint_type: "criminal_defense",
        category: "criminal",
        description: "Charges, custody, and defense posture",
        roots: &["cd1", "cd2"],
        nodes: &[
            node(
                "cd1",
                "What charges have been filed?",
                "charges",
                true,
                &[],
                &["cd4"],
            ),
            node(
                "cd2",
                "When did the arrest occur?",
                "arrest_date",
                true,
                &[],
                &["cd3"],
            ),
            node(
                "cd3",
                "What is the current custody status (released, bail, detained)?",
                "custody_status",
                true,
                &["arrest_date"],
                &[],
            ),
            node(
                "cd4",
                "Have you retained counsel or been appointed a defender?",
                "counsel_retained",
                false,
                &["charges"],
                &[],
            ),
            node(
                "cd5",
                "Do you have prior convictions?",
                "prior_record",
                false,
                &["charges"],
                &[],
            ),
        ],
    },
    TreeSpec {
        complaint_type: "tax_law",
        category: "tax",
        description: "Assessments, audits, and collection disputes",
        roots: &["t1", "t4"],
        nodes: &[
            node(
                "t1",
                "What notice did you receive from the tax authority?",
                "notice_type",
                true,
                &[],
                &["t2"],
            ),
            node(
                "t2",
                "Which tax years are at issue?",
                "tax_years",
                true,
                &["notice_type"],
                &[],
            ),
            node(
                "t3",
                "What amount has been assessed or demanded?",
                "amount_assessed",
                true,
                &["notice_type"],
                &["t5"],
            ),
            node(
                "t4",
                "Are all your required filings current?",
                "filings_current",
                false,
                &[],
                &[],
            ),
            node(
                "t5",
                "Can you pay the assessed amount in full?",
                "payment_ability",
                false,
                &["amount_assessed"],
                &[],
            ),
        ],
    },
    TreeSpec {
        complaint_type: "intellectual_property",
        category: "ip",
        description: "Ownership and infringement disputes",
        roots: &["ip1"],
        nodes: &[
            node(
                "ip1",
                "What kind of asset is involved (patent, trademark, copyright, trade secret)?",
                "asset_type",
                true,
                &[],
                &["ip2", "ip3"],
            ),
            node(
                "ip2",
                "On what basis do you own or license the asset?",
                "ownership_basis",
                true,
                &["asset_type"],
                &[],
            ),
            node(
                "ip3",
                "Describe the suspected infringement.",
                "infringement_description",
                true,
                &["asset_type"],
                &[],
            ),
            node(
                "ip4",
                "What registration or application numbers apply?",
                "registration_numbers",
                false,
                &["ownership_basis"],
                &[],
            ),
            node(
                "ip5",
                "Estimate the commercial harm to date.",
                "damages_estimate",
                false,
                &["infringement_description"],
                &[],
            ),
        ],
    },
    TreeSpec {
        complaint_type: "environmental_law",
        category: "environmental",
        description: "Contamination, permits, and enforcement matters",
        roots: &["ev1", "ev2"],
        nodes: &[
            node(
                "ev1",
                "Describe the environmental condition or violation.",
                "condition_description",
                true,
                &[],
                &["ev3"],
            ),
            node(
                "ev2",
                "Where is the affected site located?",
                "location",
                true,
                &[],
                &[],
            ),
            node(
                "ev3",
                "Who is the suspected responsible party?",
                "responsible_party",
                true,
                &["condition_description"],
                &[],
            ),
            node(
                "ev4",
                "Have any agencies been notified or issued reports?",
                "agency_reports",
                false,
                &["condition_description"],
                &[],
            ),
            node(
                "ev5",
                "Have there been health impacts on people nearby?",
                "health_impacts",
                false,
                &["condition_description"],
                &[],
            ),
        ],
    },
];

/// Fallback for types without a specialized template.
pub(crate) const GENERIC: TreeSpec = TreeSpec {
    complaint_type: "general",
    category: "general",
    description: "General intake for unspecialized complaint types",
    roots: &["g1"],
    nodes: &[
        node(
            "g1",
            "Summarize your complaint.",
            "complaint_summary",
            true,
            &[],
            &["g2"],
        ),
        node(
            "g2",
            "Who are the parties involved?",
            "parties_involved",
            true,
            &["complaint_summary"],
            &[],
        ),
        node(
            "g3",
            "What is the timeline of events?",
            "timeline",
            false,
            &["complaint_summary"],
            &[],
        ),
        node(
            "g4",
            "What outcome are you seeking?",
            "desired_outcome",
            false,
            &["complaint_summary"],
            &[],
        ),
    ],
};

pub(crate) fn find(complaint_type: &str) -> Option<&'static TreeSpec> {
    TEMPLATES.iter().find(|t| t.complaint_type == complaint_type)
}
