use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for applicant profiles held by the host's profile store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicantId(pub String);

/// Identifier wrapper for catalog opportunities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpportunityId(pub String);

/// Legal form of the organization seeking funding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationType {
    Nonprofit,
    ForProfit,
    Government,
    Individual,
}

impl OrganizationType {
    pub const fn label(self) -> &'static str {
        match self {
            OrganizationType::Nonprofit => "nonprofit",
            OrganizationType::ForProfit => "for-profit",
            OrganizationType::Government => "government",
            OrganizationType::Individual => "individual",
        }
    }
}

/// Diversity and small-business certifications an applicant may hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationSet {
    pub minority_owned: bool,
    pub woman_owned: bool,
    pub veteran_owned: bool,
    pub hubzone_certified: bool,
    pub small_business_certified: bool,
}

/// Government registration identifiers an applicant may have completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationSet {
    /// Federal award system registration (SAM).
    pub federal_award_system: bool,
    /// Grants portal account (Grants.gov).
    pub grants_portal: bool,
    /// Commercial entity code used by procurement offices (CAGE).
    pub commercial_entity_code: bool,
}

/// Exclusion status against the federal debarment list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebarmentStatus {
    #[default]
    Clear,
    Debarred,
}

/// Where the applicant operates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub state: Option<String>,
    pub city: Option<String>,
}

/// Funding-seeking organization snapshot, immutable for the duration of a match run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub organization_type: OrganizationType,
    pub industry_code: Option<String>,
    pub annual_revenue: Option<u64>,
    pub employee_count: Option<u32>,
    pub has_tax_id: bool,
    pub has_entity_identifier: bool,
    pub tax_exempt: bool,
    pub certifications: CertificationSet,
    pub registrations: RegistrationSet,
    pub debarment: DebarmentStatus,
    pub location: Location,
    pub audit_completed: bool,
}

/// Certifications an opportunity requires of its applicants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredCertifications {
    pub minority_owned: bool,
    pub woman_owned: bool,
    pub veteran_owned: bool,
}

/// Broad origin of the award dollars. Federal sources carry registration duties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundingSource {
    Federal,
    State,
    Foundation,
    Corporate,
    #[default]
    Other,
}

/// Expected applicant pool pressure, populated by an upstream classifier when available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionLevel {
    Low,
    Medium,
    High,
    #[default]
    Unknown,
}

/// Geography sentinel marking an opportunity as open to every state.
pub const NATIONWIDE: &str = "nationwide";

/// Funding opportunity record as provided by the host's catalog or search index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: OpportunityId,
    pub title: String,
    pub description: String,
    /// Allowed organization types; empty means open to all.
    pub organization_types: Vec<OrganizationType>,
    pub small_business_only: bool,
    pub required_certifications: RequiredCertifications,
    pub industry_code: Option<String>,
    /// State codes, city names, region names, or the `nationwide` sentinel.
    pub geography: Vec<String>,
    pub amount_min: Option<u64>,
    pub amount_max: Option<u64>,
    pub deadline: Option<NaiveDate>,
    pub funding_source: FundingSource,
    pub program_code: Option<String>,
    pub competition_level: CompetitionLevel,
    pub program_types: Vec<String>,
    pub industry_focus: Vec<String>,
}

impl Opportunity {
    /// Federal-style awards require registrations and respect the debarment list.
    pub fn is_federal(&self) -> bool {
        matches!(self.funding_source, FundingSource::Federal) || self.program_code.is_some()
    }

    /// Open to every state, either implicitly or via the explicit sentinel.
    pub fn is_nationwide(&self) -> bool {
        self.geography.is_empty()
            || self
                .geography
                .iter()
                .any(|entry| entry.eq_ignore_ascii_case(NATIONWIDE))
    }

    /// Lowercased title and description for program-heuristic substring checks.
    pub(crate) fn heuristic_text(&self) -> String {
        format!("{} {}", self.title, self.description).to_lowercase()
    }
}

/// The applicant's current funding intent, used by the fit scorer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingProject {
    pub program_type: Option<String>,
    pub funding_needed: Option<u64>,
    pub industry: Option<String>,
    pub state: Option<String>,
}
