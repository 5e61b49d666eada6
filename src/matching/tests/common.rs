use chrono::NaiveDate;

use crate::config::EngineConfig;
use crate::matching::domain::{
    ApplicantProfile, CertificationSet, CompetitionLevel, DebarmentStatus, FundingProject,
    FundingSource, Location, Opportunity, OpportunityId, OrganizationType, RegistrationSet,
    RequiredCertifications,
};
use crate::matching::eligibility::EligibilityEngine;
use crate::matching::fit::FitScorer;
use crate::matching::ranking::RankingPipeline;

pub(super) fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date")
}

/// A for-profit software company in Iowa with a woman-owned certification.
pub(super) fn profile() -> ApplicantProfile {
    ApplicantProfile {
        organization_type: OrganizationType::ForProfit,
        industry_code: Some("541511".to_string()),
        annual_revenue: Some(2_000_000),
        employee_count: Some(40),
        has_tax_id: true,
        has_entity_identifier: true,
        tax_exempt: false,
        certifications: CertificationSet {
            woman_owned: true,
            small_business_certified: true,
            ..CertificationSet::default()
        },
        registrations: RegistrationSet {
            federal_award_system: true,
            grants_portal: true,
            commercial_entity_code: true,
        },
        debarment: DebarmentStatus::Clear,
        location: Location {
            state: Some("IA".to_string()),
            city: Some("Des Moines".to_string()),
        },
        audit_completed: false,
    }
}

/// Open baseline opportunity with no restrictions.
pub(super) fn opportunity(id: &str) -> Opportunity {
    Opportunity {
        id: OpportunityId(id.to_string()),
        title: "Community Innovation Grant".to_string(),
        description: "General operating support for growing organizations.".to_string(),
        organization_types: Vec::new(),
        small_business_only: false,
        required_certifications: RequiredCertifications::default(),
        industry_code: None,
        geography: Vec::new(),
        amount_min: None,
        amount_max: None,
        deadline: None,
        funding_source: FundingSource::Foundation,
        program_code: None,
        competition_level: CompetitionLevel::Unknown,
        program_types: Vec::new(),
        industry_focus: Vec::new(),
    }
}

/// Small-business set-aside requiring woman-owned certification.
pub(super) fn small_business_opportunity(id: &str) -> Opportunity {
    Opportunity {
        title: "Women-Owned Small Business Growth Grant".to_string(),
        description: "Growth capital for certified women-owned small businesses.".to_string(),
        small_business_only: true,
        required_certifications: RequiredCertifications {
            woman_owned: true,
            ..RequiredCertifications::default()
        },
        industry_code: Some("541511".to_string()),
        ..opportunity(id)
    }
}

pub(super) fn federal_opportunity(id: &str) -> Opportunity {
    Opportunity {
        title: "Federal Research Grant".to_string(),
        description: "Applied research awards for eligible organizations.".to_string(),
        funding_source: FundingSource::Federal,
        ..opportunity(id)
    }
}

pub(super) fn project() -> FundingProject {
    FundingProject {
        program_type: Some("research".to_string()),
        funding_needed: Some(100_000),
        industry: Some("software".to_string()),
        state: Some("IA".to_string()),
    }
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::new(EngineConfig::default())
}

pub(super) fn pipeline() -> RankingPipeline {
    RankingPipeline::new(EngineConfig::default())
}

pub(super) fn scorer() -> FitScorer {
    FitScorer::new()
}
