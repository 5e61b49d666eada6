//! Applicant-to-opportunity matching: eligibility rules, fit scoring, and
//! ranking.
//!
//! Every function in this module tree is pure and synchronous; records come
//! in fully populated, verdicts and scores go out fully populated, and no
//! state survives between calls.

pub mod catalog;
pub mod domain;
pub(crate) mod eligibility;
pub(crate) mod fit;
pub(crate) mod intake;
pub mod ranking;
pub mod service;
pub(crate) mod size_standards;

#[cfg(test)]
mod tests;

pub use catalog::{OpportunityCatalog, ProfileStore, StoreError};
pub use domain::{
    ApplicantId, ApplicantProfile, CertificationSet, CompetitionLevel, DebarmentStatus,
    FundingProject, FundingSource, Location, Opportunity, OpportunityId, OrganizationType,
    RegistrationSet, RequiredCertifications, NATIONWIDE,
};
pub use eligibility::{
    Blocker, CheckCategory, EligibilityCheckResult, EligibilityEngine, EligibilityVerdict,
};
pub use fit::{FitComponent, FitFactorKind, FitScoreResult, FitScorer};
pub use intake::InvalidInput;
pub use ranking::{OpportunityFilter, RankOptions, RankedResult, RankingPipeline};
pub use service::{MatchService, MatchServiceError};
pub use size_standards::{SizeMeasure, SizeStandard, SizeStandardTable, DEFAULT_STANDARD};

use crate::config::EngineConfig;

/// Evaluate one applicant/opportunity pair with default thresholds.
pub fn check_eligibility(
    profile: &ApplicantProfile,
    opportunity: &Opportunity,
) -> Result<EligibilityVerdict, InvalidInput> {
    EligibilityEngine::new(EngineConfig::default()).check(profile, opportunity)
}

/// Rank a batch of opportunities with default thresholds.
pub fn rank(
    profile: &ApplicantProfile,
    project: &FundingProject,
    opportunities: Vec<Opportunity>,
    options: &RankOptions,
) -> Result<Vec<RankedResult>, InvalidInput> {
    RankingPipeline::new(EngineConfig::default()).rank(profile, project, opportunities, options)
}
