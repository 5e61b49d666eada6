use std::sync::Arc;

use tracing::info;

use super::catalog::{OpportunityCatalog, ProfileStore, StoreError};
use super::domain::{ApplicantId, FundingProject, OpportunityId};
use super::eligibility::EligibilityVerdict;
use super::intake::InvalidInput;
use super::ranking::{RankOptions, RankedResult, RankingPipeline};
use crate::config::EngineConfig;

/// Service composing the collaborator stores with the rule engine and scorer.
pub struct MatchService<P, C> {
    profiles: Arc<P>,
    catalog: Arc<C>,
    pipeline: RankingPipeline,
}

impl<P, C> MatchService<P, C>
where
    P: ProfileStore + 'static,
    C: OpportunityCatalog + 'static,
{
    pub fn new(profiles: Arc<P>, catalog: Arc<C>, config: EngineConfig) -> Self {
        Self {
            profiles,
            catalog,
            pipeline: RankingPipeline::new(config),
        }
    }

    /// Evaluate a stored applicant against a single catalog opportunity.
    pub fn check_eligibility(
        &self,
        applicant_id: &ApplicantId,
        opportunity_id: &OpportunityId,
    ) -> Result<EligibilityVerdict, MatchServiceError> {
        let profile = self
            .profiles
            .fetch(applicant_id)?
            .ok_or(StoreError::NotFound)?;
        let opportunity = self
            .catalog
            .fetch(opportunity_id)?
            .ok_or(StoreError::NotFound)?;

        let verdict = self.pipeline.check(&profile, &opportunity)?;
        info!(
            applicant = %applicant_id.0,
            opportunity = %opportunity_id.0,
            eligible = verdict.eligible,
            confidence = verdict.confidence,
            "eligibility check complete"
        );
        Ok(verdict)
    }

    /// Rank every open catalog opportunity for an applicant's funding intent.
    pub fn match_opportunities(
        &self,
        applicant_id: &ApplicantId,
        project: &FundingProject,
        options: &RankOptions,
    ) -> Result<Vec<RankedResult>, MatchServiceError> {
        let profile = self
            .profiles
            .fetch(applicant_id)?
            .ok_or(StoreError::NotFound)?;
        let opportunities = self.catalog.open_opportunities()?;

        let ranked = self
            .pipeline
            .rank(&profile, project, opportunities, options)?;
        info!(
            applicant = %applicant_id.0,
            matches = ranked.len(),
            "opportunity matching complete"
        );
        Ok(ranked)
    }
}

/// Error raised by the matching service.
#[derive(Debug, thiserror::Error)]
pub enum MatchServiceError {
    #[error(transparent)]
    Input(#[from] InvalidInput),
    #[error(transparent)]
    Store(#[from] StoreError),
}
