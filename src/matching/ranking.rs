use std::cmp::Reverse;
use std::fmt;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::debug;

use super::domain::{ApplicantProfile, FundingProject, Opportunity};
use super::eligibility::{EligibilityEngine, EligibilityVerdict};
use super::fit::{FitScoreResult, FitScorer};
use super::intake::{self, InvalidInput};
use crate::config::EngineConfig;

/// Opportunity decorated with its verdict and fit score; the ranking unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    pub opportunity: Opportunity,
    pub verdict: EligibilityVerdict,
    pub fit: FitScoreResult,
}

/// Caller-supplied predicate applied before any rule evaluation.
pub type OpportunityFilter = Box<dyn Fn(&Opportunity) -> bool + Send + Sync>;

/// Options shaping filtering and pagination of ranked results.
#[derive(Default)]
pub struct RankOptions {
    pub only_eligible: bool,
    pub exclude_warnings: bool,
    /// Applied only when `only_eligible` is set; ineligible-but-informative
    /// results are never dropped by a confidence threshold alone.
    pub min_confidence: Option<u8>,
    pub limit: Option<usize>,
    /// Evaluation date for deadline urgency; defaults to today.
    pub as_of: Option<NaiveDate>,
    pub filters: Vec<OpportunityFilter>,
}

impl fmt::Debug for RankOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RankOptions")
            .field("only_eligible", &self.only_eligible)
            .field("exclude_warnings", &self.exclude_warnings)
            .field("min_confidence", &self.min_confidence)
            .field("limit", &self.limit)
            .field("as_of", &self.as_of)
            .field("filters", &self.filters.len())
            .finish()
    }
}

/// Single-pass pipeline: filter, evaluate, score, and order opportunities.
///
/// Holds no state between calls; each invocation operates on its own input
/// batch and allocates its own result list.
pub struct RankingPipeline {
    engine: EligibilityEngine,
    scorer: FitScorer,
}

impl RankingPipeline {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            engine: EligibilityEngine::new(config),
            scorer: FitScorer::new(),
        }
    }

    /// Evaluate one applicant/opportunity pair.
    pub fn check(
        &self,
        profile: &ApplicantProfile,
        opportunity: &Opportunity,
    ) -> Result<EligibilityVerdict, InvalidInput> {
        self.engine.check(profile, opportunity)
    }

    /// Rank a batch of opportunities for an applicant's funding intent.
    ///
    /// A malformed profile or opportunity rejects the whole call before any
    /// evaluator runs; no partial result set is produced.
    pub fn rank(
        &self,
        profile: &ApplicantProfile,
        project: &FundingProject,
        opportunities: Vec<Opportunity>,
        options: &RankOptions,
    ) -> Result<Vec<RankedResult>, InvalidInput> {
        intake::validate_profile(profile)?;
        for opportunity in &opportunities {
            intake::validate_opportunity(opportunity)?;
        }

        let as_of = options.as_of.unwrap_or_else(|| Utc::now().date_naive());
        let considered = opportunities.len();

        let mut results = Vec::new();
        for opportunity in opportunities {
            if options.filters.iter().any(|filter| !filter(&opportunity)) {
                continue;
            }

            let verdict = self.engine.check(profile, &opportunity)?;

            if options.only_eligible {
                if !verdict.eligible {
                    continue;
                }
                if let Some(min) = options.min_confidence {
                    if verdict.confidence < min {
                        continue;
                    }
                }
            }
            if options.exclude_warnings && !verdict.warnings.is_empty() {
                continue;
            }

            let fit = self.scorer.score(profile, project, &opportunity, as_of);
            results.push(RankedResult {
                opportunity,
                verdict,
                fit,
            });
        }

        // Stable sort: eligible first, then descending fit score; equal keys
        // keep their input order.
        results.sort_by_key(|result| (!result.verdict.eligible, Reverse(result.fit.score)));

        if let Some(limit) = options.limit {
            results.truncate(limit);
        }

        debug!(
            considered,
            returned = results.len(),
            "ranking pipeline complete"
        );
        Ok(results)
    }
}
