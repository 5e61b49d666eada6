//! Eligibility and fit-scoring engine for matching funding-seeking
//! organizations against funding opportunities.
//!
//! Two questions are answered per (applicant, opportunity) pair: can this
//! applicant even apply (an [`EligibilityVerdict`] with itemized warnings,
//! requirements, and blockers), and how well suited is the opportunity (a
//! clamped 0-100 [`FitScoreResult`] used for ranking). The
//! [`RankingPipeline`] combines both over a batch of opportunities with
//! caller-controlled filtering and stable, reproducible ordering.
//!
//! The engine is computation-only: no I/O, no shared mutable state, no
//! retries. Persistence and transport are the host's concern, represented
//! here by the [`ProfileStore`] and [`OpportunityCatalog`] traits and the
//! [`MatchService`] facade that composes them.

pub mod config;
pub mod matching;
pub mod telemetry;

pub use config::{ConfigError, EngineConfig, TelemetryConfig};
pub use matching::{
    check_eligibility, rank, ApplicantId, ApplicantProfile, Blocker, CertificationSet,
    CheckCategory, CompetitionLevel, DebarmentStatus, EligibilityCheckResult, EligibilityEngine,
    EligibilityVerdict, FitComponent, FitFactorKind, FitScoreResult, FitScorer, FundingProject,
    FundingSource, InvalidInput, Location, MatchService, MatchServiceError, Opportunity,
    OpportunityCatalog, OpportunityFilter, OpportunityId, OrganizationType, ProfileStore,
    RankOptions, RankedResult, RankingPipeline, RegistrationSet, RequiredCertifications,
    SizeMeasure, SizeStandard, SizeStandardTable, StoreError, DEFAULT_STANDARD, NATIONWIDE,
};
