mod aggregate;
mod evaluators;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{ApplicantProfile, Opportunity};
use super::intake::{self, InvalidInput};
use crate::config::EngineConfig;

/// Rule categories in their fixed evaluation order.
///
/// The derived ordering matches declaration order, which is also the order
/// evaluators run in; blockers, warnings, and serialized check maps all
/// follow it deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckCategory {
    OrganizationType,
    EntityReadiness,
    SizeStandard,
    Certifications,
    Registrations,
    Geographic,
    Debarment,
    FinancialCapacity,
}

impl CheckCategory {
    pub const fn label(self) -> &'static str {
        match self {
            CheckCategory::OrganizationType => "organization_type",
            CheckCategory::EntityReadiness => "entity_readiness",
            CheckCategory::SizeStandard => "size_standard",
            CheckCategory::Certifications => "certifications",
            CheckCategory::Registrations => "registrations",
            CheckCategory::Geographic => "geographic",
            CheckCategory::Debarment => "debarment",
            CheckCategory::FinancialCapacity => "financial_capacity",
        }
    }
}

/// Outcome of a single rule category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityCheckResult {
    pub eligible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub warnings: Vec<String>,
    pub requirements: Vec<String>,
    pub advantages: Vec<String>,
}

impl EligibilityCheckResult {
    pub(crate) fn pass() -> Self {
        Self {
            eligible: true,
            reason: None,
            warnings: Vec::new(),
            requirements: Vec::new(),
            advantages: Vec::new(),
        }
    }

    pub(crate) fn fail(reason: impl Into<String>) -> Self {
        Self {
            eligible: false,
            reason: Some(reason.into()),
            warnings: Vec::new(),
            requirements: Vec::new(),
            advantages: Vec::new(),
        }
    }
}

/// A failing check and the explanation it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blocker {
    pub category: CheckCategory,
    pub reason: String,
}

/// Aggregate verdict across every rule category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    pub eligible: bool,
    pub confidence: u8,
    pub checks: BTreeMap<CheckCategory, EligibilityCheckResult>,
    pub warnings: Vec<String>,
    pub requirements: Vec<String>,
    pub blockers: Vec<Blocker>,
}

impl EligibilityVerdict {
    pub fn summary(&self) -> String {
        if self.eligible {
            if self.warnings.is_empty() {
                format!("eligible ({}% confidence)", self.confidence)
            } else {
                format!(
                    "eligible with {} warning(s) ({}% confidence)",
                    self.warnings.len(),
                    self.confidence
                )
            }
        } else {
            let reasons = self
                .blockers
                .iter()
                .map(|blocker| blocker.reason.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            format!("ineligible: {reasons}")
        }
    }
}

/// Stateless engine applying every rule category in a fixed order.
pub struct EligibilityEngine {
    config: EngineConfig,
}

impl EligibilityEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Evaluate one applicant/opportunity pair into a complete verdict.
    ///
    /// Structural invariants are checked first; a malformed pair rejects the
    /// whole call and no evaluator runs.
    pub fn check(
        &self,
        profile: &ApplicantProfile,
        opportunity: &Opportunity,
    ) -> Result<EligibilityVerdict, InvalidInput> {
        intake::validate_pair(profile, opportunity)?;

        let results = evaluators::run_all(profile, opportunity, &self.config);
        Ok(aggregate::aggregate(results, &self.config))
    }
}
