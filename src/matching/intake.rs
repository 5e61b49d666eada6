use super::domain::{ApplicantProfile, Opportunity};

/// Structural violations rejected at the entry points before any evaluator runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("opportunity identifier must not be empty")]
    MissingOpportunityId,
    #[error("funding range for opportunity '{id}' is inverted (minimum {min} exceeds maximum {max})")]
    InvertedFundingRange { id: String, min: u64, max: u64 },
    #[error("applicant industry classification code must not be blank")]
    BlankApplicantIndustryCode,
    #[error("industry classification code on opportunity '{id}' must not be blank")]
    BlankOpportunityIndustryCode { id: String },
}

pub(crate) fn validate_profile(profile: &ApplicantProfile) -> Result<(), InvalidInput> {
    if let Some(code) = &profile.industry_code {
        if code.trim().is_empty() {
            return Err(InvalidInput::BlankApplicantIndustryCode);
        }
    }
    Ok(())
}

pub(crate) fn validate_opportunity(opportunity: &Opportunity) -> Result<(), InvalidInput> {
    if opportunity.id.0.trim().is_empty() {
        return Err(InvalidInput::MissingOpportunityId);
    }

    if let (Some(min), Some(max)) = (opportunity.amount_min, opportunity.amount_max) {
        if min > max {
            return Err(InvalidInput::InvertedFundingRange {
                id: opportunity.id.0.clone(),
                min,
                max,
            });
        }
    }

    if let Some(code) = &opportunity.industry_code {
        if code.trim().is_empty() {
            return Err(InvalidInput::BlankOpportunityIndustryCode {
                id: opportunity.id.0.clone(),
            });
        }
    }

    Ok(())
}

pub(crate) fn validate_pair(
    profile: &ApplicantProfile,
    opportunity: &Opportunity,
) -> Result<(), InvalidInput> {
    validate_profile(profile)?;
    validate_opportunity(opportunity)
}
