use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::super::domain::{ApplicantProfile, DebarmentStatus, Opportunity, OrganizationType};
use super::super::size_standards::{SizeMeasure, SizeStandardTable, DEFAULT_STANDARD};
use super::{CheckCategory, EligibilityCheckResult};
use crate::config::EngineConfig;

pub(crate) type Evaluator =
    fn(&ApplicantProfile, &Opportunity, &EngineConfig) -> EligibilityCheckResult;

/// Fixed evaluation order; aggregation and blocker ordering follow this slice.
pub(crate) const EVALUATION_ORDER: [(CheckCategory, Evaluator); 8] = [
    (CheckCategory::OrganizationType, organization_type),
    (CheckCategory::EntityReadiness, entity_readiness),
    (CheckCategory::SizeStandard, size_standard),
    (CheckCategory::Certifications, certifications),
    (CheckCategory::Registrations, registrations),
    (CheckCategory::Geographic, geographic),
    (CheckCategory::Debarment, debarment),
    (CheckCategory::FinancialCapacity, financial_capacity),
];

pub(crate) fn run_all(
    profile: &ApplicantProfile,
    opportunity: &Opportunity,
    config: &EngineConfig,
) -> Vec<(CheckCategory, EligibilityCheckResult)> {
    EVALUATION_ORDER
        .iter()
        .map(|(category, evaluator)| (*category, evaluator(profile, opportunity, config)))
        .collect()
}

fn organization_type(
    profile: &ApplicantProfile,
    opportunity: &Opportunity,
    _config: &EngineConfig,
) -> EligibilityCheckResult {
    if opportunity.small_business_only
        && profile.organization_type != OrganizationType::ForProfit
    {
        return EligibilityCheckResult::fail(format!(
            "restricted to small businesses; {} organizations do not qualify",
            profile.organization_type.label()
        ));
    }

    if !opportunity.organization_types.is_empty()
        && !opportunity
            .organization_types
            .contains(&profile.organization_type)
    {
        let allowed = opportunity
            .organization_types
            .iter()
            .map(|kind| kind.label())
            .collect::<Vec<_>>()
            .join(", ");
        return EligibilityCheckResult::fail(format!(
            "open to {allowed} organizations only; applicant is {}",
            profile.organization_type.label()
        ));
    }

    EligibilityCheckResult::pass()
}

/// Advisory only: readiness gaps warn but never block.
fn entity_readiness(
    profile: &ApplicantProfile,
    opportunity: &Opportunity,
    _config: &EngineConfig,
) -> EligibilityCheckResult {
    let mut result = EligibilityCheckResult::pass();

    if opportunity.is_federal() {
        if !profile.has_tax_id {
            result
                .warnings
                .push("no tax identifier on file for a federal opportunity".to_string());
            result
                .requirements
                .push("Obtain an employer identification number before applying".to_string());
        }

        if !profile.has_entity_identifier {
            result
                .warnings
                .push("no unique entity identifier on file for a federal opportunity".to_string());
            result.requirements.push(
                "Request a unique entity identifier through the federal award system".to_string(),
            );
        }
    }

    if profile.organization_type == OrganizationType::Nonprofit && !profile.tax_exempt {
        result
            .warnings
            .push("nonprofit without recognized tax-exempt status".to_string());
    }

    result
}

const SMALL_BUSINESS_MARKERS: [&str; 5] = ["sbir", "sttr", "sba", "hubzone", "disadvantaged"];

fn targets_small_businesses(opportunity: &Opportunity) -> bool {
    if opportunity.small_business_only {
        return true;
    }

    let text = opportunity.heuristic_text();
    SMALL_BUSINESS_MARKERS
        .iter()
        .any(|marker| text.contains(marker))
}

fn size_standard(
    profile: &ApplicantProfile,
    opportunity: &Opportunity,
    _config: &EngineConfig,
) -> EligibilityCheckResult {
    if !targets_small_businesses(opportunity) {
        return EligibilityCheckResult::pass();
    }

    let code = profile
        .industry_code
        .as_deref()
        .or(opportunity.industry_code.as_deref());
    let standard = match code {
        Some(code) => SizeStandardTable::shared().lookup(code),
        None => DEFAULT_STANDARD,
    };

    match standard.measure {
        SizeMeasure::Revenue => match profile.annual_revenue {
            Some(revenue) if revenue >= standard.threshold => {
                EligibilityCheckResult::fail(format!(
                    "annual revenue ${revenue} meets or exceeds the ${} size standard",
                    standard.threshold
                ))
            }
            Some(_) => EligibilityCheckResult::pass(),
            None => {
                let mut result = EligibilityCheckResult::pass();
                result.warnings.push(format!(
                    "annual revenue not reported; verify the ${} revenue standard manually",
                    standard.threshold
                ));
                result
            }
        },
        SizeMeasure::Employees => match profile.employee_count {
            Some(count) if u64::from(count) >= standard.threshold => {
                EligibilityCheckResult::fail(format!(
                    "{count} employees meets or exceeds the {}-employee size standard",
                    standard.threshold
                ))
            }
            Some(_) => EligibilityCheckResult::pass(),
            None => {
                let mut result = EligibilityCheckResult::pass();
                result.warnings.push(format!(
                    "employee count not reported; verify the {}-employee standard manually",
                    standard.threshold
                ));
                result
            }
        },
    }
}

fn certifications(
    profile: &ApplicantProfile,
    opportunity: &Opportunity,
    _config: &EngineConfig,
) -> EligibilityCheckResult {
    let certs = &profile.certifications;
    let required = &opportunity.required_certifications;

    let mut missing = Vec::new();
    let mut advantages = Vec::new();

    for (is_required, is_held, label) in [
        (required.minority_owned, certs.minority_owned, "minority-owned"),
        (required.woman_owned, certs.woman_owned, "woman-owned"),
        (required.veteran_owned, certs.veteran_owned, "veteran-owned"),
    ] {
        match (is_required, is_held) {
            (true, false) => missing.push(label),
            (true, true) => advantages.push(format!(
                "{label} certification satisfies a program requirement"
            )),
            (false, true) => advantages.push(format!(
                "{label} certification may strengthen the application"
            )),
            (false, false) => {}
        }
    }

    if opportunity.heuristic_text().contains("hubzone") && !certs.hubzone_certified {
        missing.push("HUBZone");
    }

    if missing.is_empty() {
        let mut result = EligibilityCheckResult::pass();
        result.advantages = advantages;
        return result;
    }

    let mut result = EligibilityCheckResult::fail(format!(
        "missing required certifications: {}",
        missing.join(", ")
    ));
    result.requirements = missing
        .iter()
        .map(|label| format!("Obtain {label} certification"))
        .collect();
    result.advantages = advantages;
    result
}

const PROCUREMENT_MARKERS: [&str; 3] = ["contract", "procurement", "defense"];

/// Advisory only: registration gaps warn but never block.
fn registrations(
    profile: &ApplicantProfile,
    opportunity: &Opportunity,
    _config: &EngineConfig,
) -> EligibilityCheckResult {
    let mut result = EligibilityCheckResult::pass();

    if opportunity.is_federal() {
        if !profile.registrations.federal_award_system {
            result
                .warnings
                .push("not registered in the federal award system".to_string());
            result
                .requirements
                .push("Complete federal award system registration before submitting".to_string());
        }

        if !profile.registrations.grants_portal {
            result
                .warnings
                .push("no grants portal account on file".to_string());
            result
                .requirements
                .push("Create a grants portal account to submit the application".to_string());
        }
    }

    if !profile.registrations.commercial_entity_code {
        let text = opportunity.heuristic_text();
        if PROCUREMENT_MARKERS.iter().any(|marker| text.contains(marker)) {
            result.warnings.push(
                "procurement-style opportunity and no commercial entity code on file".to_string(),
            );
        }
    }

    result
}

const NORTHEAST: &[&str] = &["CT", "MA", "ME", "NH", "NJ", "NY", "PA", "RI", "VT"];
const SOUTHEAST: &[&str] = &[
    "AL", "AR", "FL", "GA", "KY", "LA", "MS", "NC", "SC", "TN", "VA", "WV",
];
const MIDWEST: &[&str] = &[
    "IA", "IL", "IN", "KS", "MI", "MN", "MO", "ND", "NE", "OH", "SD", "WI",
];
const SOUTHWEST: &[&str] = &["AZ", "NM", "OK", "TX"];
const WEST: &[&str] = &[
    "AK", "CA", "CO", "HI", "ID", "MT", "NV", "OR", "UT", "WA", "WY",
];

fn region_states(region: &str) -> Option<&'static [&'static str]> {
    static REGIONS: OnceLock<BTreeMap<&'static str, &'static [&'static str]>> = OnceLock::new();
    let regions = REGIONS.get_or_init(|| {
        BTreeMap::from([
            ("northeast", NORTHEAST),
            ("southeast", SOUTHEAST),
            ("midwest", MIDWEST),
            ("southwest", SOUTHWEST),
            ("west", WEST),
        ])
    });

    regions.get(region.to_ascii_lowercase().as_str()).copied()
}

fn geographic(
    profile: &ApplicantProfile,
    opportunity: &Opportunity,
    _config: &EngineConfig,
) -> EligibilityCheckResult {
    if opportunity.is_nationwide() {
        return EligibilityCheckResult::pass();
    }

    let state = profile.location.state.as_deref();
    let city = profile.location.city.as_deref();

    for entry in &opportunity.geography {
        let direct_match = state
            .map(|value| value.eq_ignore_ascii_case(entry))
            .unwrap_or(false)
            || city
                .map(|value| value.eq_ignore_ascii_case(entry))
                .unwrap_or(false);
        if direct_match {
            return EligibilityCheckResult::pass();
        }

        if let (Some(states), Some(state)) = (region_states(entry), state) {
            if states.iter().any(|code| code.eq_ignore_ascii_case(state)) {
                return EligibilityCheckResult::pass();
            }
        }
    }

    EligibilityCheckResult::fail(format!(
        "limited to the following geography: {}",
        opportunity.geography.join(", ")
    ))
}

fn debarment(
    profile: &ApplicantProfile,
    opportunity: &Opportunity,
    _config: &EngineConfig,
) -> EligibilityCheckResult {
    if opportunity.is_federal() && profile.debarment == DebarmentStatus::Debarred {
        return EligibilityCheckResult::fail(
            "organization is debarred from federal awards; resolve the debarment before applying",
        );
    }

    EligibilityCheckResult::pass()
}

/// Advisory only: capacity concerns warn but never block.
fn financial_capacity(
    profile: &ApplicantProfile,
    opportunity: &Opportunity,
    config: &EngineConfig,
) -> EligibilityCheckResult {
    let mut result = EligibilityCheckResult::pass();

    let Some(floor) = opportunity.amount_min else {
        return result;
    };

    let strained = match profile.annual_revenue {
        Some(revenue) => floor as f64 > revenue as f64 * config.capacity_revenue_ratio,
        None => true,
    };
    if strained {
        result.warnings.push(format!(
            "minimum award ${floor} may require demonstrated financial capacity"
        ));
    }

    if floor > config.audit_review_floor && !profile.audit_completed {
        result.requirements.push(format!(
            "awards above ${} may require an independent audit",
            config.audit_review_floor
        ));
    }

    result
}
