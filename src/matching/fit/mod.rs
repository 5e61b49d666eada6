use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{
    ApplicantProfile, CompetitionLevel, FundingProject, Opportunity, NATIONWIDE,
};

/// Sub-signal categories contributing to a fit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitFactorKind {
    ProgramAlignment,
    CertificationAlignment,
    FundingAmount,
    DeadlineUrgency,
    Geographic,
    IndustryAlignment,
    CompetitionLevel,
}

/// Discrete contribution to a fit score, kept so callers can explain rankings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitComponent {
    pub factor: FitFactorKind,
    pub points: u8,
    pub notes: String,
}

/// Clamped 0-100 suitability score with its contributing factors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitScoreResult {
    pub score: u8,
    pub components: Vec<FitComponent>,
}

/// Relevance heuristic independent of the eligibility verdict.
///
/// Scores never disqualify; callers may score ineligible opportunities to
/// surface close matches.
#[derive(Default)]
pub struct FitScorer;

impl FitScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score one (applicant, project, opportunity) triple as of a given date.
    pub fn score(
        &self,
        profile: &ApplicantProfile,
        project: &FundingProject,
        opportunity: &Opportunity,
        as_of: NaiveDate,
    ) -> FitScoreResult {
        let mut components: Vec<FitComponent> = Vec::new();

        if let Some(program_type) = &project.program_type {
            let aligned = opportunity
                .program_types
                .iter()
                .any(|tag| tag.eq_ignore_ascii_case(program_type));
            if aligned {
                components.push(FitComponent {
                    factor: FitFactorKind::ProgramAlignment,
                    points: 20,
                    notes: format!("program type '{program_type}' matches"),
                });
            }
        }

        if let Some(component) = certification_alignment(profile, opportunity) {
            components.push(component);
        }

        if let Some(component) = funding_amount_fit(project, opportunity) {
            components.push(component);
        }

        if let Some(component) = deadline_urgency(opportunity, as_of) {
            components.push(component);
        }

        let location_served = opportunity
            .geography
            .iter()
            .any(|entry| entry.eq_ignore_ascii_case(NATIONWIDE))
            || project
                .state
                .as_deref()
                .map(|state| {
                    opportunity
                        .geography
                        .iter()
                        .any(|entry| entry.eq_ignore_ascii_case(state))
                })
                .unwrap_or(false);
        if location_served {
            components.push(FitComponent {
                factor: FitFactorKind::Geographic,
                points: 10,
                notes: "serves the project location".to_string(),
            });
        }

        if let Some(industry) = &project.industry {
            let focused = opportunity
                .industry_focus
                .iter()
                .any(|tag| tag.eq_ignore_ascii_case(industry));
            if focused {
                components.push(FitComponent {
                    factor: FitFactorKind::IndustryAlignment,
                    points: 15,
                    notes: format!("industry focus includes {industry}"),
                });
            }
        }

        let competition_points = match opportunity.competition_level {
            CompetitionLevel::Low => 10,
            CompetitionLevel::Medium => 5,
            CompetitionLevel::High | CompetitionLevel::Unknown => 0,
        };
        if competition_points > 0 {
            components.push(FitComponent {
                factor: FitFactorKind::CompetitionLevel,
                points: competition_points,
                notes: format!(
                    "{:?} competition expected",
                    opportunity.competition_level
                )
                .to_lowercase(),
            });
        }

        let total: u16 = components
            .iter()
            .map(|component| u16::from(component.points))
            .sum();

        FitScoreResult {
            score: total.min(100) as u8,
            components,
        }
    }
}

fn certification_alignment(
    profile: &ApplicantProfile,
    opportunity: &Opportunity,
) -> Option<FitComponent> {
    let certs = &profile.certifications;
    let required = &opportunity.required_certifications;

    let mut points: u8 = 0;
    let mut matched = Vec::new();

    for (is_required, is_held, label) in [
        (required.minority_owned, certs.minority_owned, "minority-owned"),
        (required.woman_owned, certs.woman_owned, "woman-owned"),
        (required.veteran_owned, certs.veteran_owned, "veteran-owned"),
    ] {
        if is_required && is_held {
            points += 12;
            matched.push(label);
        }
    }

    if opportunity.small_business_only && certs.small_business_certified {
        points += 15;
        matched.push("small-business");
    }

    if points == 0 {
        return None;
    }

    Some(FitComponent {
        factor: FitFactorKind::CertificationAlignment,
        points,
        notes: format!("certification alignment: {}", matched.join(", ")),
    })
}

fn funding_amount_fit(project: &FundingProject, opportunity: &Opportunity) -> Option<FitComponent> {
    let needed = project.funding_needed?;
    let (min, max) = (opportunity.amount_min, opportunity.amount_max);

    let within_range = match (min, max) {
        (Some(min), Some(max)) => needed >= min && needed <= max,
        _ => false,
    };

    let (points, notes) = if within_range {
        (20, "requested amount within the award range".to_string())
    } else if max.map(|max| needed <= max).unwrap_or(false) {
        (12, "requested amount under the award ceiling".to_string())
    } else if min.map(|min| needed >= min).unwrap_or(false) {
        (8, "requested amount above the award floor".to_string())
    } else {
        return None;
    };

    Some(FitComponent {
        factor: FitFactorKind::FundingAmount,
        points,
        notes,
    })
}

fn deadline_urgency(opportunity: &Opportunity, as_of: NaiveDate) -> Option<FitComponent> {
    let Some(deadline) = opportunity.deadline else {
        return Some(FitComponent {
            factor: FitFactorKind::DeadlineUrgency,
            points: 8,
            notes: "rolling deadline".to_string(),
        });
    };

    let days = (deadline - as_of).num_days();
    let points = if days > 0 && days <= 14 {
        20
    } else if days > 14 && days <= 30 {
        15
    } else if days > 30 && days <= 90 {
        10
    } else if days > 90 {
        5
    } else {
        // Passed deadlines contribute nothing; filtering them is the
        // caller's concern.
        return None;
    };

    Some(FitComponent {
        factor: FitFactorKind::DeadlineUrgency,
        points,
        notes: format!("{days} day(s) until the deadline"),
    })
}
