use chrono::Duration;

use super::common::*;
use crate::matching::domain::CompetitionLevel;
use crate::matching::fit::FitFactorKind;

fn component_points(result: &crate::matching::fit::FitScoreResult, factor: FitFactorKind) -> u8 {
    result
        .components
        .iter()
        .find(|component| component.factor == factor)
        .map(|component| component.points)
        .unwrap_or(0)
}

#[test]
fn requested_amount_inside_the_range_is_a_perfect_fit() {
    let mut funded = opportunity("range");
    funded.amount_min = Some(50_000);
    funded.amount_max = Some(300_000);

    let result = scorer().score(&profile(), &project(), &funded, as_of());

    assert_eq!(component_points(&result, FitFactorKind::FundingAmount), 20);
}

#[test]
fn requested_amount_under_the_ceiling_scores_twelve() {
    let mut funded = opportunity("ceiling");
    funded.amount_min = Some(150_000);
    funded.amount_max = Some(300_000);

    // Needed 100k is below the floor but under the ceiling.
    let result = scorer().score(&profile(), &project(), &funded, as_of());

    assert_eq!(component_points(&result, FitFactorKind::FundingAmount), 12);
}

#[test]
fn requested_amount_above_the_floor_scores_eight() {
    let mut funded = opportunity("floor-only");
    funded.amount_min = Some(50_000);
    funded.amount_max = Some(80_000);

    // Needed 100k exceeds the ceiling but clears the floor.
    let result = scorer().score(&profile(), &project(), &funded, as_of());

    assert_eq!(component_points(&result, FitFactorKind::FundingAmount), 8);
}

#[test]
fn raising_the_ceiling_never_lowers_the_amount_fit() {
    let mut tight = opportunity("tight");
    tight.amount_min = Some(50_000);
    tight.amount_max = Some(80_000);
    let before = component_points(
        &scorer().score(&profile(), &project(), &tight, as_of()),
        FitFactorKind::FundingAmount,
    );

    let mut widened = tight.clone();
    widened.amount_max = Some(120_000);
    let after = component_points(
        &scorer().score(&profile(), &project(), &widened, as_of()),
        FitFactorKind::FundingAmount,
    );

    assert!(after >= before);
    assert_eq!(after, 20);
}

#[test]
fn deadline_urgency_tiers() {
    let expectations = [(10, 20), (14, 20), (20, 15), (60, 10), (90, 10), (200, 5)];

    for (days, expected) in expectations {
        let mut dated = opportunity("dated");
        dated.deadline = Some(as_of() + Duration::days(days));
        let result = scorer().score(&profile(), &project(), &dated, as_of());
        assert_eq!(
            component_points(&result, FitFactorKind::DeadlineUrgency),
            expected,
            "deadline in {days} day(s)"
        );
    }
}

#[test]
fn rolling_deadlines_score_a_flat_eight() {
    let result = scorer().score(&profile(), &project(), &opportunity("rolling"), as_of());
    assert_eq!(component_points(&result, FitFactorKind::DeadlineUrgency), 8);
}

#[test]
fn passed_deadlines_contribute_nothing() {
    let mut stale = opportunity("stale");
    stale.deadline = Some(as_of() - Duration::days(1));

    let result = scorer().score(&profile(), &project(), &stale, as_of());

    assert_eq!(component_points(&result, FitFactorKind::DeadlineUrgency), 0);
}

#[test]
fn program_type_alignment_is_case_insensitive() {
    let mut tagged = opportunity("tagged");
    tagged.program_types = vec!["Research".to_string()];

    let result = scorer().score(&profile(), &project(), &tagged, as_of());

    assert_eq!(
        component_points(&result, FitFactorKind::ProgramAlignment),
        20
    );
}

#[test]
fn industry_focus_alignment_is_case_insensitive() {
    let mut focused = opportunity("focused");
    focused.industry_focus = vec!["SOFTWARE".to_string()];

    let result = scorer().score(&profile(), &project(), &focused, as_of());

    assert_eq!(
        component_points(&result, FitFactorKind::IndustryAlignment),
        15
    );
}

#[test]
fn geography_scores_for_nationwide_or_the_project_state() {
    let mut national = opportunity("national");
    national.geography = vec!["nationwide".to_string()];
    let result = scorer().score(&profile(), &project(), &national, as_of());
    assert_eq!(component_points(&result, FitFactorKind::Geographic), 10);

    let mut local = opportunity("local");
    local.geography = vec!["IA".to_string()];
    let result = scorer().score(&profile(), &project(), &local, as_of());
    assert_eq!(component_points(&result, FitFactorKind::Geographic), 10);

    // Empty geography is open for eligibility but earns no fit points.
    let result = scorer().score(&profile(), &project(), &opportunity("open"), as_of());
    assert_eq!(component_points(&result, FitFactorKind::Geographic), 0);
}

#[test]
fn certification_alignment_sums_matched_certs() {
    let result = scorer().score(
        &profile(),
        &project(),
        &small_business_opportunity("wosb"),
        as_of(),
    );

    // Woman-owned requirement match (+12) plus certified small business on a
    // set-aside (+15).
    assert_eq!(
        component_points(&result, FitFactorKind::CertificationAlignment),
        27
    );
}

#[test]
fn competition_level_tiers() {
    let mut quiet = opportunity("quiet");
    quiet.competition_level = CompetitionLevel::Low;
    let result = scorer().score(&profile(), &project(), &quiet, as_of());
    assert_eq!(
        component_points(&result, FitFactorKind::CompetitionLevel),
        10
    );

    let mut moderate = opportunity("moderate");
    moderate.competition_level = CompetitionLevel::Medium;
    let result = scorer().score(&profile(), &project(), &moderate, as_of());
    assert_eq!(component_points(&result, FitFactorKind::CompetitionLevel), 5);

    let mut crowded = opportunity("crowded");
    crowded.competition_level = CompetitionLevel::High;
    let result = scorer().score(&profile(), &project(), &crowded, as_of());
    assert_eq!(component_points(&result, FitFactorKind::CompetitionLevel), 0);
}

#[test]
fn scores_clamp_at_one_hundred() {
    let mut maximal = small_business_opportunity("maximal");
    maximal.program_types = vec!["research".to_string()];
    maximal.industry_focus = vec!["software".to_string()];
    maximal.geography = vec!["nationwide".to_string()];
    maximal.amount_min = Some(50_000);
    maximal.amount_max = Some(300_000);
    maximal.deadline = Some(as_of() + Duration::days(7));
    maximal.competition_level = CompetitionLevel::Low;

    let result = scorer().score(&profile(), &project(), &maximal, as_of());

    let raw: u16 = result
        .components
        .iter()
        .map(|component| u16::from(component.points))
        .sum();
    assert!(raw > 100);
    assert_eq!(result.score, 100);
}

#[test]
fn fit_is_computed_independently_of_eligibility() {
    // An opportunity the applicant is ineligible for still scores.
    let mut restricted = opportunity("restricted");
    restricted.organization_types = vec![crate::matching::domain::OrganizationType::Nonprofit];
    restricted.program_types = vec!["research".to_string()];

    let result = scorer().score(&profile(), &project(), &restricted, as_of());

    assert!(result.score > 0);
}
