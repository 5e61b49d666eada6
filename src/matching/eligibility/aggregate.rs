use std::collections::BTreeMap;

use super::{Blocker, CheckCategory, EligibilityCheckResult, EligibilityVerdict};
use crate::config::EngineConfig;

/// Combine per-category results into one verdict.
///
/// Blockers, warnings, and requirements keep the evaluation order of the
/// incoming results; they are never re-sorted by severity.
pub(crate) fn aggregate(
    results: Vec<(CheckCategory, EligibilityCheckResult)>,
    config: &EngineConfig,
) -> EligibilityVerdict {
    let total = results.len();
    let passed = results.iter().filter(|(_, result)| result.eligible).count();
    let eligible = passed == total;

    let mut confidence = if total == 0 {
        100
    } else {
        ((passed as f64 / total as f64) * 100.0).round() as u8
    };

    let any_warnings = results
        .iter()
        .any(|(_, result)| !result.warnings.is_empty());
    if any_warnings {
        // Flat penalty regardless of how many checks warned; existing caller
        // thresholds depend on this not scaling.
        confidence = confidence.saturating_sub(config.warning_confidence_penalty);
    }

    let mut checks = BTreeMap::new();
    let mut warnings = Vec::new();
    let mut requirements = Vec::new();
    let mut blockers = Vec::new();

    for (category, result) in results {
        warnings.extend(result.warnings.iter().cloned());
        requirements.extend(result.requirements.iter().cloned());

        if !result.eligible {
            blockers.push(Blocker {
                category,
                reason: result
                    .reason
                    .clone()
                    .unwrap_or_else(|| "check failed".to_string()),
            });
        }

        checks.insert(category, result);
    }

    EligibilityVerdict {
        eligible,
        confidence,
        checks,
        warnings,
        requirements,
        blockers,
    }
}
