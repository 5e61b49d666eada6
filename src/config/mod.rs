use std::env;
use std::fmt;

/// Tunable thresholds backing the eligibility aggregator and the advisory
/// financial-capacity check.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Flat confidence penalty applied when any check raises a warning.
    pub warning_confidence_penalty: u8,
    /// Fraction of annual revenue a minimum award may reach before a
    /// capacity warning is raised.
    pub capacity_revenue_ratio: f64,
    /// Minimum award above which an independent audit requirement is noted.
    pub audit_review_floor: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            warning_confidence_penalty: 10,
            capacity_revenue_ratio: 0.5,
            audit_review_floor: 750_000,
        }
    }
}

impl EngineConfig {
    /// Load thresholds from the environment, falling back to the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let warning_confidence_penalty = match env::var("MATCH_WARNING_PENALTY") {
            Ok(value) => {
                let parsed = value
                    .parse::<u8>()
                    .map_err(|_| ConfigError::InvalidWarningPenalty)?;
                if parsed > 100 {
                    return Err(ConfigError::InvalidWarningPenalty);
                }
                parsed
            }
            Err(_) => defaults.warning_confidence_penalty,
        };

        let capacity_revenue_ratio = match env::var("MATCH_CAPACITY_RATIO") {
            Ok(value) => {
                let parsed = value
                    .parse::<f64>()
                    .map_err(|_| ConfigError::InvalidCapacityRatio)?;
                if !parsed.is_finite() || parsed <= 0.0 {
                    return Err(ConfigError::InvalidCapacityRatio);
                }
                parsed
            }
            Err(_) => defaults.capacity_revenue_ratio,
        };

        let audit_review_floor = match env::var("MATCH_AUDIT_FLOOR") {
            Ok(value) => value
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidAuditFloor)?,
            Err(_) => defaults.audit_review_floor,
        };

        Ok(Self {
            warning_confidence_penalty,
            capacity_revenue_ratio,
            audit_review_floor,
        })
    }
}

/// Tracing controls for embedders that opt into the bundled subscriber.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl TelemetryConfig {
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self {
            log_level: env::var("MATCH_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidWarningPenalty,
    InvalidCapacityRatio,
    InvalidAuditFloor,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWarningPenalty => {
                write!(f, "MATCH_WARNING_PENALTY must be an integer between 0 and 100")
            }
            ConfigError::InvalidCapacityRatio => {
                write!(f, "MATCH_CAPACITY_RATIO must be a positive finite number")
            }
            ConfigError::InvalidAuditFloor => {
                write!(f, "MATCH_AUDIT_FLOOR must be a whole dollar amount")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("MATCH_WARNING_PENALTY");
        env::remove_var("MATCH_CAPACITY_RATIO");
        env::remove_var("MATCH_AUDIT_FLOOR");
        env::remove_var("MATCH_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = EngineConfig::load().expect("config loads with defaults");
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn load_reads_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("MATCH_WARNING_PENALTY", "15");
        env::set_var("MATCH_AUDIT_FLOOR", "1000000");
        let config = EngineConfig::load().expect("config loads");
        assert_eq!(config.warning_confidence_penalty, 15);
        assert_eq!(config.audit_review_floor, 1_000_000);
        reset_env();
    }

    #[test]
    fn load_rejects_penalty_above_100() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("MATCH_WARNING_PENALTY", "120");
        let error = EngineConfig::load().expect_err("penalty above 100 rejected");
        assert!(matches!(error, ConfigError::InvalidWarningPenalty));
        reset_env();
    }

    #[test]
    fn load_rejects_non_numeric_ratio() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("MATCH_CAPACITY_RATIO", "half");
        let error = EngineConfig::load().expect_err("non-numeric ratio rejected");
        assert!(matches!(error, ConfigError::InvalidCapacityRatio));
        reset_env();
    }
}
