use std::env;

use crate::compliance::history::MAX_SERIES_MONTHS;

/// Caller-facing toggles passed into engine entry points per invocation.
///
/// The engine itself holds no global configuration; embedding hosts load
/// these once and hand them to `leaderboard` / `build_series` explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    pub bonus_enabled: bool,
    pub history_months: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            bonus_enabled: false,
            history_months: MAX_SERIES_MONTHS,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Top-level configuration for hosts embedding the engine.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub engine: EngineSettings,
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("CADENCE_BONUS_ENABLED must be a boolean flag, got '{0}'")]
    InvalidBonusFlag(String),
    #[error("CADENCE_HISTORY_MONTHS must be an integer between 1 and {MAX_SERIES_MONTHS}, got '{0}'")]
    InvalidHistoryMonths(String),
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let bonus_enabled = match env::var("CADENCE_BONUS_ENABLED") {
            Ok(raw) => match parse_flag(&raw) {
                Some(value) => value,
                None => return Err(ConfigError::InvalidBonusFlag(raw)),
            },
            Err(_) => false,
        };

        let history_months = match env::var("CADENCE_HISTORY_MONTHS") {
            Ok(raw) => match raw.trim().parse::<u32>() {
                Ok(value) if (1..=MAX_SERIES_MONTHS).contains(&value) => value,
                _ => return Err(ConfigError::InvalidHistoryMonths(raw)),
            },
            Err(_) => MAX_SERIES_MONTHS,
        };

        let log_level = env::var("CADENCE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            engine: EngineSettings {
                bonus_enabled,
                history_months,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("CADENCE_BONUS_ENABLED");
        env::remove_var("CADENCE_HISTORY_MONTHS");
        env::remove_var("CADENCE_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert!(!config.engine.bonus_enabled);
        assert_eq!(config.engine.history_months, MAX_SERIES_MONTHS);
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn accepts_flag_spellings() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("CADENCE_BONUS_ENABLED", "on");
        let config = AppConfig::load().expect("config loads");
        assert!(config.engine.bonus_enabled);
        reset_env();
    }

    #[test]
    fn rejects_out_of_range_history_span() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("CADENCE_HISTORY_MONTHS", "40");
        let error = AppConfig::load().expect_err("span above cap rejected");
        assert!(matches!(error, ConfigError::InvalidHistoryMonths(_)));
        reset_env();
    }
}
