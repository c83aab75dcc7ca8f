//! Build-time Configuration
//!
//! Values are baked in at compile time (`PROYECTOS_*` env vars) since the
//! bundle has no runtime environment to read from.

use std::sync::OnceLock;

use log::LevelFilter;

use crate::typewriter::DEFAULT_INTERVAL_MS;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base URL, without trailing slash
    pub api_url: String,
    pub log_level: LevelFilter,
    /// Typewriter cadence for the AI summary
    pub reveal_interval_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_level: LevelFilter::Info,
            reveal_interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

impl AppConfig {
    /// Build from optional raw values; anything missing or unparseable keeps its default.
    pub fn from_values(api_url: Option<&str>, log_level: Option<&str>, reveal_ms: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_url: api_url
                .map(|u| u.trim().trim_end_matches('/'))
                .filter(|u| !u.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.api_url),
            log_level: log_level
                .and_then(|l| l.trim().parse().ok())
                .unwrap_or(defaults.log_level),
            reveal_interval_ms: reveal_ms
                .and_then(|ms| ms.trim().parse().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.reveal_interval_ms),
        }
    }

    fn from_build_env() -> Self {
        Self::from_values(
            option_env!("PROYECTOS_API_URL"),
            option_env!("PROYECTOS_LOG_LEVEL"),
            option_env!("PROYECTOS_REVEAL_MS"),
        )
    }
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Process-wide configuration, resolved on first use
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::from_build_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(AppConfig::from_values(None, None, None), AppConfig::default());
    }

    #[test]
    fn test_values_are_normalized() {
        let cfg = AppConfig::from_values(Some(" https://api.example.com/v1/ "), Some("debug"), Some("25"));
        assert_eq!(cfg.api_url, "https://api.example.com/v1");
        assert_eq!(cfg.log_level, LevelFilter::Debug);
        assert_eq!(cfg.reveal_interval_ms, 25);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let cfg = AppConfig::from_values(Some(""), Some("loud"), Some("0"));
        assert_eq!(cfg, AppConfig::default());
        let cfg = AppConfig::from_values(None, None, Some("fast"));
        assert_eq!(cfg.reveal_interval_ms, DEFAULT_INTERVAL_MS);
    }
}
