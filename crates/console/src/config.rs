//! Console run options, read from the environment.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use gildedrose_observability::LogFormat;

pub const DAYS_ENV: &str = "GILDEDROSE_DAYS";
pub const REPORT_FORMAT_ENV: &str = "GILDEDROSE_REPORT_FORMAT";
pub const LOG_FORMAT_ENV: &str = gildedrose_observability::LOG_FORMAT_ENV;

/// How the final stock is printed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Fixed-width columns.
    #[default]
    Table,
    Json,
}

impl core::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(ReportFormat::Table),
            "json" => Ok(ReportFormat::Json),
            _ => Err("expected \"table\" or \"json\"".to_string()),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}={value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: &'static str, value: &str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Number of days to advance before reporting.
    pub days: u32,
    pub report_format: ReportFormat,
    pub log_format: LogFormat,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            days: 1,
            report_format: ReportFormat::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl ConsoleConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(DAYS_ENV) {
            config.days = raw
                .trim()
                .parse()
                .map_err(|e: core::num::ParseIntError| {
                    ConfigError::invalid(DAYS_ENV, &raw, e.to_string())
                })?;
        }

        if let Some(raw) = lookup(REPORT_FORMAT_ENV) {
            config.report_format = raw
                .parse()
                .map_err(|reason: String| ConfigError::invalid(REPORT_FORMAT_ENV, &raw, reason))?;
        }

        if let Some(raw) = lookup(LOG_FORMAT_ENV) {
            config.log_format = raw
                .parse()
                .map_err(|e: gildedrose_observability::UnknownLogFormat| {
                    ConfigError::invalid(LOG_FORMAT_ENV, &raw, e.to_string())
                })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ConsoleConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.days, 1);
        assert_eq!(config.report_format, ReportFormat::Table);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn reads_all_keys() {
        let config = ConsoleConfig::from_lookup(lookup(&[
            (DAYS_ENV, " 14 "),
            (REPORT_FORMAT_ENV, "JSON"),
            (LOG_FORMAT_ENV, "pretty"),
        ]))
        .unwrap();
        assert_eq!(config.days, 14);
        assert_eq!(config.report_format, ReportFormat::Json);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn rejects_bad_days() {
        let err = ConsoleConfig::from_lookup(lookup(&[(DAYS_ENV, "-3")])).unwrap_err();
        let ConfigError::Invalid { key, value, .. } = err;
        assert_eq!(key, DAYS_ENV);
        assert_eq!(value, "-3");
    }

    #[test]
    fn rejects_unknown_formats() {
        assert!(ConsoleConfig::from_lookup(lookup(&[(REPORT_FORMAT_ENV, "csv")])).is_err());
        assert!(ConsoleConfig::from_lookup(lookup(&[(LOG_FORMAT_ENV, "xml")])).is_err());
    }
}
