//! # Showcase Configuration
//!
//! [`ShowcaseConfig`] decides which demos run and how hard the singleton race pushes.
//! It can be read from the environment or from a JSON document:
//!
//! | Variable | Field | Example |
//! |----------|-------|---------|
//! | `PATTERN_RECIPE_PATTERNS` | `patterns` | `adapter,singleton` |
//! | `PATTERN_RECIPE_WORKERS` | `workers` | `16` |
//! | `PATTERN_RECIPE_YEAR` | `reference_year` | `2024` |
//!
//! Unset variables keep their defaults: every pattern, [`DEFAULT_WORKERS`] workers, and the
//! current year for ages.

use crate::framework::PatternKind;
use crate::singleton::DEFAULT_WORKERS;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const PATTERNS_VAR: &str = "PATTERN_RECIPE_PATTERNS";
pub const WORKERS_VAR: &str = "PATTERN_RECIPE_WORKERS";
pub const YEAR_VAR: &str = "PATTERN_RECIPE_YEAR";

/// Errors that can occur while loading the configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A pattern name is not in the catalog.
    #[error("Unknown pattern: {0}")]
    UnknownPattern(String),

    /// The worker count is not a positive integer.
    #[error("Invalid worker count: {0}")]
    InvalidWorkers(String),

    /// The reference year is not an integer, or lies outside the calendar range.
    #[error("Invalid reference year: {0}")]
    InvalidYear(String),

    /// The JSON document could not be parsed.
    #[error("Invalid configuration: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseConfig {
    /// Demos to run, in order.
    pub patterns: Vec<PatternKind>,
    /// Concurrent callers in the singleton race. Must be at least 1.
    pub workers: usize,
    /// Year the adapter computes ages against; `None` means the current year.
    pub reference_year: Option<i32>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            patterns: PatternKind::ALL.to_vec(),
            workers: DEFAULT_WORKERS,
            reference_year: None,
        }
    }
}

impl ShowcaseConfig {
    /// Reads the `PATTERN_RECIPE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from any key/value source shaped like the environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(list) = lookup(PATTERNS_VAR) {
            let patterns = parse_patterns(&list)?;
            if !patterns.is_empty() {
                config.patterns = patterns;
            }
        }
        if let Some(raw) = lookup(WORKERS_VAR) {
            config.workers = raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidWorkers(raw.clone()))?;
        }
        if let Some(raw) = lookup(YEAR_VAR) {
            let year = raw
                .trim()
                .parse::<i32>()
                .map_err(|_| ConfigError::InvalidYear(raw.clone()))?;
            config.reference_year = Some(year);
        }

        config.validate()
    }

    /// Parses a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::InvalidWorkers(self.workers.to_string()));
        }
        if let Some(year) = self.reference_year {
            if NaiveDate::from_ymd_opt(year, 1, 1).is_none() {
                return Err(ConfigError::InvalidYear(year.to_string()));
            }
        }
        debug!(config = ?self, "Configuration loaded");
        Ok(self)
    }
}

/// Parses a comma-separated pattern list, dropping blanks and repeats.
pub fn parse_patterns(list: &str) -> Result<Vec<PatternKind>, ConfigError> {
    let mut patterns = Vec::new();
    for name in list.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        let kind: PatternKind = name.parse()?;
        if !patterns.contains(&kind) {
            patterns.push(kind);
        }
    }
    Ok(patterns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = ShowcaseConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ShowcaseConfig::default());
        assert_eq!(config.patterns.len(), 6);
    }

    #[test]
    fn environment_overrides_fields() {
        let config = ShowcaseConfig::from_lookup(lookup_from(&[
            (PATTERNS_VAR, "Singleton, adapter,singleton"),
            (WORKERS_VAR, " 16 "),
            (YEAR_VAR, "2024"),
        ]))
        .unwrap();
        assert_eq!(
            config.patterns,
            vec![PatternKind::Singleton, PatternKind::Adapter]
        );
        assert_eq!(config.workers, 16);
        assert_eq!(config.reference_year, Some(2024));
    }

    #[test]
    fn bad_values_are_rejected() {
        assert_eq!(
            ShowcaseConfig::from_lookup(lookup_from(&[(PATTERNS_VAR, "adapter,visitor")])),
            Err(ConfigError::UnknownPattern("visitor".to_string()))
        );
        assert_eq!(
            ShowcaseConfig::from_lookup(lookup_from(&[(WORKERS_VAR, "many")])),
            Err(ConfigError::InvalidWorkers("many".to_string()))
        );
        assert_eq!(
            ShowcaseConfig::from_lookup(lookup_from(&[(WORKERS_VAR, "0")])),
            Err(ConfigError::InvalidWorkers("0".to_string()))
        );
        assert_eq!(
            ShowcaseConfig::from_lookup(lookup_from(&[(YEAR_VAR, "next year")])),
            Err(ConfigError::InvalidYear("next year".to_string()))
        );
    }

    #[test]
    fn years_outside_the_calendar_are_rejected() {
        assert_eq!(
            ShowcaseConfig::from_lookup(lookup_from(&[(YEAR_VAR, "-2147483648")])),
            Err(ConfigError::InvalidYear("-2147483648".to_string()))
        );
        assert_eq!(
            ShowcaseConfig::from_json(r#"{"reference_year": 2147483647}"#),
            Err(ConfigError::InvalidYear("2147483647".to_string()))
        );
        assert!(ShowcaseConfig::from_lookup(lookup_from(&[(YEAR_VAR, "-500")])).is_ok());
    }

    #[test]
    fn json_documents_fill_in_defaults() {
        let config = ShowcaseConfig::from_json(r#"{"patterns": ["Factory", "bridge"]}"#).unwrap();
        assert_eq!(
            config.patterns,
            vec![PatternKind::Factory, PatternKind::Bridge]
        );
        assert_eq!(config.workers, DEFAULT_WORKERS);
        assert_eq!(config.reference_year, None);
    }

    #[test]
    fn json_errors_carry_the_reason() {
        let err = ShowcaseConfig::from_json(r#"{"patterns": ["visitor"]}"#).unwrap_err();
        assert!(matches!(&err, ConfigError::Parse(msg) if msg.contains("Unknown pattern: visitor")));

        let err = ShowcaseConfig::from_json(r#"{"threads": 4}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        assert_eq!(
            ShowcaseConfig::from_json(r#"{"workers": 0}"#),
            Err(ConfigError::InvalidWorkers("0".to_string()))
        );
    }
}
