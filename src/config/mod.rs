//! Tool settings for stitchkit.
//!
//! The tools take no configuration file: the export request comes from
//! command-line flags and the summary paths are literal arguments. Ambient
//! concerns (log level, log directory, export error policy) are read from
//! `STITCHKIT_*` environment variables, optionally seeded from a `.env` file
//! by the binaries.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `STITCHKIT_LOG_LEVEL` | `info` | trace, debug, info, warn or error |
//! | `STITCHKIT_LOG_DIR` | unset | write JSON logs to a daily rolling file in this directory |
//! | `STITCHKIT_ON_EXPORT_ERROR` | `fail-fast` | `fail-fast` or `continue` |

pub mod secret;

pub use secret::{secret_string, SecretString, SecretValue};

use crate::domain::{Result, StitchError};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// What the export loop does when one design fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop the batch at the first failed design
    #[default]
    FailFast,
    /// Record the failure and carry on with the next design
    ContinueOnError,
}

impl FromStr for ErrorPolicy {
    type Err = StitchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "fail-fast" | "fail_fast" | "failfast" => Ok(ErrorPolicy::FailFast),
            "continue" | "continue-on-error" | "continue_on_error" => {
                Ok(ErrorPolicy::ContinueOnError)
            }
            other => Err(StitchError::Configuration(format!(
                "Invalid export error policy: {other}. Must be one of: fail-fast, continue"
            ))),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPolicy::FailFast => write!(f, "fail-fast"),
            ErrorPolicy::ContinueOnError => write!(f, "continue"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Directory for JSON log files; console only when `None`
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

/// Settings shared by both binaries
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolSettings {
    pub logging: LoggingConfig,
    pub error_policy: ErrorPolicy,
}

impl ToolSettings {
    /// Resolve settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings from an arbitrary key lookup
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut settings = Self::default();

        if let Some(level) = get("STITCHKIT_LOG_LEVEL") {
            settings.logging.level = level.trim().to_lowercase();
        }
        if let Some(dir) = get("STITCHKIT_LOG_DIR") {
            settings.logging.directory = Some(PathBuf::from(dir));
        }
        if let Some(policy) = get("STITCHKIT_ON_EXPORT_ERROR") {
            settings.error_policy = policy.parse()?;
        }

        settings.validate()?;
        Ok(settings)
    }

    /// Check that every resolved value is usable
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(StitchError::Configuration(format!(
                "Invalid log level: {}. Must be one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
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
    fn test_defaults_when_nothing_set() {
        let settings = ToolSettings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, ToolSettings::default());
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.error_policy, ErrorPolicy::FailFast);
    }

    #[test]
    fn test_overrides_applied() {
        let settings = ToolSettings::from_lookup(lookup(&[
            ("STITCHKIT_LOG_LEVEL", "DEBUG"),
            ("STITCHKIT_LOG_DIR", "/var/log/stitchkit"),
            ("STITCHKIT_ON_EXPORT_ERROR", "continue"),
        ]))
        .unwrap();

        assert_eq!(settings.logging.level, "debug");
        assert_eq!(
            settings.logging.directory,
            Some(PathBuf::from("/var/log/stitchkit"))
        );
        assert_eq!(settings.error_policy, ErrorPolicy::ContinueOnError);
    }

    #[test]
    fn test_blank_values_ignored() {
        let settings =
            ToolSettings::from_lookup(lookup(&[("STITCHKIT_LOG_DIR", "  ")])).unwrap();
        assert!(settings.logging.directory.is_none());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let err = ToolSettings::from_lookup(lookup(&[("STITCHKIT_LOG_LEVEL", "loud")]))
            .unwrap_err();
        assert!(matches!(err, StitchError::Configuration(_)));
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let err = ToolSettings::from_lookup(lookup(&[("STITCHKIT_ON_EXPORT_ERROR", "retry")]))
            .unwrap_err();
        assert!(err.to_string().contains("fail-fast, continue"));
    }

    #[test]
    fn test_error_policy_display_round_trips() {
        for policy in [ErrorPolicy::FailFast, ErrorPolicy::ContinueOnError] {
            assert_eq!(policy.to_string().parse::<ErrorPolicy>().unwrap(), policy);
        }
    }
}
