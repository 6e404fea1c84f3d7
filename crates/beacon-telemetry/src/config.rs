//! Loading log configuration from TOML files and the environment.
//!
//! A configuration file carries a `[log]` table whose keys mirror
//! [`LogConfig`]'s fields; every key is optional.
//!
//! ```toml
//! [log]
//! level = "debug"
//! format = "json"
//! directives = ["beacon_events=trace"]
//! ```

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::error::TelemetryResult;
use crate::logging::LogConfig;

/// Environment variable overriding the level filter.
pub const LOG_ENV: &str = "BEACON_LOG";

/// Environment variable overriding the output format.
pub const LOG_FORMAT_ENV: &str = "BEACON_LOG_FORMAT";

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    log: LogConfig,
}

impl LogConfig {
    /// Parse a log configuration from TOML source.
    ///
    /// A source without a `[log]` table yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is not valid TOML or a field has the
    /// wrong type.
    pub fn from_toml_str(source: &str) -> TelemetryResult<Self> {
        let file: ConfigFile = toml::from_str(source)?;
        Ok(file.log)
    }

    /// Load a log configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> TelemetryResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;

        debug!(path = %path.display(), level = %config.level, "Loaded log configuration");
        Ok(config)
    }

    /// Apply `BEACON_LOG` and `BEACON_LOG_FORMAT` from the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `BEACON_LOG_FORMAT` names an unknown format.
    pub fn apply_env(self) -> TelemetryResult<Self> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the format override names an unknown format.
    pub fn apply_env_with<F>(mut self, lookup: F) -> TelemetryResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(LOG_ENV).filter(|v| !v.trim().is_empty()) {
            self.level = level;
        }

        if let Some(format) = lookup(LOG_FORMAT_ENV).filter(|v| !v.trim().is_empty()) {
            self.format = format.parse()?;
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TelemetryError;
    use crate::logging::{LogFormat, LogTarget};
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_toml_full() {
        let config = LogConfig::from_toml_str(
            r#"
            [log]
            level = "debug"
            format = "json"
            target = "stdout"
            timestamps = false
            file_info = true
            ansi = false
            directives = ["beacon_events=trace"]
            "#,
        )
        .unwrap();

        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.target, LogTarget::Stdout);
        assert!(!config.timestamps);
        assert!(config.file_info);
        assert!(!config.ansi);
        assert_eq!(config.directives, vec!["beacon_events=trace"]);
    }

    #[test]
    fn test_from_toml_partial_uses_defaults() {
        let config = LogConfig::from_toml_str("[log]\nlevel = \"warn\"\n").unwrap();

        assert_eq!(config.level, "warn");
        assert_eq!(config.format, LogFormat::Compact);
        assert!(config.timestamps);
    }

    #[test]
    fn test_from_toml_without_log_table() {
        let config = LogConfig::from_toml_str("[other]\nkey = 1\n").unwrap();
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn test_from_toml_invalid() {
        let err = LogConfig::from_toml_str("[log]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, TelemetryError::ParseError(_)));

        let err = LogConfig::from_toml_str("[log\n").unwrap_err();
        assert!(matches!(err, TelemetryError::ParseError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[log]\nlevel = \"trace\"\nformat = \"pretty\"\n")
            .unwrap();

        let config = LogConfig::load(file.path()).unwrap();
        assert_eq!(config.level, "trace");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = LogConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, TelemetryError::IoError(_)));
    }

    #[test]
    fn test_env_overrides() {
        let config = LogConfig::default()
            .apply_env_with(env(&[
                (LOG_ENV, "beacon_events=trace"),
                (LOG_FORMAT_ENV, "json"),
            ]))
            .unwrap();

        assert_eq!(config.level, "beacon_events=trace");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn test_env_empty_values_ignored() {
        let config = LogConfig::new("warn")
            .apply_env_with(env(&[(LOG_ENV, "  "), (LOG_FORMAT_ENV, "")]))
            .unwrap();

        assert_eq!(config, LogConfig::new("warn"));
    }

    #[test]
    fn test_env_bad_format() {
        let err = LogConfig::default()
            .apply_env_with(env(&[(LOG_FORMAT_ENV, "yaml")]))
            .unwrap_err();

        assert!(matches!(err, TelemetryError::ConfigError(_)));
    }
}
