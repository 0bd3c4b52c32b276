//! Runtime configuration
//!
//! Everything has a default, so the config file is optional. It is read from
//! `<config dir>/stackviz/config.toml`:
//!
//! ```toml
//! [timing]
//! frame_delay_ms = 10
//! step_px = 15
//!
//! [logging]
//! level = "debug"
//! file = "/tmp/stackviz.log"
//! ```

use crate::{APP_NAME, Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timing: TimingConfig,
    pub logging: LoggingConfig,
}

/// Animation pacing and message dwell times
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Pause after each animation frame
    pub frame_delay_ms: u64,
    /// Logical pixels a moving box travels per frame
    pub step_px: i32,
    /// Dwell after a confirmation or cancellation message
    pub message_dwell_ms: u64,
    /// Dwell after a capacity failure message
    pub failure_dwell_ms: u64,
    pub farewell_dwell_ms: u64,
    /// Timeout of the idle key poll
    pub poll_interval_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            frame_delay_ms: 10,
            step_px: 15,
            message_dwell_ms: 1000,
            failure_dwell_ms: 1500,
            farewell_dwell_ms: 1500,
            poll_interval_ms: 10,
        }
    }
}

impl TimingConfig {
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    pub fn message_dwell(&self) -> Duration {
        Duration::from_millis(self.message_dwell_ms)
    }

    pub fn failure_dwell(&self) -> Duration {
        Duration::from_millis(self.failure_dwell_ms)
    }

    pub fn farewell_dwell(&self) -> Duration {
        Duration::from_millis(self.farewell_dwell_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Log output settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `stackviz=debug`
    pub level: String,
    /// Log file; `None` disables logging since the terminal is taken by the UI
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load from the standard location, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        match Self::config_file_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    /// `$CONFIG_HOME/stackviz/config.toml`
    pub fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Load and validate a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.timing.step_px <= 0 {
            return Err(Error::Config(format!(
                "timing.step_px must be positive, got {}",
                self.timing.step_px
            )));
        }
        validate_level(&self.logging.level)
    }
}

/// Check a filter directive list such as `info` or `stackviz=debug,warn`.
///
/// Every level name must parse as a level; a bare misspelled word would
/// otherwise be taken as a target and silently filter everything out.
fn validate_level(level: &str) -> Result<()> {
    let invalid = |reason: String| {
        Error::Config(format!("Invalid logging.level '{}': {}", level, reason))
    };

    EnvFilter::try_new(level).map_err(|e| invalid(e.to_string()))?;

    for directive in level.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        let name = match directive.rsplit_once('=') {
            // `=` inside a span field, no level given
            Some((_, rest)) if rest.contains(['}', ']']) => continue,
            Some((_, name)) => name,
            None => directive,
        };
        name.trim()
            .parse::<LevelFilter>()
            .map_err(|_| invalid(format!("unknown level '{}'", name.trim())))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.timing.frame_delay(), Duration::from_millis(10));
        assert_eq!(config.timing.step_px, 15);
        assert_eq!(config.timing.message_dwell(), Duration::from_millis(1000));
        assert_eq!(config.timing.failure_dwell(), Duration::from_millis(1500));
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml_str("[timing]\nstep_px = 20\n").unwrap();
        assert_eq!(config.timing.step_px, 20);
        assert_eq!(config.timing.frame_delay_ms, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_file() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.timing.farewell_dwell_ms, 1500);
    }

    #[test]
    fn test_rejects_zero_step() {
        let err = Config::from_toml_str("[timing]\nstep_px = 0\n").unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("step_px")));
    }

    #[test]
    fn test_rejects_misspelled_level() {
        for level in ["debg", "verbose", "inf0", "not a level", "stackviz=debg", "warn,inf"] {
            let config = Config {
                logging: LoggingConfig {
                    level: level.to_string(),
                    file: None,
                },
                ..Config::default()
            };
            let err = config.validate().unwrap_err();
            assert!(
                matches!(err, Error::Config(ref msg) if msg.contains("logging.level")),
                "{} accepted",
                level
            );
        }
    }

    #[test]
    fn test_accepts_level_directives() {
        for level in ["debug", "WARN", "off", "stackviz=debug,info", "trace,stackviz=error"] {
            let toml = format!("[logging]\nlevel = \"{}\"\n", level);
            let config = Config::from_toml_str(&toml).unwrap();
            assert_eq!(config.logging.level, level);
        }
    }

    #[test]
    fn test_rejects_bad_toml() {
        assert!(matches!(
            Config::from_toml_str("[timing\n"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"\nfile = \"/tmp/sv.log\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/sv.log")));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
