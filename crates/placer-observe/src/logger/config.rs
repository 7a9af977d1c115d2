use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

use crate::logger::{
    error::{LoggerError, LoggerResult},
    object::{LoggerFormat, LoggerLevel, LoggerTimeZone},
};

pub const ENV_LOG_FORMAT: &str = "PLACER_LOG_FORMAT";
pub const ENV_LOG_LEVEL: &str = "PLACER_LOG_LEVEL";
pub const ENV_LOG_TZ: &str = "PLACER_LOG_TZ";
pub const ENV_LOG_COLOR: &str = "PLACER_LOG_COLOR";

/// Logger configuration.
///
/// Every field has a default, so a partial (or empty) document deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    /// `EnvFilter` directives.
    pub level: LoggerLevel,
    pub tz: LoggerTimeZone,
    /// Print the event target (module path).
    pub with_targets: bool,
    /// Colorize text output when the output stream is a terminal.
    pub use_color: bool,
    /// Write to stderr instead of stdout.
    pub stderr: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            tz: LoggerTimeZone::default(),
            with_targets: false,
            use_color: true,
            stderr: false,
        }
    }
}

impl LoggerConfig {
    /// Defaults overlaid with the `PLACER_LOG_*` environment variables.
    pub fn from_env() -> LoggerResult<Self> {
        Self::default().overlay(|var| std::env::var(var).ok())
    }

    /// Replace fields for which `lookup` returns a value.
    ///
    /// `lookup` receives the variable names `PLACER_LOG_FORMAT`, `PLACER_LOG_LEVEL`,
    /// `PLACER_LOG_TZ` and `PLACER_LOG_COLOR`. Blank values are ignored.
    pub fn overlay<F>(mut self, lookup: F) -> LoggerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(ENV_LOG_FORMAT) {
            self.format = v.parse()?;
        }
        if let Some(v) = get(ENV_LOG_LEVEL) {
            self.level = v.parse()?;
        }
        if let Some(v) = get(ENV_LOG_TZ) {
            self.tz = v.parse()?;
        }
        if let Some(v) = get(ENV_LOG_COLOR) {
            self.use_color = parse_bool(ENV_LOG_COLOR, &v)?;
        }
        Ok(self)
    }

    /// Color is used only when enabled and the output stream is a terminal.
    pub fn should_use_color(&self) -> bool {
        let tty = if self.stderr {
            std::io::stderr().is_terminal()
        } else {
            std::io::stdout().is_terminal()
        };
        self.use_color && tty
    }
}

fn parse_bool(var: &'static str, value: &str) -> LoggerResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(LoggerError::InvalidEnv {
            var,
            value: value.to_string(),
        }),
    }
}
