//! Page configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server-rendered page may embed a JSON object in
//! `<script type="application/json" id="page-config">`. Every field is
//! optional; the defaults reproduce the stock site behavior. A malformed block
//! is reported and ignored rather than disabling the page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use counter::{CounterConfig, CounterError};
use serde::{Deserialize, Serialize};

use crate::state::dashboard::MOBILE_BREAKPOINT_PX;

/// Id of the inline JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_COUNTER_SELECTOR: &str = ".stat-number";
pub const DEFAULT_COUNTER_TARGET_ATTRIBUTE: &str = "data-target";
pub const DEFAULT_LOG_LEVEL: &str = "info";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid page config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Counter(#[from] CounterError),
    #[error("unknown log level: {0}")]
    LogLevel(String),
    #[error("invalid mobile breakpoint: {0}px")]
    Breakpoint(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `localStorage` key holding the theme preference.
    pub theme_storage_key: String,
    /// Viewport width at or below which tab selection closes the sidebar.
    pub mobile_breakpoint_px: f64,
    /// Selector for animated statistics.
    pub counter_selector: String,
    /// Attribute carrying each statistic's target value.
    pub counter_target_attribute: String,
    /// Console log level: `error`, `warn`, `info`, `debug`, or `trace`.
    pub log_level: String,
    pub counter: CounterConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            counter_selector: DEFAULT_COUNTER_SELECTOR.to_owned(),
            counter_target_attribute: DEFAULT_COUNTER_TARGET_ATTRIBUTE.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            counter: CounterConfig::default(),
        }
    }
}

impl PageConfig {
    /// Decode and validate the inline JSON block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON and any error from
    /// [`PageConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config from the optional inline block. Absent or blank
    /// input yields the defaults.
    ///
    /// # Errors
    ///
    /// Same as [`PageConfig::from_json`].
    pub fn from_inline(raw: Option<&str>) -> Result<Self, ConfigError> {
        match raw.map(str::trim) {
            Some(raw) if !raw.is_empty() => Self::from_json(raw),
            _ => Ok(Self::default()),
        }
    }

    /// Check field ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Counter`] for invalid counter tunables,
    /// [`ConfigError::LogLevel`] for an unknown level name, and
    /// [`ConfigError::Breakpoint`] for a negative or non-finite breakpoint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.counter.validate()?;
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::LogLevel(self.log_level.clone()));
        }
        if !self.mobile_breakpoint_px.is_finite() || self.mobile_breakpoint_px < 0.0 {
            return Err(ConfigError::Breakpoint(self.mobile_breakpoint_px));
        }
        Ok(())
    }
}
