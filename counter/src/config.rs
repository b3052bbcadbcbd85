//! Counter tunables.
//!
//! Defaults reproduce the stock page behavior: a 2 second animation that
//! starts once half of the element is on screen. Hosts may override any field
//! from JSON; missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_DURATION_MS, DEFAULT_VISIBILITY_THRESHOLD};
use crate::error::CounterError;

/// What to do with a counter whose target attribute is missing or not a
/// finite number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidTargetPolicy {
    /// Render the suffix alone and settle without animating.
    #[default]
    Skip,
    /// Animate anyway; every frame renders `NaN` followed by the suffix.
    #[serde(rename = "render_nan")]
    RenderNaN,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Animation length in milliseconds.
    pub duration_ms: f64,
    /// Minimum intersection ratio that starts a counter.
    pub threshold: f64,
    pub invalid_target: InvalidTargetPolicy,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            threshold: DEFAULT_VISIBILITY_THRESHOLD,
            invalid_target: InvalidTargetPolicy::default(),
        }
    }
}

impl CounterConfig {
    /// Decode and validate a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::Config`] for malformed JSON and the validation
    /// errors of [`CounterConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, CounterError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field ranges.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::InvalidDuration`] unless the duration is finite
    /// and positive, and [`CounterError::InvalidThreshold`] unless the
    /// threshold lies in `(0, 1]`.
    pub fn validate(&self) -> Result<(), CounterError> {
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(CounterError::InvalidDuration(self.duration_ms));
        }
        let in_range = self.threshold > 0.0 && self.threshold <= 1.0;
        if !in_range {
            return Err(CounterError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}
