//! Reconciliation Configuration
//!
//! The only tunable policy of the engine. Validated once at construction;
//! one instance can be shared read-only across every evaluation and thread.

use serde::{Deserialize, Serialize};

use crate::constants::{
    parse_switch, DEFAULT_SAFETY_FIRST, ENV_HIGH_PROB_THRESHOLD, ENV_LOW_PROB_THRESHOLD,
    ENV_SAFETY_FIRST,
};
use crate::error::ConfigError;
use crate::logic::model::ProbabilityThresholds;

// ============================================================================
// RECONCILIATION CONFIG
// ============================================================================

/// Policy for combining the rule level with the model probability
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconciliationConfig {
    thresholds: ProbabilityThresholds,
    /// Resolve disagreement toward the more severe level
    safety_first: bool,
}

impl Default for ReconciliationConfig {
    fn default() -> Self {
        Self {
            thresholds: ProbabilityThresholds::default(),
            safety_first: DEFAULT_SAFETY_FIRST,
        }
    }
}

impl ReconciliationConfig {
    pub fn new(high: f64, low: f64, safety_first: bool) -> Result<Self, ConfigError> {
        Ok(Self {
            thresholds: ProbabilityThresholds::new(high, low)?,
            safety_first,
        })
    }

    /// Conservative mode - disagreement never lowers severity
    pub fn conservative() -> Self {
        Self {
            safety_first: true,
            ..Default::default()
        }
    }

    /// Balanced mode - rounded mean of rule and model ranks
    pub fn balanced() -> Self {
        Self {
            safety_first: false,
            ..Default::default()
        }
    }

    /// Load from environment, falling back to defaults for unset variables.
    /// A set but unparseable variable is an error, not a silent default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let number = |var: &'static str, fallback: f64| -> Result<f64, ConfigError> {
            match lookup(var) {
                None => Ok(fallback),
                Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnv { var, value }),
            }
        };

        let high = number(ENV_HIGH_PROB_THRESHOLD, defaults.high_probability_threshold())?;
        let low = number(ENV_LOW_PROB_THRESHOLD, defaults.low_probability_threshold())?;
        let safety_first = match lookup(ENV_SAFETY_FIRST) {
            None => defaults.safety_first,
            Some(value) => parse_switch(&value).ok_or(ConfigError::InvalidEnv {
                var: ENV_SAFETY_FIRST,
                value,
            })?,
        };

        let config = Self::new(high, low, safety_first)?;
        log::info!(
            "Reconciliation config: high={:.2} low={:.2} safety_first={}",
            high, low, safety_first
        );
        Ok(config)
    }

    pub fn thresholds(&self) -> &ProbabilityThresholds {
        &self.thresholds
    }

    pub fn high_probability_threshold(&self) -> f64 {
        self.thresholds.high()
    }

    pub fn low_probability_threshold(&self) -> f64 {
        self.thresholds.low()
    }

    pub fn safety_first(&self) -> bool {
        self.safety_first
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ReconciliationConfig::default();
        assert_eq!(config.high_probability_threshold(), 0.60);
        assert_eq!(config.low_probability_threshold(), 0.10);
        assert!(config.safety_first());
    }

    #[test]
    fn test_presets() {
        assert!(ReconciliationConfig::conservative().safety_first());
        assert!(!ReconciliationConfig::balanced().safety_first());
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        assert!(ReconciliationConfig::new(0.1, 0.6, true).is_err());
        assert!(ReconciliationConfig::new(1.5, 0.1, true).is_err());
        assert!(ReconciliationConfig::new(0.8, 0.2, false).is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let config = ReconciliationConfig::from_lookup(lookup(&[
            (ENV_HIGH_PROB_THRESHOLD, "0.7"),
            (ENV_SAFETY_FIRST, "false"),
        ]))
        .unwrap();

        assert_eq!(config.high_probability_threshold(), 0.7);
        assert_eq!(config.low_probability_threshold(), 0.10);
        assert!(!config.safety_first());
    }

    #[test]
    fn test_env_empty_uses_defaults() {
        let config = ReconciliationConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ReconciliationConfig::default());
    }

    #[test]
    fn test_env_invalid_values() {
        let err = ReconciliationConfig::from_lookup(lookup(&[(ENV_LOW_PROB_THRESHOLD, "low")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: ENV_LOW_PROB_THRESHOLD, .. }));

        let err = ReconciliationConfig::from_lookup(lookup(&[(ENV_SAFETY_FIRST, "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: ENV_SAFETY_FIRST, .. }));

        let err = ReconciliationConfig::from_lookup(lookup(&[(ENV_HIGH_PROB_THRESHOLD, "0.05")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ThresholdOrder { .. }));
    }

    #[test]
    fn test_json_config() {
        let config: ReconciliationConfig =
            serde_json::from_str(r#"{"thresholds":{"high":0.5,"low":0.2},"safety_first":false}"#)
                .unwrap();
        assert_eq!(config.high_probability_threshold(), 0.5);
        assert!(!config.safety_first());

        let partial: ReconciliationConfig = serde_json::from_str(r#"{"safety_first":false}"#).unwrap();
        assert_eq!(partial.high_probability_threshold(), 0.60);

        let bad = serde_json::from_str::<ReconciliationConfig>(r#"{"thresholds":{"high":0.1,"low":0.5}}"#);
        assert!(bad.is_err());
    }
}
