//! Probability Thresholds
//!
//! Maps a failure probability onto the rule levels.
//! Both boundaries are inclusive: p >= high is High, p <= low is Low.

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{DEFAULT_HIGH_PROB_THRESHOLD, DEFAULT_LOW_PROB_THRESHOLD};
use crate::error::ConfigError;
use crate::logic::rules::RiskLevel;

/// Validated probability thresholds (0 <= low < high <= 1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProbabilityThresholds {
    high: f64,
    low: f64,
}

// Deserialization goes through `new` so invalid thresholds never load
impl<'de> Deserialize<'de> for ProbabilityThresholds {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            high: f64,
            low: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.high, raw.low).map_err(serde::de::Error::custom)
    }
}

impl Default for ProbabilityThresholds {
    fn default() -> Self {
        Self {
            high: DEFAULT_HIGH_PROB_THRESHOLD,
            low: DEFAULT_LOW_PROB_THRESHOLD,
        }
    }
}

impl ProbabilityThresholds {
    pub fn new(high: f64, low: f64) -> Result<Self, ConfigError> {
        check_unit("high probability threshold", high)?;
        check_unit("low probability threshold", low)?;
        if high <= low {
            return Err(ConfigError::ThresholdOrder { high, low });
        }
        Ok(Self { high, low })
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    /// Model level for a probability already checked to be in [0, 1]
    pub fn level_for(&self, probability: f64) -> RiskLevel {
        if probability >= self.high {
            RiskLevel::High
        } else if probability <= self.low {
            RiskLevel::Low
        } else {
            RiskLevel::Mid
        }
    }
}

fn check_unit(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ThresholdOutOfRange { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let t = ProbabilityThresholds::default();
        assert_eq!(t.high(), 0.60);
        assert_eq!(t.low(), 0.10);
    }

    #[test]
    fn test_inclusive_boundaries() {
        let t = ProbabilityThresholds::default();
        assert_eq!(t.level_for(0.60), RiskLevel::High);
        assert_eq!(t.level_for(0.10), RiskLevel::Low);
        assert_eq!(t.level_for(0.5999), RiskLevel::Mid);
        assert_eq!(t.level_for(0.1001), RiskLevel::Mid);
        assert_eq!(t.level_for(0.0), RiskLevel::Low);
        assert_eq!(t.level_for(1.0), RiskLevel::High);
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        assert!(matches!(
            ProbabilityThresholds::new(1.2, 0.1),
            Err(ConfigError::ThresholdOutOfRange { .. })
        ));
        assert!(matches!(
            ProbabilityThresholds::new(0.6, -0.1),
            Err(ConfigError::ThresholdOutOfRange { .. })
        ));
        assert!(matches!(
            ProbabilityThresholds::new(f64::NAN, 0.1),
            Err(ConfigError::ThresholdOutOfRange { .. })
        ));
        assert_eq!(
            ProbabilityThresholds::new(0.3, 0.3),
            Err(ConfigError::ThresholdOrder { high: 0.3, low: 0.3 })
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: ProbabilityThresholds = serde_json::from_str(r#"{"high":0.7,"low":0.2}"#).unwrap();
        assert_eq!(ok.high(), 0.7);

        let bad = serde_json::from_str::<ProbabilityThresholds>(r#"{"high":0.2,"low":0.7}"#);
        assert!(bad.is_err());
    }
}
