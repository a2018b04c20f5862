//! Model Signal Types
//!
//! What the external model hands back for one student.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Opaque model metadata, passed through to audit records uninterpreted
pub type ModelMetadata = serde_json::Map<String, serde_json::Value>;

/// Output of the model port for one record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ModelSignal {
    /// Probability that the student fails, expected in [0, 1]
    Available { failure_probability: f64 },
    /// Model not ready, inputs missing, or the call failed
    Unavailable { cause: String },
}

impl ModelSignal {
    pub fn available(failure_probability: f64) -> Self {
        ModelSignal::Available { failure_probability }
    }

    pub fn unavailable(cause: impl Into<String>) -> Self {
        ModelSignal::Unavailable { cause: cause.into() }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, ModelSignal::Available { .. })
    }

    /// Raw probability, unchecked
    pub fn probability(&self) -> Option<f64> {
        match self {
            ModelSignal::Available { failure_probability } => Some(*failure_probability),
            ModelSignal::Unavailable { .. } => None,
        }
    }

    /// Probability checked against [0, 1]. Out-of-range values are rejected,
    /// never clamped.
    pub fn checked_probability(&self) -> EngineResult<Option<f64>> {
        match self.probability() {
            Some(p) if !(0.0..=1.0).contains(&p) => Err(EngineError::InvalidProbability { value: p }),
            other => Ok(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_probability() {
        assert_eq!(ModelSignal::available(0.0).checked_probability(), Ok(Some(0.0)));
        assert_eq!(ModelSignal::available(1.0).checked_probability(), Ok(Some(1.0)));
        assert_eq!(ModelSignal::unavailable("not ready").checked_probability(), Ok(None));
        assert_eq!(
            ModelSignal::available(1.2).checked_probability(),
            Err(EngineError::InvalidProbability { value: 1.2 })
        );
        assert!(ModelSignal::available(f64::NAN).checked_probability().is_err());
    }

    #[test]
    fn test_signal_json_shape() {
        let json = serde_json::to_value(ModelSignal::available(0.25)).unwrap();
        assert_eq!(json["status"], "available");
        assert_eq!(json["failure_probability"], 0.25);

        let signal: ModelSignal =
            serde_json::from_str(r#"{"status":"unavailable","cause":"model not ready"}"#).unwrap();
        assert_eq!(signal, ModelSignal::unavailable("model not ready"));
    }
}
