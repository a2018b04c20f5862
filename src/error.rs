//! Error handling
//!
//! Only contract violations are errors. Missing features and an unavailable
//! model are ordinary data and travel through reasons and audit records.

use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

/// Rejected reconciliation policy
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be within [0, 1], got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f64 },

    #[error("high probability threshold {high} must be greater than low threshold {low}")]
    ThresholdOrder { high: f64, low: f64 },

    #[error("environment variable {var} has invalid value {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Rejected input at evaluation time
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("failure probability {value} is outside [0, 1]")]
    InvalidProbability { value: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::InvalidProbability { value: 1.5 };
        assert_eq!(err.to_string(), "failure probability 1.5 is outside [0, 1]");

        let err: EngineError = ConfigError::ThresholdOrder { high: 0.1, low: 0.6 }.into();
        assert!(err.to_string().starts_with("invalid configuration:"));
    }
}
