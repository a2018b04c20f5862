//! Decision Types
//!
//! Core types for reconciled decisions.
//! No logic here - only data structures.

use serde::{Deserialize, Serialize};

use crate::logic::features::MissingFeature;
use crate::logic::model::{ModelMetadata, ProbabilityThresholds};
use crate::logic::rules::RiskLevel;

// ============================================================================
// RECOMMENDED ACTION
// ============================================================================

/// What the school should do about a final risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    Intervene,
    Monitor,
    Observe,
    InsufficientData,
}

impl RecommendedAction {
    pub fn for_level(level: Option<RiskLevel>) -> Self {
        match level {
            Some(RiskLevel::High) => RecommendedAction::Intervene,
            Some(RiskLevel::Mid) => RecommendedAction::Monitor,
            Some(RiskLevel::Low) => RecommendedAction::Observe,
            None => RecommendedAction::InsufficientData,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendedAction::Intervene => "intervene",
            RecommendedAction::Monitor => "monitor",
            RecommendedAction::Observe => "observe",
            RecommendedAction::InsufficientData => "insufficient_data",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RecommendedAction::Intervene => {
                "intervene: escalate to guardian/tutor contact, review attendance and weak subject this week"
            }
            RecommendedAction::Monitor => "monitor: weekly quiz tracking, watch attendance and weak subject",
            RecommendedAction::Observe => "observe: maintain pace, consider enrichment",
            RecommendedAction::InsufficientData => "insufficient data: request more input",
        }
    }
}

impl std::fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

// ============================================================================
// AUDIT
// ============================================================================

/// Everything needed to replay a decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionAudit {
    pub rule_level: Option<RiskLevel>,
    /// Raw model probability; None when the model did not participate
    pub model_probability: Option<f64>,
    pub model_level: Option<RiskLevel>,
    /// Recorded even when the model was unavailable
    pub thresholds: ProbabilityThresholds,
    pub safety_first: bool,
    pub missing_features: Vec<MissingFeature>,
    pub model_unavailable_cause: Option<String>,
    pub model_metadata: ModelMetadata,
}

// ============================================================================
// DECISION
// ============================================================================

/// Final reconciled decision for one student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// None = unknown (rule unresolved and no model)
    pub final_risk_level: Option<RiskLevel>,
    pub action: String,
    pub action_kind: RecommendedAction,
    pub reasons: Vec<String>,
    /// Rule and model at least two levels apart
    pub disagreement: bool,
    pub audit: DecisionAudit,
}

impl Decision {
    pub fn needs_review(&self) -> bool {
        self.disagreement
    }
}
