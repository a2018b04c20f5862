//! Rule Types
//!
//! Core types for rule-based risk classification.
//! No logic here - only data structures.

use serde::{Deserialize, Serialize};

use crate::logic::features::{MissingFeature, Subject};

// ============================================================================
// RISK LEVEL
// ============================================================================

/// Ordered risk levels. Comparisons always go through the rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low = 0,
    Mid = 1,
    High = 2,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Mid, RiskLevel::High];

    pub fn rank(&self) -> u8 {
        *self as u8
    }

    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.get(rank as usize).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Mid => "Mid",
            RiskLevel::High => "High",
        }
    }

    /// Absolute rank distance between two levels
    pub fn distance(&self, other: RiskLevel) -> u8 {
        self.rank().abs_diff(other.rank())
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Label for a level that may be unresolved
pub fn level_label(level: Option<RiskLevel>) -> &'static str {
    level.map_or("unknown", |l| l.as_str())
}

// ============================================================================
// WEAKEST AREA
// ============================================================================

/// Lowest-scoring subject
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeakestArea {
    pub subject: Subject,
    pub score: f64,
}

// ============================================================================
// RULE RESULT
// ============================================================================

/// Result of rule classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleResult {
    /// None when no rule leg was computable
    pub risk_level: Option<RiskLevel>,
    pub reason: String,
    #[serde(default)]
    pub missing: Vec<MissingFeature>,
    #[serde(default)]
    pub weakest: Option<WeakestArea>,
}

impl RuleResult {
    pub fn new(level: RiskLevel, reason: &str) -> Self {
        Self {
            risk_level: Some(level),
            reason: reason.to_string(),
            missing: vec![],
            weakest: None,
        }
    }

    pub fn unresolved(reason: &str) -> Self {
        Self {
            risk_level: None,
            reason: reason.to_string(),
            missing: vec![MissingFeature::AggregateScore, MissingFeature::Attendance],
            weakest: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.risk_level.is_some()
    }
}
