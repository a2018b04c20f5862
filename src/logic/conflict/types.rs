//! Conflict Types
//!
//! Core types for population conflict screening.
//! No logic here - only data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::logic::features::FeatureSet;
use crate::logic::model::ModelSignal;
use crate::logic::rules::{RiskLevel, RuleResult, WeakestArea};

// ============================================================================
// CONFLICT TYPE
// ============================================================================

/// Direction of a rule/model conflict. Declaration order is report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConflictType {
    /// Rule says Low/Mid, model says likely to fail
    UnderflaggedByRule,
    /// Rule says High, model says very likely to pass
    OverflaggedByRule,
}

impl ConflictType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictType::UnderflaggedByRule => "underflagged_by_rule",
            ConflictType::OverflaggedByRule => "overflagged_by_rule",
        }
    }
}

impl std::fmt::Display for ConflictType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SUBJECT & FEATURES
// ============================================================================

/// Who a population entry belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubjectIdentity {
    /// Position in the snapshot
    pub index: usize,
    pub name: String,
}

impl SubjectIdentity {
    pub fn new(index: usize, name: &str) -> Self {
        Self {
            index,
            name: name.to_string(),
        }
    }
}

/// Features shown to reviewers next to a conflict
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportingFeatures {
    pub aggregate_score: Option<f64>,
    pub attendance: Option<f64>,
    pub pass_flag: Option<bool>,
    pub weakest: Option<WeakestArea>,
}

impl SupportingFeatures {
    pub fn from_features(features: &FeatureSet) -> Self {
        Self {
            aggregate_score: features.aggregate_score,
            attendance: features.attendance,
            pass_flag: features.pass_flag,
            weakest: features.scores.weakest().map(|(subject, score)| WeakestArea { subject, score }),
        }
    }
}

// ============================================================================
// INPUT
// ============================================================================

/// One (rule, model) pair of a population snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationEntry {
    pub subject: SubjectIdentity,
    pub rule: RuleResult,
    pub signal: ModelSignal,
    #[serde(default)]
    pub supporting: SupportingFeatures,
}

impl PopulationEntry {
    pub fn new(subject: SubjectIdentity, rule: RuleResult, signal: ModelSignal) -> Self {
        Self {
            subject,
            rule,
            signal,
            supporting: SupportingFeatures::default(),
        }
    }

    pub fn with_supporting(mut self, supporting: SupportingFeatures) -> Self {
        self.supporting = supporting;
        self
    }
}

// ============================================================================
// OUTPUT
// ============================================================================

/// A case for governance review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictRecord {
    pub conflict_type: ConflictType,
    pub subject: SubjectIdentity,
    pub rule_level: RiskLevel,
    pub failure_probability: f64,
    pub supporting_features: SupportingFeatures,
}

/// Entry excluded because its probability was outside [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedEntry {
    pub subject: SubjectIdentity,
    pub failure_probability: f64,
}

/// Result of one population scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictScan {
    pub scan_id: Uuid,
    pub scanned_at: DateTime<Utc>,
    pub limit: usize,
    pub total_entries: usize,
    pub skipped_unavailable: usize,
    pub skipped_unresolved: usize,
    pub rejected: Vec<RejectedEntry>,
    /// Conflicts before truncation to `limit`
    pub conflicts_found: usize,
    pub conflicts: Vec<ConflictRecord>,
}

impl ConflictScan {
    pub fn count_of(&self, conflict_type: ConflictType) -> usize {
        self.conflicts
            .iter()
            .filter(|c| c.conflict_type == conflict_type)
            .count()
    }

    pub fn is_truncated(&self) -> bool {
        self.conflicts_found > self.conflicts.len()
    }
}
