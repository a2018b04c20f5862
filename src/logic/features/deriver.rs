//! Feature Deriver
//!
//! RawRecord -> FeatureSet. Pure and stateless.

use serde::{Deserialize, Serialize};

use super::normalize::{normalize_age, normalize_attendance, normalize_score};
use super::record::{RawRecord, Subject};

/// Aggregate score at or above this value passes
pub const PASS_SCORE: f64 = 60.0;

// ============================================================================
// MISSING FEATURE MARKERS
// ============================================================================

/// Feature the rule classifier needed but could not compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFeature {
    AggregateScore,
    Attendance,
}

impl MissingFeature {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingFeature::AggregateScore => "average score",
            MissingFeature::Attendance => "attendance",
        }
    }
}

impl std::fmt::Display for MissingFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} missing", self.as_str())
    }
}

// ============================================================================
// SUBJECT SCORES
// ============================================================================

/// Normalized subject scores
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectScores {
    pub math: Option<f64>,
    pub english: Option<f64>,
    pub science: Option<f64>,
}

impl SubjectScores {
    pub fn get(&self, subject: Subject) -> Option<f64> {
        match subject {
            Subject::Math => self.math,
            Subject::English => self.english,
            Subject::Science => self.science,
        }
    }

    /// Present scores in canonical order
    pub fn present(&self) -> impl Iterator<Item = (Subject, f64)> + '_ {
        Subject::CANONICAL
            .into_iter()
            .filter_map(move |subject| self.get(subject).map(|score| (subject, score)))
    }

    /// Mean of the present scores
    pub fn mean(&self) -> Option<f64> {
        let (sum, count) = self
            .present()
            .fold((0.0, 0usize), |(sum, count), (_, score)| (sum + score, count + 1));
        (count > 0).then(|| sum / count as f64)
    }

    /// Lowest present score; ties go to the earlier subject in canonical order
    pub fn weakest(&self) -> Option<(Subject, f64)> {
        self.present().fold(None, |lowest, (subject, score)| match lowest {
            Some((_, low)) if score >= low => lowest,
            _ => Some((subject, score)),
        })
    }
}

// ============================================================================
// FEATURE SET
// ============================================================================

/// Derived, immutable view of one student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub name: String,
    /// Whole years in [1, 120]
    pub age: Option<u32>,
    /// Fraction in [0, 1]
    pub attendance: Option<f64>,
    pub scores: SubjectScores,
    /// Mean of present subject scores
    pub aggregate_score: Option<f64>,
    /// aggregate_score >= PASS_SCORE
    pub pass_flag: Option<bool>,
}

impl FeatureSet {
    /// Features the rule classifier will have to do without
    pub fn missing(&self) -> Vec<MissingFeature> {
        let mut missing = Vec::new();
        if self.aggregate_score.is_none() {
            missing.push(MissingFeature::AggregateScore);
        }
        if self.attendance.is_none() {
            missing.push(MissingFeature::Attendance);
        }
        missing
    }
}

/// Derive features from a raw record
pub fn derive_features(record: &RawRecord) -> FeatureSet {
    let score = |subject| record.score(subject).and_then(normalize_score);
    let scores = SubjectScores {
        math: score(Subject::Math),
        english: score(Subject::English),
        science: score(Subject::Science),
    };

    let aggregate_score = scores.mean();

    FeatureSet {
        name: record.name.clone(),
        age: record.age.as_ref().and_then(normalize_age),
        attendance: record.attendance.as_ref().and_then(normalize_attendance),
        scores,
        aggregate_score,
        pass_flag: aggregate_score.map(|avg| avg >= PASS_SCORE),
    }
}
