//! Raw Record Types
//!
//! Input snapshot handed over by the record store.
//! No normalization logic here - only data structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// FIELD VALUE
// ============================================================================

/// A numeric field as it arrives from the store: a number or a text to parse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

// ============================================================================
// SUBJECTS
// ============================================================================

/// Scored subjects, declared in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Math,
    English,
    Science,
}

impl Subject {
    /// Canonical order, also the weakest-area tie-break order
    pub const CANONICAL: [Subject; 3] = [Subject::Math, Subject::English, Subject::Science];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Math => "math",
            Subject::English => "english",
            Subject::Science => "science",
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RAW RECORD
// ============================================================================

/// One student as stored. Every measurement is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub name: String,
    /// Number or text, like the measurements
    #[serde(default)]
    pub age: Option<FieldValue>,
    #[serde(default)]
    pub attendance: Option<FieldValue>,
    #[serde(default)]
    pub math: Option<FieldValue>,
    #[serde(default)]
    pub english: Option<FieldValue>,
    #[serde(default)]
    pub science: Option<FieldValue>,
}

impl RawRecord {
    pub fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            age: Some(FieldValue::Number(f64::from(age))),
            ..Default::default()
        }
    }

    pub fn with_attendance(mut self, value: impl Into<FieldValue>) -> Self {
        self.attendance = Some(value.into());
        self
    }

    pub fn with_score(mut self, subject: Subject, value: impl Into<FieldValue>) -> Self {
        let slot = match subject {
            Subject::Math => &mut self.math,
            Subject::English => &mut self.english,
            Subject::Science => &mut self.science,
        };
        *slot = Some(value.into());
        self
    }

    /// Set all three scores in canonical order
    pub fn with_scores(self, math: f64, english: f64, science: f64) -> Self {
        self.with_score(Subject::Math, math)
            .with_score(Subject::English, english)
            .with_score(Subject::Science, science)
    }

    pub fn score(&self, subject: Subject) -> Option<&FieldValue> {
        match subject {
            Subject::Math => self.math.as_ref(),
            Subject::English => self.english.as_ref(),
            Subject::Science => self.science.as_ref(),
        }
    }
}
