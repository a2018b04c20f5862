//! Student Risk Core
//!
//! Assesses academic risk per student and reconciles a rule-based risk level
//! with an externally supplied failure probability into one explainable
//! decision. Also screens a population for rule/model disagreement.
//!
//! ## Structure
//! - `logic::features` - raw records and derived features
//! - `logic::rules` - interpretable rule classifier
//! - `logic::model` - port to the external probabilistic model
//! - `logic::decision` - reconciliation engine
//! - `logic::conflict` - population conflict detector
//! - `logic::pipeline` - per-record and population assessment
//! - `logic::report` - KPI, watchlist, top-N, profile, data quality and age reports

pub mod constants;
pub mod error;
pub mod logic;

pub use error::{ConfigError, EngineError, EngineResult};

pub use logic::features::{derive_features, FeatureSet, FieldValue, MissingFeature, RawRecord, Subject};
pub use logic::rules::{classify, RiskLevel, RuleResult};
pub use logic::model::{query_model, ModelMetadata, ModelPort, ModelSignal};
pub use logic::decision::{evaluate, evaluate_with_metadata, Decision, ReconciliationConfig};
pub use logic::conflict::{detect_conflicts, scan, ConflictRecord, ConflictScan, ConflictType, PopulationEntry};
pub use logic::pipeline::{assess, assess_population, scan_assessments, scan_population, Assessment};
pub use logic::report::{
    age_summary, data_quality_report, kpi_summary, model_risk_top_n, risk_watchlist, student_profile,
    top_n_oldest, AgeSummary, DataQualityReport, KpiSummary, StudentProfile,
};
