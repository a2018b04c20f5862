//! Student Profile
//!
//! One student's features, rule result, weakest area, reconciled decision
//! and a study suggestion.

use serde::Serialize;

use crate::error::EngineResult;
use crate::logic::decision::{Decision, ReconciliationConfig};
use crate::logic::features::{FeatureSet, RawRecord};
use crate::logic::model::ModelPort;
use crate::logic::pipeline::assess;
use crate::logic::rules::{RiskLevel, RuleResult, WeakestArea};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentProfile {
    pub features: FeatureSet,
    pub rule: RuleResult,
    pub weakest: Option<WeakestArea>,
    pub decision: Decision,
    pub suggestion: &'static str,
}

/// Study suggestion for a rule level
pub fn suggestion_for(level: Option<RiskLevel>) -> &'static str {
    match level {
        Some(RiskLevel::High) => {
            "work on the weakest subject and attendance first; arrange a guardian/tutor conversation this week"
        }
        Some(RiskLevel::Mid) => "consolidate the weakest subject, keep attendance steady, check in with a weekly quiz",
        Some(RiskLevel::Low) => "keep the current pace; try stretch work or competitions",
        None => "collect the missing scores or attendance before planning support",
    }
}

pub fn student_profile<P: ModelPort + ?Sized>(
    record: &RawRecord,
    port: &P,
    config: &ReconciliationConfig,
) -> EngineResult<StudentProfile> {
    let assessment = assess(record, port, config)?;

    Ok(StudentProfile {
        weakest: assessment.rule.weakest,
        suggestion: suggestion_for(assessment.rule.risk_level),
        features: assessment.features,
        rule: assessment.rule,
        decision: assessment.decision,
    })
}
