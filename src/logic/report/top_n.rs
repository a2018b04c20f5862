//! Model Risk Top-N
//!
//! Students with the highest model failure probability.

use serde::{Deserialize, Serialize};

use crate::logic::pipeline::Assessment;
use crate::logic::rules::RiskLevel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRiskEntry {
    pub index: usize,
    pub name: String,
    pub failure_probability: f64,
    pub rule_level: Option<RiskLevel>,
    pub final_risk_level: Option<RiskLevel>,
}

/// Top `n` assessments by failure probability, highest first.
/// Assessments without a model probability are left out.
pub fn model_risk_top_n(assessments: &[Assessment], n: usize) -> Vec<ModelRiskEntry> {
    let mut entries: Vec<ModelRiskEntry> = assessments
        .iter()
        .filter_map(|a| {
            let failure_probability = a.decision.audit.model_probability?;
            Some(ModelRiskEntry {
                index: a.subject.index,
                name: a.subject.name.clone(),
                failure_probability,
                rule_level: a.rule.risk_level,
                final_risk_level: a.decision.final_risk_level,
            })
        })
        .collect();

    entries.sort_by(|a, b| b.failure_probability.total_cmp(&a.failure_probability));
    entries.truncate(n);
    entries
}
