//! KPI Summary
//!
//! Headcount, mean aggregate score, pass rate and rule-level counts.

use serde::{Deserialize, Serialize};

use crate::logic::features::FeatureSet;
use crate::logic::rules::{classify, RiskLevel};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub count: usize,
    /// Mean over records with an aggregate score
    pub avg_score: Option<f64>,
    /// Share of passing records among those with a defined pass flag
    pub pass_rate: Option<f64>,
    pub high_risk: usize,
    pub mid_risk: usize,
    pub low_risk: usize,
    pub unresolved: usize,
}

pub fn kpi_summary(features: &[FeatureSet]) -> KpiSummary {
    let mut summary = KpiSummary {
        count: features.len(),
        ..Default::default()
    };

    let scores: Vec<f64> = features.iter().filter_map(|f| f.aggregate_score).collect();
    if !scores.is_empty() {
        summary.avg_score = Some(scores.iter().sum::<f64>() / scores.len() as f64);
    }

    let flags: Vec<bool> = features.iter().filter_map(|f| f.pass_flag).collect();
    if !flags.is_empty() {
        let passed = flags.iter().filter(|p| **p).count();
        summary.pass_rate = Some(passed as f64 / flags.len() as f64);
    }

    for feature_set in features {
        match classify(feature_set).risk_level {
            Some(RiskLevel::High) => summary.high_risk += 1,
            Some(RiskLevel::Mid) => summary.mid_risk += 1,
            Some(RiskLevel::Low) => summary.low_risk += 1,
            None => summary.unresolved += 1,
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::{derive_features, RawRecord};

    #[test]
    fn test_kpi_summary() {
        let features: Vec<_> = [
            RawRecord::new("a", 16).with_attendance(0.9).with_scores(80.0, 80.0, 80.0),
            RawRecord::new("b", 16).with_attendance(0.9).with_scores(50.0, 50.0, 50.0),
            RawRecord::new("c", 16).with_attendance(0.8).with_scores(90.0, 90.0, 90.0),
            RawRecord::new("d", 16),
        ]
        .iter()
        .map(derive_features)
        .collect();

        let summary = kpi_summary(&features);
        assert_eq!(summary.count, 4);
        assert!((summary.avg_score.unwrap() - 73.333333333).abs() < 1e-6);
        assert!((summary.pass_rate.unwrap() - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.high_risk, 1);
        assert_eq!(summary.mid_risk, 1);
        assert_eq!(summary.low_risk, 1);
        assert_eq!(summary.unresolved, 1);
    }

    #[test]
    fn test_empty_population() {
        let summary = kpi_summary(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.avg_score, None);
        assert_eq!(summary.pass_rate, None);
    }
}
