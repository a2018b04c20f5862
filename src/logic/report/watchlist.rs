//! Risk Watchlist
//!
//! Mid and High students by rule level: High first, then lowest aggregate
//! score, then lowest attendance. Missing values sort last.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::logic::features::FeatureSet;
use crate::logic::rules::{classify, RiskLevel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub index: usize,
    pub name: String,
    pub risk_level: RiskLevel,
    pub aggregate_score: Option<f64>,
    pub attendance: Option<f64>,
    pub reason: String,
}

/// Ascending, with None after every value
fn ascending_missing_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn risk_watchlist(features: &[FeatureSet]) -> Vec<WatchlistEntry> {
    let mut entries: Vec<WatchlistEntry> = features
        .iter()
        .enumerate()
        .filter_map(|(index, feature_set)| {
            let rule = classify(feature_set);
            let risk_level = rule.risk_level.filter(|level| *level >= RiskLevel::Mid)?;
            Some(WatchlistEntry {
                index,
                name: feature_set.name.clone(),
                risk_level,
                aggregate_score: feature_set.aggregate_score,
                attendance: feature_set.attendance,
                reason: rule.reason,
            })
        })
        .collect();

    entries.sort_by(|a, b| {
        b.risk_level
            .cmp(&a.risk_level)
            .then_with(|| ascending_missing_last(a.aggregate_score, b.aggregate_score))
            .then_with(|| ascending_missing_last(a.attendance, b.attendance))
    });

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::{derive_features, RawRecord};

    #[test]
    fn test_watchlist_order() {
        let features: Vec<_> = [
            RawRecord::new("fine", 16).with_attendance(0.95).with_scores(90.0, 90.0, 90.0),
            RawRecord::new("mid", 16).with_attendance(0.9).with_scores(65.0, 65.0, 65.0),
            RawRecord::new("high-attendance", 16).with_attendance(0.5).with_scores(80.0, 80.0, 80.0),
            RawRecord::new("high-score", 16).with_attendance(0.9).with_scores(40.0, 40.0, 40.0),
            RawRecord::new("high-no-score", 16).with_attendance(0.6),
        ]
        .iter()
        .map(derive_features)
        .collect();

        let list = risk_watchlist(&features);
        let names: Vec<_> = list.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, vec!["high-score", "high-attendance", "high-no-score", "mid"]);
        assert_eq!(list[3].risk_level, RiskLevel::Mid);
        assert_eq!(list[0].index, 3);
    }
}
