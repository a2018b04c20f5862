//! Rule Classifier
//!
//! Only the classify logic - no types, no reconciliation.
//! Input: FeatureSet
//! Output: RuleResult

use crate::logic::features::{FeatureSet, MissingFeature};

use super::thresholds::{
    HIGH_RISK_ATTENDANCE, HIGH_RISK_SCORE, MID_RISK_ATTENDANCE, MID_RISK_SCORE,
};
use super::types::{RiskLevel, RuleResult, WeakestArea};

// ============================================================================
// MAIN CLASSIFICATION FUNCTION
// ============================================================================

/// Classify one student.
///
/// Each computable leg escalates independently (High over Mid over Low).
/// Missing inputs are named in the reason; when neither the aggregate score
/// nor attendance is available the level stays unresolved instead of Low.
pub fn classify(features: &FeatureSet) -> RuleResult {
    let mut level: Option<RiskLevel> = None;
    let mut reasons = Vec::new();

    // Aggregate score leg
    match features.aggregate_score {
        Some(avg) if avg < HIGH_RISK_SCORE => {
            level = level.max(Some(RiskLevel::High));
            reasons.push(format!("average score {:.2} below {}", avg, HIGH_RISK_SCORE));
        }
        Some(avg) if avg < MID_RISK_SCORE => {
            level = level.max(Some(RiskLevel::Mid));
            reasons.push(format!(
                "average score {:.2} borderline ({}-{})",
                avg, HIGH_RISK_SCORE, MID_RISK_SCORE
            ));
        }
        Some(_) => level = level.max(Some(RiskLevel::Low)),
        None => reasons.push(MissingFeature::AggregateScore.to_string()),
    }

    // Attendance leg
    match features.attendance {
        Some(att) if att < HIGH_RISK_ATTENDANCE => {
            level = level.max(Some(RiskLevel::High));
            reasons.push(format!("attendance {:.2} below {}", att, HIGH_RISK_ATTENDANCE));
        }
        Some(att) if att < MID_RISK_ATTENDANCE => {
            level = level.max(Some(RiskLevel::Mid));
            reasons.push(format!(
                "attendance {:.2} borderline ({}-{})",
                att, HIGH_RISK_ATTENDANCE, MID_RISK_ATTENDANCE
            ));
        }
        Some(_) => level = level.max(Some(RiskLevel::Low)),
        None => reasons.push(MissingFeature::Attendance.to_string()),
    }

    let weakest = features
        .scores
        .weakest()
        .map(|(subject, score)| WeakestArea { subject, score });
    if let Some(area) = &weakest {
        reasons.push(format!("weakest area: {} ({:.0})", area.subject, area.score));
    }

    let missing = features.missing();
    if level.is_none() {
        log::debug!("Rule level unresolved for {:?}: {:?}", features.name, missing);
    }

    RuleResult {
        risk_level: level,
        reason: reasons.join("; "),
        missing,
        weakest,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::{derive_features, RawRecord, Subject};

    fn features(avg: Option<f64>, attendance: Option<f64>) -> FeatureSet {
        let mut record = RawRecord::new("t", 16);
        if let Some(avg) = avg {
            record = record.with_scores(avg, avg, avg);
        }
        if let Some(att) = attendance {
            record = record.with_attendance(att);
        }
        derive_features(&record)
    }

    #[test]
    fn test_low_when_both_healthy() {
        for (avg, att) in [(70.0, 0.85), (85.0, 0.9), (100.0, 1.0)] {
            let result = classify(&features(Some(avg), Some(att)));
            assert_eq!(result.risk_level, Some(RiskLevel::Low), "avg={avg} att={att}");
        }
    }

    #[test]
    fn test_high_regardless_of_other_leg() {
        for other in [0.0f64, 0.5, 0.8, 1.0] {
            let result = classify(&features(Some(59.9), Some(other)));
            assert_eq!(result.risk_level, Some(RiskLevel::High), "att={other}");
        }
        for avg in [10.0, 65.0, 95.0] {
            let result = classify(&features(Some(avg), Some(0.74)));
            assert_eq!(result.risk_level, Some(RiskLevel::High));
        }
    }

    const SCORE_BANDS: [(f64, RiskLevel); 6] = [
        (0.0, RiskLevel::High),
        (59.99, RiskLevel::High),
        (60.0, RiskLevel::Mid),
        (69.99, RiskLevel::Mid),
        (70.0, RiskLevel::Low),
        (100.0, RiskLevel::Low),
    ];

    const ATTENDANCE_BANDS: [(f64, RiskLevel); 6] = [
        (0.0, RiskLevel::High),
        (0.7499, RiskLevel::High),
        (0.75, RiskLevel::Mid),
        (0.8499, RiskLevel::Mid),
        (0.85, RiskLevel::Low),
        (1.0, RiskLevel::Low),
    ];

    /// Every score band edge crossed with every attendance band edge
    #[test]
    fn test_band_edges_grid() {
        for (avg, score_level) in SCORE_BANDS {
            for (att, attendance_level) in ATTENDANCE_BANDS {
                let result = classify(&features(Some(avg), Some(att)));
                assert_eq!(
                    result.risk_level,
                    Some(score_level.max(attendance_level)),
                    "avg={avg} att={att}"
                );
            }
        }
    }

    /// With one leg missing the other leg alone decides, at every edge
    #[test]
    fn test_band_edges_single_leg() {
        for (avg, level) in SCORE_BANDS {
            assert_eq!(classify(&features(Some(avg), None)).risk_level, Some(level), "avg={avg}");
        }
        for (att, level) in ATTENDANCE_BANDS {
            assert_eq!(classify(&features(None, Some(att))).risk_level, Some(level), "att={att}");
        }
    }

    #[test]
    fn test_mid_bands() {
        let result = classify(&features(Some(60.0), Some(0.95)));
        assert_eq!(result.risk_level, Some(RiskLevel::Mid));
        assert!(result.reason.contains("borderline"));

        let result = classify(&features(Some(90.0), Some(0.75)));
        assert_eq!(result.risk_level, Some(RiskLevel::Mid));
        assert!(result.reason.contains("attendance 0.75 borderline"));
    }

    #[test]
    fn test_missing_attendance_still_applies_score_leg() {
        let result = classify(&features(Some(50.0), None));
        assert_eq!(result.risk_level, Some(RiskLevel::High));
        assert!(result.reason.contains("attendance missing"));
        assert_eq!(result.missing, vec![MissingFeature::Attendance]);

        let result = classify(&features(Some(90.0), None));
        assert_eq!(result.risk_level, Some(RiskLevel::Low));
        assert!(result.reason.contains("attendance missing"));
    }

    #[test]
    fn test_missing_score_still_applies_attendance_leg() {
        let result = classify(&features(None, Some(0.8)));
        assert_eq!(result.risk_level, Some(RiskLevel::Mid));
        assert!(result.reason.contains("average score missing"));
        assert!(result.weakest.is_none());
    }

    #[test]
    fn test_nothing_computable_is_unresolved() {
        let result = classify(&features(None, None));
        assert_eq!(result.risk_level, None);
        assert!(result.reason.contains("average score missing"));
        assert!(result.reason.contains("attendance missing"));
    }

    #[test]
    fn test_reason_names_weakest_area() {
        let record = RawRecord::new("w", 16)
            .with_attendance(0.9)
            .with_score(Subject::Math, 45.0)
            .with_score(Subject::English, 80.0)
            .with_score(Subject::Science, 45.0);
        let result = classify(&derive_features(&record));

        assert_eq!(result.weakest.map(|w| w.subject), Some(Subject::Math));
        assert!(result.reason.contains("weakest area: math (45)"));
    }
}
