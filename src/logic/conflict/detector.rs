//! Conflict Detector
//!
//! Two phases: every entry is screened independently (in parallel), then
//! the conflicts are sorted and truncated in one sequential step.

use std::cmp::Ordering;

use chrono::Utc;
use rayon::prelude::*;
use uuid::Uuid;

use crate::logic::decision::ReconciliationConfig;
use crate::logic::model::ProbabilityThresholds;
use crate::logic::rules::RiskLevel;

use super::types::{
    ConflictRecord, ConflictScan, ConflictType, PopulationEntry, RejectedEntry,
};

/// Outcome of screening a single entry
enum Screening {
    Conflict(ConflictRecord),
    Agreement,
    ModelUnavailable,
    RuleUnresolved,
    Rejected(RejectedEntry),
}

// ============================================================================
// PHASE 1: PER-ENTRY SCREENING
// ============================================================================

fn screen(entry: &PopulationEntry, thresholds: &ProbabilityThresholds) -> Screening {
    let probability = match entry.signal.checked_probability() {
        Ok(Some(p)) => p,
        Ok(None) => return Screening::ModelUnavailable,
        Err(_) => {
            return Screening::Rejected(RejectedEntry {
                subject: entry.subject.clone(),
                failure_probability: entry.signal.probability().unwrap_or(f64::NAN),
            })
        }
    };

    let Some(rule_level) = entry.rule.risk_level else {
        return Screening::RuleUnresolved;
    };

    let conflict_type = if rule_level < RiskLevel::High && probability >= thresholds.high() {
        ConflictType::UnderflaggedByRule
    } else if rule_level == RiskLevel::High && probability <= thresholds.low() {
        ConflictType::OverflaggedByRule
    } else {
        return Screening::Agreement;
    };

    Screening::Conflict(ConflictRecord {
        conflict_type,
        subject: entry.subject.clone(),
        rule_level,
        failure_probability: probability,
        supporting_features: entry.supporting.clone(),
    })
}

// ============================================================================
// PHASE 2: ORDERING
// ============================================================================

/// Underflagged first (most alarming probability first), then overflagged
/// (safest probability first)
fn compare_conflicts(a: &ConflictRecord, b: &ConflictRecord) -> Ordering {
    a.conflict_type.cmp(&b.conflict_type).then_with(|| match a.conflict_type {
        ConflictType::UnderflaggedByRule => b.failure_probability.total_cmp(&a.failure_probability),
        ConflictType::OverflaggedByRule => a.failure_probability.total_cmp(&b.failure_probability),
    })
}

// ============================================================================
// MAIN SCAN FUNCTION
// ============================================================================

/// Screen a population snapshot for rule/model conflicts
pub fn scan(entries: &[PopulationEntry], config: &ReconciliationConfig, limit: usize) -> ConflictScan {
    let thresholds = config.thresholds();

    let screened: Vec<Screening> = entries
        .par_iter()
        .map(|entry| screen(entry, thresholds))
        .collect();

    let mut conflicts = Vec::new();
    let mut rejected = Vec::new();
    let mut skipped_unavailable = 0;
    let mut skipped_unresolved = 0;

    for outcome in screened {
        match outcome {
            Screening::Conflict(record) => conflicts.push(record),
            Screening::Agreement => {}
            Screening::ModelUnavailable => skipped_unavailable += 1,
            Screening::RuleUnresolved => skipped_unresolved += 1,
            Screening::Rejected(entry) => {
                log::warn!(
                    "Rejected {:?} (#{}): failure probability {} outside [0, 1]",
                    entry.subject.name, entry.subject.index, entry.failure_probability
                );
                rejected.push(entry);
            }
        }
    }

    // stable: equal probabilities keep snapshot order
    conflicts.sort_by(compare_conflicts);
    let conflicts_found = conflicts.len();
    conflicts.truncate(limit);

    let scan = ConflictScan {
        scan_id: Uuid::new_v4(),
        scanned_at: Utc::now(),
        limit,
        total_entries: entries.len(),
        skipped_unavailable,
        skipped_unresolved,
        rejected,
        conflicts_found,
        conflicts,
    };

    log::info!(
        "Conflict scan {}: {} entries, {} conflicts ({} kept), {} without model",
        scan.scan_id, scan.total_entries, scan.conflicts_found, scan.conflicts.len(), scan.skipped_unavailable
    );

    scan
}

/// Ordered conflicts only, capped at `limit`
pub fn detect_conflicts(
    entries: &[PopulationEntry],
    config: &ReconciliationConfig,
    limit: usize,
) -> Vec<ConflictRecord> {
    scan(entries, config, limit).conflicts
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::conflict::SubjectIdentity;
    use crate::logic::model::ModelSignal;
    use crate::logic::rules::RuleResult;

    fn entry(index: usize, level: Option<RiskLevel>, signal: ModelSignal) -> PopulationEntry {
        let rule = match level {
            Some(level) => RuleResult::new(level, ""),
            None => RuleResult::unresolved(""),
        };
        PopulationEntry::new(SubjectIdentity::new(index, &format!("s{index}")), rule, signal)
    }

    fn names(conflicts: &[ConflictRecord]) -> Vec<&str> {
        conflicts.iter().map(|c| c.subject.name.as_str()).collect()
    }

    #[test]
    fn test_mixed_population() {
        let entries = vec![
            entry(0, Some(RiskLevel::Low), ModelSignal::available(0.65)),
            entry(1, Some(RiskLevel::High), ModelSignal::available(0.05)),
            entry(2, Some(RiskLevel::Mid), ModelSignal::available(0.90)),
            entry(3, Some(RiskLevel::Mid), ModelSignal::available(0.40)),
            entry(4, Some(RiskLevel::High), ModelSignal::available(0.80)),
        ];
        let conflicts = detect_conflicts(&entries, &ReconciliationConfig::default(), 10);

        assert_eq!(conflicts.len(), 3);
        assert_eq!(names(&conflicts), vec!["s2", "s0", "s1"]);
        assert_eq!(conflicts[0].conflict_type, ConflictType::UnderflaggedByRule);
        assert_eq!(conflicts[1].conflict_type, ConflictType::UnderflaggedByRule);
        assert_eq!(conflicts[2].conflict_type, ConflictType::OverflaggedByRule);
    }

    #[test]
    fn test_overflagged_sorted_ascending() {
        let entries = vec![
            entry(0, Some(RiskLevel::High), ModelSignal::available(0.08)),
            entry(1, Some(RiskLevel::High), ModelSignal::available(0.01)),
            entry(2, Some(RiskLevel::High), ModelSignal::available(0.10)),
        ];
        let conflicts = detect_conflicts(&entries, &ReconciliationConfig::default(), 10);
        assert_eq!(names(&conflicts), vec!["s1", "s0", "s2"]);
    }

    #[test]
    fn test_threshold_boundaries() {
        let entries = vec![
            entry(0, Some(RiskLevel::Mid), ModelSignal::available(0.60)),
            entry(1, Some(RiskLevel::Mid), ModelSignal::available(0.59)),
            entry(2, Some(RiskLevel::High), ModelSignal::available(0.10)),
            entry(3, Some(RiskLevel::High), ModelSignal::available(0.11)),
        ];
        let conflicts = detect_conflicts(&entries, &ReconciliationConfig::default(), 10);
        assert_eq!(names(&conflicts), vec!["s0", "s2"]);
    }

    #[test]
    fn test_truncates_after_sorting() {
        let entries = vec![
            entry(0, Some(RiskLevel::High), ModelSignal::available(0.02)),
            entry(1, Some(RiskLevel::Low), ModelSignal::available(0.70)),
            entry(2, Some(RiskLevel::Low), ModelSignal::available(0.95)),
        ];
        let result = scan(&entries, &ReconciliationConfig::default(), 2);

        assert_eq!(result.conflicts_found, 3);
        assert!(result.is_truncated());
        assert_eq!(names(&result.conflicts), vec!["s2", "s1"]);
        assert_eq!(result.count_of(ConflictType::OverflaggedByRule), 0);
    }

    #[test]
    fn test_skips_and_rejections() {
        let entries = vec![
            entry(0, Some(RiskLevel::Low), ModelSignal::unavailable("model not ready")),
            entry(1, None, ModelSignal::available(0.99)),
            entry(2, Some(RiskLevel::Low), ModelSignal::available(1.7)),
            entry(3, Some(RiskLevel::Low), ModelSignal::available(0.99)),
        ];
        let result = scan(&entries, &ReconciliationConfig::default(), 10);

        assert_eq!(result.total_entries, 4);
        assert_eq!(result.skipped_unavailable, 1);
        assert_eq!(result.skipped_unresolved, 1);
        assert_eq!(result.rejected.len(), 1);
        assert_eq!(result.rejected[0].subject.index, 2);
        assert_eq!(names(&result.conflicts), vec!["s3"]);
    }

    #[test]
    fn test_equal_probabilities_keep_input_order() {
        let entries: Vec<_> = (0..6)
            .map(|i| entry(i, Some(RiskLevel::Mid), ModelSignal::available(0.75)))
            .collect();
        let conflicts = detect_conflicts(&entries, &ReconciliationConfig::default(), 10);
        assert_eq!(names(&conflicts), vec!["s0", "s1", "s2", "s3", "s4", "s5"]);
    }

    #[test]
    fn test_empty_population_and_zero_limit() {
        let result = scan(&[], &ReconciliationConfig::default(), 10);
        assert!(result.conflicts.is_empty());
        assert_eq!(result.total_entries, 0);

        let entries = vec![entry(0, Some(RiskLevel::Low), ModelSignal::available(0.9))];
        assert!(detect_conflicts(&entries, &ReconciliationConfig::default(), 0).is_empty());
    }
}
