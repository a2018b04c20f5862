//! Assessment Pipeline
//!
//! RawRecord -> FeatureSet -> {RuleResult, ModelSignal} -> Decision.
//! Records never depend on each other, so population runs fan out over
//! rayon and only the conflict ordering is sequential.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::logic::conflict::{self, ConflictScan, PopulationEntry, SubjectIdentity, SupportingFeatures};
use crate::logic::decision::{evaluate_with_metadata, Decision, ReconciliationConfig};
use crate::logic::features::{derive_features, FeatureSet, RawRecord};
use crate::logic::model::{query_model, ModelMetadata, ModelPort, ModelSignal};
use crate::logic::rules::{classify, RuleResult};

/// Everything computed for one student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub subject: SubjectIdentity,
    pub features: FeatureSet,
    pub rule: RuleResult,
    pub signal: ModelSignal,
    pub decision: Decision,
}

impl Assessment {
    /// View of this assessment as a conflict-scan input
    pub fn population_entry(&self) -> PopulationEntry {
        PopulationEntry::new(self.subject.clone(), self.rule.clone(), self.signal.clone())
            .with_supporting(SupportingFeatures::from_features(&self.features))
    }
}

fn assess_indexed<P: ModelPort + ?Sized>(
    index: usize,
    record: &RawRecord,
    port: &P,
    metadata: &ModelMetadata,
    config: &ReconciliationConfig,
) -> EngineResult<Assessment> {
    let features = derive_features(record);
    let rule = classify(&features);
    let signal = query_model(port, &features);
    let decision = evaluate_with_metadata(&rule, &signal, config, metadata)?;

    Ok(Assessment {
        subject: SubjectIdentity::new(index, &record.name),
        features,
        rule,
        signal,
        decision,
    })
}

fn entry_indexed<P: ModelPort + ?Sized>(index: usize, record: &RawRecord, port: &P) -> PopulationEntry {
    let features = derive_features(record);
    let rule = classify(&features);
    let signal = query_model(port, &features);

    PopulationEntry::new(SubjectIdentity::new(index, &record.name), rule, signal)
        .with_supporting(SupportingFeatures::from_features(&features))
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Assess a single record
pub fn assess<P: ModelPort + ?Sized>(
    record: &RawRecord,
    port: &P,
    config: &ReconciliationConfig,
) -> EngineResult<Assessment> {
    assess_indexed(0, record, port, &port.metadata(), config)
}

/// Assess every record in parallel. Results keep snapshot order; a record
/// whose model returned an invalid probability yields its own error.
pub fn assess_population<P: ModelPort + ?Sized>(
    records: &[RawRecord],
    port: &P,
    config: &ReconciliationConfig,
) -> Vec<EngineResult<Assessment>> {
    let metadata = port.metadata();

    records
        .par_iter()
        .enumerate()
        .map(|(index, record)| assess_indexed(index, record, port, &metadata, config))
        .collect()
}

/// Screen already computed assessments for conflicts. The model is not
/// queried again, so the scan always agrees with the decisions.
pub fn scan_assessments(
    assessments: &[Assessment],
    config: &ReconciliationConfig,
    limit: usize,
) -> ConflictScan {
    let entries: Vec<PopulationEntry> = assessments.par_iter().map(Assessment::population_entry).collect();

    conflict::scan(&entries, config, limit)
}

/// Derive, classify and predict for every record, then screen for conflicts
pub fn scan_population<P: ModelPort + ?Sized>(
    records: &[RawRecord],
    port: &P,
    config: &ReconciliationConfig,
    limit: usize,
) -> ConflictScan {
    let entries: Vec<PopulationEntry> = records
        .par_iter()
        .enumerate()
        .map(|(index, record)| entry_indexed(index, record, port))
        .collect();

    conflict::scan(&entries, config, limit)
}

// ============================================================================
// TESTS
// ============================================================================
