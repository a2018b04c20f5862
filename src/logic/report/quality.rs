//! Data Quality Report
//!
//! Per-field counts of missing and out-of-range values in a raw snapshot,
//! using the same parsing as feature derivation. A value that does not parse
//! counts as missing; one that parses but falls outside its range counts as
//! invalid.

use serde::{Deserialize, Serialize};

use crate::logic::features::normalize::{parse_attendance, parse_numeric, MAX_AGE, MAX_SCORE};
use crate::logic::features::{FieldValue, RawRecord, Subject};

/// Missing / invalid counts for one field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldQuality {
    pub missing: usize,
    pub invalid: usize,
}

impl FieldQuality {
    fn record(&mut self, parsed: Option<f64>, range: std::ops::RangeInclusive<f64>) {
        match parsed {
            None => self.missing += 1,
            Some(value) if !range.contains(&value) => self.invalid += 1,
            Some(_) => {}
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataQualityReport {
    pub count: usize,
    pub age: FieldQuality,
    pub attendance: FieldQuality,
    pub math: FieldQuality,
    pub english: FieldQuality,
    pub science: FieldQuality,
    /// Records whose numeric fields arrived as text (parseable or not)
    pub text_fields: usize,
}

impl DataQualityReport {
    pub fn score(&self, subject: Subject) -> &FieldQuality {
        match subject {
            Subject::Math => &self.math,
            Subject::English => &self.english,
            Subject::Science => &self.science,
        }
    }

    /// No field has a missing or invalid value
    pub fn is_clean(&self) -> bool {
        [self.age, self.attendance, self.math, self.english, self.science]
            .iter()
            .all(|q| q.missing == 0 && q.invalid == 0)
    }
}

fn is_text(value: &Option<FieldValue>) -> bool {
    matches!(value, Some(FieldValue::Text(_)))
}

pub fn data_quality_report(records: &[RawRecord]) -> DataQualityReport {
    let mut report = DataQualityReport {
        count: records.len(),
        ..Default::default()
    };

    for record in records {
        report
            .age
            .record(record.age.as_ref().and_then(parse_numeric), 1.0..=MAX_AGE);
        report
            .attendance
            .record(record.attendance.as_ref().and_then(parse_attendance), 0.0..=1.0);
        report
            .math
            .record(record.math.as_ref().and_then(parse_numeric), 0.0..=MAX_SCORE);
        report
            .english
            .record(record.english.as_ref().and_then(parse_numeric), 0.0..=MAX_SCORE);
        report
            .science
            .record(record.science.as_ref().and_then(parse_numeric), 0.0..=MAX_SCORE);

        let fields = [&record.age, &record.attendance, &record.math, &record.english, &record.science];
        if fields.iter().any(|f| is_text(f)) {
            report.text_fields += 1;
        }
    }

    if !report.is_clean() {
        log::info!(
            "Data quality: {} records, attendance missing={} invalid={}",
            report.count, report.attendance.missing, report.attendance.invalid
        );
    }

    report
}
