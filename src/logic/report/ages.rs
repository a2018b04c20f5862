//! Age Reports
//!
//! Headcount and age statistics over the records with a usable age.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::logic::features::FeatureSet;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgeSummary {
    /// Records with a usable age
    pub count: usize,
    pub avg_age: Option<f64>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    /// Age -> headcount, ascending by age
    pub distribution: BTreeMap<u32, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeEntry {
    pub index: usize,
    pub name: String,
    pub age: u32,
}

pub fn age_summary(features: &[FeatureSet]) -> AgeSummary {
    let ages: Vec<u32> = features.iter().filter_map(|f| f.age).collect();

    let mut distribution = BTreeMap::new();
    for age in &ages {
        *distribution.entry(*age).or_insert(0) += 1;
    }

    AgeSummary {
        count: ages.len(),
        avg_age: (!ages.is_empty())
            .then(|| ages.iter().map(|a| f64::from(*a)).sum::<f64>() / ages.len() as f64),
        min_age: ages.iter().copied().min(),
        max_age: ages.iter().copied().max(),
        distribution,
    }
}

/// Oldest `n` students, oldest first; equal ages keep snapshot order
pub fn top_n_oldest(features: &[FeatureSet], n: usize) -> Vec<AgeEntry> {
    let mut entries: Vec<AgeEntry> = features
        .iter()
        .enumerate()
        .filter_map(|(index, f)| {
            Some(AgeEntry {
                index,
                name: f.name.clone(),
                age: f.age?,
            })
        })
        .collect();

    entries.sort_by(|a, b| b.age.cmp(&a.age));
    entries.truncate(n);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::{derive_features, FieldValue, RawRecord};

    fn population() -> Vec<FeatureSet> {
        let mut unknown = RawRecord::new("unknown", 0);
        unknown.age = Some(FieldValue::Text("?".to_string()));

        [
            RawRecord::new("a", 16),
            RawRecord::new("b", 18),
            RawRecord::new("c", 16),
            unknown,
            RawRecord::new("d", 17),
            RawRecord::new("e", 18),
        ]
        .iter()
        .map(derive_features)
        .collect()
    }

    #[test]
    fn test_age_summary() {
        let summary = age_summary(&population());

        assert_eq!(summary.count, 5);
        assert!((summary.avg_age.unwrap() - 17.0).abs() < 1e-9);
        assert_eq!(summary.min_age, Some(16));
        assert_eq!(summary.max_age, Some(18));
        let distribution: Vec<_> = summary.distribution.into_iter().collect();
        assert_eq!(distribution, vec![(16, 2), (17, 1), (18, 2)]);
    }

    #[test]
    fn test_top_n_oldest() {
        let oldest = top_n_oldest(&population(), 3);
        let names: Vec<_> = oldest.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["b", "e", "d"]);
        assert_eq!(oldest[2].index, 4);
    }

    #[test]
    fn test_empty() {
        let summary = age_summary(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.avg_age, None);
        assert!(top_n_oldest(&[], 5).is_empty());
    }
}
