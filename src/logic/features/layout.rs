//! Model Input Layout - Centralized Model Feature Definition
//!
//! The external model consumes a fixed, ordered input vector.
//!
//! ## Rules:
//! 1. Add input → increment MODEL_INPUT_VERSION
//! 2. Change order → increment MODEL_INPUT_VERSION
//! 3. Remove input → increment MODEL_INPUT_VERSION
//!
//! A model port can compare `layout_hash` with the hash it was trained on.

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

use super::deriver::FeatureSet;
use super::record::Subject;

// ============================================================================
// LAYOUT
// ============================================================================

/// Current model input layout version
pub const MODEL_INPUT_VERSION: u8 = 1;

/// Input names in the exact order they appear in the vector
pub const MODEL_INPUT_LAYOUT: &[&str] = &[
    "attendance", // 0: fraction in [0, 1]
    "math",       // 1: score in [0, 100]
    "english",    // 2
    "science",    // 3
];

/// Must match MODEL_INPUT_LAYOUT.len()
pub const MODEL_INPUT_COUNT: usize = 4;

/// CRC32 of version + input names
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(&[MODEL_INPUT_VERSION]);
    for name in MODEL_INPUT_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]);
    }
    hasher.finalize()
}

// ============================================================================
// MODEL INPUTS
// ============================================================================

/// Versioned model input vector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInputs {
    pub version: u8,
    pub layout_hash: u32,
    pub values: [f64; MODEL_INPUT_COUNT],
}

impl ModelInputs {
    /// Build the model vector from derived features.
    ///
    /// Fails with the names of the missing inputs; the model never sees a
    /// partially filled vector.
    pub fn from_features(features: &FeatureSet) -> Result<Self, Vec<&'static str>> {
        let slots = [
            features.attendance,
            features.scores.get(Subject::Math),
            features.scores.get(Subject::English),
            features.scores.get(Subject::Science),
        ];

        let missing: Vec<&'static str> = slots
            .iter()
            .zip(MODEL_INPUT_LAYOUT)
            .filter(|(value, _)| value.is_none())
            .map(|(_, name)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(missing);
        }

        let mut values = [0.0; MODEL_INPUT_COUNT];
        for (slot, value) in values.iter_mut().zip(slots.iter().flatten()) {
            *slot = *value;
        }

        Ok(Self {
            version: MODEL_INPUT_VERSION,
            layout_hash: layout_hash(),
            values,
        })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        MODEL_INPUT_LAYOUT
            .iter()
            .position(|n| *n == name)
            .map(|i| self.values[i])
    }

    /// Is this vector built with the current layout?
    pub fn is_compatible(&self) -> bool {
        self.version == MODEL_INPUT_VERSION && self.layout_hash == layout_hash()
    }
}
