//! Model Port
//!
//! Interface to the external probabilistic model. The core never trains or
//! loads a model; it only asks for a probability and treats every failure
//! as "unavailable".

use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};

use crate::logic::features::{FeatureSet, ModelInputs};

use super::signal::{ModelMetadata, ModelSignal};

/// Cause reported when no model is loaded
pub const MODEL_NOT_READY: &str = "model not ready";

// ============================================================================
// PORT TRAIT
// ============================================================================

/// External model contract
pub trait ModelPort: Send + Sync {
    /// Failure probability for one student, or unavailable
    fn predict(&self, features: &FeatureSet) -> ModelSignal;

    /// Metadata recorded in decision audits
    fn metadata(&self) -> ModelMetadata {
        ModelMetadata::new()
    }
}

/// Ask the port for a signal. A panicking model is reported as unavailable.
pub fn query_model<P: ModelPort + ?Sized>(port: &P, features: &FeatureSet) -> ModelSignal {
    match panic::catch_unwind(AssertUnwindSafe(|| port.predict(features))) {
        Ok(signal) => signal,
        Err(_) => {
            log::warn!("Model port panicked for {:?}, treating as unavailable", features.name);
            ModelSignal::unavailable("model call failed")
        }
    }
}

// ============================================================================
// BUILT-IN PORTS
// ============================================================================

/// Port for when no model is loaded
#[derive(Debug, Clone, Default)]
pub struct UnavailableModel;

impl ModelPort for UnavailableModel {
    fn predict(&self, _features: &FeatureSet) -> ModelSignal {
        ModelSignal::unavailable(MODEL_NOT_READY)
    }
}

/// Closure-backed port over the versioned model input vector
pub struct FnModel<F> {
    predict: F,
    metadata: ModelMetadata,
}

impl<F> FnModel<F>
where
    F: Fn(&ModelInputs) -> anyhow::Result<f64> + Send + Sync,
{
    pub fn new(predict: F) -> Self {
        Self {
            predict,
            metadata: ModelMetadata::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: ModelMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

impl<F> ModelPort for FnModel<F>
where
    F: Fn(&ModelInputs) -> anyhow::Result<f64> + Send + Sync,
{
    fn predict(&self, features: &FeatureSet) -> ModelSignal {
        let inputs = match ModelInputs::from_features(features) {
            Ok(inputs) => inputs,
            Err(missing) => {
                return ModelSignal::unavailable(format!("features missing: {}", missing.join(", ")))
            }
        };

        match (self.predict)(&inputs) {
            Ok(probability) => ModelSignal::available(probability),
            Err(e) => {
                log::debug!("Model failed for {:?}: {}", features.name, e);
                ModelSignal::unavailable(e.to_string())
            }
        }
    }

    fn metadata(&self) -> ModelMetadata {
        self.metadata.clone()
    }
}

/// Port over precomputed probabilities keyed by student name
#[derive(Debug, Clone, Default)]
pub struct LookupModel {
    probabilities: HashMap<String, f64>,
    metadata: ModelMetadata,
}

impl LookupModel {
    pub fn new(probabilities: HashMap<String, f64>) -> Self {
        Self {
            probabilities,
            metadata: ModelMetadata::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: ModelMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

impl ModelPort for LookupModel {
    fn predict(&self, features: &FeatureSet) -> ModelSignal {
        match self.probabilities.get(&features.name) {
            Some(p) => ModelSignal::available(*p),
            None => ModelSignal::unavailable(format!("no prediction for {}", features.name)),
        }
    }

    fn metadata(&self) -> ModelMetadata {
        self.metadata.clone()
    }
}

// ============================================================================
// TESTS
// ============================================================================
