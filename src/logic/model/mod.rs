//! Model Module - External Model Boundary
//!
//! The probabilistic model lives outside this crate. This module holds the
//! port it is reached through, the signal it returns, and the thresholds
//! that map its probability onto risk levels.

pub mod signal;
pub mod threshold;
pub mod port;

// Re-export common types
pub use signal::{ModelMetadata, ModelSignal};
pub use threshold::ProbabilityThresholds;
pub use port::{query_model, FnModel, LookupModel, ModelPort, UnavailableModel, MODEL_NOT_READY};
