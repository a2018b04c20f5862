//! Features Module - Feature Derivation
//!
//! Raw values are normalized once here; everything downstream sees typed,
//! optional numbers and never re-parses text.

pub mod record;
pub mod normalize;
pub mod deriver;
pub mod layout;


// Re-export common types
pub use record::{FieldValue, RawRecord, Subject};
pub use deriver::{derive_features, FeatureSet, MissingFeature, SubjectScores, PASS_SCORE};
pub use layout::{ModelInputs, MODEL_INPUT_COUNT, MODEL_INPUT_LAYOUT, MODEL_INPUT_VERSION};
