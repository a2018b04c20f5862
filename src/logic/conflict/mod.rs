//! Conflict Module
//!
//! Screens a whole population for cases where the rule level and the model
//! probability point in opposite directions, for governance review.
//!
//! ## Structure
//! - `types`: Core types (ConflictType, PopulationEntry, ConflictRecord, ConflictScan)
//! - `detector`: Two-phase screening (parallel screen, sequential sort/truncate)

pub mod types;
pub mod detector;

pub use types::{
    ConflictRecord, ConflictScan, ConflictType, PopulationEntry, RejectedEntry,
    SubjectIdentity, SupportingFeatures,
};

pub use detector::{detect_conflicts, scan};
