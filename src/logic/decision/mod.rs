//! Decision Module
//!
//! Reconciles the rule level with the model probability into one final
//! level, a recommended action, ordered reasons and an audit record.
//!
//! ## Structure
//! - `types`: Core types (Decision, DecisionAudit, RecommendedAction)
//! - `config`: Reconciliation policy
//! - `engine`: Reconciliation logic
//!
//! ## Usage
//! ```ignore
//! use crate::logic::decision::{evaluate, ReconciliationConfig};
//!
//! let decision = evaluate(&rule_result, &signal, &ReconciliationConfig::default())?;
//! if decision.needs_review() {
//!     queue_for_review(&decision);
//! }
//! ```

pub mod types;
pub mod config;
pub mod engine;


// Re-export main types for convenience
pub use types::{Decision, DecisionAudit, RecommendedAction};

pub use config::ReconciliationConfig;

pub use engine::{evaluate, evaluate_with_metadata, fuse};
