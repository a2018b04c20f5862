//! Rules Module
//!
//! Rule-based risk level from derived features.
//! Deterministic and explainable - every escalation leaves a reason.
//!
//! ## Structure
//! - `types`: Core types (RiskLevel, RuleResult, WeakestArea)
//! - `thresholds`: Fixed cut-offs
//! - `classifier`: Classification logic
//!
//! ## Usage
//! ```ignore
//! use crate::logic::rules::{classify, RiskLevel};
//!
//! let result = classify(&features);
//! match result.risk_level {
//!     Some(RiskLevel::High) => println!("Intervene"),
//!     Some(RiskLevel::Mid) => println!("Monitor"),
//!     Some(RiskLevel::Low) => println!("Observe"),
//!     None => println!("Need more data"),
//! }
//! ```

pub mod types;
pub mod thresholds;
pub mod classifier;

pub use types::{level_label, RiskLevel, RuleResult, WeakestArea};

pub use thresholds::{
    HIGH_RISK_ATTENDANCE, HIGH_RISK_SCORE, MID_RISK_ATTENDANCE, MID_RISK_SCORE,
};

pub use classifier::classify;
