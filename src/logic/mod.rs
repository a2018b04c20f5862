//! Logic Module - Risk Engines
//!
//! Data flow: raw records -> features -> {rules, model} -> decision (per record)
//! and/or conflict (population scan).

pub mod features;
pub mod rules;
pub mod model;
pub mod decision;
pub mod conflict;
pub mod pipeline;
pub mod report;
