//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! Reconciliation thresholds can be overridden through the environment,
//! see [`crate::logic::decision::ReconciliationConfig::from_env`].

/// Model probability at or above which the model level is High
pub const DEFAULT_HIGH_PROB_THRESHOLD: f64 = 0.60;

/// Model probability at or below which the model level is Low
pub const DEFAULT_LOW_PROB_THRESHOLD: f64 = 0.10;

/// Resolve rule/model disagreement toward the more severe level
pub const DEFAULT_SAFETY_FIRST: bool = true;

/// Default cap for conflict scans
pub const DEFAULT_CONFLICT_LIMIT: usize = 20;

/// Default size of the model risk top-N report
pub const DEFAULT_TOP_N: usize = 10;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Student Risk";

// ============================================
// Environment variable names
// ============================================

pub const ENV_HIGH_PROB_THRESHOLD: &str = "RISK_HIGH_PROB_THRESHOLD";
pub const ENV_LOW_PROB_THRESHOLD: &str = "RISK_LOW_PROB_THRESHOLD";
pub const ENV_SAFETY_FIRST: &str = "RISK_SAFETY_FIRST";
pub const ENV_CONFLICT_LIMIT: &str = "RISK_CONFLICT_LIMIT";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get conflict scan limit from environment or use default
pub fn get_conflict_limit() -> usize {
    std::env::var(ENV_CONFLICT_LIMIT)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_CONFLICT_LIMIT)
}

/// Parse a boolean switch the way operators write them ("false", "0", "no", "off")
pub fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
