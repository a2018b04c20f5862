//! Rule Thresholds
//!
//! Fixed, inspectable cut-offs. Constants only - no classify logic.

// ============================================================================
// AGGREGATE SCORE
// ============================================================================

/// Aggregate score below this = High
pub const HIGH_RISK_SCORE: f64 = 60.0;

/// Aggregate score below this (and not High) = Mid
pub const MID_RISK_SCORE: f64 = 70.0;

// ============================================================================
// ATTENDANCE
// ============================================================================

/// Attendance below this = High
pub const HIGH_RISK_ATTENDANCE: f64 = 0.75;

/// Attendance below this (and not High) = Mid
pub const MID_RISK_ATTENDANCE: f64 = 0.85;
