//! Report Module
//!
//! Structured summaries for the report/API layer. No formatting here;
//! rendering belongs to the caller.

pub mod kpi;
pub mod watchlist;
pub mod top_n;
pub mod profile;
pub mod quality;
pub mod ages;

pub use kpi::{kpi_summary, KpiSummary};
pub use watchlist::{risk_watchlist, WatchlistEntry};
pub use top_n::{model_risk_top_n, ModelRiskEntry};
pub use profile::{student_profile, suggestion_for, StudentProfile};
pub use quality::{data_quality_report, DataQualityReport, FieldQuality};
pub use ages::{age_summary, top_n_oldest, AgeEntry, AgeSummary};
