// risk-scan: batch assessment over a JSON snapshot
//
// Usage: risk-scan [snapshot.json]   (reads stdin when no path is given)
//
// Snapshot shape:
//   { "config"?: {...}, "records": [...], "predictions": {"name": p},
//     "model_metadata"?: {...}, "limit"?: n, "top_n"?: n }

use std::collections::HashMap;
use std::io::Read;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use student_risk_core::constants::{self, APP_NAME, APP_VERSION, DEFAULT_TOP_N};
use student_risk_core::logic::model::LookupModel;
use student_risk_core::logic::report::{
    age_summary, data_quality_report, kpi_summary, model_risk_top_n, risk_watchlist, AgeSummary,
    DataQualityReport, KpiSummary, ModelRiskEntry, WatchlistEntry,
};
use student_risk_core::{
    assess_population, derive_features, scan_assessments, Assessment, ConflictScan, ModelMetadata, RawRecord,
    ReconciliationConfig,
};

#[derive(Debug, Deserialize)]
struct Snapshot {
    #[serde(default)]
    config: Option<ReconciliationConfig>,
    records: Vec<RawRecord>,
    #[serde(default)]
    predictions: HashMap<String, f64>,
    #[serde(default)]
    model_metadata: ModelMetadata,
    #[serde(default)]
    limit: Option<usize>,
    #[serde(default)]
    top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum AssessmentOutcome {
    Assessed(Box<Assessment>),
    Failed { index: usize, name: String, error: String },
}

#[derive(Debug, Serialize)]
struct ScanReport {
    config: ReconciliationConfig,
    assessments: Vec<AssessmentOutcome>,
    data_quality: DataQualityReport,
    kpi: KpiSummary,
    ages: AgeSummary,
    watchlist: Vec<WatchlistEntry>,
    model_top_n: Vec<ModelRiskEntry>,
    conflicts: ConflictScan,
}

fn read_snapshot() -> anyhow::Result<Snapshot> {
    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path).with_context(|| format!("reading {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    serde_json::from_str(&raw).context("parsing snapshot")
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} risk-scan v{}", APP_NAME, APP_VERSION);

    let snapshot = read_snapshot()?;
    let config = match snapshot.config {
        Some(config) => config,
        None => ReconciliationConfig::from_env().context("loading config from environment")?,
    };
    let limit = snapshot.limit.unwrap_or_else(constants::get_conflict_limit);
    let top_n = snapshot.top_n.unwrap_or(DEFAULT_TOP_N);

    log::info!(
        "Snapshot: {} records, {} predictions",
        snapshot.records.len(),
        snapshot.predictions.len()
    );

    let model = LookupModel::new(snapshot.predictions).with_metadata(snapshot.model_metadata);

    let mut assessed = Vec::new();
    let mut features = Vec::with_capacity(snapshot.records.len());
    let mut assessments = Vec::with_capacity(snapshot.records.len());
    for (index, result) in assess_population(&snapshot.records, &model, &config)
        .into_iter()
        .enumerate()
    {
        match result {
            Ok(assessment) => {
                features.push(assessment.features.clone());
                assessed.push(assessment.clone());
                assessments.push(AssessmentOutcome::Assessed(Box::new(assessment)));
            }
            Err(e) => {
                // only the model answer was bad; the record still counts in reports
                features.push(derive_features(&snapshot.records[index]));
                let name = snapshot.records[index].name.clone();
                log::warn!("Assessment failed for #{} {}: {}", index, name, e);
                assessments.push(AssessmentOutcome::Failed {
                    index,
                    name,
                    error: e.to_string(),
                });
            }
        }
    }

    let report = ScanReport {
        config,
        data_quality: data_quality_report(&snapshot.records),
        kpi: kpi_summary(&features),
        ages: age_summary(&features),
        watchlist: risk_watchlist(&features),
        model_top_n: model_risk_top_n(&assessed, top_n),
        conflicts: scan_assessments(&assessed, &config, limit),
        assessments,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
