//! Decision Engine
//!
//! Only the reconciliation logic - no type definitions.
//! Input: RuleResult + ModelSignal + ReconciliationConfig
//! Output: Decision

use crate::error::EngineResult;
use crate::logic::model::{ModelMetadata, ModelSignal};
use crate::logic::rules::{level_label, RiskLevel, RuleResult};

use super::config::ReconciliationConfig;
use super::types::{Decision, DecisionAudit, RecommendedAction};

/// Rank distance at which rule and model materially disagree
pub const DISAGREEMENT_DISTANCE: u8 = 2;

pub const MODEL_ABSENT_REASON: &str =
    "model not ready or features missing; did not participate in decision";

pub const DISAGREEMENT_REASON: &str = "rule and model materially disagree; recommend review";

pub const RULE_UNRESOLVED_REASON: &str = "rule level unresolved; model level used";

// ============================================================================
// MAIN DECISION FUNCTION
// ============================================================================

/// Reconcile a rule result with a model signal
pub fn evaluate(
    rule: &RuleResult,
    signal: &ModelSignal,
    config: &ReconciliationConfig,
) -> EngineResult<Decision> {
    evaluate_with_metadata(rule, signal, config, &ModelMetadata::new())
}

/// Reconcile, recording model metadata in the audit.
///
/// Fails only when the signal carries a probability outside [0, 1].
pub fn evaluate_with_metadata(
    rule: &RuleResult,
    signal: &ModelSignal,
    config: &ReconciliationConfig,
    metadata: &ModelMetadata,
) -> EngineResult<Decision> {
    let probability = signal.checked_probability()?;
    let thresholds = *config.thresholds();

    let mut reasons = vec![rule_reason(rule)];
    let mut audit = DecisionAudit {
        rule_level: rule.risk_level,
        model_probability: probability,
        model_level: None,
        thresholds,
        safety_first: config.safety_first(),
        missing_features: rule.missing.clone(),
        model_unavailable_cause: match signal {
            ModelSignal::Unavailable { cause } => Some(cause.clone()),
            ModelSignal::Available { .. } => None,
        },
        model_metadata: metadata.clone(),
    };

    // Rule-only branch
    let Some(p) = probability else {
        reasons.push(MODEL_ABSENT_REASON.to_string());
        return Ok(build(rule.risk_level, reasons, false, audit));
    };

    let model_level = thresholds.level_for(p);
    audit.model_level = Some(model_level);

    reasons.push(format!("model judgment: P(fail)={:.1}%", p * 100.0));
    reasons.push(format!(
        "model mapped level: {} (threshold ≥{:.0}% high, ≤{:.0}% low)",
        model_level,
        thresholds.high() * 100.0,
        thresholds.low() * 100.0
    ));

    let final_level = match rule.risk_level {
        Some(rule_level) => fuse(rule_level, model_level, config.safety_first()),
        None => {
            reasons.push(RULE_UNRESOLVED_REASON.to_string());
            model_level
        }
    };

    let disagreement = rule
        .risk_level
        .is_some_and(|rule_level| rule_level.distance(model_level) >= DISAGREEMENT_DISTANCE);
    if disagreement {
        reasons.push(DISAGREEMENT_REASON.to_string());
    }

    Ok(build(Some(final_level), reasons, disagreement, audit))
}

/// Combine two resolved levels.
///
/// Safety-first takes the more severe level. Otherwise the mean rank is
/// rounded half up: (Low, Mid) -> Mid, (Mid, High) -> High.
pub fn fuse(rule: RiskLevel, model: RiskLevel, safety_first: bool) -> RiskLevel {
    if safety_first {
        return rule.max(model);
    }

    match rule.rank() + model.rank() {
        0 => RiskLevel::Low,
        1 | 2 => RiskLevel::Mid,
        _ => RiskLevel::High,
    }
}

fn rule_reason(rule: &RuleResult) -> String {
    let label = level_label(rule.risk_level);
    if rule.reason.is_empty() {
        format!("rule judgment: {}", label)
    } else {
        format!("rule judgment: {} ({})", label, rule.reason)
    }
}

fn build(
    level: Option<RiskLevel>,
    reasons: Vec<String>,
    disagreement: bool,
    audit: DecisionAudit,
) -> Decision {
    let action_kind = RecommendedAction::for_level(level);

    log::debug!(
        "Decision: rule={} model={:?} final={} review={}",
        level_label(audit.rule_level),
        audit.model_probability,
        level_label(level),
        disagreement
    );

    Decision {
        final_risk_level: level,
        action: action_kind.description().to_string(),
        action_kind,
        reasons,
        disagreement,
        audit,
    }
}
