//! Two-phase verifier for classifier outputs.
//!
//! 1. **Structural**: the output is serialized and validated against its
//!    JSON Schema (see [`crate::schema`]).
//! 2. **Semantic**: each named check runs against the typed value. All
//!    failures from both phases are collected before returning.

use jsonschema::Validator;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use triage_contracts::{
    analysis::{PreliminaryAnalysis, RiskLevel, Urgency},
    error::{TriageError, TriageResult},
    treatment::TreatmentPlan,
    verify::{VerificationFailure, VerificationReport},
};
use triage_core::traits::ReportVerifier;

use crate::schema::{analysis_schema, treatment_schema};

/// A semantic check. Returns `Some(message)` on failure.
type Check<T> = fn(&T) -> Option<String>;

const ANALYSIS_CHECKS: &[(&str, Check<PreliminaryAnalysis>)] = &[
    ("urgency-risk-coupling", urgency_risk_coupling),
    ("findings-present", findings_present),
    ("warnings-present", warnings_present),
];

const TREATMENT_CHECKS: &[(&str, Check<TreatmentPlan>)] = &[
    ("medication-fields", medication_fields),
    ("cardiac-referral-has-no-medication", cardiac_referral_has_no_medication),
];

/// Verifier for preliminary analyses and treatment plans.
///
/// Both schemas are compiled once in [`TriageVerifier::new`].
pub struct TriageVerifier {
    analysis: Validator,
    treatment: Validator,
}

impl TriageVerifier {
    pub fn new() -> TriageResult<Self> {
        Ok(Self {
            analysis: compile("analysis", &analysis_schema())?,
            treatment: compile("treatment", &treatment_schema())?,
        })
    }
}

impl std::fmt::Debug for TriageVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriageVerifier").finish_non_exhaustive()
    }
}

impl ReportVerifier for TriageVerifier {
    fn verify_analysis(&self, analysis: &PreliminaryAnalysis) -> TriageResult<VerificationReport> {
        run("analysis", &self.analysis, analysis, ANALYSIS_CHECKS)
    }

    fn verify_treatment(&self, treatment: &TreatmentPlan) -> TriageResult<VerificationReport> {
        run("treatment", &self.treatment, treatment, TREATMENT_CHECKS)
    }
}

fn compile(name: &str, schema: &Value) -> TriageResult<Validator> {
    jsonschema::validator_for(schema).map_err(|e| TriageError::ConfigError {
        reason: format!("invalid {name} JSON Schema: {e}"),
    })
}

fn run<T: Serialize>(
    output: &str,
    validator: &Validator,
    value: &T,
    checks: &[(&str, Check<T>)],
) -> TriageResult<VerificationReport> {
    let mut failures = Vec::new();

    // ── Phase 1: JSON Schema ──────────────────────────────────────────────────
    let payload = serde_json::to_value(value).map_err(|e| TriageError::Serialization {
        reason: format!("{output} could not be serialized: {e}"),
    })?;
    for error in validator.iter_errors(&payload) {
        let message = format!("JSON Schema violation at {}: {}", error.instance_path, error);
        warn!(output, %message, "structural validation failure");
        failures.push(VerificationFailure {
            rule_id: "json-schema".to_string(),
            message,
        });
    }

    // ── Phase 2: semantic checks ──────────────────────────────────────────────
    for (rule_id, check) in checks {
        if let Some(message) = check(value) {
            warn!(output, rule_id, %message, "semantic rule failed");
            failures.push(VerificationFailure {
                rule_id: rule_id.to_string(),
                message,
            });
        }
    }

    let report = VerificationReport::from_failures(failures);
    debug!(
        output,
        passed = report.passed,
        failure_count = report.failures.len(),
        "verification complete"
    );
    Ok(report)
}

// ── Analysis checks ───────────────────────────────────────────────────────────

fn urgency_risk_coupling(a: &PreliminaryAnalysis) -> Option<String> {
    let emergency = a.urgency == Urgency::Emergency;
    let critical = a.risk_level == RiskLevel::Critical;
    (emergency != critical).then(|| {
        format!(
            "urgency '{}' does not match risk level '{}': emergency and critical must occur together",
            a.urgency.as_str(),
            a.risk_level.as_str()
        )
    })
}

fn findings_present(a: &PreliminaryAnalysis) -> Option<String> {
    a.key_findings
        .is_empty()
        .then(|| "analysis lists no key findings".to_string())
}

fn warnings_present(a: &PreliminaryAnalysis) -> Option<String> {
    a.warning_signs
        .is_empty()
        .then(|| "analysis lists no warning signs".to_string())
}

// ── Treatment checks ──────────────────────────────────────────────────────────

fn medication_fields(t: &TreatmentPlan) -> Option<String> {
    let blank: Vec<String> = t
        .medications
        .iter()
        .enumerate()
        .flat_map(|(i, m)| {
            [
                ("name", &m.name),
                ("dosage", &m.dosage),
                ("frequency", &m.frequency),
                ("duration", &m.duration),
            ]
            .into_iter()
            .filter(|(_, v)| v.trim().is_empty())
            .map(move |(field, _)| format!("medications[{i}].{field}"))
        })
        .collect();

    (!blank.is_empty()).then(|| format!("blank medication fields: {}", blank.join(", ")))
}

fn cardiac_referral_has_no_medication(t: &TreatmentPlan) -> Option<String> {
    (t.is_cardiac_referral() && !t.medications.is_empty()).then(|| {
        format!(
            "cardiac referral must not suggest medication, found: {}",
            t.medication_names().join(", ")
        )
    })
}
