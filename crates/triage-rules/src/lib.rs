//! # triage-rules
//!
//! Ordered, first-match rule tables for the clinical triage engine.
//!
//! ## Overview
//!
//! This crate provides [`KeywordRiskClassifier`] and
//! [`KeywordTreatmentGenerator`], which implement the
//! [`RiskClassifier`](triage_core::traits::RiskClassifier) and
//! [`TreatmentGenerator`](triage_core::traits::TreatmentGenerator) traits.
//! Each is backed by a [`RuleTable`]: rules are evaluated in declaration
//! order, the first matching rule wins, and an unconditional fallback makes
//! every evaluation total.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use triage_contracts::symptom::{SeverityBand, Symptom};
//! use triage_rules::{classify_risk, generate_treatment};
//!
//! let symptoms = vec![Symptom::new("fever", 6), Symptom::new("cough", 5)];
//! let analysis = classify_risk(&symptoms, None)?;
//! let plan = generate_treatment(&symptoms, SeverityBand::Moderate)?;
//! ```
//!
//! ## Keyword matching
//!
//! Symptom names are lower-cased and matched by substring containment, so
//! "Severe Chest Pain" matches `chest pain` and "heartburn" matches `heart`.

pub mod keywords;
pub mod risk;
pub mod rule;
mod text;
pub mod treatment;

pub use risk::{KeywordRiskClassifier, PatientFacts};
pub use rule::{Rule, RuleTable};
pub use treatment::KeywordTreatmentGenerator;

use triage_contracts::{
    analysis::PreliminaryAnalysis,
    error::TriageResult,
    patient::PatientContext,
    symptom::{SeverityBand, Symptom},
    treatment::TreatmentPlan,
};
use triage_core::{
    normalize::normalize,
    traits::{RiskClassifier, TreatmentGenerator},
};

/// Normalize `symptoms` and classify them.
///
/// Fails only when normalization does (empty list, severity out of range).
pub fn classify_risk(
    symptoms: &[Symptom],
    context: Option<&PatientContext>,
) -> TriageResult<PreliminaryAnalysis> {
    let normalized = normalize(symptoms)?;
    Ok(KeywordRiskClassifier::new().classify(&normalized, context))
}

/// Normalize `symptoms` and generate a treatment plan for the given band.
///
/// The band is the caller's; it is not recomputed from `symptoms`.
pub fn generate_treatment(symptoms: &[Symptom], band: SeverityBand) -> TriageResult<TreatmentPlan> {
    let normalized = normalize(symptoms)?;
    Ok(KeywordTreatmentGenerator::new().generate(&normalized, band))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
