//! Core trait definitions for the triage pipeline.
//!
//! - `RiskClassifier`    : symptoms + patient context → preliminary analysis
//! - `TreatmentGenerator`: symptoms + severity band → treatment plan
//! - `ReportVerifier`    : checks both outputs before they leave the pipeline
//! - `AssessmentStore`   : the external persistence collaborator
//!
//! The two evaluators are pure and must be deterministic: identical inputs
//! produce identical outputs, with no clock or randomness read internally.

use triage_contracts::{
    analysis::PreliminaryAnalysis,
    error::TriageResult,
    patient::PatientContext,
    record::AssessmentRecord,
    symptom::SeverityBand,
    treatment::TreatmentPlan,
    verify::VerificationReport,
};

use crate::normalize::NormalizedSymptoms;

/// Produces a preliminary analysis from normalized symptoms.
///
/// Infallible: every implementation must end in an unconditional fallback so
/// a result exists for any valid normalized input.
pub trait RiskClassifier: Send + Sync {
    fn classify(
        &self,
        symptoms: &NormalizedSymptoms,
        context: Option<&PatientContext>,
    ) -> PreliminaryAnalysis;
}

/// Produces a treatment plan from normalized symptoms and the caller's band.
pub trait TreatmentGenerator: Send + Sync {
    fn generate(&self, symptoms: &NormalizedSymptoms, band: SeverityBand) -> TreatmentPlan;
}

/// Inspects outputs before they are stored.
///
/// A failing report stops the pipeline with `TriageError::VerificationFailed`.
pub trait ReportVerifier: Send + Sync {
    fn verify_analysis(&self, analysis: &PreliminaryAnalysis) -> TriageResult<VerificationReport>;

    fn verify_treatment(&self, treatment: &TreatmentPlan) -> TriageResult<VerificationReport>;
}

/// The persistence collaborator. Opaque to the core.
///
/// Implementations treat `save` as append-only. A failed save is surfaced
/// to the caller as `TriageError::StoreWriteFailed`.
pub trait AssessmentStore: Send + Sync {
    fn save(&self, record: &AssessmentRecord) -> TriageResult<()>;
}
