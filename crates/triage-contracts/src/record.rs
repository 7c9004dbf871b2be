//! Assessment records handed to the storage collaborator, and the report
//! returned to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    analysis::PreliminaryAnalysis,
    symptom::{SeverityBand, Symptom},
    treatment::TreatmentPlan,
};

/// Unique identifier for one stored assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub Uuid);

impl AssessmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AssessmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Everything one assessment produced, as the storage collaborator sees it.
///
/// The id and timestamp are assigned here, outside the classifiers, so the
/// classifier outputs stay a pure function of their inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: AssessmentId,
    pub created_at: DateTime<Utc>,
    pub symptoms: Vec<Symptom>,
    pub severity_band: SeverityBand,
    pub analysis: PreliminaryAnalysis,
    pub treatment: TreatmentPlan,
}

impl AssessmentRecord {
    pub fn new(
        symptoms: Vec<Symptom>,
        severity_band: SeverityBand,
        analysis: PreliminaryAnalysis,
        treatment: TreatmentPlan,
    ) -> Self {
        Self {
            id: AssessmentId::new(),
            created_at: Utc::now(),
            symptoms,
            severity_band,
            analysis,
            treatment,
        }
    }
}

/// What the application should offer after an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookingAdvice {
    /// Emergency urgency: do not book, go to an emergency room now.
    SeekEmergencyCare,
    /// Any other urgency: an appointment with the named specialist is fine.
    BookAppointment { specialist: String },
}

impl BookingAdvice {
    pub fn for_analysis(analysis: &PreliminaryAnalysis) -> Self {
        if analysis.is_emergency() {
            BookingAdvice::SeekEmergencyCare
        } else {
            BookingAdvice::BookAppointment {
                specialist: analysis.recommended_specialist.clone(),
            }
        }
    }
}

/// The full result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageReport {
    pub record: AssessmentRecord,
    pub booking: BookingAdvice,
}
