//! # triage-ref
//!
//! Reference wiring of the clinical triage engine.
//!
//! [`reference_pipeline`] assembles a [`TriagePipeline`] from the keyword
//! rule tables, the schema verifier and an in-memory store. The
//! [`scenarios`] module runs it against mock patients:
//!
//! 1. **Respiratory visit**: asthma patient with fever and cough.
//! 2. **Cardiac emergency**: older hypertensive patient; emergency advice and
//!    the nearest emergency department.
//! 3. **Chest pain divergence**: critical risk alongside a moderate severity
//!    band and a no-medication referral.
//! 4. **Hospital lookup**: directory ranked by distance.
//!
//! All data is hardcoded and fictional.

pub mod mock_data;
pub mod scenarios;

use triage_contracts::error::TriageResult;
use triage_core::TriagePipeline;
use triage_rules::{KeywordRiskClassifier, KeywordTreatmentGenerator};
use triage_store::InMemoryAssessmentStore;
use triage_verify::TriageVerifier;

/// Build a pipeline that saves into `store`.
///
/// The store is cloned into the pipeline; the caller's handle sees every
/// saved record.
pub fn reference_pipeline(store: &InMemoryAssessmentStore) -> TriageResult<TriagePipeline> {
    Ok(TriagePipeline::new(
        Box::new(KeywordRiskClassifier::new()),
        Box::new(KeywordTreatmentGenerator::new()),
        Box::new(TriageVerifier::new()?),
        Box::new(store.clone()),
    ))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use triage_contracts::{
        error::TriageError,
        record::BookingAdvice,
        symptom::{SeverityBand, Symptom},
    };
    use triage_store::InMemoryAssessmentStore;

    use super::{mock_data, reference_pipeline};

    #[test]
    fn test_one_record_per_assessment() {
        let store = InMemoryAssessmentStore::new();
        let pipeline = reference_pipeline(&store).unwrap();

        let first = pipeline.assess(mock_data::respiratory_symptoms(), None).unwrap();
        let second = pipeline
            .assess(mock_data::cardiac_symptoms(), Some(&mock_data::hypertensive_patient()))
            .unwrap();

        assert_eq!(store.len(), 2, "each successful assessment stores exactly one record");
        assert_eq!(store.find(&first.record.id), Some(first.record));
        assert_eq!(store.find(&second.record.id), Some(second.record));
    }

    #[test]
    fn test_rejected_input_stores_nothing() {
        let store = InMemoryAssessmentStore::new();
        let pipeline = reference_pipeline(&store).unwrap();

        assert!(matches!(
            pipeline.assess(Vec::new(), None),
            Err(TriageError::EmptySymptoms)
        ));
        assert!(matches!(
            pipeline.assess(vec![Symptom::new("fever", 11)], None),
            Err(TriageError::InvalidSeverity { severity: 11, .. })
        ));
        assert!(store.is_empty(), "rejected input must not reach the store");
    }

    #[test]
    fn test_stroke_advises_emergency_care() {
        let store = InMemoryAssessmentStore::new();
        let pipeline = reference_pipeline(&store).unwrap();

        let report = pipeline.assess(vec![Symptom::new("stroke", 2)], None).unwrap();
        assert_eq!(report.booking, BookingAdvice::SeekEmergencyCare);
        assert_eq!(report.record.severity_band, SeverityBand::Mild);
    }

    #[test]
    fn test_default_directory_loads() {
        let directory = mock_data::default_directory().unwrap();
        assert_eq!(directory.len(), 5);
        assert!(mock_data::SAMPLE_LOCATION.is_in_range());
    }
}
