//! The triage pipeline: the caller that wires the components together.
//!
//!   Normalize → Band → Classify + Generate → Verify → Store → Advise
//!
//! Normalization runs exactly once. The classifier and the generator each
//! read the same normalized data and never see each other's output, so the
//! risk level and the severity band are free to disagree.

use tracing::{debug, info, warn};

use triage_contracts::{
    error::{TriageError, TriageResult},
    patient::PatientContext,
    record::{AssessmentRecord, BookingAdvice, TriageReport},
    symptom::{SeverityBand, Symptom},
    verify::VerificationReport,
};

use crate::{
    normalize::normalize,
    traits::{AssessmentStore, ReportVerifier, RiskClassifier, TreatmentGenerator},
};

/// Drives one assessment per call to `assess()`.
///
/// Holds no per-request state; a single pipeline can serve any number of
/// assessments, from any number of threads.
pub struct TriagePipeline {
    classifier: Box<dyn RiskClassifier>,
    generator: Box<dyn TreatmentGenerator>,
    verifier: Box<dyn ReportVerifier>,
    store: Box<dyn AssessmentStore>,
}

impl TriagePipeline {
    pub fn new(
        classifier: Box<dyn RiskClassifier>,
        generator: Box<dyn TreatmentGenerator>,
        verifier: Box<dyn ReportVerifier>,
        store: Box<dyn AssessmentStore>,
    ) -> Self {
        Self {
            classifier,
            generator,
            verifier,
            store,
        }
    }

    /// Run one assessment end to end.
    ///
    /// # Pipeline
    ///
    /// 1. Normalize `symptoms` (rejects empty or out-of-range input)
    /// 2. Derive the severity band from the mean severity
    /// 3. Classify risk and generate treatment, independently
    /// 4. Verify both outputs; any failure aborts before storage
    /// 5. Save the assessment record
    /// 6. Derive booking advice from the analysis urgency
    ///
    /// # Errors
    ///
    /// Input validation errors from normalization, `VerificationFailed`
    /// from step 4, and whatever the store returns from step 5.
    pub fn assess(
        &self,
        symptoms: Vec<Symptom>,
        context: Option<&PatientContext>,
    ) -> TriageResult<TriageReport> {
        let normalized = normalize(&symptoms)?;
        let band = SeverityBand::from_mean(normalized.mean_severity);

        debug!(
            symptom_count = symptoms.len(),
            band = %band,
            has_context = context.is_some(),
            "assessment starting"
        );

        let analysis = self.classifier.classify(&normalized, context);
        let treatment = self.generator.generate(&normalized, band);

        check("analysis", self.verifier.verify_analysis(&analysis)?)?;
        check("treatment", self.verifier.verify_treatment(&treatment)?)?;

        let record = AssessmentRecord::new(symptoms, band, analysis, treatment);
        self.store.save(&record)?;

        let booking = BookingAdvice::for_analysis(&record.analysis);

        info!(
            assessment_id = %record.id,
            risk_level = ?record.analysis.risk_level,
            urgency = ?record.analysis.urgency,
            band = %band,
            "assessment stored"
        );

        Ok(TriageReport { record, booking })
    }
}

fn check(output: &str, report: VerificationReport) -> TriageResult<()> {
    if report.passed {
        return Ok(());
    }
    let summary = report.summary();
    warn!(output, failures = %summary, "output verification failed");
    Err(TriageError::VerificationFailed {
        reason: format!("{output}: {summary}"),
    })
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use triage_contracts::{
        analysis::{PreliminaryAnalysis, RiskLevel, Urgency},
        error::{TriageError, TriageResult},
        patient::PatientContext,
        record::{AssessmentRecord, BookingAdvice},
        symptom::{SeverityBand, Symptom},
        treatment::TreatmentPlan,
        verify::{VerificationFailure, VerificationReport},
    };

    use crate::normalize::NormalizedSymptoms;
    use crate::traits::{AssessmentStore, ReportVerifier, RiskClassifier, TreatmentGenerator};

    use super::TriagePipeline;

    // ── Mock helpers ─────────────────────────────────────────────────────────

    /// A classifier that returns a fixed urgency and counts its calls.
    struct MockClassifier {
        urgency: Urgency,
        calls: Arc<Mutex<u32>>,
    }

    impl RiskClassifier for MockClassifier {
        fn classify(
            &self,
            _symptoms: &NormalizedSymptoms,
            _context: Option<&PatientContext>,
        ) -> PreliminaryAnalysis {
            *self.calls.lock().unwrap() += 1;
            let risk_level = if self.urgency == Urgency::Emergency {
                RiskLevel::Critical
            } else {
                RiskLevel::Medium
            };
            PreliminaryAnalysis {
                risk_level,
                urgency: self.urgency,
                preliminary_diagnosis: "Mock".to_string(),
                recommended_specialist: "Mock Specialist".to_string(),
                analysis_summary: "mock".to_string(),
                key_findings: vec!["f".to_string()],
                warning_signs: vec!["w".to_string()],
            }
        }
    }

    /// A generator that records the band it was handed.
    struct MockGenerator {
        seen_band: Arc<Mutex<Option<SeverityBand>>>,
    }

    impl TreatmentGenerator for MockGenerator {
        fn generate(&self, _symptoms: &NormalizedSymptoms, band: SeverityBand) -> TreatmentPlan {
            *self.seen_band.lock().unwrap() = Some(band);
            TreatmentPlan {
                diagnosis: "Mock".to_string(),
                treatment_plan: "rest".to_string(),
                medications: vec![],
                precautions: "none".to_string(),
            }
        }
    }

    /// A verifier that can be configured to pass or fail.
    struct MockVerifier {
        pass: bool,
    }

    impl ReportVerifier for MockVerifier {
        fn verify_analysis(&self, _a: &PreliminaryAnalysis) -> TriageResult<VerificationReport> {
            Ok(self.report())
        }

        fn verify_treatment(&self, _t: &TreatmentPlan) -> TriageResult<VerificationReport> {
            Ok(VerificationReport::from_failures(vec![]))
        }
    }

    impl MockVerifier {
        fn report(&self) -> VerificationReport {
            if self.pass {
                VerificationReport::from_failures(vec![])
            } else {
                VerificationReport::from_failures(vec![VerificationFailure {
                    rule_id: "findings-present".to_string(),
                    message: "key_findings is empty".to_string(),
                }])
            }
        }
    }

    /// A store that records every save, or fails every save.
    struct MockStore {
        records: Arc<Mutex<Vec<AssessmentRecord>>>,
        fail: bool,
    }

    impl AssessmentStore for MockStore {
        fn save(&self, record: &AssessmentRecord) -> TriageResult<()> {
            if self.fail {
                return Err(TriageError::StoreWriteFailed {
                    reason: "backend unavailable".to_string(),
                });
            }
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    struct Handles {
        calls: Arc<Mutex<u32>>,
        seen_band: Arc<Mutex<Option<SeverityBand>>>,
        records: Arc<Mutex<Vec<AssessmentRecord>>>,
    }

    fn make_pipeline(urgency: Urgency, verify_pass: bool, store_fail: bool) -> (TriagePipeline, Handles) {
        let handles = Handles {
            calls: Arc::new(Mutex::new(0)),
            seen_band: Arc::new(Mutex::new(None)),
            records: Arc::new(Mutex::new(vec![])),
        };
        let pipeline = TriagePipeline::new(
            Box::new(MockClassifier {
                urgency,
                calls: handles.calls.clone(),
            }),
            Box::new(MockGenerator {
                seen_band: handles.seen_band.clone(),
            }),
            Box::new(MockVerifier { pass: verify_pass }),
            Box::new(MockStore {
                records: handles.records.clone(),
                fail: store_fail,
            }),
        );
        (pipeline, handles)
    }

    // ── Tests ────────────────────────────────────────────────────────────────

    #[test]
    fn test_successful_assessment_stores_one_record() {
        let (pipeline, handles) = make_pipeline(Urgency::Urgent, true, false);

        let report = pipeline
            .assess(vec![Symptom::new("fever", 6), Symptom::new("cough", 5)], None)
            .unwrap();

        assert_eq!(*handles.calls.lock().unwrap(), 1);
        assert_eq!(handles.records.lock().unwrap().len(), 1);
        assert_eq!(handles.records.lock().unwrap()[0].id, report.record.id);
        assert_eq!(report.record.symptoms.len(), 2);
        assert_eq!(
            report.booking,
            BookingAdvice::BookAppointment {
                specialist: "Mock Specialist".to_string()
            }
        );
    }

    #[test]
    fn test_band_is_derived_from_mean() {
        let (pipeline, handles) = make_pipeline(Urgency::Routine, true, false);

        let report = pipeline
            .assess(vec![Symptom::new("a", 3), Symptom::new("b", 9)], None)
            .unwrap();

        assert_eq!(*handles.seen_band.lock().unwrap(), Some(SeverityBand::Moderate));
        assert_eq!(report.record.severity_band, SeverityBand::Moderate);
    }

    #[test]
    fn test_emergency_advises_against_booking() {
        let (pipeline, _) = make_pipeline(Urgency::Emergency, true, false);
        let report = pipeline.assess(vec![Symptom::new("stroke", 2)], None).unwrap();
        assert_eq!(report.booking, BookingAdvice::SeekEmergencyCare);
    }

    #[test]
    fn test_empty_symptoms_never_reach_classifier() {
        let (pipeline, handles) = make_pipeline(Urgency::Routine, true, false);

        match pipeline.assess(vec![], None) {
            Err(TriageError::EmptySymptoms) => {}
            other => panic!("expected EmptySymptoms, got {:?}", other),
        }
        assert_eq!(*handles.calls.lock().unwrap(), 0);
        assert!(handles.records.lock().unwrap().is_empty());
    }

    #[test]
    fn test_verification_failure_blocks_storage() {
        let (pipeline, handles) = make_pipeline(Urgency::Routine, false, false);

        match pipeline.assess(vec![Symptom::new("cough", 2)], None) {
            Err(TriageError::VerificationFailed { reason }) => {
                assert!(reason.contains("findings-present"), "unexpected reason: {reason}");
                assert!(reason.starts_with("analysis"));
            }
            other => panic!("expected VerificationFailed, got {:?}", other),
        }
        assert!(handles.records.lock().unwrap().is_empty());
    }

    #[test]
    fn test_store_failure_propagates() {
        let (pipeline, _) = make_pipeline(Urgency::Routine, true, true);

        match pipeline.assess(vec![Symptom::new("cough", 2)], None) {
            Err(TriageError::StoreWriteFailed { reason }) => {
                assert!(reason.contains("backend unavailable"));
            }
            other => panic!("expected StoreWriteFailed, got {:?}", other),
        }
    }
}
