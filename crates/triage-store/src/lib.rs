//! # triage-store
//!
//! Reference implementation of the `AssessmentStore` seam.
//!
//! The pipeline hands every completed assessment to a store exactly once.
//! `InMemoryAssessmentStore` keeps them in append order and never mutates a
//! saved record; a real deployment would put a database behind the same
//! trait.
//!
//! ```rust,ignore
//! use triage_core::traits::AssessmentStore;
//! use triage_store::InMemoryAssessmentStore;
//!
//! let store = InMemoryAssessmentStore::new();
//! store.save(&record)?;
//! assert_eq!(store.find(&record.id), Some(record));
//! ```

pub mod memory;

pub use memory::InMemoryAssessmentStore;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use triage_contracts::{
        analysis::{PreliminaryAnalysis, RiskLevel, Urgency},
        error::TriageError,
        record::{AssessmentId, AssessmentRecord},
        symptom::{SeverityBand, Symptom},
        treatment::TreatmentPlan,
    };
    use triage_core::traits::AssessmentStore;

    use super::InMemoryAssessmentStore;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn make_record(symptom: &str, severity: u8) -> AssessmentRecord {
        let analysis = PreliminaryAnalysis {
            risk_level: RiskLevel::Low,
            urgency: Urgency::Routine,
            preliminary_diagnosis: "General Malaise / Non-Specific Symptoms".to_string(),
            recommended_specialist: "General Practitioner / Family Medicine".to_string(),
            analysis_summary: "Multiple non-specific symptoms present.".to_string(),
            key_findings: vec!["Multiple symptoms present".to_string()],
            warning_signs: vec!["Monitor overall wellness".to_string()],
        };
        let treatment = TreatmentPlan {
            diagnosis: "General Malaise - Multiple Symptoms".to_string(),
            treatment_plan: "General supportive care and symptom monitoring.".to_string(),
            medications: Vec::new(),
            precautions: "• Maintain a symptom journal".to_string(),
        };
        AssessmentRecord::new(
            vec![Symptom::new(symptom, severity)],
            SeverityBand::from_mean(f64::from(severity)),
            analysis,
            treatment,
        )
    }

    // ── Tests ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_new_store_is_empty() {
        let store = InMemoryAssessmentStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.records().is_empty());
    }

    /// Records come back in the order they were saved.
    #[test]
    fn test_save_appends_in_order() {
        let store = InMemoryAssessmentStore::new();
        let first = make_record("fatigue", 2);
        let second = make_record("rash", 5);
        let third = make_record("fatigue", 8);

        store.save(&first).unwrap();
        store.save(&second).unwrap();
        store.save(&third).unwrap();

        let ids: Vec<AssessmentId> = store.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, [first.id, second.id, third.id], "append order must be preserved");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_find_by_id() {
        let store = InMemoryAssessmentStore::new();
        let record = make_record("fatigue", 4);
        store.save(&record).unwrap();
        store.save(&make_record("rash", 3)).unwrap();

        assert_eq!(store.find(&record.id), Some(record));
        assert_eq!(
            store.find(&AssessmentId::new()),
            None,
            "an unknown id must not match any record"
        );
    }

    /// Clones share the backing list.
    #[test]
    fn test_clone_shares_records() {
        let store = InMemoryAssessmentStore::new();
        let handle = store.clone();
        handle.save(&make_record("fatigue", 4)).unwrap();

        assert_eq!(store.len(), 1, "a save through a clone must be visible");
    }

    /// The stored record is a copy; later changes to the caller's value do
    /// not reach the store.
    #[test]
    fn test_saved_record_is_a_copy() {
        let store = InMemoryAssessmentStore::new();
        let mut record = make_record("fatigue", 4);
        store.save(&record).unwrap();

        record.analysis.risk_level = RiskLevel::Critical;
        let stored = store.find(&record.id).unwrap();
        assert_eq!(stored.analysis.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_poisoned_lock_fails_save() {
        let store = InMemoryAssessmentStore::new();
        let shared = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = shared.records.lock().unwrap();
            panic!("poison the store lock");
        })
        .join();

        let result = store.save(&make_record("fatigue", 4));
        assert!(
            matches!(result, Err(TriageError::StoreWriteFailed { .. })),
            "a poisoned lock must surface as StoreWriteFailed, got {result:?}"
        );
        assert!(store.records().is_empty());
    }
}
