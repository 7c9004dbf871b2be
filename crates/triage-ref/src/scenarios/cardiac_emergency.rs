//! Scenario 2: Cardiac emergency
//!
//! A 58-year-old with hypertension reports a racing heart at severity 8.
//! The cardiac rule reports critical risk and emergency urgency, so the
//! booking advice is to skip the appointment flow and the scenario looks up
//! the nearest emergency-capable facility instead.

use triage_contracts::{error::TriageResult, record::TriageReport};
use triage_facilities::RankedFacility;
use triage_store::InMemoryAssessmentStore;

use crate::{
    mock_data::{cardiac_symptoms, default_directory, hypertensive_patient, SAMPLE_LOCATION},
    reference_pipeline,
    scenarios::{print_facility, print_input, print_report},
};

/// Run the assessment and, for emergency advice, find the nearest
/// emergency department.
pub fn evaluate(
    store: &InMemoryAssessmentStore,
) -> TriageResult<(TriageReport, Option<RankedFacility>)> {
    let pipeline = reference_pipeline(store)?;
    let report = pipeline.assess(cardiac_symptoms(), Some(&hypertensive_patient()))?;

    let nearest = if report.record.analysis.is_emergency() {
        default_directory()?.nearest_emergency(SAMPLE_LOCATION)
    } else {
        None
    };
    Ok((report, nearest))
}

pub fn run_scenario() -> TriageResult<()> {
    println!("=== Scenario 2: Cardiac Emergency ===");
    println!();
    print_input(&cardiac_symptoms(), Some(&hypertensive_patient()));

    let store = InMemoryAssessmentStore::new();
    let (report, nearest) = evaluate(&store)?;
    print_report(&report);

    println!();
    println!("  Warning signs:");
    for sign in &report.record.analysis.warning_signs {
        println!("    - {sign}");
    }

    println!();
    match nearest {
        Some(er) => {
            println!("  Nearest emergency department:");
            print_facility(1, &er);
            println!("     Directions: {}", er.directions_url());
        }
        None => println!("  No emergency department in the directory."),
    }

    println!();
    println!("  Scenario 2 complete.");
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use triage_contracts::{
        analysis::{RiskLevel, Urgency},
        record::BookingAdvice,
        symptom::SeverityBand,
        treatment::CARDIAC_REFERRAL_DIAGNOSIS,
    };
    use triage_store::InMemoryAssessmentStore;

    use super::{evaluate, run_scenario};

    #[test]
    fn test_emergency_advice() {
        let store = InMemoryAssessmentStore::new();
        let (report, _) = evaluate(&store).unwrap();
        let analysis = &report.record.analysis;

        assert_eq!(analysis.risk_level, RiskLevel::Critical);
        assert_eq!(analysis.urgency, Urgency::Emergency);
        assert_eq!(report.booking, BookingAdvice::SeekEmergencyCare);
    }

    #[test]
    fn test_patient_context_shapes_findings() {
        let store = InMemoryAssessmentStore::new();
        let (report, _) = evaluate(&store).unwrap();
        let analysis = &report.record.analysis;

        assert!(analysis.analysis_summary.contains("Your age increases cardiac risk."));
        assert!(analysis
            .key_findings
            .contains(&"Hypertension increases cardiac risk".to_string()));
    }

    #[test]
    fn test_referral_without_medication() {
        let store = InMemoryAssessmentStore::new();
        let (report, _) = evaluate(&store).unwrap();

        assert_eq!(report.record.severity_band, SeverityBand::Severe);
        assert_eq!(report.record.treatment.diagnosis, CARDIAC_REFERRAL_DIAGNOSIS);
        assert!(report.record.treatment.medications.is_empty());
    }

    #[test]
    fn test_nearest_emergency_department() {
        let store = InMemoryAssessmentStore::new();
        let (_, nearest) = evaluate(&store).unwrap();

        let er = nearest.expect("emergency advice must come with a facility");
        assert_eq!(er.facility.id, "northpoint-medical");
        assert!(er.facility.emergency_available);
    }

    #[test]
    fn test_run_scenario() {
        assert!(run_scenario().is_ok());
    }
}
