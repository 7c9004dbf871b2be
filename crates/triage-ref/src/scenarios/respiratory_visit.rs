//! Scenario 1: Respiratory visit
//!
//! An asthma patient reports fever and a dry cough. The chronic lung
//! condition pushes the risk onto the severe respiratory path even though
//! the mean severity is only 5.5, while the treatment side sees a moderate
//! band and suggests over-the-counter relief.

use triage_contracts::{error::TriageResult, record::TriageReport};
use triage_store::InMemoryAssessmentStore;

use crate::{
    mock_data::{asthma_patient, respiratory_symptoms},
    reference_pipeline,
    scenarios::{print_input, print_report},
};

/// Run the assessment without printing.
pub fn evaluate(store: &InMemoryAssessmentStore) -> TriageResult<TriageReport> {
    let pipeline = reference_pipeline(store)?;
    pipeline.assess(respiratory_symptoms(), Some(&asthma_patient()))
}

pub fn run_scenario() -> TriageResult<()> {
    println!("=== Scenario 1: Respiratory Visit ===");
    println!();
    print_input(&respiratory_symptoms(), Some(&asthma_patient()));

    let store = InMemoryAssessmentStore::new();
    let report = evaluate(&store)?;
    print_report(&report);

    println!();
    println!("  Stored records: {}", store.len());
    println!();
    println!("  Scenario 1 complete.");
    println!();
    Ok(())
}
