//! Scenario 3: Chest pain divergence
//!
//! Risk and treatment are decided independently. A single chest pain at
//! severity 5 is a critical keyword for the risk table, yet its mean lands
//! in the moderate band and the treatment table issues its fixed cardiac
//! referral. The stored record keeps both views as they are.

use triage_contracts::{
    error::{TriageError, TriageResult},
    record::TriageReport,
};
use triage_store::InMemoryAssessmentStore;

use crate::{
    mock_data::chest_pain_symptoms,
    reference_pipeline,
    scenarios::{print_input, print_report},
};

pub fn evaluate(store: &InMemoryAssessmentStore) -> TriageResult<TriageReport> {
    reference_pipeline(store)?.assess(chest_pain_symptoms(), None)
}

pub fn run_scenario() -> TriageResult<()> {
    println!("=== Scenario 3: Chest Pain Divergence ===");
    println!();
    print_input(&chest_pain_symptoms(), None);

    let store = InMemoryAssessmentStore::new();
    let report = evaluate(&store)?;
    print_report(&report);

    println!();
    println!("  Stored record (JSON):");
    let json = serde_json::to_string_pretty(&report.record).map_err(|e| {
        TriageError::Serialization {
            reason: format!("record could not be serialized: {e}"),
        }
    })?;
    for line in json.lines() {
        println!("    {line}");
    }

    println!();
    println!("  Scenario 3 complete.");
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use triage_contracts::{
        analysis::RiskLevel, symptom::SeverityBand, treatment::CARDIAC_REFERRAL_DIAGNOSIS,
    };
    use triage_store::InMemoryAssessmentStore;

    use super::{evaluate, run_scenario};

    #[test]
    fn test_risk_and_band_diverge() {
        let store = InMemoryAssessmentStore::new();
        let report = evaluate(&store).unwrap();

        assert_eq!(report.record.analysis.risk_level, RiskLevel::Critical);
        assert_eq!(report.record.severity_band, SeverityBand::Moderate);
        assert_eq!(report.record.treatment.diagnosis, CARDIAC_REFERRAL_DIAGNOSIS);
        assert!(report.record.treatment.medications.is_empty());
    }

    #[test]
    fn test_run_scenario() {
        assert!(run_scenario().is_ok());
    }
}
