//! Reference scenarios.
//!
//! Each scenario wires a real pipeline (keyword rules, schema verifier,
//! in-memory store) to mock patient data, prints what happened, and returns
//! an error if the engine does.

pub mod cardiac_emergency;
pub mod chest_pain_divergence;
pub mod hospital_lookup;
pub mod respiratory_visit;

use triage_contracts::{
    patient::PatientContext,
    record::{BookingAdvice, TriageReport},
    symptom::Symptom,
};
use triage_facilities::RankedFacility;

pub(crate) fn print_input(symptoms: &[Symptom], patient: Option<&PatientContext>) {
    for s in symptoms {
        println!("  Symptom:        {} (severity {}, {})", s.name, s.severity, s.band());
    }
    match patient {
        Some(p) => {
            let age = p.age.map_or_else(|| "unknown".to_string(), |a| a.to_string());
            let conditions: Vec<&str> = p.chronic_conditions.iter().map(String::as_str).collect();
            println!("  Patient age:    {age}");
            println!("  Conditions:     {}", conditions.join(", "));
        }
        None => println!("  Patient:        no profile on file"),
    }
    println!();
}

pub(crate) fn print_report(report: &TriageReport) {
    let analysis = &report.record.analysis;
    let treatment = &report.record.treatment;

    println!("  Risk level:     {}", analysis.risk_level.as_str());
    println!("  Urgency:        {}", analysis.urgency.as_str());
    println!("  Diagnosis:      {}", analysis.preliminary_diagnosis);
    println!("  Specialist:     {}", analysis.recommended_specialist);
    println!("  Severity band:  {}", report.record.severity_band);
    println!("  Treatment:      {}", treatment.diagnosis);
    if treatment.medications.is_empty() {
        println!("  Medications:    none");
    } else {
        println!("  Medications:    {}", treatment.medication_names().join(", "));
    }
    match &report.booking {
        BookingAdvice::SeekEmergencyCare => {
            println!("  Booking:        DO NOT BOOK - seek emergency care now")
        }
        BookingAdvice::BookAppointment { specialist } => {
            println!("  Booking:        appointment with {specialist}")
        }
    }
    println!("  Record id:      {}", report.record.id);
}

pub(crate) fn print_facility(rank: usize, ranked: &RankedFacility) {
    let f = &ranked.facility;
    println!(
        "  {rank}. {}{} - {}",
        f.name,
        if f.emergency_available { " [ER]" } else { "" },
        ranked.display_distance()
    );
    println!("     {} | {}", f.address, f.phone);
}
