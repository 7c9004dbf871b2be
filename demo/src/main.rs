//! Clinical Triage Engine demo CLI
//!
//! Assesses a symptom report, ranks nearby facilities, or runs the reference
//! scenarios.
//!
//! Usage:
//!   cargo run -p triage-demo -- assess --symptom "fever:6" --symptom "cough:5" --age 34
//!   cargo run -p triage-demo -- hospitals --lat 37.7749 --lon -122.4194 --emergency-only
//!   cargo run -p triage-demo -- run-all

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use triage_contracts::{
    error::{TriageError, TriageResult},
    facility::Coordinate,
    patient::PatientContext,
    record::{BookingAdvice, TriageReport},
    symptom::Symptom,
};
use triage_facilities::FacilityDirectory;
use triage_ref::{
    mock_data, reference_pipeline,
    scenarios::{cardiac_emergency, chest_pain_divergence, hospital_lookup, respiratory_visit},
};
use triage_store::InMemoryAssessmentStore;

// ── CLI definition ────────────────────────────────────────────────────────────

/// Rule-based symptom triage: risk, urgency, self-care and where to go.
#[derive(Parser)]
#[command(
    name = "triage-demo",
    about = "Clinical triage engine demo",
    long_about = "Classifies reported symptoms into risk and urgency, suggests self-care,\n\
                  and ranks nearby facilities. Not a medical device."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assess a symptom report.
    Assess {
        /// Symptom as NAME:SEVERITY (severity 1-10). Repeat for several.
        #[arg(long = "symptom", value_parser = parse_symptom, required = true)]
        symptoms: Vec<Symptom>,

        /// Patient age in years.
        #[arg(long)]
        age: Option<u32>,

        /// Chronic condition. Repeat for several.
        #[arg(long = "condition")]
        conditions: Vec<String>,

        /// Known allergy. Repeat for several.
        #[arg(long = "allergy")]
        allergies: Vec<String>,

        /// Print the full report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Rank facilities by distance from a location.
    Hospitals {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Only facilities with an emergency department.
        #[arg(long)]
        emergency_only: bool,

        /// Facility directory TOML. Defaults to the built-in directory.
        #[arg(long)]
        directory: Option<PathBuf>,

        /// Print the ranking as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Run all four reference scenarios in sequence.
    RunAll,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug to see which rule matched.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Assess {
            symptoms,
            age,
            conditions,
            allergies,
            json,
        } => assess(symptoms, patient_context(age, conditions, allergies), json),
        Command::Hospitals {
            lat,
            lon,
            emergency_only,
            directory,
            json,
        } => hospitals(Coordinate::new(lat, lon), emergency_only, directory, json),
        Command::RunAll => run_all(),
    };

    if let Err(e) = result {
        eprintln!("triage-demo error: {e}");
        std::process::exit(1);
    }
}

// ── Argument parsing ──────────────────────────────────────────────────────────

/// Parse `NAME:SEVERITY`. The range check happens in the engine.
fn parse_symptom(s: &str) -> Result<Symptom, String> {
    let (name, severity) = s
        .rsplit_once(':')
        .ok_or_else(|| format!("expected NAME:SEVERITY, got '{s}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("symptom name is empty in '{s}'"));
    }
    let severity: u8 = severity
        .trim()
        .parse()
        .map_err(|e| format!("invalid severity in '{s}': {e}"))?;
    Ok(Symptom::new(name, severity))
}

/// `None` when no patient detail was given on the command line.
fn patient_context(
    age: Option<u32>,
    conditions: Vec<String>,
    allergies: Vec<String>,
) -> Option<PatientContext> {
    if age.is_none() && conditions.is_empty() && allergies.is_empty() {
        return None;
    }
    Some(PatientContext {
        age,
        chronic_conditions: conditions.into_iter().collect(),
        allergies: allergies.into_iter().collect(),
    })
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn assess(symptoms: Vec<Symptom>, patient: Option<PatientContext>, json: bool) -> TriageResult<()> {
    let store = InMemoryAssessmentStore::new();
    let pipeline = reference_pipeline(&store)?;
    let report = pipeline.assess(symptoms, patient.as_ref())?;
    debug!(stored = store.len(), "assessment complete");

    if json {
        println!("{}", to_json(&report)?);
    } else {
        print_assessment(&report);
    }
    Ok(())
}

fn hospitals(
    origin: Coordinate,
    emergency_only: bool,
    directory: Option<PathBuf>,
    json: bool,
) -> TriageResult<()> {
    let directory = match directory {
        Some(path) => FacilityDirectory::from_file(&path)?,
        None => mock_data::default_directory()?,
    };
    let ranked = if emergency_only {
        directory.rank_emergency_from(origin)
    } else {
        directory.rank_from(origin)
    };

    if json {
        println!("{}", to_json(&ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("No matching facilities.");
    }
    for (i, r) in ranked.iter().enumerate() {
        let f = &r.facility;
        println!(
            "{}. {}{} ({})",
            i + 1,
            f.name,
            if f.emergency_available { " [ER]" } else { "" },
            r.display_distance()
        );
        println!("   {}", f.address);
        if !f.phone.is_empty() {
            println!("   {}", f.phone);
        }
        if !f.specialties.is_empty() {
            println!("   {}", f.specialties.join(", "));
        }
        println!("   {}", r.directions_url());
    }
    Ok(())
}

fn run_all() -> TriageResult<()> {
    respiratory_visit::run_scenario()?;
    cardiac_emergency::run_scenario()?;
    chest_pain_divergence::run_scenario()?;
    hospital_lookup::run_scenario()?;
    println!("All scenarios completed successfully.");
    Ok(())
}

// ── Output ────────────────────────────────────────────────────────────────────

fn to_json<T: serde::Serialize>(value: &T) -> TriageResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| TriageError::Serialization {
        reason: e.to_string(),
    })
}

fn print_assessment(report: &TriageReport) {
    let analysis = &report.record.analysis;
    let treatment = &report.record.treatment;

    println!("Risk level:  {}", analysis.risk_level.as_str().to_uppercase());
    println!("Urgency:     {}", analysis.urgency.as_str().to_uppercase());
    println!("Diagnosis:   {}", analysis.preliminary_diagnosis);
    println!("Specialist:  {}", analysis.recommended_specialist);
    println!();
    println!("{}", analysis.analysis_summary);
    println!();
    println!("Key findings:");
    for finding in &analysis.key_findings {
        println!("  - {finding}");
    }
    println!("Warning signs:");
    for sign in &analysis.warning_signs {
        println!("  - {sign}");
    }

    println!();
    println!("Treatment ({} band): {}", report.record.severity_band, treatment.diagnosis);
    println!();
    println!("{}", treatment.treatment_plan);
    if !treatment.medications.is_empty() {
        println!();
        println!("Medications:");
        for m in &treatment.medications {
            println!("  - {}: {}, {}, {}", m.name, m.dosage, m.frequency, m.duration);
        }
    }
    println!();
    println!("Precautions:");
    println!("{}", treatment.precautions);

    println!();
    match &report.booking {
        BookingAdvice::SeekEmergencyCare => {
            println!("DO NOT BOOK AN APPOINTMENT. Call emergency services or go to the nearest ER now.");
        }
        BookingAdvice::BookAppointment { specialist } => {
            println!("Next step: book an appointment with {specialist}.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_symptom, patient_context};

    #[test]
    fn test_parse_symptom() {
        let s = parse_symptom("sore throat:4").unwrap();
        assert_eq!(s.name, "sore throat");
        assert_eq!(s.severity, 4);

        // Only the last colon separates the severity.
        let s = parse_symptom("pain: chest:7").unwrap();
        assert_eq!(s.name, "pain: chest");
    }

    #[test]
    fn test_parse_symptom_rejects_malformed() {
        assert!(parse_symptom("fever").is_err());
        assert!(parse_symptom(":5").is_err());
        assert!(parse_symptom("fever:high").is_err());
        assert!(parse_symptom("fever:-1").is_err());
    }

    #[test]
    fn test_patient_context_absent_without_details() {
        assert!(patient_context(None, Vec::new(), Vec::new()).is_none());

        let ctx = patient_context(None, vec!["Asthma".to_string()], Vec::new()).unwrap();
        assert!(ctx.has_condition("asthma"));
    }
}
