//! Scenario 4: Hospital lookup
//!
//! Ranks the embedded facility directory by distance from the sample
//! location, then repeats the ranking for emergency departments only.

use triage_contracts::error::TriageResult;

use crate::{
    mock_data::{default_directory, SAMPLE_LOCATION},
    scenarios::print_facility,
};

pub fn run_scenario() -> TriageResult<()> {
    println!("=== Scenario 4: Hospital Lookup ===");
    println!();
    println!(
        "  Location: {:.4}, {:.4}",
        SAMPLE_LOCATION.latitude, SAMPLE_LOCATION.longitude
    );
    println!();

    let directory = default_directory()?;

    println!("  All facilities, nearest first:");
    for (i, ranked) in directory.rank_from(SAMPLE_LOCATION).iter().enumerate() {
        print_facility(i + 1, ranked);
    }

    println!();
    println!("  Emergency departments only:");
    for (i, ranked) in directory.rank_emergency_from(SAMPLE_LOCATION).iter().enumerate() {
        print_facility(i + 1, ranked);
    }

    println!();
    println!("  Scenario 4 complete.");
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::mock_data::{default_directory, SAMPLE_LOCATION};

    use super::run_scenario;

    #[test]
    fn test_nearest_first() {
        let ranked = default_directory().unwrap().rank_from(SAMPLE_LOCATION);
        let ids: Vec<&str> = ranked.iter().map(|r| r.facility.id.as_str()).collect();

        assert_eq!(ids.len(), 5);
        assert_eq!(&ids[..2], ["mission-heart", "northpoint-medical"]);
        assert!(
            ranked.windows(2).all(|w| w[0].distance_km <= w[1].distance_km),
            "distances must be non-decreasing"
        );
    }

    #[test]
    fn test_emergency_only() {
        let ranked = default_directory().unwrap().rank_emergency_from(SAMPLE_LOCATION);
        let ids: Vec<&str> = ranked.iter().map(|r| r.facility.id.as_str()).collect();
        assert_eq!(ids, ["northpoint-medical", "harbor-general"]);
    }

    #[test]
    fn test_run_scenario() {
        assert!(run_scenario().is_ok());
    }
}
