//! TOML-configured facility directory.
//!
//! ```toml
//! [[facilities]]
//! id = "sf-general"
//! name = "San Francisco General Hospital"
//! address = "1001 Potrero Ave, San Francisco, CA"
//! latitude = 37.7557
//! longitude = -122.4049
//! phone = "(628) 206-8000"
//! specialties = ["Emergency Medicine", "Trauma"]
//! emergency_available = true
//! ```

use std::{collections::HashSet, path::Path};

use serde::Deserialize;
use tracing::{debug, info};

use triage_contracts::{
    error::{TriageError, TriageResult},
    facility::{Coordinate, Facility},
};

use crate::distance::{rank_by_distance, RankedFacility};

#[derive(Debug, Deserialize)]
struct DirectoryConfig {
    #[serde(default)]
    facilities: Vec<Facility>,
}

/// Validated list of facilities, in file order.
///
/// Construct via `from_toml_str` or `from_file`. Loading rejects
/// coordinates outside ±90 latitude / ±180 longitude, blank ids and
/// duplicate ids.
#[derive(Debug, Clone, Default)]
pub struct FacilityDirectory {
    facilities: Vec<Facility>,
}

impl FacilityDirectory {
    /// Parse a directory from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::ConfigError` if the TOML is malformed or any
    /// facility fails validation.
    pub fn from_toml_str(s: &str) -> TriageResult<Self> {
        let config: DirectoryConfig = toml::from_str(s).map_err(|e| TriageError::ConfigError {
            reason: format!("failed to parse facility directory TOML: {e}"),
        })?;
        Self::new(config.facilities)
    }

    /// Read the file at `path` and parse it as a facility directory.
    pub fn from_file(path: &Path) -> TriageResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| TriageError::ConfigError {
            reason: format!("failed to read facility directory '{}': {e}", path.display()),
        })?;
        let directory = Self::from_toml_str(&contents)?;
        info!(
            path = %path.display(),
            facilities = directory.len(),
            "facility directory loaded"
        );
        Ok(directory)
    }

    /// Build a directory from already-parsed facilities, applying the same
    /// validation as the TOML loaders.
    pub fn new(facilities: Vec<Facility>) -> TriageResult<Self> {
        validate(&facilities)?;
        debug!(facilities = facilities.len(), "facility directory validated");
        Ok(Self { facilities })
    }

    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    pub fn get(&self, id: &str) -> Option<&Facility> {
        self.facilities.iter().find(|f| f.id == id)
    }

    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    /// Every facility, nearest first.
    pub fn rank_from(&self, origin: Coordinate) -> Vec<RankedFacility> {
        rank_by_distance(&self.facilities, origin)
    }

    /// Emergency-capable facilities only, nearest first.
    pub fn rank_emergency_from(&self, origin: Coordinate) -> Vec<RankedFacility> {
        let emergency: Vec<Facility> = self
            .facilities
            .iter()
            .filter(|f| f.emergency_available)
            .cloned()
            .collect();
        rank_by_distance(&emergency, origin)
    }

    /// The closest emergency-capable facility, if the directory has one.
    pub fn nearest_emergency(&self, origin: Coordinate) -> Option<RankedFacility> {
        self.rank_emergency_from(origin).into_iter().next()
    }
}

fn validate(facilities: &[Facility]) -> TriageResult<()> {
    let mut seen = HashSet::new();
    for f in facilities {
        if f.id.trim().is_empty() {
            return Err(TriageError::ConfigError {
                reason: format!("facility '{}' has a blank id", f.name),
            });
        }
        if !seen.insert(f.id.as_str()) {
            return Err(TriageError::ConfigError {
                reason: format!("duplicate facility id '{}'", f.id),
            });
        }
        if !f.coordinate().is_in_range() {
            return Err(TriageError::ConfigError {
                reason: format!(
                    "facility '{}' has out-of-range coordinates ({}, {})",
                    f.id, f.latitude, f.longitude
                ),
            });
        }
    }
    Ok(())
}
