//! # triage-facilities
//!
//! Haversine distance and a TOML-configured directory of hospitals and
//! clinics, ranked by proximity to the patient.
//!
//! ```rust,ignore
//! use triage_contracts::facility::Coordinate;
//! use triage_facilities::FacilityDirectory;
//!
//! let directory = FacilityDirectory::from_file(Path::new("facilities.toml"))?;
//! if let Some(er) = directory.nearest_emergency(Coordinate::new(37.77, -122.42)) {
//!     println!("{} ({})", er.facility.name, er.display_distance());
//! }
//! ```

pub mod directory;
pub mod distance;

pub use directory::FacilityDirectory;
pub use distance::{distance_km, rank_by_distance, RankedFacility, EARTH_RADIUS_KM};

// ── Tests ─────────────────────────────────────────────────────────────────────
