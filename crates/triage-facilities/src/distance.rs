//! Haversine great-circle distance and proximity ranking.

use serde::{Deserialize, Serialize};

use triage_contracts::facility::{Coordinate, Facility};

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two points given in decimal
/// degrees.
///
/// No validation: out-of-range inputs still produce a number and NaN inputs
/// produce NaN.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance between two coordinates.
pub fn distance_between(from: Coordinate, to: Coordinate) -> f64 {
    distance_km(from.latitude, from.longitude, to.latitude, to.longitude)
}

/// A facility paired with its distance from the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedFacility {
    pub facility: Facility,
    pub distance_km: f64,
}

impl RankedFacility {
    /// Distance rounded to one decimal, e.g. `"2.4 km away"`.
    pub fn display_distance(&self) -> String {
        format!("{:.1} km away", self.distance_km)
    }

    /// Map directions link to the facility.
    pub fn directions_url(&self) -> String {
        format!(
            "https://www.google.com/maps/dir/?api=1&destination={},{}",
            self.facility.latitude, self.facility.longitude
        )
    }
}

/// Rank `facilities` by ascending distance from `origin`.
///
/// Each facility's own coordinates are used for its distance. The sort is
/// stable, so equidistant facilities keep their input order, and NaN
/// distances sort after every number.
pub fn rank_by_distance(facilities: &[Facility], origin: Coordinate) -> Vec<RankedFacility> {
    let mut ranked: Vec<RankedFacility> = facilities
        .iter()
        .map(|f| RankedFacility {
            distance_km: distance_between(origin, f.coordinate()),
            facility: f.clone(),
        })
        .collect();

    ranked.sort_by(|a, b| nan_last(a.distance_km, b.distance_km));
    ranked
}

fn nan_last(a: f64, b: f64) -> std::cmp::Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.total_cmp(&b),
        (a_nan, b_nan) => a_nan.cmp(&b_nan),
    }
}

#[cfg(test)]
mod tests {
    use triage_contracts::facility::{Coordinate, Facility};

    use super::{distance_km, rank_by_distance};

    fn facility(id: &str, latitude: f64, longitude: f64) -> Facility {
        Facility {
            id: id.to_string(),
            name: format!("{id} General"),
            address: "1 Main St".to_string(),
            latitude,
            longitude,
            phone: String::new(),
            specialties: Vec::new(),
            emergency_available: false,
        }
    }

    #[test]
    fn test_same_point_is_zero() {
        assert_eq!(distance_km(37.77, -122.42, 37.77, -122.42), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let there = distance_km(40.71, -74.01, 51.51, -0.13);
        let back = distance_km(51.51, -0.13, 40.71, -74.01);
        assert!((there - back).abs() < 1e-9, "{there} vs {back}");
    }

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        let d = distance_km(0.0, 0.0, 0.0, 1.0);
        assert!((d - 111.19).abs() < 0.5, "expected ~111.19 km, got {d}");
    }

    #[test]
    fn test_nan_propagates() {
        assert!(distance_km(f64::NAN, 0.0, 0.0, 0.0).is_nan());
    }

    #[test]
    fn test_ranked_ascending() {
        let origin = Coordinate::new(0.0, 0.0);
        let ranked = rank_by_distance(
            &[facility("far", 0.0, 3.0), facility("near", 0.0, 1.0), facility("mid", 0.0, 2.0)],
            origin,
        );
        let ids: Vec<&str> = ranked.iter().map(|r| r.facility.id.as_str()).collect();
        assert_eq!(ids, ["near", "mid", "far"]);
    }

    /// Equidistant facilities keep their input order.
    #[test]
    fn test_ties_keep_input_order() {
        let origin = Coordinate::new(0.0, 0.0);
        let ranked = rank_by_distance(
            &[facility("east", 0.0, 1.0), facility("west", 0.0, -1.0), facility("north", 1.0, 0.0)],
            origin,
        );
        let ids: Vec<&str> = ranked.iter().map(|r| r.facility.id.as_str()).collect();
        assert_eq!(ids, ["east", "west", "north"], "stable sort must keep input order on ties");
    }

    /// Each facility is measured with its own latitude and longitude.
    #[test]
    fn test_uses_each_facilitys_own_coordinates() {
        let origin = Coordinate::new(10.0, 10.0);
        let ranked = rank_by_distance(&[facility("a", 10.0, 50.0), facility("b", 11.0, 10.0)], origin);
        assert_eq!(ranked[0].facility.id, "b");
        assert!((ranked[0].distance_km - distance_km(10.0, 10.0, 11.0, 10.0)).abs() < 1e-9);
    }

    #[test]
    fn test_nan_sorts_last() {
        let origin = Coordinate::new(0.0, 0.0);
        let ranked = rank_by_distance(
            &[facility("broken", f64::NAN, 0.0), facility("far", 0.0, 5.0), facility("near", 0.0, 1.0)],
            origin,
        );
        let ids: Vec<&str> = ranked.iter().map(|r| r.facility.id.as_str()).collect();
        assert_eq!(ids, ["near", "far", "broken"]);
    }

    #[test]
    fn test_display_helpers() {
        let ranked = rank_by_distance(&[facility("x", 0.0, 1.0)], Coordinate::new(0.0, 0.0));
        assert_eq!(ranked[0].display_distance(), "111.2 km away");
        assert_eq!(
            ranked[0].directions_url(),
            "https://www.google.com/maps/dir/?api=1&destination=0,1"
        );
    }
}
