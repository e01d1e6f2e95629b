//! Geographic primitives.
//!
//! Distances use the haversine formula over a spherical Earth whose radius is
//! the WGS-84 equatorial radius.

use serde::{Deserialize, Serialize};

/// Earth's radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in meters.
    #[inline]
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        distance_meters(self, other)
    }
}

/// Haversine distance between two points in meters.
///
/// Non-negative and symmetric. Returns `0.0` for identical points.
pub fn distance_meters(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    let lat1 = p1.latitude.to_radians();
    let lat2 = p2.latitude.to_radians();
    let delta_lat = (p2.latitude - p1.latitude).to_radians();
    let delta_lon = (p2.longitude - p1.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair outside [0, 1] for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn identical_points_are_zero_apart() {
        let p = GeoPoint::new(48.8584, 2.2945);
        assert_eq!(distance_meters(&p, &p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude_on_equator() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 0.0);
        let d = distance_meters(&a, &b);
        // 2 * pi * R / 360
        assert!((d - 111_319.49).abs() < 0.01, "got {d}");
    }

    #[test]
    fn short_hop_is_in_meters() {
        let a = GeoPoint::new(37.7749, -122.4194);
        let b = GeoPoint::new(37.7752, -122.4194);
        let d = a.distance_to(&b);
        assert!(d > 30.0 && d < 40.0, "got {d}");
    }

    #[test]
    fn antipodal_points_do_not_produce_nan() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 180.0);
        let d = distance_meters(&a, &b);
        assert!(d.is_finite());
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_M).abs() < 1.0);
    }

    proptest! {
        #[test]
        fn distance_is_symmetric_and_non_negative(
            lat1 in -90.0f64..90.0,
            lon1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0,
            lon2 in -180.0f64..180.0,
        ) {
            let a = GeoPoint::new(lat1, lon1);
            let b = GeoPoint::new(lat2, lon2);
            let ab = distance_meters(&a, &b);
            let ba = distance_meters(&b, &a);
            prop_assert!(ab >= 0.0);
            prop_assert!((ab - ba).abs() < 1e-6);
        }

        #[test]
        fn distance_to_self_is_zero(lat in -90.0f64..90.0, lon in -180.0f64..180.0) {
            let p = GeoPoint::new(lat, lon);
            prop_assert_eq!(distance_meters(&p, &p), 0.0);
        }
    }
}
