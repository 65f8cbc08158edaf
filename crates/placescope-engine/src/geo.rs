//! Great-circle distance.

use placescope_core::Coordinates;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Haversine distance between two points, in meters.
///
/// Spherical model with no ellipsoid correction; error stays well under 1%
/// at city scale.
#[must_use]
pub fn haversine_meters(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().min(1.0).asin();
    EARTH_RADIUS_METERS * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALMATY: Coordinates = Coordinates::new(43.2220, 76.8512);
    const ASTANA: Coordinates = Coordinates::new(51.1694, 71.4491);

    #[test]
    fn same_point_is_zero() {
        assert!(haversine_meters(ALMATY, ALMATY).abs() < f64::EPSILON);
    }

    #[test]
    fn symmetric() {
        let there = haversine_meters(ALMATY, ASTANA);
        let back = haversine_meters(ASTANA, ALMATY);
        assert!((there - back).abs() < 1e-6);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let d = haversine_meters(Coordinates::new(43.0, 76.9), Coordinates::new(44.0, 76.9));
        assert!((d - 111_000.0).abs() < 1_110.0, "got {d}");
    }

    #[test]
    fn almaty_to_astana_is_about_970_km() {
        let km = haversine_meters(ALMATY, ASTANA) / 1000.0;
        assert!((km - 970.0).abs() < 30.0, "got {km}");
    }

    #[test]
    fn antipodes_do_not_produce_nan() {
        let d = haversine_meters(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 180.0));
        assert!(d.is_finite());
    }
}
