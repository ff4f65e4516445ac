//! Great-circle helpers shared by the position integrator and the conflict
//! detector. Inputs are plain lat/lon pairs in degrees; coordinates are not
//! range-checked.

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers, via the
/// haversine formula.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Initial bearing from the first point toward the second, in whole degrees
/// within `[0, 360)`. The result is unspecified when both points coincide.
pub fn bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> i32 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let y = delta_lon.sin() * lat2_rad.cos();
    let x = lat1_rad.cos() * lat2_rad.sin() - lat1_rad.sin() * lat2_rad.cos() * delta_lon.cos();

    let mut degrees = y.atan2(x).to_degrees().round() as i32;
    if degrees < 0 {
        degrees += 360;
    }
    degrees % 360
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(distance_km(36.851, 10.227, 36.851, 10.227), 0.0);
    }

    #[test]
    fn distance_tunis_to_djerba() {
        // Tunis-Carthage to Djerba, roughly 335 km.
        let d = distance_km(36.851, 10.227, 33.875, 10.775);
        assert!((d - 334.7).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn distance_is_symmetric() {
        let d1 = distance_km(36.075, 10.438, 33.93, 8.13);
        let d2 = distance_km(33.93, 8.13, 36.075, 10.438);
        assert!((d1 - d2).abs() < 1e-9);
    }

    #[test]
    fn bearing_cardinal_directions() {
        assert_eq!(bearing(0.0, 0.0, 10.0, 0.0), 0); // due north
        assert_eq!(bearing(0.0, 0.0, 0.0, 10.0), 90); // due east
        assert_eq!(bearing(0.0, 0.0, -10.0, 0.0), 180); // due south
        assert_eq!(bearing(0.0, 0.0, 0.0, -10.0), 270); // due west
    }

    #[test]
    fn bearing_stays_in_range() {
        let points = [
            (36.851, 10.227),
            (36.075, 10.438),
            (34.717, 10.69),
            (33.875, 10.775),
            (33.93, 8.13),
        ];
        for &(lat1, lon1) in &points {
            for &(lat2, lon2) in &points {
                if (lat1, lon1) == (lat2, lon2) {
                    continue;
                }
                let b = bearing(lat1, lon1, lat2, lon2);
                assert!((0..360).contains(&b), "bearing {} out of range", b);
            }
        }
    }

    #[test]
    fn bearing_tunis_to_sfax_points_south() {
        let b = bearing(36.851, 10.227, 34.717, 10.69);
        assert!((160..180).contains(&b), "got {}", b);
    }
}
