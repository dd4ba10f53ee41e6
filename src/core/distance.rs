/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers. NaN input yields NaN; callers treat a NaN
/// distance as unknown, never as zero.
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance() {
        // Distance from London to Paris (approximately 344 km)
        let london_lat = 51.5074;
        let london_lon = -0.1278;
        let paris_lat = 48.8566;
        let paris_lon = 2.3522;

        let distance = haversine_distance(london_lat, london_lon, paris_lat, paris_lon);
        assert!((distance - 344.0).abs() < 10.0, "Distance should be ~344km, got {}", distance);
    }

    #[test]
    fn test_haversine_distance_symmetric() {
        let delhi = (28.6139, 77.2090);
        let mumbai = (19.0760, 72.8777);

        let forward = haversine_distance(delhi.0, delhi.1, mumbai.0, mumbai.1);
        let backward = haversine_distance(mumbai.0, mumbai.1, delhi.0, delhi.1);

        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_distance_identical_points() {
        let distance = haversine_distance(28.6139, 77.2090, 28.6139, 77.2090);
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn test_haversine_distance_nan_propagates() {
        let distance = haversine_distance(f64::NAN, 77.2090, 28.6139, 77.2090);
        assert!(distance.is_nan());
    }
}
