//! Flat-Earth distance approximation.

use crate::models::Point;

/// Distance units per coordinate degree.
pub const KM_PER_DEGREE: f64 = 111.0;

/// Approximates travel distance between two coordinate pairs.
///
/// Euclidean distance on the (lat, lng) plane, scaled by [`KM_PER_DEGREE`].
/// Good enough for coarse regional dispatch; no road network and no
/// correction for longitude convergence.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Point;
/// use u_dispatch::distance::planar_distance;
///
/// let d = planar_distance(Point::new(0.0, 0.0), Point::new(0.3, 0.4));
/// assert!((d - 55.5).abs() < 1e-9);
/// ```
pub fn planar_distance(a: Point, b: Point) -> f64 {
    scaled_planar_distance(a, b, KM_PER_DEGREE)
}

/// Same as [`planar_distance`] with an explicit degree-to-distance scale.
pub fn scaled_planar_distance(a: Point, b: Point, km_per_degree: f64) -> f64 {
    let dlat = a.lat() - b.lat();
    let dlng = a.lng() - b.lng();
    (dlat * dlat + dlng * dlng).sqrt() * km_per_degree
}
