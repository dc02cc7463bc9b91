//! Geographic coordinate pair.

/// A (latitude, longitude) pair in degrees.
///
/// Coordinates are treated as a flat plane by the distance estimator, so no
/// range checks are applied here.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Point;
///
/// let p = Point::new(31.2, 121.4);
/// assert_eq!(p.lat(), 31.2);
/// assert_eq!(p.lng(), 121.4);
/// assert_eq!(Point::from([31.2, 121.4]), p);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    lat: f64,
    lng: f64,
}

impl Point {
    /// Creates a point from latitude and longitude.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude-like coordinate.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude-like coordinate.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl From<[f64; 2]> for Point {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self::new(lat, lng)
    }
}
