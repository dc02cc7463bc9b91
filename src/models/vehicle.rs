//! Vehicle type with capacity, speed, and availability state.

use super::Point;

/// A fleet unit that can be dispatched to orders.
///
/// `location` and `available_from_hour` describe where and when the vehicle
/// can start its next job. The planner works on its own copy of the fleet
/// and advances these two fields each time a vehicle is committed.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Point, Vehicle};
///
/// let v = Vehicle::new("v1", Point::new(31.2, 121.4), 200.0, 45.0)
///     .with_available_from_hour(1.5);
/// assert_eq!(v.id(), "v1");
/// assert_eq!(v.capacity(), 200.0);
/// assert_eq!(v.available_from_hour(), 1.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    id: String,
    location: Point,
    capacity: f64,
    speed_kmph: f64,
    available_from_hour: f64,
}

impl Vehicle {
    /// Creates a vehicle that is free from hour 0.
    pub fn new(id: impl Into<String>, location: Point, capacity: f64, speed_kmph: f64) -> Self {
        Self {
            id: id.into(),
            location,
            capacity,
            speed_kmph,
            available_from_hour: 0.0,
        }
    }

    /// Sets the hour at which the vehicle becomes free.
    pub fn with_available_from_hour(mut self, hour: f64) -> Self {
        self.available_from_hour = hour;
        self
    }

    /// Vehicle identifier, unique within a fleet.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current location.
    pub fn location(&self) -> Point {
        self.location
    }

    /// Maximum load weight.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Travel speed in distance units per hour.
    pub fn speed_kmph(&self) -> f64 {
        self.speed_kmph
    }

    /// Hour at which the vehicle can start its next job.
    pub fn available_from_hour(&self) -> f64 {
        self.available_from_hour
    }

    /// Returns `true` if the vehicle can carry `weight`.
    pub fn can_carry(&self, weight: f64) -> bool {
        weight <= self.capacity
    }

    /// Moves the vehicle to `location`, busy until `until_hour`.
    pub(crate) fn commit(&mut self, location: Point, until_hour: f64) {
        self.location = location;
        self.available_from_hour = until_hour;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_new() {
        let v = Vehicle::new("v1", Point::new(1.0, 2.0), 100.0, 30.0);
        assert_eq!(v.id(), "v1");
        assert_eq!(v.location(), Point::new(1.0, 2.0));
        assert_eq!(v.capacity(), 100.0);
        assert_eq!(v.speed_kmph(), 30.0);
        assert_eq!(v.available_from_hour(), 0.0);
    }

    #[test]
    fn test_vehicle_builder() {
        let v = Vehicle::new("v2", Point::new(0.0, 0.0), 50.0, 20.0).with_available_from_hour(4.25);
        assert_eq!(v.available_from_hour(), 4.25);
    }

    #[test]
    fn test_can_carry_is_inclusive() {
        let v = Vehicle::new("v", Point::new(0.0, 0.0), 100.0, 30.0);
        assert!(v.can_carry(99.9));
        assert!(v.can_carry(100.0));
        assert!(!v.can_carry(100.01));
    }

    #[test]
    fn test_commit_moves_vehicle() {
        let mut v = Vehicle::new("v", Point::new(0.0, 0.0), 100.0, 30.0);
        v.commit(Point::new(1.0, 1.0), 2.5);
        assert_eq!(v.location(), Point::new(1.0, 1.0));
        assert_eq!(v.available_from_hour(), 2.5);
        assert_eq!(v.capacity(), 100.0);
    }
}
