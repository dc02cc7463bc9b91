//! Delivery order type.

use super::Point;

/// Lowest accepted order priority.
pub const MIN_PRIORITY: u8 = 1;

/// Highest accepted order priority.
pub const MAX_PRIORITY: u8 = 5;

/// A delivery request: move `weight` units from `pickup` to `dropoff`
/// before `deadline_hour`.
///
/// Orders are immutable once built. Field validation (positive weight,
/// priority in `1..=5`) is done by [`crate::request`] before an order
/// reaches the planner.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Order, Point};
///
/// let o = Order::new("o1", Point::new(31.2, 121.4), Point::new(31.3, 121.5), 50.0, 5, 3.0);
/// assert_eq!(o.id(), "o1");
/// assert_eq!(o.priority(), 5);
/// assert_eq!(o.deadline_hour(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: String,
    pickup: Point,
    dropoff: Point,
    weight: f64,
    priority: u8,
    deadline_hour: f64,
}

impl Order {
    /// Creates a new order.
    pub fn new(
        id: impl Into<String>,
        pickup: Point,
        dropoff: Point,
        weight: f64,
        priority: u8,
        deadline_hour: f64,
    ) -> Self {
        Self {
            id: id.into(),
            pickup,
            dropoff,
            weight,
            priority,
            deadline_hour,
        }
    }

    /// Order identifier, unique within a batch.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Where the load is collected.
    pub fn pickup(&self) -> Point {
        self.pickup
    }

    /// Where the load is delivered.
    pub fn dropoff(&self) -> Point {
        self.dropoff
    }

    /// Load weight, in the same unit as vehicle capacity.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Priority from 1 (lowest) to 5 (highest).
    pub fn priority(&self) -> u8 {
        self.priority
    }

    /// Hour offset by which delivery should complete.
    pub fn deadline_hour(&self) -> f64 {
        self.deadline_hour
    }
}
