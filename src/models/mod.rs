//! Domain model types for batch dispatch.
//!
//! Provides the core abstractions: coordinate points, delivery orders with
//! weight, priority and deadline, vehicles with capacity, speed and
//! availability, and the assignments and result a planning pass produces.

mod assignment;
mod order;
mod point;
mod result;
mod vehicle;

pub use assignment::Assignment;
pub use order::{Order, MAX_PRIORITY, MIN_PRIORITY};
pub use point::Point;
pub use result::DispatchResult;
pub use vehicle::Vehicle;
