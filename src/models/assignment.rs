//! Committed order-to-vehicle assignment.

use serde::{Deserialize, Serialize};

/// One order committed to one vehicle.
///
/// Numeric fields are rounded to two decimals when the planner builds the
/// assignment. `deadline_breached` is decided on the unrounded ETA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Order being delivered.
    pub order_id: String,
    /// Vehicle delivering it.
    pub vehicle_id: String,
    /// Hour at which the delivery leg completes.
    pub eta_hour: f64,
    /// Desirability score of this pairing.
    pub score: f64,
    /// Distance driven: to pickup, then to dropoff.
    pub travel_km: f64,
    /// `true` if the ETA is later than the order's deadline.
    pub deadline_breached: bool,
}
