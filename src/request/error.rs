//! Errors raised while validating a dispatch request.

use thiserror::Error;

/// Reasons a dispatch request is rejected before planning.
///
/// Display strings are meant to be shown to the client as-is.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The body is not valid JSON or does not match the request schema.
    #[error("malformed request: {source}")]
    Malformed {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A coordinate is not a two-element `[lat, lng]` array.
    #[error("{field} of {id} must be [lat, lng]")]
    InvalidCoordinate {
        /// Order or vehicle identifier.
        id: String,
        /// Offending field name.
        field: &'static str,
    },
    /// A numeric field is NaN or infinite.
    #[error("{field} of {id} must be a finite number")]
    NonFinite {
        /// Order or vehicle identifier.
        id: String,
        /// Offending field name.
        field: &'static str,
    },
    /// Order priority outside `1..=5`.
    #[error("priority of order {order_id} must be in range [1, 5], got {priority}")]
    PriorityOutOfRange {
        /// Order identifier.
        order_id: String,
        /// Value received.
        priority: i64,
    },
    /// Order weight is zero or negative.
    #[error("weight of order {order_id} must be > 0, got {weight}")]
    NonPositiveWeight {
        /// Order identifier.
        order_id: String,
        /// Value received.
        weight: f64,
    },
    /// Vehicle capacity is zero or negative.
    #[error("capacity of vehicle {vehicle_id} must be > 0, got {capacity}")]
    NonPositiveCapacity {
        /// Vehicle identifier.
        vehicle_id: String,
        /// Value received.
        capacity: f64,
    },
    /// Vehicle speed is zero or negative.
    #[error("speed_kmph of vehicle {vehicle_id} must be > 0, got {speed}")]
    NonPositiveSpeed {
        /// Vehicle identifier.
        vehicle_id: String,
        /// Value received.
        speed: f64,
    },
    /// An order or vehicle has an empty identifier.
    #[error("{kind} id must not be empty")]
    EmptyId {
        /// `"order"` or `"vehicle"`.
        kind: &'static str,
    },
    /// Two orders share an identifier.
    #[error("duplicate order id {0}")]
    DuplicateOrderId(String),
    /// Two vehicles share an identifier.
    #[error("duplicate vehicle id {0}")]
    DuplicateVehicleId(String),
    /// Serialising the response failed.
    #[error("failed to encode response: {source}")]
    Encode {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_record() {
        let e = RequestError::PriorityOutOfRange {
            order_id: "O-1".into(),
            priority: 6,
        };
        assert_eq!(e.to_string(), "priority of order O-1 must be in range [1, 5], got 6");

        let e = RequestError::InvalidCoordinate {
            id: "V-1".into(),
            field: "location",
        };
        assert_eq!(e.to_string(), "location of V-1 must be [lat, lng]");
    }

    #[test]
    fn test_malformed_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").expect_err("invalid json");
        let e = RequestError::Malformed { source };
        assert!(std::error::Error::source(&e).is_some());
        assert!(e.to_string().starts_with("malformed request"));
    }
}
