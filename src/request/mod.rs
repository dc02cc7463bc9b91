//! Request validation and the JSON boundary of the planner.
//!
//! Client input arrives as a [`ScheduleRequest`]; [`ScheduleRequest::validate`]
//! turns it into well-formed [`Order`]s and [`Vehicle`]s or rejects it with a
//! [`RequestError`]. The planner itself is never reached with invalid data.
//!
//! # Examples
//!
//! ```
//! use u_dispatch::request::schedule_json;
//!
//! let body = r#"{
//!     "orders": [{"id": "O-1", "pickup": [31.2, 121.4], "dropoff": [31.3, 121.5],
//!                 "weight": 100, "priority": 5, "deadline_hour": 2}],
//!     "vehicles": [{"id": "V-1", "location": [31.2, 121.4], "capacity": 300, "speed_kmph": 40}]
//! }"#;
//! let response: serde_json::Value = serde_json::from_str(&schedule_json(body).unwrap()).unwrap();
//! assert_eq!(response["summary"]["orders_assigned"], 1);
//! ```

mod error;
mod schema;

use std::collections::HashSet;

pub use error::RequestError;
pub use schema::{OrderSpec, ScheduleRequest, ScheduleResponse, ScheduleSummary, VehicleSpec};

use crate::dispatch::plan_with_config;
use crate::evaluation::ScoringConfig;
use crate::models::{Order, Point, Vehicle, MAX_PRIORITY, MIN_PRIORITY};

impl ScheduleRequest {
    /// Parses a request body.
    pub fn from_json(body: &str) -> Result<Self, RequestError> {
        serde_json::from_str(body).map_err(|source| RequestError::Malformed { source })
    }

    /// Checks every record and converts the batch into domain types.
    ///
    /// Orders are checked before vehicles; the first problem found is
    /// returned.
    pub fn validate(&self) -> Result<(Vec<Order>, Vec<Vehicle>), RequestError> {
        let mut seen = HashSet::new();
        let mut orders = Vec::with_capacity(self.orders.len());
        for spec in &self.orders {
            let order = spec.validate()?;
            if !seen.insert(order.id().to_string()) {
                return Err(RequestError::DuplicateOrderId(order.id().to_string()));
            }
            orders.push(order);
        }

        seen.clear();
        let mut vehicles = Vec::with_capacity(self.vehicles.len());
        for spec in &self.vehicles {
            let vehicle = spec.validate()?;
            if !seen.insert(vehicle.id().to_string()) {
                return Err(RequestError::DuplicateVehicleId(vehicle.id().to_string()));
            }
            vehicles.push(vehicle);
        }

        Ok((orders, vehicles))
    }
}

impl OrderSpec {
    /// Validates this record into an [`Order`].
    pub fn validate(&self) -> Result<Order, RequestError> {
        if self.id.is_empty() {
            return Err(RequestError::EmptyId { kind: "order" });
        }
        let pickup = parse_point(&self.pickup, &self.id, "pickup")?;
        let dropoff = parse_point(&self.dropoff, &self.id, "dropoff")?;
        let weight = finite(self.weight, &self.id, "weight")?;
        if weight <= 0.0 {
            return Err(RequestError::NonPositiveWeight {
                order_id: self.id.clone(),
                weight,
            });
        }
        let priority = match u8::try_from(self.priority) {
            Ok(p) if (MIN_PRIORITY..=MAX_PRIORITY).contains(&p) => p,
            _ => {
                return Err(RequestError::PriorityOutOfRange {
                    order_id: self.id.clone(),
                    priority: self.priority,
                })
            }
        };
        let deadline_hour = finite(self.deadline_hour, &self.id, "deadline_hour")?;

        Ok(Order::new(
            self.id.clone(),
            pickup,
            dropoff,
            weight,
            priority,
            deadline_hour,
        ))
    }
}

impl VehicleSpec {
    /// Validates this record into a [`Vehicle`].
    pub fn validate(&self) -> Result<Vehicle, RequestError> {
        if self.id.is_empty() {
            return Err(RequestError::EmptyId { kind: "vehicle" });
        }
        let capacity = finite(self.capacity, &self.id, "capacity")?;
        if capacity <= 0.0 {
            return Err(RequestError::NonPositiveCapacity {
                vehicle_id: self.id.clone(),
                capacity,
            });
        }
        let speed = finite(self.speed_kmph, &self.id, "speed_kmph")?;
        if speed <= 0.0 {
            return Err(RequestError::NonPositiveSpeed {
                vehicle_id: self.id.clone(),
                speed,
            });
        }
        let location = parse_point(&self.location, &self.id, "location")?;
        let available = finite(self.available_from_hour, &self.id, "available_from_hour")?;

        Ok(Vehicle::new(self.id.clone(), location, capacity, speed)
            .with_available_from_hour(available))
    }
}

/// Validates and plans a request with the default weights.
pub fn schedule(request: &ScheduleRequest) -> Result<ScheduleResponse, RequestError> {
    schedule_with_config(request, &ScoringConfig::default())
}

/// Validates and plans a request with custom weights.
pub fn schedule_with_config(
    request: &ScheduleRequest,
    config: &ScoringConfig,
) -> Result<ScheduleResponse, RequestError> {
    let (orders, vehicles) = request.validate().inspect_err(|e| {
        log::debug!("rejected dispatch request: {e}");
    })?;
    let result = plan_with_config(&orders, &vehicles, config);
    Ok(ScheduleResponse::from_result(result, orders.len()))
}

/// Parses, validates and plans a JSON body; returns the response as JSON.
pub fn schedule_json(body: &str) -> Result<String, RequestError> {
    let request = ScheduleRequest::from_json(body)?;
    let response = schedule(&request)?;
    serde_json::to_string(&response).map_err(|source| RequestError::Encode { source })
}

/// Renders a rejection as `{"error": "Bad request: ..."}`.
pub fn error_json(error: &RequestError) -> String {
    serde_json::json!({ "error": format!("Bad request: {error}") }).to_string()
}

fn parse_point(raw: &[f64], id: &str, field: &'static str) -> Result<Point, RequestError> {
    let [lat, lng] = raw else {
        return Err(RequestError::InvalidCoordinate {
            id: id.to_string(),
            field,
        });
    };
    let point = Point::new(*lat, *lng);
    if !point.is_finite() {
        return Err(RequestError::NonFinite {
            id: id.to_string(),
            field,
        });
    }
    Ok(point)
}

fn finite(value: f64, id: &str, field: &'static str) -> Result<f64, RequestError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RequestError::NonFinite {
            id: id.to_string(),
            field,
        })
    }
}
