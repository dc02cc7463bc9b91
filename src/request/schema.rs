//! Wire schema of dispatch requests and responses.

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{Assignment, DispatchResult};

/// A batch of orders and a fleet, as received from a client.
///
/// Both arrays default to empty when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    #[serde(default)]
    pub orders: Vec<OrderSpec>,
    #[serde(default)]
    pub vehicles: Vec<VehicleSpec>,
}

/// Unvalidated order record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSpec {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub pickup: Vec<f64>,
    pub dropoff: Vec<f64>,
    pub weight: f64,
    #[serde(deserialize_with = "integral")]
    pub priority: i64,
    pub deadline_hour: f64,
}

/// Unvalidated vehicle record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpec {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub location: Vec<f64>,
    pub capacity: f64,
    pub speed_kmph: f64,
    #[serde(default)]
    pub available_from_hour: f64,
}

/// Counts reported alongside a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub orders_total: usize,
    pub orders_assigned: usize,
    pub orders_unassigned: usize,
}

/// Plan returned to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub assignments: Vec<Assignment>,
    pub unassigned_orders: Vec<String>,
    pub total_score: f64,
    pub summary: ScheduleSummary,
}

impl ScheduleResponse {
    /// Wraps a planning result for a batch of `orders_total` orders.
    pub fn from_result(result: DispatchResult, orders_total: usize) -> Self {
        let summary = ScheduleSummary {
            orders_total,
            orders_assigned: result.num_assigned(),
            orders_unassigned: result.num_unassigned(),
        };
        Self {
            assignments: result.assignments().to_vec(),
            unassigned_orders: result.unassigned_orders().to_vec(),
            total_score: result.total_score(),
            summary,
        }
    }
}

/// Accepts `"V-1"` as well as `7` for identifiers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Accepts `5` and `5.0` but rejects `4.5`.
fn integral<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawInt {
        Int(i64),
        Float(f64),
    }

    match RawInt::deserialize(deserializer)? {
        RawInt::Int(n) => Ok(n),
        RawInt::Float(x) if x.is_finite() && x.fract() == 0.0 => Ok(x as i64),
        RawInt::Float(x) => Err(serde::de::Error::custom(format!(
            "expected an integer, found {x}"
        ))),
    }
}
