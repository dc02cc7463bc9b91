//! Scoring weights and numeric floors.

use serde::{Deserialize, Serialize};

use crate::distance::KM_PER_DEGREE;

/// Weights and floors used by the candidate scorer.
///
/// The defaults define the reference dispatch formula:
///
/// ```text
/// score = priority * 20
///       + (weight / max(capacity, 1)) * 15
///       - distance * 0.5
///       - max(0, eta - deadline) * 40
/// ```
///
/// # Examples
///
/// ```
/// use u_dispatch::evaluation::ScoringConfig;
///
/// let config = ScoringConfig::default()
///     .with_lateness_weight(60.0)
///     .with_distance_weight(1.0);
/// assert_eq!(config.priority_weight, 20.0);
/// assert_eq!(config.lateness_weight, 60.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Bonus per priority level.
    pub priority_weight: f64,

    /// Bonus per unit of capacity utilization (`weight / capacity`).
    pub utilization_weight: f64,

    /// Penalty per distance unit driven.
    pub distance_weight: f64,

    /// Penalty per hour of lateness past the deadline.
    pub lateness_weight: f64,

    /// Distance units per coordinate degree.
    pub km_per_degree: f64,

    /// Lower bound applied to vehicle speed before dividing by it.
    pub min_speed: f64,

    /// Lower bound applied to vehicle capacity before dividing by it.
    pub min_capacity: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            priority_weight: 20.0,
            utilization_weight: 15.0,
            distance_weight: 0.5,
            lateness_weight: 40.0,
            km_per_degree: KM_PER_DEGREE,
            min_speed: 1.0,
            min_capacity: 1.0,
        }
    }
}

impl ScoringConfig {
    pub fn with_priority_weight(mut self, w: f64) -> Self {
        self.priority_weight = w;
        self
    }

    pub fn with_utilization_weight(mut self, w: f64) -> Self {
        self.utilization_weight = w;
        self
    }

    pub fn with_distance_weight(mut self, w: f64) -> Self {
        self.distance_weight = w;
        self
    }

    pub fn with_lateness_weight(mut self, w: f64) -> Self {
        self.lateness_weight = w;
        self
    }

    pub fn with_km_per_degree(mut self, scale: f64) -> Self {
        self.km_per_degree = scale;
        self
    }

    pub fn with_min_speed(mut self, floor: f64) -> Self {
        self.min_speed = floor;
        self
    }

    pub fn with_min_capacity(mut self, floor: f64) -> Self {
        self.min_capacity = floor;
        self
    }
}
