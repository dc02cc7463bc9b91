//! Candidate scorer: rates one order against one vehicle's current state.

use crate::distance::scaled_planar_distance;
use crate::models::{Order, Vehicle};

use super::ScoringConfig;

/// A feasible order-vehicle pairing, unrounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Composite desirability; higher is better.
    pub score: f64,
    /// Hour at which the vehicle completes the delivery leg.
    pub eta_hour: f64,
    /// Distance to pickup plus pickup-to-dropoff distance.
    pub travel_km: f64,
}

/// Scores order-vehicle pairs with a fixed set of weights.
///
/// A vehicle is infeasible for an order only when the order is heavier than
/// its capacity. A vehicle that cannot make the deadline is still feasible;
/// lateness is penalized through the score.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Order, Point, Vehicle};
/// use u_dispatch::evaluation::{CandidateScorer, ScoringConfig};
///
/// let config = ScoringConfig::default();
/// let scorer = CandidateScorer::new(&config);
///
/// let order = Order::new("o1", Point::new(0.0, 0.0), Point::new(0.0, 0.1), 50.0, 5, 3.0);
/// let near = Vehicle::new("v1", Point::new(0.0, 0.0), 200.0, 45.0);
/// let small = Vehicle::new("v2", Point::new(0.0, 0.0), 20.0, 45.0);
///
/// let c = scorer.evaluate(&order, &near).unwrap();
/// assert!((c.travel_km - 11.1).abs() < 1e-9);
/// assert!(scorer.evaluate(&order, &small).is_none());
/// ```
pub struct CandidateScorer<'a> {
    config: &'a ScoringConfig,
}

impl<'a> CandidateScorer<'a> {
    /// Creates a scorer using the given weights.
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    /// Scores `order` against `vehicle` as it currently stands.
    ///
    /// Returns `None` if the vehicle cannot carry the order.
    pub fn evaluate(&self, order: &Order, vehicle: &Vehicle) -> Option<Candidate> {
        if !vehicle.can_carry(order.weight()) {
            return None;
        }
        let cfg = self.config;

        let km_per_degree = cfg.km_per_degree;
        let to_pickup = scaled_planar_distance(vehicle.location(), order.pickup(), km_per_degree);
        let delivery_leg = scaled_planar_distance(order.pickup(), order.dropoff(), km_per_degree);
        let travel_km = to_pickup + delivery_leg;
        let travel_time = travel_km / vehicle.speed_kmph().max(cfg.min_speed);
        let eta_hour = vehicle.available_from_hour() + travel_time;

        let priority_bonus = f64::from(order.priority()) * cfg.priority_weight;
        let distance_penalty = travel_km * cfg.distance_weight;
        let deadline_penalty = (eta_hour - order.deadline_hour()).max(0.0) * cfg.lateness_weight;
        let utilization_bonus =
            (order.weight() / vehicle.capacity().max(cfg.min_capacity)) * cfg.utilization_weight;

        let score = priority_bonus + utilization_bonus - distance_penalty - deadline_penalty;

        log::trace!(
            "order {} on vehicle {}: score={score} eta={eta_hour} km={travel_km}",
            order.id(),
            vehicle.id()
        );

        Some(Candidate {
            score,
            eta_hour,
            travel_km,
        })
    }
}

/// Scores `order` against `vehicle` with the default weights.
pub fn score_candidate(order: &Order, vehicle: &Vehicle) -> Option<Candidate> {
    CandidateScorer::new(&ScoringConfig::default()).evaluate(order, vehicle)
}
