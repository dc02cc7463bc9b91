//! Greedy single-pass dispatch planner.
//!
//! # Algorithm
//!
//! Orders are processed by descending priority, then ascending deadline,
//! then ID. For each order every vehicle in the working fleet is scored
//! against its *current* state; the best candidate is committed and the
//! vehicle is moved to the order's dropoff, busy until the candidate's ETA.
//! Later orders therefore see the fleet as earlier commits left it.
//!
//! Selection keeps the highest score; on an exact score tie the earlier ETA
//! wins; on a full tie the vehicle with the smallest ID wins.
//!
//! # Complexity
//!
//! O(n log n + n·m) where n = orders, m = vehicles.

use crate::evaluation::{Candidate, CandidateScorer, ScoringConfig};
use crate::models::{Assignment, DispatchResult, Order, Vehicle};

use super::fleet::FleetState;
use super::ordering::sort_orders;

/// Plans a batch with the default scoring weights.
///
/// Never fails: orders that no vehicle can carry are reported in
/// [`DispatchResult::unassigned_orders`]. The input slices are not modified.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Order, Point, Vehicle};
/// use u_dispatch::dispatch::plan;
///
/// let orders = vec![
///     Order::new("o1", Point::new(31.2, 121.4), Point::new(31.3, 121.5), 50.0, 5, 3.0),
///     Order::new("o-heavy", Point::new(31.2, 121.4), Point::new(31.3, 121.5), 999.0, 5, 3.0),
/// ];
/// let vehicles = vec![Vehicle::new("v1", Point::new(31.2, 121.4), 200.0, 45.0)];
///
/// let result = plan(&orders, &vehicles);
/// assert_eq!(result.num_assigned(), 1);
/// assert_eq!(result.unassigned_orders(), ["o-heavy".to_string()]);
/// ```
pub fn plan(orders: &[Order], vehicles: &[Vehicle]) -> DispatchResult {
    plan_with_config(orders, vehicles, &ScoringConfig::default())
}

/// Plans a batch with custom scoring weights.
pub fn plan_with_config(
    orders: &[Order],
    vehicles: &[Vehicle],
    config: &ScoringConfig,
) -> DispatchResult {
    let scorer = CandidateScorer::new(config);
    let mut fleet = FleetState::from_vehicles(vehicles);
    let mut result = DispatchResult::new();
    let mut total_score = 0.0;

    for order in sort_orders(orders) {
        let Some((vehicle_id, best)) = select_vehicle(&scorer, order, &fleet) else {
            log::debug!(
                "order {} unassigned: no vehicle can carry {}",
                order.id(),
                order.weight()
            );
            result.add_unassigned(order.id());
            continue;
        };

        fleet.commit(&vehicle_id, order.dropoff(), best.eta_hour);
        log::debug!(
            "order {} -> vehicle {} (score {:.2}, eta {:.2})",
            order.id(),
            vehicle_id,
            best.score,
            best.eta_hour
        );

        result.push_assignment(Assignment {
            order_id: order.id().to_string(),
            vehicle_id,
            eta_hour: round2(best.eta_hour),
            score: round2(best.score),
            travel_km: round2(best.travel_km),
            deadline_breached: best.eta_hour > order.deadline_hour(),
        });
        total_score += best.score;
    }

    result.set_total_score(round2(total_score));
    log::info!(
        "dispatched {} of {} orders over {} vehicles, total score {:.2}",
        result.num_assigned(),
        orders.len(),
        fleet.len(),
        result.total_score()
    );
    result
}

/// Finds the best vehicle for `order`, or `None` if none can carry it.
fn select_vehicle(
    scorer: &CandidateScorer<'_>,
    order: &Order,
    fleet: &FleetState,
) -> Option<(String, Candidate)> {
    let mut best: Option<(&Vehicle, Candidate)> = None;

    for vehicle in fleet.iter() {
        let Some(candidate) = scorer.evaluate(order, vehicle) else {
            continue;
        };
        if best.as_ref().is_none_or(|(_, b)| beats(&candidate, b)) {
            best = Some((vehicle, candidate));
        }
    }

    best.map(|(v, c)| (v.id().to_string(), c))
}

/// Strictly higher score, or equal score with a strictly earlier ETA.
fn beats(candidate: &Candidate, incumbent: &Candidate) -> bool {
    candidate.score > incumbent.score
        || (candidate.score == incumbent.score && candidate.eta_hour < incumbent.eta_hour)
}

/// Rounds to two decimals on the exact binary value, so 2.675 (stored as
/// 2.67499...) becomes 2.67.
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
