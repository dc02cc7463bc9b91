//! Dispatch result type.

use serde::{Deserialize, Serialize};

use super::Assignment;

/// Outcome of one planning pass.
///
/// Holds the assignments in the order they were committed, the IDs of orders
/// no vehicle could take, and the rounded sum of assignment scores.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::DispatchResult;
///
/// let mut result = DispatchResult::new();
/// result.add_unassigned("o-heavy");
/// assert_eq!(result.num_assigned(), 0);
/// assert_eq!(result.unassigned_orders(), ["o-heavy".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DispatchResult {
    assignments: Vec<Assignment>,
    unassigned_orders: Vec<String>,
    total_score: f64,
}

impl DispatchResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a committed assignment.
    pub fn push_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Marks an order as unassigned.
    pub fn add_unassigned(&mut self, order_id: impl Into<String>) {
        self.unassigned_orders.push(order_id.into());
    }

    /// Sets the total score.
    pub fn set_total_score(&mut self, score: f64) {
        self.total_score = score;
    }

    /// Assignments in processing order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// IDs of orders that received no vehicle, in processing order.
    pub fn unassigned_orders(&self) -> &[String] {
        &self.unassigned_orders
    }

    /// Sum of assignment scores, rounded to two decimals.
    pub fn total_score(&self) -> f64 {
        self.total_score
    }

    /// Number of assigned orders.
    pub fn num_assigned(&self) -> usize {
        self.assignments.len()
    }

    /// Number of unassigned orders.
    pub fn num_unassigned(&self) -> usize {
        self.unassigned_orders.len()
    }

    /// Sum of the (rounded) travel distances of all assignments.
    pub fn total_travel_km(&self) -> f64 {
        self.assignments.iter().map(|a| a.travel_km).sum()
    }

    /// Number of assignments that miss their deadline.
    pub fn num_breached(&self) -> usize {
        self.assignments.iter().filter(|a| a.deadline_breached).count()
    }

    /// Returns the assignment for `order_id`, if the order was assigned.
    pub fn assignment_for(&self, order_id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.order_id == order_id)
    }

    /// Returns the assignments of one vehicle, in commit order.
    pub fn assignments_of<'a>(
        &'a self,
        vehicle_id: &'a str,
    ) -> impl Iterator<Item = &'a Assignment> + 'a {
        self.assignments
            .iter()
            .filter(move |a| a.vehicle_id == vehicle_id)
    }
}
