//! Processing order of a batch.

use std::cmp::Ordering;

use crate::models::Order;

/// Compares two orders by dispatch precedence.
///
/// Higher priority first, then earlier deadline, then identifier ascending
/// so that the processing order is fully determined by the batch contents.
pub fn dispatch_precedence(a: &Order, b: &Order) -> Ordering {
    b.priority()
        .cmp(&a.priority())
        .then_with(|| {
            a.deadline_hour()
                .partial_cmp(&b.deadline_hour())
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.id().cmp(b.id()))
}

/// Returns the orders of a batch in processing order.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Order, Point};
/// use u_dispatch::dispatch::sort_orders;
///
/// let p = Point::new(0.0, 0.0);
/// let orders = vec![
///     Order::new("b", p, p, 1.0, 3, 5.0),
///     Order::new("a", p, p, 1.0, 3, 5.0),
///     Order::new("c", p, p, 1.0, 5, 9.0),
/// ];
/// let ids: Vec<&str> = sort_orders(&orders).iter().map(|o| o.id()).collect();
/// assert_eq!(ids, vec!["c", "a", "b"]);
/// ```
pub fn sort_orders(orders: &[Order]) -> Vec<&Order> {
    let mut queue: Vec<&Order> = orders.iter().collect();
    queue.sort_by(|a, b| dispatch_precedence(a, b));
    queue
}
