//! Batch dispatch planning.
//!
//! - [`plan`] — Greedy single-pass assignment with the default weights
//! - [`plan_with_config`] — Same, with custom [`ScoringConfig`](crate::evaluation::ScoringConfig)
//! - [`sort_orders`] — Priority / deadline / ID processing order
//!
//! Each pass owns a private copy of the fleet. Passes share no state and can
//! run concurrently on separate inputs.

mod fleet;
mod ordering;
mod planner;

pub use ordering::{dispatch_precedence, sort_orders};
pub use planner::{plan, plan_with_config};
