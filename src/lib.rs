//! # u-dispatch
//!
//! Single-pass batch dispatch: assigns delivery orders to a fleet of
//! vehicles, respecting capacity, favouring urgent and well-fitting
//! pairings, and reporting orders no vehicle can take.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Order, Vehicle, Assignment, DispatchResult)
//! - [`distance`] — Flat-Earth distance estimation
//! - [`evaluation`] — Candidate scoring and scoring weights
//! - [`dispatch`] — Greedy priority-ordered planner
//! - [`request`] — Input validation and JSON boundary
//! - [`instances`] — Sample and seeded random batches

pub mod dispatch;
pub mod distance;
pub mod evaluation;
pub mod instances;
pub mod models;
pub mod request;

#[cfg(feature = "ffi")]
pub mod ffi;

#[cfg(feature = "wasm")]
pub mod wasm;
