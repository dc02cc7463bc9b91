//! Travel distance estimation.
//!
//! Provides a flat-Earth approximation over (lat, lng) coordinates.

mod planar;

pub use planar::{planar_distance, scaled_planar_distance, KM_PER_DEGREE};
