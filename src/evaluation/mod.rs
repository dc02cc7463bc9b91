//! Candidate scoring for order-vehicle pairs.
//!
//! - [`CandidateScorer`] — feasibility, score, ETA and distance for one pair
//! - [`ScoringConfig`] — weights and numeric floors of the score

mod config;
mod scorer;

pub use config::ScoringConfig;
pub use scorer::{score_candidate, Candidate, CandidateScorer};
