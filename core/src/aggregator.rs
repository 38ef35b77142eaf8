//! Score aggregator — sum of contributions, clamped to [0, 100].

use crate::normalizer::Contributions;
use serde::{Deserialize, Serialize};

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    /// Pre-clamp sum of every contribution.
    pub raw_total: f64,
    /// Rounded composite score in [0, 100].
    pub score:     u8,
    /// True when the clamp changed the total.
    pub clamped:   bool,
}

impl Aggregate {
    pub fn probability(&self) -> f64 {
        self.score as f64 / SCORE_MAX
    }
}

pub fn aggregate(contributions: &Contributions) -> Aggregate {
    let raw_total: f64 = contributions.iter().map(|c| c.weighted_value).sum();
    let bounded = raw_total.clamp(SCORE_MIN, SCORE_MAX);
    Aggregate {
        raw_total,
        score: bounded.round() as u8,
        clamped: bounded != raw_total,
    }
}
