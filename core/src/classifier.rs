//! Risk classifier — composite score → risk band.
//!
//! Bands are lower-bound inclusive:
//!   score >= high_threshold                   → High
//!   medium_threshold <= score < high_threshold → Medium
//!   score < medium_threshold                  → Low

use crate::config::ScoringConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declaration order is severity order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: u8, config: &ScoringConfig) -> Self {
        let score = score as f64;
        if score >= config.high_threshold {
            RiskLevel::High
        } else if score >= config.medium_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low    => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High   => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
