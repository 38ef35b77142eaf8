//! Cohort summary — roll-up of many scored customers for the runner.
//!
//! The primary driver of a customer is the first ranked recommendation
//! driver, i.e. the largest risk-increasing contribution.

use crate::{
    classifier::RiskLevel,
    engine::ScoreResult,
    recommender::ranked_drivers,
    types::FeatureKey,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortSummary {
    pub run_id:          String,
    pub generated_at:    DateTime<Utc>,
    pub customers:       usize,
    pub by_level:        BTreeMap<RiskLevel, usize>,
    pub mean_score:      f64,
    pub max_score:       u8,
    pub clamped_count:   usize,
    pub primary_drivers: BTreeMap<FeatureKey, usize>,
    /// Customers with no risk-increasing factor at all.
    pub no_driver:       usize,
}

impl CohortSummary {
    pub fn from_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a ScoreResult>,
    {
        let mut by_level: BTreeMap<RiskLevel, usize> =
            [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High]
                .into_iter()
                .map(|l| (l, 0))
                .collect();
        let mut primary_drivers = BTreeMap::new();
        let mut customers = 0usize;
        let mut score_sum = 0u64;
        let mut max_score = 0u8;
        let mut clamped_count = 0usize;
        let mut no_driver = 0usize;

        for r in results {
            customers += 1;
            score_sum += r.score as u64;
            max_score = max_score.max(r.score);
            if r.clamped {
                clamped_count += 1;
            }
            *by_level.entry(r.risk_level).or_insert(0) += 1;

            match ranked_drivers(&r.factors).first() {
                Some(key) => *primary_drivers.entry(*key).or_insert(0) += 1,
                None => no_driver += 1,
            }
        }

        let mean_score = if customers == 0 {
            0.0
        } else {
            score_sum as f64 / customers as f64
        };

        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            customers,
            by_level,
            mean_score,
            max_score,
            clamped_count,
            primary_drivers,
            no_driver,
        }
    }

    pub fn count(&self, level: RiskLevel) -> usize {
        self.by_level.get(&level).copied().unwrap_or(0)
    }
}
