//! The scoring engine — one pure call from profile to explained score.
//!
//! EXECUTION ORDER (fixed, documented, never reordered):
//!   1. Normalizer   profile → per-feature contributions
//!   2. Aggregator   contributions → clamped composite score
//!   3. Explainer    profile + contributions → factors
//!   4. Classifier   score → risk level
//!   5. Recommender  factors → ranked retention actions
//!
//! RULES:
//!   - The engine holds only its validated, immutable config.
//!   - Scoring never mutates anything; an engine can be shared across
//!     threads by reference.
//!   - Same profile + same config → equal `ScoreResult`, byte-identical JSON.

use crate::{
    aggregator::aggregate,
    classifier::RiskLevel,
    config::ScoringConfig,
    error::ChurnResult,
    explainer::{explain, Factors},
    normalizer::normalize,
    profile::{CustomerProfile, RawProfile},
    recommender::recommend,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score:           u8,
    pub probability:     f64,
    pub risk_level:      RiskLevel,
    /// Pre-clamp total; equals the sum of factor contributions.
    pub raw_total:       f64,
    pub clamped:         bool,
    pub factors:         Factors,
    pub recommendations: Vec<String>,
}

pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    /// Validate the config once. A misconfigured engine is never built.
    pub fn new(config: ScoringConfig) -> ChurnResult<Self> {
        config.validate()?;
        log::info!(
            "scoring engine ready (medium>={}, high>={})",
            config.medium_threshold,
            config.high_threshold
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, profile: &CustomerProfile) -> ChurnResult<ScoreResult> {
        profile.validate()?;
        Ok(evaluate(profile, &self.config))
    }

    /// Parse a boundary payload with this engine's defaults, then score it.
    pub fn score_raw(&self, raw: &RawProfile) -> ChurnResult<ScoreResult> {
        let profile = raw.parse(&self.config)?;
        Ok(evaluate(&profile, &self.config))
    }

    pub fn score_json(&self, body: &str) -> ChurnResult<ScoreResult> {
        let raw: RawProfile = serde_json::from_str(body)?;
        self.score_raw(&raw)
    }
}

/// One-shot scoring: validates `config` and `profile`, then scores.
/// Prefer building a `ScoringEngine` once when scoring many profiles.
pub fn score(profile: &CustomerProfile, config: &ScoringConfig) -> ChurnResult<ScoreResult> {
    config.validate()?;
    profile.validate()?;
    Ok(evaluate(profile, config))
}

fn evaluate(profile: &CustomerProfile, config: &ScoringConfig) -> ScoreResult {
    let contributions = normalize(profile, config);
    let total = aggregate(&contributions);
    let factors = explain(profile, &contributions, config);
    let risk_level = RiskLevel::from_score(total.score, config);
    let recommendations = recommend(&factors);

    log::debug!(
        "scored profile: score={} level={} raw_total={:.2} clamped={} actions={}",
        total.score,
        risk_level,
        total.raw_total,
        total.clamped,
        recommendations.len(),
    );

    ScoreResult {
        score: total.score,
        probability: total.probability(),
        risk_level,
        raw_total: total.raw_total,
        clamped: total.clamped,
        factors,
        recommendations,
    }
}
