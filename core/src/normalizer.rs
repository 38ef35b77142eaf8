//! Feature normalizer — raw profile fields → signed per-feature risk points.
//!
//! Each feature is scored independently by a fixed rule whose magnitudes come
//! from `ScoringConfig`:
//!   - tenure:           linear ramp, full cap at 0 months, zero at the cutoff
//!   - complaints:       weight per complaint, capped
//!   - contract_type:    prepaid penalty, postpaid zero
//!   - usage:            penalty only when voice AND data are under their floors
//!   - support_services: penalty per missing service, bonus per present one
//!   - charges:          penalty above the high-charges threshold
//!   - internet_service: fiber penalty
//!
//! Positive points increase churn risk; negative points are protective.

use crate::{
    config::ScoringConfig,
    profile::CustomerProfile,
    types::{ContractType, FeatureKey, InternetService},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureContribution {
    pub feature_key:    FeatureKey,
    pub weighted_value: f64,
}

/// One contribution per `FeatureKey::ALL` entry, in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contributions(Vec<FeatureContribution>);

impl Contributions {
    pub fn iter(&self) -> impl Iterator<Item = &FeatureContribution> {
        self.0.iter()
    }
}

pub fn normalize(profile: &CustomerProfile, config: &ScoringConfig) -> Contributions {
    Contributions(
        FeatureKey::ALL
            .iter()
            .map(|&feature_key| FeatureContribution {
                feature_key,
                weighted_value: contribution(feature_key, profile, config),
            })
            .collect(),
    )
}

/// Points for a single feature.
pub fn contribution(key: FeatureKey, profile: &CustomerProfile, config: &ScoringConfig) -> f64 {
    match key {
        FeatureKey::Tenure          => tenure(profile, config),
        FeatureKey::Complaints      => complaints(profile, config),
        FeatureKey::ContractType    => contract(profile, config),
        FeatureKey::Usage           => usage(profile, config),
        FeatureKey::SupportServices => support_services(profile, config),
        FeatureKey::Charges         => charges(profile, config),
        FeatureKey::InternetService => internet(profile, config),
    }
}

fn tenure(p: &CustomerProfile, c: &ScoringConfig) -> f64 {
    let months_short = (c.tenure_full_risk_months - p.tenure_months as f64).max(0.0);
    (c.tenure_cap * months_short / c.tenure_full_risk_months).min(c.tenure_cap)
}

fn complaints(p: &CustomerProfile, c: &ScoringConfig) -> f64 {
    (p.complaint_count as f64 * c.complaint_weight).min(c.complaint_cap)
}

fn contract(p: &CustomerProfile, c: &ScoringConfig) -> f64 {
    match p.contract_type {
        ContractType::Prepaid  => c.prepaid_penalty,
        ContractType::Postpaid => 0.0,
    }
}

fn usage(p: &CustomerProfile, c: &ScoringConfig) -> f64 {
    let low_voice = p.voice_usage_minutes < c.low_usage_voice_floor;
    let low_data = p.data_usage_gb < c.low_usage_data_floor;
    if low_voice && low_data {
        c.low_usage_penalty
    } else {
        0.0
    }
}

fn support_services(p: &CustomerProfile, c: &ScoringConfig) -> f64 {
    [p.online_security, p.tech_support]
        .iter()
        .map(|&present| {
            if present {
                -c.security_support_bonus
            } else {
                c.missing_service_penalty
            }
        })
        .sum()
}

fn charges(p: &CustomerProfile, c: &ScoringConfig) -> f64 {
    if p.monthly_charges > c.high_charges_threshold {
        c.high_charges_penalty
    } else {
        0.0
    }
}

fn internet(p: &CustomerProfile, c: &ScoringConfig) -> f64 {
    match p.internet_service {
        InternetService::Fiber => c.fiber_penalty,
        InternetService::Dsl | InternetService::None => 0.0,
    }
}
