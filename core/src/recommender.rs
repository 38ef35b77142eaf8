//! Recommendation generator — retention actions for risk-increasing factors.
//!
//! Only factors with a positive contribution and high or medium impact
//! qualify. Ordering: contribution descending, then feature priority
//! (`FeatureKey` declaration order). No qualifying factor → empty list.

use crate::{
    explainer::Factors,
    types::FeatureKey,
};
use std::cmp::Ordering;

/// The retention action for a risk-increasing feature.
pub fn retention_action(key: FeatureKey) -> &'static str {
    match key {
        FeatureKey::Complaints      => "Escalate to a retention specialist to resolve the reported issues",
        FeatureKey::Tenure          => "Propose a loyalty offer with a personalised onboarding follow-up",
        FeatureKey::ContractType    => "Offer a postpaid migration incentive",
        FeatureKey::Usage           => "Send a personalised re-engagement campaign",
        FeatureKey::SupportServices => "Offer a bundled online security and tech support trial",
        FeatureKey::Charges         => "Offer a discount or a service upgrade",
        FeatureKey::InternetService => "Review fiber plan pricing against competitor offers",
    }
}

/// Qualifying features, ranked.
pub fn ranked_drivers(factors: &Factors) -> Vec<FeatureKey> {
    let mut drivers: Vec<(FeatureKey, f64)> = factors
        .iter()
        .filter(|(_, f)| f.contribution > 0.0 && f.impact.is_actionable())
        .map(|(k, f)| (*k, f.contribution))
        .collect();

    drivers.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.priority().cmp(&b.0.priority()))
    });

    drivers.into_iter().map(|(k, _)| k).collect()
}

pub fn recommend(factors: &Factors) -> Vec<String> {
    ranked_drivers(factors)
        .into_iter()
        .map(|k| retention_action(k).to_string())
        .collect()
}
