//! Factor explainer — one human-readable factor per evaluated feature.
//!
//! Every feature the normalizer scored gets a factor, including zero and
//! protective ones, so the pre-clamp total can be rebuilt from the factors
//! alone (`factor_total`).

use crate::{
    config::ScoringConfig,
    normalizer::Contributions,
    profile::CustomerProfile,
    types::{ContractType, FeatureKey, InternetService},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    Low,
    Medium,
    High,
    Positive,
}

impl Impact {
    /// Total mapping from a contribution's sign and magnitude.
    pub fn from_contribution(value: f64, config: &ScoringConfig) -> Self {
        if value < 0.0 {
            Impact::Positive
        } else if value >= config.high_impact_threshold {
            Impact::High
        } else if value > 0.0 {
            Impact::Medium
        } else {
            Impact::Low
        }
    }

    /// High or medium, i.e. worth acting on.
    pub fn is_actionable(&self) -> bool {
        matches!(self, Impact::High | Impact::Medium)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    /// Observed input value, rendered for display.
    pub value:        String,
    /// Signed points this feature added to the pre-clamp total.
    pub contribution: f64,
    pub impact:       Impact,
    pub message:      String,
}

pub type Factors = BTreeMap<FeatureKey, Factor>;

pub fn explain(
    profile: &CustomerProfile,
    contributions: &Contributions,
    config: &ScoringConfig,
) -> Factors {
    contributions
        .iter()
        .map(|c| {
            let (value, message) = describe(c.feature_key, c.weighted_value, profile, config);
            let factor = Factor {
                value,
                contribution: c.weighted_value,
                impact: Impact::from_contribution(c.weighted_value, config),
                message,
            };
            (c.feature_key, factor)
        })
        .collect()
}

/// Sum of contributions carried by the factors.
pub fn factor_total(factors: &Factors) -> f64 {
    factors.values().map(|f| f.contribution).sum()
}

fn describe(
    key: FeatureKey,
    points: f64,
    p: &CustomerProfile,
    c: &ScoringConfig,
) -> (String, String) {
    let adds = points > 0.0;
    match key {
        FeatureKey::Tenure => {
            let value = format!("{} months", p.tenure_months);
            let message = if adds {
                format!(
                    "Customer for {} months, under the {}-month loyalty mark: early-life churn risk",
                    p.tenure_months, c.tenure_full_risk_months
                )
            } else {
                format!("Customer for {} months: established relationship", p.tenure_months)
            };
            (value, message)
        }

        FeatureKey::Complaints => {
            let value = p.complaint_count.to_string();
            let message = match p.complaint_count {
                0 => "No complaints filed".to_string(),
                1 => "1 complaint filed: unresolved friction raises churn risk".to_string(),
                n if points >= c.complaint_cap => {
                    format!("{n} complaints filed: repeated dissatisfaction, at the complaint cap")
                }
                n => format!("{n} complaints filed: repeated dissatisfaction raises churn risk"),
            };
            (value, message)
        }

        FeatureKey::ContractType => {
            let value = p.contract_type.as_str().to_string();
            let message = match p.contract_type {
                ContractType::Prepaid => {
                    "Prepaid contract with no commitment: customer can leave at any time"
                }
                ContractType::Postpaid => "Postpaid contract: commitment keeps the customer",
            };
            (value, message.to_string())
        }

        FeatureKey::Usage => {
            let value = format!(
                "{:.1} min voice / {:.1} GB data",
                p.voice_usage_minutes, p.data_usage_gb
            );
            let message = if adds {
                format!(
                    "Low engagement: voice under {} min and data under {} GB per month",
                    c.low_usage_voice_floor, c.low_usage_data_floor
                )
            } else {
                "Usage at or above engagement floors".to_string()
            };
            (value, message)
        }

        FeatureKey::SupportServices => {
            let value = format!(
                "online_security={}, tech_support={}",
                yes_no(p.online_security),
                yes_no(p.tech_support)
            );
            let message = match (p.online_security, p.tech_support) {
                (true, true) => "Online security and tech support subscribed: protective",
                (true, false) => "Tech support missing; online security subscribed",
                (false, true) => "Online security missing; tech support subscribed",
                (false, false) => "No online security or tech support",
            };
            (value, message.to_string())
        }

        FeatureKey::Charges => {
            let value = format!("{:.2}", p.monthly_charges);
            let message = if adds {
                format!(
                    "Monthly charges above {:.2}: price-sensitive customer",
                    c.high_charges_threshold
                )
            } else {
                "Monthly charges within normal range".to_string()
            };
            (value, message)
        }

        FeatureKey::InternetService => {
            let value = p.internet_service.as_str().to_string();
            let message = match p.internet_service {
                InternetService::Fiber => "Fiber internet: historically more volatile customers",
                InternetService::Dsl   => "DSL internet: no added risk",
                InternetService::None  => "No internet service: no added risk",
            };
            (value, message.to_string())
        }
    }
}

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}
