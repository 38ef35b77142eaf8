//! Synthetic customer cohort — seeded, reproducible sample profiles.
//!
//! Used by the runner and the property tests when no real dataset is at hand.
//! Distributions follow the telco sample set the dashboard falls back to:
//! tenure 0..=72 months, internet 34% DSL / 44% fiber / 22% none, 55% of
//! customers on month-to-month (prepaid) contracts, charges uniform 18..120.

use crate::{
    profile::CustomerProfile,
    rng::{ProfileRng, COHORT_STREAM},
    types::{ContractType, InternetService},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticCustomer {
    pub customer_id: String,
    pub profile:     CustomerProfile,
}

pub struct SyntheticPopulation;

impl SyntheticPopulation {
    pub fn generate(seed: u64, n: usize) -> Vec<SyntheticCustomer> {
        let mut rng = ProfileRng::new(seed, COHORT_STREAM);
        (0..n)
            .map(|i| SyntheticCustomer {
                customer_id: format!("CUST-{i:05}"),
                profile: Self::sample_profile(&mut rng),
            })
            .collect()
    }

    fn sample_profile(rng: &mut ProfileRng) -> CustomerProfile {
        let internet_service = match rng.weighted_index(&[0.34, 0.44, 0.22]) {
            0 => InternetService::Dsl,
            1 => InternetService::Fiber,
            _ => InternetService::None,
        };
        let has_internet = internet_service != InternetService::None;

        let contract_type = if rng.chance(0.55) {
            ContractType::Prepaid
        } else {
            ContractType::Postpaid
        };

        // A quiet tail of barely-active lines; everyone else is spread wide.
        let dormant = rng.chance(0.10);
        let voice_usage_minutes = if dormant { rng.uniform(0.0, 30.0) } else { rng.uniform(20.0, 600.0) };
        let data_usage_gb = if !has_internet || dormant {
            rng.uniform(0.0, 1.0)
        } else {
            rng.pareto(0.5, 1.2).min(200.0)
        };

        // Most customers never complain; a few complain a lot.
        let complaint_count = (rng.pareto(1.0, 1.6) - 1.0).floor().min(10.0) as u32;

        CustomerProfile {
            tenure_months: rng.next_u64_below(73) as u32,
            voice_usage_minutes,
            data_usage_gb,
            complaint_count,
            contract_type,
            monthly_charges: rng.uniform(18.0, 120.0),
            internet_service,
            online_security: has_internet && rng.chance(0.5),
            tech_support: has_internet && rng.chance(0.5),
            streaming_tv: has_internet && rng.chance(0.5),
        }
    }
}
