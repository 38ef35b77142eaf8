//! Shared primitive types used across the scoring engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scored feature. Declaration order is the tie-break priority used by the
/// recommender: earlier variants win when contributions are equal.
/// NEVER reorder — only append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKey {
    Complaints,
    Tenure,
    ContractType,
    Usage,
    SupportServices,
    Charges,
    InternetService,
}

impl FeatureKey {
    /// Every feature the normalizer evaluates, in priority order.
    pub const ALL: [FeatureKey; 7] = [
        FeatureKey::Complaints,
        FeatureKey::Tenure,
        FeatureKey::ContractType,
        FeatureKey::Usage,
        FeatureKey::SupportServices,
        FeatureKey::Charges,
        FeatureKey::InternetService,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Complaints      => "complaints",
            Self::Tenure          => "tenure",
            Self::ContractType    => "contract_type",
            Self::Usage           => "usage",
            Self::SupportServices => "support_services",
            Self::Charges         => "charges",
            Self::InternetService => "internet_service",
        }
    }

    /// Lower value = higher priority.
    pub fn priority(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for FeatureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    Prepaid,
    Postpaid,
}

impl ContractType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prepaid  => "prepaid",
            Self::Postpaid => "postpaid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InternetService {
    Fiber,
    Dsl,
    None,
}

impl InternetService {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fiber => "fiber",
            Self::Dsl   => "dsl",
            Self::None  => "none",
        }
    }
}
