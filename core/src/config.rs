//! Scoring configuration — every weight, cap, floor and threshold the engine uses.
//!
//! RULE: No scoring literal lives outside this file.
//! The normalizer, classifier and explainer read their constants from a
//! `ScoringConfig` handed to them; there is no global table.
//!
//! A config is loaded once at startup, validated, and never mutated while
//! requests are being scored.

use crate::error::{ChurnResult, ConfigError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    // ── Tenure ─────────────────────────────────────
    /// Maximum points tenure may contribute.
    pub tenure_cap: f64,
    /// Tenure (months) at or beyond which the tenure contribution is zero.
    pub tenure_full_risk_months: f64,

    // ── Complaints ─────────────────────────────────
    pub complaint_weight: f64,
    pub complaint_cap: f64,

    // ── Contract ───────────────────────────────────
    pub prepaid_penalty: f64,

    // ── Usage ──────────────────────────────────────
    /// Monthly voice minutes below which usage counts as low.
    pub low_usage_voice_floor: f64,
    /// Monthly data GB below which usage counts as low.
    pub low_usage_data_floor: f64,
    /// Applied only when voice AND data are both under their floors.
    pub low_usage_penalty: f64,

    // ── Support services ───────────────────────────
    /// Added once per missing service (online security, tech support).
    pub missing_service_penalty: f64,
    /// Subtracted once per subscribed service.
    pub security_support_bonus: f64,

    // ── Charges / internet ─────────────────────────
    pub high_charges_threshold: f64,
    pub high_charges_penalty: f64,
    pub fiber_penalty: f64,

    // ── Classification ─────────────────────────────
    /// A contribution at or above this is tagged high impact.
    pub high_impact_threshold: f64,
    /// Lower bound (inclusive) of the Medium band.
    pub medium_threshold: f64,
    /// Lower bound (inclusive) of the High band.
    pub high_threshold: f64,

    // ── Boundary defaults ──────────────────────────
    /// Substituted when a payload's monthly charges are absent or unusable.
    pub default_monthly_charges: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            tenure_cap:              24.0,
            tenure_full_risk_months: 24.0,
            complaint_weight:        8.0,
            complaint_cap:           30.0,
            prepaid_penalty:         15.0,
            low_usage_voice_floor:   30.0,
            low_usage_data_floor:    1.0,
            low_usage_penalty:       10.0,
            missing_service_penalty: 4.0,
            security_support_bonus:  3.0,
            high_charges_threshold:  80.0,
            high_charges_penalty:    5.0,
            fiber_penalty:           5.0,
            high_impact_threshold:   10.0,
            medium_threshold:        40.0,
            high_threshold:          70.0,
            default_monthly_charges: 50.0,
        }
    }
}

impl ScoringConfig {
    /// Load from a JSON file. Missing keys take their defaults; unknown keys
    /// are rejected.
    /// The result is validated before it is returned.
    pub fn load(path: &str) -> ChurnResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> ChurnResult<Self> {
        let config: ScoringConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would make scoring inconsistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("tenure_cap",              self.tenure_cap),
            ("tenure_full_risk_months", self.tenure_full_risk_months),
            ("complaint_weight",        self.complaint_weight),
            ("complaint_cap",           self.complaint_cap),
            ("prepaid_penalty",         self.prepaid_penalty),
            ("low_usage_voice_floor",   self.low_usage_voice_floor),
            ("low_usage_data_floor",    self.low_usage_data_floor),
            ("low_usage_penalty",       self.low_usage_penalty),
            ("missing_service_penalty", self.missing_service_penalty),
            ("security_support_bonus",  self.security_support_bonus),
            ("high_charges_threshold",  self.high_charges_threshold),
            ("high_charges_penalty",    self.high_charges_penalty),
            ("fiber_penalty",           self.fiber_penalty),
            ("high_impact_threshold",   self.high_impact_threshold),
            ("medium_threshold",        self.medium_threshold),
            ("high_threshold",          self.high_threshold),
            ("default_monthly_charges", self.default_monthly_charges),
        ];

        for (name, value) in weights {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name });
            }
            if value < 0.0 {
                return Err(ConfigError::NegativeWeight { name, value });
            }
        }

        for (name, value) in [
            ("tenure_full_risk_months", self.tenure_full_risk_months),
            ("high_impact_threshold",   self.high_impact_threshold),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        for (name, value) in [
            ("medium_threshold", self.medium_threshold),
            ("high_threshold",   self.high_threshold),
        ] {
            if value <= 0.0 || value > 100.0 {
                return Err(ConfigError::ThresholdRange { name, value });
            }
        }

        if self.medium_threshold >= self.high_threshold {
            return Err(ConfigError::ThresholdOrder {
                medium: self.medium_threshold,
                high:   self.high_threshold,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(ScoringConfig::default().validate(), Ok(()));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ScoringConfig::from_json(r#"{ "complaint_weight": 10.0 }"#).unwrap();
        assert_eq!(config.complaint_weight, 10.0);
        assert_eq!(config.tenure_cap, 24.0);
        assert_eq!(config.high_threshold, 70.0);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = ScoringConfig::from_json(r#"{ "high_treshold": 10.0 }"#).unwrap_err();
        assert!(err.to_string().contains("high_treshold"), "{err}");
    }

    #[test]
    fn nan_weight_is_rejected() {
        let config = ScoringConfig { fiber_penalty: f64::NAN, ..ScoringConfig::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotFinite { name: "fiber_penalty" })
        );
    }
}
