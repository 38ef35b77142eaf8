//! Customer profile — the typed input to the engine, and the boundary parser
//! that turns a loosely typed request payload into one.
//!
//! RULE: Nothing untyped crosses into scoring.
//! `RawProfile` accepts what the front end actually sends (numeric strings,
//! "Yes"/"No" flags, legacy field names); `RawProfile::parse` either yields a
//! fully valid `CustomerProfile` or a `ValidationError` listing every bad field.

use crate::{
    config::ScoringConfig,
    error::{ChurnResult, FieldError, ValidationError},
    types::{ContractType, InternetService},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub tenure_months:       u32,
    pub voice_usage_minutes: f64,
    pub data_usage_gb:       f64,
    pub complaint_count:     u32,
    pub contract_type:       ContractType,
    pub monthly_charges:     f64,
    pub internet_service:    InternetService,
    pub online_security:     bool,
    pub tech_support:        bool,
    /// Informational only. Carried through, never scored.
    pub streaming_tv:        bool,
}

impl CustomerProfile {
    /// Check the float fields a typed caller could still get wrong.
    ///
    /// Stricter than `RawProfile::parse` for `monthly_charges`: the payload
    /// parser substitutes `default_monthly_charges` for an unusable value,
    /// while a typed profile carrying a negative or non-finite charge is
    /// rejected, since no payload default applies to it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut fields = Vec::new();
        for (field, value) in [
            ("voice_usage_minutes", self.voice_usage_minutes),
            ("data_usage_gb",       self.data_usage_gb),
            ("monthly_charges",     self.monthly_charges),
        ] {
            if let Err(reason) = non_negative(value) {
                fields.push(FieldError { field, reason });
            }
        }
        if fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { fields })
        }
    }

    /// Parse a JSON request body straight into a validated profile.
    pub fn from_json(body: &str, config: &ScoringConfig) -> ChurnResult<Self> {
        let raw: RawProfile = serde_json::from_str(body)?;
        Ok(raw.parse(config)?)
    }
}

// ── Boundary payload ─────────────────────────────────────────────────────────

/// The request payload as received. Every field is optional and untyped here;
/// `parse` decides what is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawProfile {
    #[serde(default, alias = "tenure")]
    pub tenure_months:       Option<Value>,
    #[serde(default, alias = "voice_usage")]
    pub voice_usage_minutes: Option<Value>,
    #[serde(default, alias = "data_usage")]
    pub data_usage_gb:       Option<Value>,
    #[serde(default, alias = "complaints")]
    pub complaint_count:     Option<Value>,
    #[serde(default)]
    pub contract_type:       Option<Value>,
    #[serde(default)]
    pub monthly_charges:     Option<Value>,
    #[serde(default)]
    pub internet_service:    Option<Value>,
    #[serde(default)]
    pub online_security:     Option<Value>,
    #[serde(default)]
    pub tech_support:        Option<Value>,
    #[serde(default)]
    pub streaming_tv:        Option<Value>,
}

impl RawProfile {
    pub fn parse(&self, config: &ScoringConfig) -> Result<CustomerProfile, ValidationError> {
        let mut errors = Vec::new();

        let tenure_months = required(&mut errors, "tenure_months", &self.tenure_months, count);
        let voice_usage_minutes =
            required(&mut errors, "voice_usage_minutes", &self.voice_usage_minutes, amount);
        let data_usage_gb = required(&mut errors, "data_usage_gb", &self.data_usage_gb, amount);
        let complaint_count =
            required(&mut errors, "complaint_count", &self.complaint_count, count);
        let contract_type = required(&mut errors, "contract_type", &self.contract_type, contract);

        let internet_service = optional(
            &mut errors,
            "internet_service",
            &self.internet_service,
            internet,
            InternetService::Fiber,
        );
        let online_security =
            optional(&mut errors, "online_security", &self.online_security, flag, false);
        let tech_support = optional(&mut errors, "tech_support", &self.tech_support, flag, false);
        let streaming_tv = optional(&mut errors, "streaming_tv", &self.streaming_tv, flag, false);

        // Charges never fail the request; unusable values fall back.
        let monthly_charges = match self.monthly_charges.as_ref().map(amount) {
            Some(Ok(v)) => v,
            Some(Err(reason)) => {
                log::warn!(
                    "monthly_charges {reason}; using default {}",
                    config.default_monthly_charges
                );
                config.default_monthly_charges
            }
            None => config.default_monthly_charges,
        };

        match (tenure_months, voice_usage_minutes, data_usage_gb, complaint_count, contract_type) {
            (Some(t), Some(v), Some(d), Some(c), Some(ct)) if errors.is_empty() => {
                Ok(CustomerProfile {
                    tenure_months: t,
                    voice_usage_minutes: v,
                    data_usage_gb: d,
                    complaint_count: c,
                    contract_type: ct,
                    monthly_charges,
                    internet_service,
                    online_security,
                    tech_support,
                    streaming_tv,
                })
            }
            _ => Err(ValidationError { fields: errors }),
        }
    }
}

fn required<T>(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &Option<Value>,
    coerce: fn(&Value) -> Result<T, String>,
) -> Option<T> {
    match value {
        None => {
            errors.push(FieldError { field, reason: "is required".into() });
            None
        }
        Some(v) => match coerce(v) {
            Ok(t) => Some(t),
            Err(reason) => {
                errors.push(FieldError { field, reason });
                None
            }
        },
    }
}

fn optional<T>(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &Option<Value>,
    coerce: fn(&Value) -> Result<T, String>,
    default: T,
) -> T {
    match value {
        None => default,
        Some(v) => coerce(v).unwrap_or_else(|reason| {
            errors.push(FieldError { field, reason });
            default
        }),
    }
}

// ── Coercions ────────────────────────────────────────────────────────────────

fn number(v: &Value) -> Result<f64, String> {
    match v {
        Value::Number(n) => n.as_f64().ok_or_else(|| "is not a number".to_string()),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("'{s}' is not numeric")),
        other => Err(format!("{other} is not numeric")),
    }
}

fn non_negative(x: f64) -> Result<f64, String> {
    if !x.is_finite() {
        Err("must be a finite number".into())
    } else if x < 0.0 {
        Err(format!("must be >= 0, got {x}"))
    } else {
        Ok(x)
    }
}

fn amount(v: &Value) -> Result<f64, String> {
    non_negative(number(v)?)
}

fn count(v: &Value) -> Result<u32, String> {
    let x = amount(v)?;
    if x.fract() != 0.0 {
        return Err(format!("must be a whole number, got {x}"));
    }
    if x > u32::MAX as f64 {
        return Err(format!("{x} is out of range"));
    }
    Ok(x as u32)
}

fn text(v: &Value) -> Result<String, String> {
    match v {
        Value::String(s) => Ok(s.trim().to_ascii_lowercase()),
        other => Err(format!("{other} is not a string")),
    }
}

fn contract(v: &Value) -> Result<ContractType, String> {
    match text(v)?.as_str() {
        "prepaid" | "month-to-month"            => Ok(ContractType::Prepaid),
        "postpaid" | "one year" | "two year"    => Ok(ContractType::Postpaid),
        other => Err(format!("unknown contract type '{other}'")),
    }
}

fn internet(v: &Value) -> Result<InternetService, String> {
    match text(v)?.as_str() {
        "fiber" | "fibre" | "fiber optic" => Ok(InternetService::Fiber),
        "dsl"                             => Ok(InternetService::Dsl),
        "none" | "no"                     => Ok(InternetService::None),
        other => Err(format!("unknown internet service '{other}'")),
    }
}

fn flag(v: &Value) -> Result<bool, String> {
    match v {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(format!("{n} is not a flag")),
        },
        Value::String(_) => match text(v)?.as_str() {
            "yes" | "true" => Ok(true),
            "no" | "false" | "no internet service" | "no phone service" => Ok(false),
            other => Err(format!("'{other}' is not yes/no")),
        },
        other => Err(format!("{other} is not a flag")),
    }
}
