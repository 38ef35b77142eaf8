use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChurnError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ChurnResult<T> = Result<T, ChurnError>;

// ── Validation ───────────────────────────────────────────────────────────────

/// One offending profile field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field:  &'static str,
    pub reason: String,
}

/// Every field that failed parsing, in the parser's fixed field order
/// (required fields first, then optional ones).
/// Never partially scored: a profile with any entry here is rejected whole.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("Invalid profile: {}", describe(.fields))]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }
}

fn describe(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|e| format!("{} {}", e.field, e.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

// ── Configuration ────────────────────────────────────────────────────────────

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Thresholds not increasing: medium={medium} must be < high={high}")]
    ThresholdOrder { medium: f64, high: f64 },

    #[error("Threshold '{name}'={value} outside (0, 100]")]
    ThresholdRange { name: &'static str, value: f64 },

    #[error("Weight '{name}'={value} must be >= 0")]
    NegativeWeight { name: &'static str, value: f64 },

    #[error("Parameter '{name}'={value} must be > 0")]
    NonPositive { name: &'static str, value: f64 },

    #[error("Parameter '{name}' is not a finite number")]
    NotFinite { name: &'static str },
}
