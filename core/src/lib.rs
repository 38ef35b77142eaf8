//! Churn risk scoring engine.
//!
//! A deterministic rule scorer: profile → per-feature contributions →
//! clamped composite score → risk level, with an explanation per feature and
//! ranked retention actions.
//!
//! - [`profile`] — typed profile and boundary payload parsing
//! - [`config`] — weights, caps and thresholds
//! - [`normalizer`] — per-feature contributions
//! - [`aggregator`] — composite score
//! - [`classifier`] — risk bands
//! - [`explainer`] — factor explanations and impact tags
//! - [`recommender`] — retention actions
//! - [`engine`] — the scoring pipeline
//! - [`population`], [`summary`] — seeded synthetic cohorts and roll-ups

pub mod aggregator;
pub mod classifier;
pub mod config;
pub mod engine;
pub mod error;
pub mod explainer;
pub mod normalizer;
pub mod population;
pub mod profile;
pub mod recommender;
pub mod rng;
pub mod summary;
pub mod types;

pub use classifier::RiskLevel;
pub use config::ScoringConfig;
pub use engine::{score, ScoreResult, ScoringEngine};
pub use error::{ChurnError, ChurnResult, ConfigError, FieldError, ValidationError};
pub use explainer::{Factor, Factors, Impact};
pub use profile::{CustomerProfile, RawProfile};
pub use types::{ContractType, FeatureKey, InternetService};
