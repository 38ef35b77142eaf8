//! Boundary validation: malformed profiles are rejected whole, never scored.

use churn_core::{
    ChurnError, ContractType, CustomerProfile, InternetService, ScoringConfig, ScoringEngine,
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn engine() -> ScoringEngine {
    ScoringEngine::new(ScoringConfig::default()).unwrap()
}

fn valid_profile() -> CustomerProfile {
    CustomerProfile {
        tenure_months:       12,
        voice_usage_minutes: 120.0,
        data_usage_gb:       3.0,
        complaint_count:     1,
        contract_type:       ContractType::Postpaid,
        monthly_charges:     60.0,
        internet_service:    InternetService::Dsl,
        online_security:     false,
        tech_support:        true,
        streaming_tv:        false,
    }
}

fn rejected_fields(body: &str) -> Vec<&'static str> {
    match engine().score_json(body) {
        Err(ChurnError::Validation(e)) => e.fields.iter().map(|f| f.field).collect(),
        other => panic!("expected a validation error, got {other:?}"),
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// A negative complaint count is a validation error naming the field.
#[test]
fn negative_complaint_count_is_rejected() {
    let fields = rejected_fields(
        r#"{ "tenure_months": 5, "voice_usage_minutes": 100, "data_usage_gb": 2,
             "complaint_count": -1, "contract_type": "prepaid" }"#,
    );
    assert_eq!(fields, vec!["complaint_count"]);
}

/// Missing required fields are all listed, not just the first.
#[test]
fn missing_fields_are_all_listed() {
    let fields = rejected_fields(r#"{ "contract_type": "postpaid" }"#);
    assert_eq!(
        fields,
        vec!["tenure_months", "voice_usage_minutes", "data_usage_gb", "complaint_count"]
    );
}

/// Non-numeric strings in numeric fields are rejected.
#[test]
fn non_numeric_values_are_rejected() {
    let fields = rejected_fields(
        r#"{ "tenure": "long", "voice_usage": 100, "data_usage": true,
             "complaints": 0, "contract_type": "postpaid" }"#,
    );
    assert_eq!(fields, vec!["tenure_months", "data_usage_gb"]);
}

/// Fractional counts are not silently truncated.
#[test]
fn fractional_tenure_is_rejected() {
    let fields = rejected_fields(
        r#"{ "tenure_months": 2.5, "voice_usage_minutes": 100, "data_usage_gb": 2,
             "complaint_count": 0, "contract_type": "postpaid" }"#,
    );
    assert_eq!(fields, vec!["tenure_months"]);
}

/// Unknown enum labels are validation errors, not defaults.
#[test]
fn unknown_contract_type_is_rejected() {
    let fields = rejected_fields(
        r#"{ "tenure_months": 2, "voice_usage_minutes": 100, "data_usage_gb": 2,
             "complaint_count": 0, "contract_type": "weekly", "internet_service": "satellite" }"#,
    );
    assert_eq!(fields, vec!["contract_type", "internet_service"]);
}

/// Absent monthly charges default to 50 and do not fail the request.
#[test]
fn absent_charges_use_default() {
    let body = r#"{ "tenure_months": 30, "voice_usage_minutes": 100, "data_usage_gb": 2,
                    "complaint_count": 0, "contract_type": "Two year" }"#;
    let profile = CustomerProfile::from_json(body, &ScoringConfig::default()).unwrap();
    assert_eq!(profile.monthly_charges, 50.0);
    assert_eq!(profile.contract_type, ContractType::Postpaid);
    assert_eq!(profile.internet_service, InternetService::Fiber);
}

/// Typed profiles are still checked for negative or non-finite floats.
#[test]
fn typed_profile_with_bad_floats_is_rejected() {
    let profile = CustomerProfile {
        voice_usage_minutes: -1.0,
        data_usage_gb: f64::NAN,
        ..valid_profile()
    };
    match engine().score(&profile) {
        Err(ChurnError::Validation(e)) => {
            assert!(e.has_field("voice_usage_minutes"));
            assert!(e.has_field("data_usage_gb"));
            assert!(!e.has_field("monthly_charges"));
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
}

/// Malformed JSON surfaces as a serialization error.
#[test]
fn malformed_json_is_a_serialization_error() {
    assert!(matches!(
        engine().score_json("{ not json"),
        Err(ChurnError::Serialization(_))
    ));
}

/// The error message names every offending field.
#[test]
fn validation_message_lists_fields() {
    let err = engine()
        .score_json(r#"{ "complaint_count": -3, "contract_type": "prepaid" }"#)
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("Invalid profile:"), "{msg}");
    assert!(msg.contains("complaint_count"), "{msg}");
    assert!(msg.contains("tenure_months"), "{msg}");
}

/// Negative charges default at the payload boundary but fail a typed profile.
#[test]
fn negative_charges_default_in_payload_but_fail_typed() {
    let body = r#"{ "tenure_months": 12, "voice_usage_minutes": 120, "data_usage_gb": 3,
                    "complaint_count": 1, "contract_type": "postpaid",
                    "internet_service": "dsl", "tech_support": "Yes",
                    "monthly_charges": -5 }"#;
    let parsed = CustomerProfile::from_json(body, &ScoringConfig::default()).unwrap();
    assert_eq!(parsed.monthly_charges, 50.0);
    assert!(engine().score_json(body).is_ok());

    let typed = CustomerProfile { monthly_charges: -5.0, ..valid_profile() };
    match engine().score(&typed) {
        Err(ChurnError::Validation(e)) => assert!(e.has_field("monthly_charges")),
        other => panic!("expected a validation error, got {other:?}"),
    }
}

/// Errors follow the parser's field order, whatever order the keys arrive in.
#[test]
fn error_order_ignores_key_order() {
    let fields = rejected_fields(
        r#"{ "contract_type": "weekly", "complaint_count": -1, "tenure_months": "long",
             "voice_usage_minutes": 100, "data_usage_gb": 2 }"#,
    );
    assert_eq!(fields, vec!["tenure_months", "complaint_count", "contract_type"]);
}
