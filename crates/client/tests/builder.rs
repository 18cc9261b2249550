use gridiron_client::{BuildError, RequestBuilder, TransportError};
use serde_json::json;

fn full_form() -> RequestBuilder {
    RequestBuilder::new()
        .field("home_team", "KC")
        .field("away_team", "BUF")
        .field("week", 3)
        .field("season", 2024)
        .field("home_offense", 7.2)
        .field("away_offense", 6.8)
}

#[test]
fn builds_a_valid_request_from_typed_values() {
    let req = full_form().build().unwrap();
    assert_eq!(req.home_team, "KC");
    assert_eq!(req.week, 3);
    assert_eq!(req.season, 2024);
    assert_eq!(req.features.rating("home_offense"), 7.2);
}

#[test]
fn coerces_text_fields_from_numbers_and_trims_whitespace() {
    let req = full_form().field("home_team", "  KC  ").field("away_team", 49).build().unwrap();
    assert_eq!(req.home_team, "KC");
    assert_eq!(req.away_team, "49");
}

#[test]
fn coerces_numeric_fields_from_strings() {
    let req = full_form()
        .field("week", " 5 ")
        .field("season", "2019")
        .field("home_offense", "7.5")
        .build()
        .unwrap();
    assert_eq!(req.week, 5);
    assert_eq!(req.season, 2019);
    assert_eq!(req.features.rating("home_offense"), 7.5);
}

#[test]
fn week_is_clamped_not_rejected() {
    assert_eq!(full_form().field("week", 0).build().unwrap().week, 1);
    assert_eq!(full_form().field("week", 99).build().unwrap().week, 22);
}

#[test]
fn season_is_clamped_not_rejected() {
    assert_eq!(full_form().field("season", 1999).build().unwrap().season, 2003);
    assert_eq!(full_form().field("season", 2099).build().unwrap().season, 2025);
}

#[test]
fn missing_range_fields_repair_to_the_range_start() {
    let req = RequestBuilder::new()
        .field("home_team", "KC")
        .field("away_team", "BUF")
        .build()
        .unwrap();
    assert_eq!(req.week, 1);
    assert_eq!(req.season, 2003);
}

#[test]
fn non_numeric_range_fields_repair_to_the_range_start() {
    let req = full_form().field("week", "next one").field("season", json!(null)).build().unwrap();
    assert_eq!(req.week, 1);
    assert_eq!(req.season, 2003);
}

#[test]
fn short_home_team_is_rejected_naming_the_field() {
    let err = full_form().field("home_team", "K").build().unwrap_err();
    let BuildError::Validation { violations } = err;
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "home_team");
}

#[test]
fn missing_ratings_default_to_zero() {
    let req = RequestBuilder::new()
        .field("home_team", "KC")
        .field("away_team", "BUF")
        .field("week", 3)
        .field("season", 2024)
        .build()
        .unwrap();
    assert_eq!(req.features.rating("home_offense"), 0.0);
    assert_eq!(req.features.rating("away_offense"), 0.0);
}

#[test]
fn garbage_ratings_default_to_zero() {
    let req = full_form()
        .field("home_offense", "not a number")
        .field("away_offense", json!(null))
        .build()
        .unwrap();
    assert_eq!(req.features.rating("home_offense"), 0.0);
    assert_eq!(req.features.rating("away_offense"), 0.0);
}

#[test]
fn from_form_accepts_a_whole_snapshot() {
    let req = RequestBuilder::from_form([
        ("home_team", json!("KC")),
        ("away_team", json!("BUF")),
        ("week", json!("3")),
        ("season", json!(2024)),
    ])
    .build()
    .unwrap();
    assert_eq!(req.week, 3);
}

#[test]
fn transport_error_decodes_violation_details() {
    let body = json!({
        "detail": [
            { "field": "week", "constraint": "must be within [1, 22]" }
        ]
    });

    let err = TransportError::from_error_body(422, body.to_string().as_bytes());
    let TransportError::Status { status, message } = err else {
        panic!("expected status error");
    };
    assert_eq!(status, 422);
    assert!(message.contains("week"));
    assert!(message.contains("[1, 22]"));
}

#[test]
fn transport_error_decodes_plain_string_detail() {
    let body = json!({ "detail": "model warming up" });
    let err = TransportError::from_error_body(503, body.to_string().as_bytes());
    let TransportError::Status { message, .. } = err else {
        panic!("expected status error");
    };
    assert_eq!(message, "model warming up");
}

#[test]
fn network_error_carries_a_readable_message() {
    let err = TransportError::network("connection refused");
    assert_eq!(err.to_string(), "Network error: connection refused");
}

#[test]
fn transport_error_falls_back_to_generic_status_message() {
    let err = TransportError::from_error_body(500, b"<html>oops</html>");
    let TransportError::Status { status, message } = err else {
        panic!("expected status error");
    };
    assert_eq!(status, 500);
    assert!(message.contains("500"));
}
