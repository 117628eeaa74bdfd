use super::*;

#[test]
fn from_response_maps_known_statuses() {
    assert_eq!(ApiError::from_response(401, ""), ApiError::Unauthorized);
    assert_eq!(ApiError::from_response(404, "{}"), ApiError::NotFound);
    assert_eq!(ApiError::from_response(500, "boom"), ApiError::Status(500));
    assert_eq!(ApiError::from_response(503, ""), ApiError::Status(503));
}

#[test]
fn bad_request_keeps_string_detail() {
    let err = ApiError::from_response(400, r#"{"detail":"Email already registered"}"#);
    assert_eq!(err, ApiError::BadRequest(Some("Email already registered".to_owned())));
    assert_eq!(err.detail(), Some("Email already registered"));
}

#[test]
fn validation_takes_first_field_message() {
    let body = r#"{"detail":[{"loc":["body","password"],"msg":"too weak","type":"value_error"},{"msg":"second"}]}"#;
    let err = ApiError::from_response(422, body);
    assert_eq!(err, ApiError::Validation(Some("too weak".to_owned())));
}

#[test]
fn detail_absent_for_unparseable_or_empty_bodies() {
    assert_eq!(error_detail("not json"), None);
    assert_eq!(error_detail(r#"{"detail":[]}"#), None);
    assert_eq!(error_detail(r#"{"detail":"   "}"#), None);
    assert_eq!(error_detail(r#"{"message":"wrong key"}"#), None);
    assert_eq!(ApiError::from_response(400, "").detail(), None);
}

#[test]
fn detail_is_none_for_statusless_variants() {
    assert_eq!(ApiError::NotFound.detail(), None);
    assert_eq!(ApiError::Network("offline".to_owned()).detail(), None);
}

#[test]
fn display_messages_are_descriptive() {
    assert_eq!(ApiError::Status(502).to_string(), "request failed: status 502");
    assert_eq!(ApiError::BadRequest(None).to_string(), "bad request: no detail");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}
