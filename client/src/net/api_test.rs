use super::*;

#[test]
fn login_error_message_distinguishes_bad_credentials() {
    assert_eq!(login_error_message(&ApiError::Unauthorized), "Invalid email or password");
    assert_eq!(login_error_message(&ApiError::Status(500)), "Login failed. Please try again later.");
    assert_eq!(
        login_error_message(&ApiError::Network("offline".to_owned())),
        "Login failed. Please try again later."
    );
}

#[test]
fn register_error_message_prefers_backend_detail() {
    assert_eq!(
        register_error_message(&ApiError::BadRequest(Some("Referral code not valid".to_owned()))),
        "Referral code not valid"
    );
    assert_eq!(register_error_message(&ApiError::BadRequest(None)), "Email already registered");
    assert_eq!(
        register_error_message(&ApiError::Validation(Some("password too weak".to_owned()))),
        "password too weak"
    );
    assert_eq!(
        register_error_message(&ApiError::Validation(None)),
        "Invalid data. Check the fields you entered."
    );
    assert_eq!(
        register_error_message(&ApiError::Status(503)),
        "Registration failed. Please try again later."
    );
}

#[test]
fn vote_error_message_surfaces_limit_detail() {
    assert_eq!(
        vote_error_message(&ApiError::BadRequest(Some("Monthly vote limit reached".to_owned()))),
        "Monthly vote limit reached"
    );
    assert_eq!(vote_error_message(&ApiError::BadRequest(None)), "Voting failed");
    assert_eq!(vote_error_message(&ApiError::NotFound), "Unable to vote for this design");
}

#[test]
fn resource_paths_format_identifiers() {
    assert_eq!(category_path("animals").unwrap(), "/products/categories/animals");
    assert_eq!(plan_path("creator").unwrap(), "/subscriptions/plans/creator");
    assert_eq!(verify_session_path("cs_test_123").unwrap(), "/subscriptions/verify-session/cs_test_123");
    assert_eq!(shipment_path(42), "/shipments/42");
}

#[test]
fn resource_paths_keep_identifiers_inside_one_segment() {
    assert_eq!(
        verify_session_path("../../users/me").unwrap(),
        "/subscriptions/verify-session/..%2F..%2Fusers%2Fme"
    );
    assert_eq!(category_path("a?b=c#d").unwrap(), "/products/categories/a%3Fb%3Dc%23d");
    assert_eq!(plan_path("pro plan").unwrap(), "/subscriptions/plans/pro%20plan");
}

#[test]
fn resource_paths_refuse_dot_and_empty_identifiers() {
    assert_eq!(verify_session_path(".."), Err(ApiError::InvalidIdentifier("..".to_owned())));
    assert_eq!(category_path("."), Err(ApiError::InvalidIdentifier(".".to_owned())));
    assert!(plan_path("").is_err());
}
