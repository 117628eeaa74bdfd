use super::*;

fn user(name: &str) -> User {
    User {
        id: 1,
        email: "ada@example.com".to_owned(),
        full_name: name.to_owned(),
        is_active: true,
        is_admin: false,
        referral_code: "ADA123".to_owned(),
        credit_balance: 0.0,
        created_at: None,
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.error.is_none());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn begin_clears_previous_error() {
    let mut state = AuthState { user: None, loading: false, error: Some("old".to_owned()) };
    state.begin();
    assert!(state.loading);
    assert!(state.error.is_none());
}

#[test]
fn signed_in_sets_user_and_stops_loading() {
    let mut state = AuthState::default();
    state.signed_in(user("Ada"));
    assert!(state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn failed_keeps_existing_user() {
    let mut state = AuthState::default();
    state.signed_in(user("Ada"));
    state.begin();
    state.failed("Invalid email or password".to_owned());
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Invalid email or password"));
}

#[test]
fn signed_out_drops_user() {
    let mut state = AuthState::default();
    state.signed_in(user("Ada"));
    state.signed_out();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn display_name_falls_back_for_missing_or_blank_name() {
    let mut state = AuthState::default();
    assert_eq!(state.display_name(), "Member");
    state.signed_in(user("  "));
    assert_eq!(state.display_name(), "Member");
    state.signed_in(user(" Ada Lovelace "));
    assert_eq!(state.display_name(), "Ada Lovelace");
}
