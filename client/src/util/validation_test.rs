use super::*;

fn valid_register() -> RegisterForm {
    RegisterForm {
        full_name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "Analyt1cal!".to_owned(),
        confirm_password: "Analyt1cal!".to_owned(),
        accept_terms: true,
        referral_code: String::new(),
    }
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_shape_accepts_common_addresses() {
    assert!(is_valid_email("ada@example.com"));
    assert!(is_valid_email("  a.b+c@mail.example.co.uk "));
}

#[test]
fn email_shape_only_needs_one_matching_run() {
    assert!(is_valid_email("@a@b.c"));
    assert!(is_valid_email("x y@b.c"));
    assert!(is_valid_email("a@b@c.d"));
}

#[test]
fn email_shape_rejects_malformed_addresses() {
    for bad in ["", "ada", "ada@", "@example.com", "ada@example", "ada@.com", "ada@example.", "ada @example.com", "ada@ example.com"] {
        assert!(!is_valid_email(bad), "expected {bad:?} to be rejected");
    }
}

// =============================================================
// Password strength
// =============================================================

#[test]
fn password_rules_report_first_failure() {
    assert_eq!(password_problem("Ab1!"), Some("Password must be at least 8 characters long"));
    assert_eq!(password_problem("abcdefg1!"), Some("Password must contain at least one uppercase letter"));
    assert_eq!(password_problem("ABCDEFG1!"), Some("Password must contain at least one lowercase letter"));
    assert_eq!(password_problem("Abcdefgh!"), Some("Password must contain at least one number"));
    assert_eq!(password_problem("Abcdefgh1"), Some("Password must contain at least one special character"));
}

#[test]
fn strong_password_passes() {
    assert_eq!(password_problem("Analyt1cal!"), None);
    assert_eq!(password_problem("x_Y9zzzz"), None);
}

// =============================================================
// Forms
// =============================================================

#[test]
fn login_form_requires_both_fields() {
    let errors = LoginForm::default().validate();
    assert_eq!(errors.get("email").map(String::as_str), Some("Email is required"));
    assert_eq!(errors.get("password").map(String::as_str), Some("Password is required"));
}

#[test]
fn login_form_rejects_bad_email() {
    let form = LoginForm { email: "nope".to_owned(), password: "x".to_owned() };
    let errors = form.validate();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors["email"], "Enter a valid email address");
}

#[test]
fn valid_register_form_has_no_errors() {
    assert!(valid_register().validate().is_empty());
}

#[test]
fn register_form_flags_each_problem() {
    let form = RegisterForm {
        full_name: "   ".to_owned(),
        email: "bad".to_owned(),
        password: "short".to_owned(),
        confirm_password: "different".to_owned(),
        accept_terms: false,
        referral_code: String::new(),
    };
    let errors = form.validate();
    let fields: Vec<&str> = errors.keys().copied().collect();
    assert_eq!(fields, vec!["accept_terms", "confirm_password", "email", "full_name", "password"]);
}

#[test]
fn register_form_referral_is_optional() {
    let mut form = valid_register();
    assert_eq!(form.referral(), None);
    form.referral_code = "  FRIEND42 ".to_owned();
    assert_eq!(form.referral(), Some("FRIEND42".to_owned()));
}

#[test]
fn full_name_required_for_profile() {
    assert!(validate_full_name("Ada").is_empty());
    assert_eq!(validate_full_name(" ")["full_name"], "Full name is required");
}
