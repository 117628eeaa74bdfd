//! Form input validation for login, registration and profile edits.
//!
//! Validators return a field -> message map; an empty map means the form may
//! be submitted. The backend re-validates everything, so these rules only
//! exist to give fast inline feedback.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

/// Per-field error messages keyed by field name.
pub type FieldErrors = BTreeMap<&'static str, String>;

const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Loose `something@something.tld` shape check: some blank-free run of the
/// input must read `x@y.z` with every part non-empty.
pub fn is_valid_email(email: &str) -> bool {
    email.split_whitespace().any(|word| {
        word.char_indices().any(|(at, c)| {
            c == '@' && at > 0 && {
                let domain = &word[at + 1..];
                domain.char_indices().any(|(dot, d)| d == '.' && dot > 0 && dot + 1 < domain.len())
            }
        })
    })
}

/// First unmet password rule, or `None` if the password is strong enough.
pub fn password_problem(password: &str) -> Option<&'static str> {
    if password.chars().count() < 8 {
        return Some("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain at least one number");
    }
    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return Some("Password must contain at least one special character");
    }
    None
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.trim().is_empty() {
        errors.insert("email", "Email is required".to_owned());
    } else if !is_valid_email(email) {
        errors.insert("email", "Enter a valid email address".to_owned());
    }
}

/// Login form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, &self.email);
        if self.password.is_empty() {
            errors.insert("password", "Password is required".to_owned());
        }
        errors
    }
}

/// Registration form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
    pub referral_code: String,
}

impl RegisterForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.full_name.trim().is_empty() {
            errors.insert("full_name", "Full name is required".to_owned());
        }
        check_email(&mut errors, &self.email);
        if let Some(problem) = password_problem(&self.password) {
            errors.insert("password", problem.to_owned());
        }
        if self.password != self.confirm_password {
            errors.insert("confirm_password", "Passwords do not match".to_owned());
        }
        if !self.accept_terms {
            errors.insert("accept_terms", "You must accept the terms of service".to_owned());
        }
        errors
    }

    /// Referral code to send, `None` when left blank.
    pub fn referral(&self) -> Option<String> {
        let code = self.referral_code.trim();
        if code.is_empty() { None } else { Some(code.to_owned()) }
    }
}

/// Profile edit validation; only the name is editable.
pub fn validate_full_name(full_name: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if full_name.trim().is_empty() {
        errors.insert("full_name", "Full name is required".to_owned());
    }
    errors
}
