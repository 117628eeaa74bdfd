//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once at the app root as `RwSignal<AuthState>`. Route guards,
//! the navbar and every user-aware page read it; the async operations below
//! are the only writers.
//!
//! DESIGN
//! ======
//! The bearer token lives in `localStorage` (see `util::session`), the user
//! object lives here. `loading` starts `true` so protected routes render a
//! loader, not a redirect, until startup hydration has settled.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{RegisterRequest, User};
use crate::util::session;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true, error: None }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Greeting name, falling back when no user is loaded.
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.full_name.trim())
            .filter(|name| !name.is_empty())
            .map_or_else(|| "Member".to_owned(), str::to_owned)
    }

    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn signed_in(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
        self.error = None;
    }

    pub fn failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn signed_out(&mut self) {
        self.user = None;
        self.loading = false;
        self.error = None;
    }
}

/// Restore the session from a stored token at startup.
///
/// A token the backend no longer accepts is discarded.
pub async fn init(auth: RwSignal<AuthState>) {
    if session::load_token().is_none() {
        auth.update(AuthState::signed_out);
        return;
    }
    match api::fetch_current_user().await {
        Ok(user) => auth.update(|a| a.signed_in(user)),
        Err(e) => {
            leptos::logging::warn!("session restore failed: {e}");
            session::clear_token();
            auth.update(AuthState::signed_out);
        }
    }
}

async fn sign_in(email: &str, password: &str) -> Result<User, String> {
    let token = api::login_token(email, password).await?;
    session::store_token(&token);
    match api::fetch_current_user().await {
        Ok(user) => Ok(user),
        Err(_) => {
            session::clear_token();
            Err("Unable to load user data after login".to_owned())
        }
    }
}

fn settle(auth: RwSignal<AuthState>, result: &Result<User, String>) {
    match result {
        Ok(user) => {
            let user = user.clone();
            auth.update(|a| a.signed_in(user));
        }
        Err(message) => {
            let message = message.clone();
            auth.update(|a| a.failed(message));
        }
    }
}

/// Sign in with email and password.
///
/// # Errors
///
/// Returns the display message for a rejected or failed login.
pub async fn login(auth: RwSignal<AuthState>, email: String, password: String) -> Result<User, String> {
    auth.update(AuthState::begin);
    let result = sign_in(&email, &password).await;
    settle(auth, &result);
    result
}

/// Create an account, then sign in with the same credentials.
///
/// # Errors
///
/// Returns the display message for a rejected registration or follow-up login.
pub async fn register(auth: RwSignal<AuthState>, request: RegisterRequest) -> Result<User, String> {
    auth.update(AuthState::begin);
    let result = match api::register_user(&request).await {
        Ok(_) => sign_in(&request.email, &request.password).await,
        Err(e) => Err(e),
    };
    settle(auth, &result);
    result
}

/// Re-read the profile after an edit so every view shows fresh data.
///
/// # Errors
///
/// Returns the display message if the profile cannot be loaded.
pub async fn refresh_user(auth: RwSignal<AuthState>) -> Result<(), String> {
    let user = api::fetch_profile().await?;
    auth.update(|a| a.user = Some(user));
    Ok(())
}

/// Drop the token and the user.
pub fn logout(auth: RwSignal<AuthState>) {
    session::clear_token();
    auth.update(AuthState::signed_out);
}
