//! Bearer-token persistence in `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only state the client persists. The REST layer reads it
//! per request; the auth context writes and clears it.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is browser-only; SSR paths no-op so server rendering always
//! sees a signed-out visitor and hydration settles the real session.

use crate::config::TOKEN_STORAGE_KEY;

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the stored bearer token, ignoring blank values.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()?;
        if raw.trim().is_empty() { None } else { Some(raw) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = TOKEN_STORAGE_KEY;
        None
    }
}

/// Persist a freshly issued bearer token.
pub fn store_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Forget the bearer token.
pub fn clear_token() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

/// Drop the session after the backend rejected the token and send the
/// browser to the login page, unless it is already there.
pub fn expire_session() {
    clear_token();
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let on_login = window
            .location()
            .pathname()
            .is_ok_and(|path| path.trim_end_matches('/') == "/login");
        if !on_login {
            let _ = window.location().set_href("/login");
        }
    }
}

/// Hand the whole browser off to an external URL (payment processor).
pub fn redirect_external(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
