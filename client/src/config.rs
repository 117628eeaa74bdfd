//! Compile-time client configuration.
//!
//! The API base URL is baked in at build time from `COOKIEFLIX_API_URL`.
//! The default `/api` targets the web host, which forwards to the backend.

/// Base URL every REST path is appended to.
pub const API_BASE_URL: &str = match option_env!("COOKIEFLIX_API_URL") {
    Some(url) => url,
    None => "/api",
};

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Designs shown per catalog page.
pub const DESIGNS_PER_PAGE: usize = 12;

/// Maximum page buttons rendered by the catalog paginator.
pub const MAX_PAGES_SHOWN: usize = 5;

/// Default toast lifetime in milliseconds.
pub const TOAST_TIMEOUT_MS: u32 = 5000;

/// Monthly picks shown on the dashboard when the plan does not say.
pub const DEFAULT_ITEMS_PER_MONTH: usize = 4;

/// Recent votes listed on the dashboard.
pub const RECENT_VOTES_SHOWN: usize = 3;

/// Application version shown in the footer.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
