//! REST API helpers, one per backend endpoint.
//!
//! ERROR HANDLING
//! ==============
//! Each helper returns `Result<_, String>` where the error is already the
//! sentence to show the user. The wire-level `ApiError` is logged and then
//! replaced by an operation-specific message.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::http::{
    endpoint, endpoint_with_query, get_json, login_form_body, path_segment, post_form, post_json, put_json,
};
use super::types::{
    ActiveSubscription, Category, CheckoutRequest, CheckoutSession, CheckoutVerification, Design, ProfileUpdate,
    ReferralCode, RegisterRequest, Shipment, SubscriptionPlan, TokenResponse, User, VoteRequest,
};

fn fail(op: &str, err: &ApiError, message: &str) -> String {
    leptos::logging::warn!("{op} failed: {err}");
    message.to_owned()
}

pub(crate) fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized => "Invalid email or password".to_owned(),
        _ => "Login failed. Please try again later.".to_owned(),
    }
}

pub(crate) fn register_error_message(err: &ApiError) -> String {
    match err {
        ApiError::BadRequest(detail) => detail.clone().unwrap_or_else(|| "Email already registered".to_owned()),
        ApiError::Validation(detail) => {
            detail.clone().unwrap_or_else(|| "Invalid data. Check the fields you entered.".to_owned())
        }
        _ => "Registration failed. Please try again later.".to_owned(),
    }
}

pub(crate) fn vote_error_message(err: &ApiError) -> String {
    match err {
        ApiError::BadRequest(detail) => detail.clone().unwrap_or_else(|| "Voting failed".to_owned()),
        _ => "Unable to vote for this design".to_owned(),
    }
}

pub(crate) fn category_path(slug: &str) -> Result<String, ApiError> {
    Ok(format!("/products/categories/{}", path_segment(slug)?))
}

pub(crate) fn plan_path(slug: &str) -> Result<String, ApiError> {
    Ok(format!("/subscriptions/plans/{}", path_segment(slug)?))
}

pub(crate) fn verify_session_path(session_id: &str) -> Result<String, ApiError> {
    Ok(format!("/subscriptions/verify-session/{}", path_segment(session_id)?))
}

pub(crate) fn shipment_path(shipment_id: i64) -> String {
    format!("/shipments/{shipment_id}")
}

// =============================================================================
// AUTH
// =============================================================================

/// Exchange credentials for a bearer token via the OAuth2 password flow.
///
/// # Errors
///
/// "Invalid email or password" on 401, a generic message otherwise.
pub async fn login_token(email: &str, password: &str) -> Result<String, String> {
    let body = login_form_body(email, password);
    match post_form::<TokenResponse>(&endpoint("/auth/token"), body).await {
        Ok(token) => Ok(token.access_token),
        Err(e) => {
            leptos::logging::warn!("login failed: {e}");
            Err(login_error_message(&e))
        }
    }
}

/// Create an account. Does not sign in; see `state::auth::register`.
///
/// # Errors
///
/// The backend's detail for 400/422 responses, a generic message otherwise.
pub async fn register_user(request: &RegisterRequest) -> Result<User, String> {
    post_json::<_, User>(&endpoint("/auth/register"), request).await.map_err(|e| {
        leptos::logging::warn!("registration failed: {e}");
        register_error_message(&e)
    })
}

/// Fetch the account the stored token belongs to.
///
/// # Errors
///
/// Returns a display message if the token is missing, rejected or the call fails.
pub async fn fetch_current_user() -> Result<User, String> {
    get_json(&endpoint("/auth/me"))
        .await
        .map_err(|e| fail("fetch current user", &e, "Unable to load user data"))
}

// =============================================================================
// PRODUCTS
// =============================================================================

/// # Errors
///
/// Returns a display message if the call fails.
pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    get_json(&endpoint("/products/categories"))
        .await
        .map_err(|e| fail("fetch categories", &e, "Unable to load categories"))
}

/// # Errors
///
/// Returns a display message if the call fails.
pub async fn fetch_category(slug: &str) -> Result<Category, String> {
    let path = category_path(slug).map_err(|e| fail("fetch category", &e, "Unable to load category details"))?;
    get_json(&endpoint(&path))
        .await
        .map_err(|e| fail("fetch category", &e, "Unable to load category details"))
}

/// List designs, optionally restricted to one category.
///
/// # Errors
///
/// Returns a display message if the call fails.
pub async fn fetch_designs(category_id: Option<i64>) -> Result<Vec<Design>, String> {
    let url = endpoint_with_query("/products/designs", &[("category_id", category_id.map(|id| id.to_string()))]);
    get_json(&url).await.map_err(|e| fail("fetch designs", &e, "Unable to load designs"))
}

/// Cast the user's vote for a design.
///
/// # Errors
///
/// The backend's detail on 400 (e.g. monthly limit reached), a generic message otherwise.
pub async fn vote_for_design(design_id: i64) -> Result<(), String> {
    post_json::<_, serde_json::Value>(&endpoint("/products/vote"), &VoteRequest { design_id })
        .await
        .map(|_| ())
        .map_err(|e| {
            leptos::logging::warn!("vote failed: {e}");
            vote_error_message(&e)
        })
}

/// Designs the user has voted for, optionally restricted to one category.
///
/// # Errors
///
/// Returns a display message if the call fails.
pub async fn fetch_user_votes(category_id: Option<i64>) -> Result<Vec<Design>, String> {
    let url = endpoint_with_query("/products/my-votes", &[("category_id", category_id.map(|id| id.to_string()))]);
    get_json(&url).await.map_err(|e| fail("fetch votes", &e, "Unable to load your votes"))
}

// =============================================================================
// SUBSCRIPTIONS
// =============================================================================

/// # Errors
///
/// Returns a display message if the call fails.
pub async fn fetch_plans() -> Result<Vec<SubscriptionPlan>, String> {
    get_json(&endpoint("/subscriptions/plans"))
        .await
        .map_err(|e| fail("fetch plans", &e, "Unable to load subscription plans"))
}

/// # Errors
///
/// Returns a display message if the call fails.
pub async fn fetch_plan(slug: &str) -> Result<SubscriptionPlan, String> {
    let path = plan_path(slug).map_err(|e| fail("fetch plan", &e, "Unable to load plan details"))?;
    get_json(&endpoint(&path))
        .await
        .map_err(|e| fail("fetch plan", &e, "Unable to load plan details"))
}

/// Ask the backend for a payment-processor checkout URL.
///
/// # Errors
///
/// Returns a display message if the call fails.
pub async fn create_checkout_session(request: &CheckoutRequest) -> Result<CheckoutSession, String> {
    post_json(&endpoint("/subscriptions/checkout"), request)
        .await
        .map_err(|e| fail("create checkout session", &e, "Unable to start checkout"))
}

/// The user's active subscription; `Ok(None)` when there is none (404).
///
/// # Errors
///
/// Returns a display message for any failure other than 404.
pub async fn fetch_active_subscription() -> Result<Option<ActiveSubscription>, String> {
    match get_json(&endpoint("/subscriptions/my")).await {
        Ok(sub) => Ok(Some(sub)),
        Err(ApiError::NotFound) => Ok(None),
        Err(e) => Err(fail("fetch active subscription", &e, "Unable to load your subscription")),
    }
}

/// Replace the subscription's preferred categories.
///
/// # Errors
///
/// Returns a display message if the call fails.
pub async fn update_subscription_categories(category_ids: &[i64]) -> Result<(), String> {
    post_json::<_, serde_json::Value>(&endpoint("/subscriptions/update-categories"), &category_ids)
        .await
        .map(|_| ())
        .map_err(|e| fail("update categories", &e, "Unable to update categories"))
}

/// Check how a returning checkout session ended.
///
/// # Errors
///
/// Returns a display message if the call fails.
pub async fn verify_checkout_session(session_id: &str) -> Result<CheckoutVerification, String> {
    let path = verify_session_path(session_id).map_err(|e| fail("verify checkout session", &e, "Unable to verify the checkout session"))?;
    get_json(&endpoint(&path))
        .await
        .map_err(|e| fail("verify checkout session", &e, "Unable to verify the checkout session"))
}

// =============================================================================
// SHIPMENTS
// =============================================================================

/// # Errors
///
/// Returns a display message if the call fails.
pub async fn fetch_my_shipments() -> Result<Vec<Shipment>, String> {
    get_json(&endpoint("/shipments/my"))
        .await
        .map_err(|e| fail("fetch shipments", &e, "Unable to load shipment history"))
}

/// # Errors
///
/// Returns a display message if the call fails.
pub async fn fetch_shipment(shipment_id: i64) -> Result<Shipment, String> {
    get_json(&endpoint(&shipment_path(shipment_id)))
        .await
        .map_err(|e| fail("fetch shipment", &e, "Unable to load shipment details"))
}

// =============================================================================
// USERS
// =============================================================================

/// # Errors
///
/// Returns a display message if the call fails.
pub async fn fetch_profile() -> Result<User, String> {
    get_json(&endpoint("/users/me"))
        .await
        .map_err(|e| fail("fetch profile", &e, "Unable to load your profile"))
}

/// # Errors
///
/// Returns a display message if the call fails.
pub async fn update_profile(update: &ProfileUpdate) -> Result<User, String> {
    put_json(&endpoint("/users/me"), update)
        .await
        .map_err(|e| fail("update profile", &e, "Unable to update your profile"))
}

/// # Errors
///
/// Returns a display message if the call fails.
pub async fn fetch_referral_code() -> Result<String, String> {
    get_json::<ReferralCode>(&endpoint("/users/referral-code"))
        .await
        .map(|body| body.referral_code)
        .map_err(|e| fail("fetch referral code", &e, "Unable to load your referral code"))
}
