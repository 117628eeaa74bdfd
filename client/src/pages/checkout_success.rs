//! Return page after the payment processor redirects back.
//!
//! Verification waits for auth hydration so the outcome can tell a paid but
//! signed-out visitor to sign in instead of reporting a failure.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::components::loader::Loader;
use crate::state::auth::AuthState;
use crate::state::subscription::CheckoutOutcome;

#[component]
pub fn CheckoutSuccessPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let outcome = RwSignal::new(CheckoutOutcome::Verifying);
    let started = RwSignal::new(false);

    Effect::new(move || {
        let state = auth.get();
        if state.loading || started.get_untracked() {
            return;
        }
        started.set(true);
        let authenticated = state.is_authenticated();
        let session_id = query.with_untracked(|q| q.get("session_id")).filter(|s| !s.trim().is_empty());
        let Some(session_id) = session_id else {
            outcome.set(CheckoutOutcome::missing_session());
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let next = match crate::net::api::verify_checkout_session(&session_id).await {
                Ok(result) => CheckoutOutcome::from_verification(result, authenticated),
                Err(e) => {
                    log::warn!("checkout verification: {e}");
                    CheckoutOutcome::request_failed()
                }
            };
            outcome.set(next);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (session_id, authenticated);
    });

    view! {
        <div class="page page--centered">
            {move || match outcome.get() {
                CheckoutOutcome::Verifying => view! { <Loader label="Verifying your payment..."/> }.into_any(),
                CheckoutOutcome::Success(message) => {
                    view! {
                        <div class="status-card status-card--success">
                            <h1>"Payment complete"</h1>
                            <p>{message}</p>
                            <div class="status-card__actions">
                                <A href="/category-selection" attr:class="btn btn--primary">
                                    "Choose your categories"
                                </A>
                                <A href="/dashboard" attr:class="btn">
                                    "Go to dashboard"
                                </A>
                            </div>
                        </div>
                    }
                        .into_any()
                }
                CheckoutOutcome::RequiresLogin(message) => {
                    view! {
                        <div class="status-card status-card--success">
                            <h1>"Payment complete"</h1>
                            <p>{message}</p>
                            <A href="/login" attr:class="btn btn--primary">
                                "Sign in"
                            </A>
                        </div>
                    }
                        .into_any()
                }
                CheckoutOutcome::Pending(message) => {
                    view! {
                        <div class="status-card status-card--warning">
                            <h1>"Payment processing"</h1>
                            <p>{message}</p>
                            <A href="/dashboard" attr:class="btn">
                                "Go to dashboard"
                            </A>
                        </div>
                    }
                        .into_any()
                }
                CheckoutOutcome::Failed(message) => {
                    view! {
                        <div class="status-card status-card--error">
                            <h1>"Payment not confirmed"</h1>
                            <p>{message}</p>
                            <A href="/subscription" attr:class="btn btn--primary">
                                "Back to plans"
                            </A>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
