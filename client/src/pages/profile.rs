//! Account page: name edit, referral code, subscription and shipments.
//!
//! SYSTEM CONTEXT
//! ==============
//! Subscription, referral code and shipments load in parallel; each section
//! degrades on its own. A saved name is re-read from the backend into the
//! auth context so the navbar and dashboard pick it up.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::loader::Loader;
use crate::components::shipment_history::ShipmentHistory;
use crate::net::types::{ActiveSubscription, ProfileUpdate, Shipment};
use crate::pages::login::field_error;
use crate::state::auth::{self, AuthState};
use crate::state::toast::ToastState;
use crate::util::format::format_date;
use crate::util::pricing::{format_price, price_for};
use crate::util::validation::{FieldErrors, validate_full_name};

/// Invite link carrying the user's referral code.
fn referral_link(origin: &str, code: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new()).append_pair("ref", code).finish();
    format!("{}/register?{query}", origin.trim_end_matches('/'))
}

/// One-line summary of the plan and what it costs per cycle.
fn subscription_summary(sub: &ActiveSubscription) -> String {
    format!(
        "{} plan, {} billing at {}",
        sub.plan.name,
        sub.billing_period.label().to_lowercase(),
        format_price(price_for(&sub.plan, sub.billing_period)),
    )
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let loading = RwSignal::new(true);
    let subscription = RwSignal::new(None::<ActiveSubscription>);
    let shipments = RwSignal::new(Vec::<Shipment>::new());
    let referral_code = RwSignal::new(None::<String>);
    let editing = RwSignal::new(false);
    let name_input = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let saving = RwSignal::new(false);
    let confirm_logout = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api;

        let (sub, code, list) =
            futures::join!(api::fetch_active_subscription(), api::fetch_referral_code(), api::fetch_my_shipments());
        match sub {
            Ok(sub) => subscription.set(sub),
            Err(e) => log::warn!("profile subscription: {e}"),
        }
        match code {
            Ok(code) => referral_code.set(Some(code)),
            Err(e) => log::warn!("profile referral code: {e}"),
        }
        match list {
            Ok(list) => shipments.set(list),
            Err(e) => log::warn!("profile shipments: {e}"),
        }
        loading.set(false);
    });

    let user_field = move |f: fn(&crate::net::types::User) -> String| {
        auth.with(|a| a.user.as_ref().map(f).unwrap_or_default())
    };

    let on_edit = move |_| {
        name_input.set(user_field(|u| u.full_name.clone()));
        errors.set(FieldErrors::new());
        editing.set(true);
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let full_name = name_input.get().trim().to_owned();
        let found = validate_full_name(&full_name);
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }
        saving.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match crate::net::api::update_profile(&ProfileUpdate { full_name }).await {
                Ok(_) => auth::refresh_user(auth).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {
                    editing.set(false);
                    toasts.update(|t| {
                        t.success("Profile updated");
                    });
                }
                Err(e) => {
                    toasts.update(|t| {
                        t.error(e);
                    });
                }
            }
            saving.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = ProfileUpdate { full_name };
    };

    let on_logout = move |_| {
        auth::logout(auth);
        confirm_logout.set(false);
        toasts.update(|t| {
            t.info("You have been signed out");
        });
        navigate("/", NavigateOptions::default());
    };

    let invite_link = move || {
        let code = referral_code.get()?;
        #[cfg(feature = "hydrate")]
        let origin = web_sys::window().and_then(|w| w.location().origin().ok()).unwrap_or_default();
        #[cfg(not(feature = "hydrate"))]
        let origin = String::new();
        Some(referral_link(&origin, &code))
    };

    view! {
        <div class="page profile">
            <h1 class="page__title">"Your profile"</h1>

            <section class="panel">
                <div class="panel__header">
                    <h2>"Personal details"</h2>
                    <Show when=move || !editing.get()>
                        <button class="btn" on:click=on_edit>
                            "Edit"
                        </button>
                    </Show>
                </div>
                <Show
                    when=move || editing.get()
                    fallback=move || {
                        view! {
                            <dl class="details">
                                <dt>"Name"</dt>
                                <dd>{move || user_field(|u| u.full_name.clone())}</dd>
                                <dt>"Email"</dt>
                                <dd>{move || user_field(|u| u.email.clone())}</dd>
                                <dt>"Member since"</dt>
                                <dd>{move || user_field(|u| format_date(u.created_at.as_deref()))}</dd>
                                <dt>"Credit"</dt>
                                <dd>{move || user_field(|u| format_price(u.credit_balance))}</dd>
                            </dl>
                        }
                    }
                >
                    <form class="profile__form" on:submit=on_save>
                        <label class="field">
                            <span class="field__label">"Full name"</span>
                            <input
                                class="field__input"
                                type="text"
                                prop:value=move || name_input.get()
                                on:input=move |ev| name_input.set(event_target_value(&ev))
                            />
                            <span class="field__error">{field_error(errors, "full_name")}</span>
                        </label>
                        <div class="profile__form-actions">
                            <button class="btn" type="button" on:click=move |_| editing.set(false)>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </form>
                </Show>
            </section>

            <Show when=move || !loading.get() fallback=|| view! { <Loader/> }>
                <section class="panel">
                    <h2>"Subscription"</h2>
                    {move || match subscription.get() {
                        Some(sub) if sub.is_active => {
                            view! {
                                <p>{subscription_summary(&sub)}</p>
                                <dl class="details">
                                    <dt>"Started"</dt>
                                    <dd>{format_date(Some(&sub.start_date))}</dd>
                                    <dt>"Next billing"</dt>
                                    <dd>{format_date(sub.next_billing_date.as_deref())}</dd>
                                    <dt>"Categories"</dt>
                                    <dd>{format!("up to {}", sub.plan.categories_count)}</dd>
                                </dl>
                                <div class="panel__actions">
                                    <A href="/category-selection" attr:class="btn">
                                        "Change categories"
                                    </A>
                                    <A href="/subscription" attr:class="btn">
                                        "Change plan"
                                    </A>
                                </div>
                            }
                                .into_any()
                        }
                        _ => {
                            view! {
                                <p>"You do not have an active subscription."</p>
                                <A href="/subscription" attr:class="btn btn--primary">
                                    "See plans"
                                </A>
                            }
                                .into_any()
                        }
                    }}
                </section>

                <section class="panel">
                    <h2>"Invite friends"</h2>
                    {move || match referral_code.get() {
                        Some(code) => {
                            view! {
                                <p>"Share your code and earn credit when friends subscribe."</p>
                                <p class="referral__code">{code}</p>
                                <p class="referral__link">{invite_link}</p>
                            }
                                .into_any()
                        }
                        None => view! { <p class="panel__empty">"Referral code unavailable."</p> }.into_any(),
                    }}
                </section>

                <section class="panel">
                    <h2>"Shipments"</h2>
                    {move || view! { <ShipmentHistory shipments=shipments.get()/> }}
                </section>
            </Show>

            <section class="panel panel--danger">
                <button class="btn btn--danger" on:click=move |_| confirm_logout.set(true)>
                    "Log out"
                </button>
            </section>

            <Show when=move || confirm_logout.get()>
                <div class="dialog-backdrop" on:click=move |_| confirm_logout.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Log out?"</h2>
                        <p>"You will need to sign in again to vote or manage your subscription."</p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| confirm_logout.set(false)>
                                "Cancel"
                            </button>
                            <button class="btn btn--danger" on:click=on_logout.clone()>
                                "Log out"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
