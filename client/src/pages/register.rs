//! Account registration page.
//!
//! A successful registration signs the visitor straight in. A `?ref=` query
//! parameter pre-fills the referral code so invite links work.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::RegisterRequest;
use crate::pages::login::field_error;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::auth::install_authed_redirect;
use crate::util::validation::{FieldErrors, RegisterForm};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let form = RwSignal::new(RegisterForm {
        referral_code: query.with_untracked(|q| q.get("ref")).unwrap_or_default(),
        ..RegisterForm::default()
    });
    let errors = RwSignal::new(FieldErrors::new());
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    install_authed_redirect(auth, busy, "/dashboard", navigate.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current = form.get();
        let found = current.validate();
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }
        let request = RegisterRequest {
            email: current.email.trim().to_owned(),
            full_name: current.full_name.trim().to_owned(),
            password: current.password.clone(),
            referred_by: current.referral(),
        };
        busy.set(true);
        message.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::state::auth::register(auth, request).await {
                    Ok(_) => {
                        toasts.update(|t| {
                            t.success("Registration complete. Welcome to Cookieflix!");
                        });
                        navigate("/dashboard", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        toasts.update(|t| {
                            t.error(e.clone());
                        });
                        message.set(Some(e));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &navigate, toasts);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>"Create your account"</h1>
                <p class="auth-card__subtitle">"Join Cookieflix and start voting on next month's designs"</p>
                <form class="auth-form" on:submit=on_submit novalidate>
                    <label class="field">
                        <span class="field__label">"Full name"</span>
                        <input
                            class="field__input"
                            type="text"
                            autocomplete="name"
                            prop:value=move || form.with(|f| f.full_name.clone())
                            on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                        />
                        <span class="field__error">{field_error(errors, "full_name")}</span>
                    </label>
                    <label class="field">
                        <span class="field__label">"Email"</span>
                        <input
                            class="field__input"
                            type="email"
                            autocomplete="email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                        <span class="field__error">{field_error(errors, "email")}</span>
                    </label>
                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <input
                            class="field__input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                        <span class="field__hint">
                            "At least 8 characters with upper and lower case letters, a number and a symbol."
                        </span>
                        <span class="field__error">{field_error(errors, "password")}</span>
                    </label>
                    <label class="field">
                        <span class="field__label">"Confirm password"</span>
                        <input
                            class="field__input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || form.with(|f| f.confirm_password.clone())
                            on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                        />
                        <span class="field__error">{field_error(errors, "confirm_password")}</span>
                    </label>
                    <label class="field">
                        <span class="field__label">"Referral code (optional)"</span>
                        <input
                            class="field__input"
                            type="text"
                            placeholder="Have a referral code?"
                            prop:value=move || form.with(|f| f.referral_code.clone())
                            on:input=move |ev| form.update(|f| f.referral_code = event_target_value(&ev))
                        />
                    </label>
                    <label class="field field--checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.accept_terms)
                            on:change=move |ev| form.update(|f| f.accept_terms = event_target_checked(&ev))
                        />
                        <span>"I accept the terms of service and the privacy policy"</span>
                        <span class="field__error">{field_error(errors, "accept_terms")}</span>
                    </label>
                    <Show when=move || message.get().is_some()>
                        <p class="auth-form__error">{move || message.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already registered? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
