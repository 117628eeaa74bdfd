//! Email + password sign-in page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::auth::install_authed_redirect;
use crate::util::validation::{FieldErrors, LoginForm};

const DEFAULT_AFTER_LOGIN: &str = "/dashboard";

/// Where to go after signing in. Only same-site absolute paths are honored.
fn redirect_target(raw: Option<String>) -> String {
    match raw {
        Some(path) if is_same_site_path(&path) => path,
        _ => DEFAULT_AFTER_LOGIN.to_owned(),
    }
}

// Browsers read `\` as `/` in http(s) URLs, so `/\host` is protocol-relative.
fn is_same_site_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains('\\')
        && !path.chars().any(char::is_control)
}

/// Login URL that returns to `return_to` after signing in.
pub(crate) fn login_href(return_to: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("redirect", return_to)
        .finish();
    format!("/login?{query}")
}

/// Inline error text for one form field.
pub(crate) fn field_error(errors: RwSignal<FieldErrors>, field: &'static str) -> impl Fn() -> Option<String> + Copy {
    move || errors.with(|e| e.get(field).cloned())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let message = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Visitors who already have a session skip the form.
    install_authed_redirect(auth, busy, DEFAULT_AFTER_LOGIN, navigate.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = LoginForm { email: email.get().trim().to_owned(), password: password.get() };
        let found = form.validate();
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }
        busy.set(true);
        message.set(None);
        let target = redirect_target(query.with_untracked(|q| q.get("redirect")));

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::state::auth::login(auth, form.email, form.password).await {
                    Ok(user) => {
                        toasts.update(|t| {
                            t.success(format!("Welcome back, {}!", user.full_name));
                        });
                        navigate(&target, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        message.set(Some(e));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (target, &navigate, toasts);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <p class="auth-card__subtitle">"Welcome back to Cookieflix"</p>
                <form class="auth-form" on:submit=on_submit novalidate>
                    <label class="field">
                        <span class="field__label">"Email"</span>
                        <input
                            class="field__input"
                            type="email"
                            autocomplete="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <span class="field__error">{field_error(errors, "email")}</span>
                    </label>
                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <input
                            class="field__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <span class="field__error">{field_error(errors, "password")}</span>
                    </label>
                    <Show when=move || message.get().is_some()>
                        <p class="auth-form__error">{move || message.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "No account yet? "
                    <A href="/register">"Create one"</A>
                </p>
            </div>
        </div>
    }
}
