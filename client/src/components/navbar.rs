//! Top navigation bar shared by every route.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{self, AuthState};
use crate::state::toast::ToastState;

/// Brand, primary links, and the account actions for the current visitor.
///
/// Signed-in visitors see the dashboard, catalog and profile links plus a
/// logout button; everyone else sees login and register.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let signed_in = move || auth.get().is_authenticated();
    let close_menu = move |_| menu_open.set(false);

    let on_logout = move |_| {
        auth::logout(auth);
        toasts.update(|t| {
            t.info("You have been signed out");
        });
        menu_open.set(false);
        navigate("/", NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">
                "Cookieflix"
            </A>
            <button
                class="navbar__toggle"
                aria-label="Toggle navigation"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>
            <div class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                <A href="/" on:click=close_menu>"Home"</A>
                <A href="/subscription" on:click=close_menu>"Plans"</A>
                <Show when=signed_in>
                    <A href="/dashboard" on:click=close_menu>"Dashboard"</A>
                    <A href="/catalog" on:click=close_menu>"Catalog"</A>
                </Show>
                <span class="navbar__spacer"></span>
                <Show
                    when=signed_in
                    fallback=move || {
                        view! {
                            <A href="/login" on:click=close_menu>"Sign in"</A>
                            <A href="/register" attr:class="btn btn--primary" on:click=close_menu>
                                "Sign up"
                            </A>
                        }
                    }
                >
                    <A href="/profile" on:click=close_menu>
                        {move || auth.get().display_name()}
                    </A>
                    <button class="btn btn--primary" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
