//! Route guard for pages that need a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Auth hydration is asynchronous. While it runs the guard shows a loader;
//! once settled without a user it replaces the route with `/login`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loader::Loader;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <Loader label=if auth.get().loading { "Loading..." } else { "Redirecting to login..." }/>
                }
            }
        >
            {children()}
        </Show>
    }
}
