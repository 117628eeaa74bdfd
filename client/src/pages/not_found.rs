//! Fallback page for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <h1 class="page__title">"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            <A href="/" attr:class="btn btn--primary">
                "Back to home"
            </A>
        </div>
    }
}
