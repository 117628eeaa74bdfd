//! Fallback screen for render errors caught by the root `ErrorBoundary`.

use leptos::prelude::*;

#[component]
pub fn ErrorScreen(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let messages = move || {
        errors
            .get()
            .into_iter()
            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="error-screen">
            <h1>"Something went wrong"</h1>
            <p>"An unexpected error occurred while rendering this page."</p>
            <ul class="error-screen__details">{messages}</ul>
            <div class="error-screen__actions">
                <a class="btn btn--primary" href="/">
                    "Back to home"
                </a>
            </div>
        </div>
    }
}
