//! Loading spinner.

use leptos::prelude::*;

/// Centered spinner with an optional caption.
#[component]
pub fn Loader(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="loader" role="status">
            <span class="loader__spinner" aria-hidden="true"></span>
            <span class="loader__label">{label.unwrap_or_else(|| "Loading...".to_owned())}</span>
        </div>
    }
}
