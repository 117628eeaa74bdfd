//! Renders the toast queue and expires each toast after its duration.
//!
//! DESIGN
//! ======
//! Each toast schedules its own removal when first rendered, keyed by id, so
//! toasts pushed in quick succession expire independently. Clicking a toast
//! dismisses it early; a later timer for the same id is then a no-op.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            <For each=move || toasts.get().items key=|toast| toast.id let:toast>
                <ToastItem toast toasts/>
            </For>
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: RwSignal<ToastState>) -> impl IntoView {
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    {
        let duration = toast.duration_ms;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duration).await;
            toasts.update(|t| t.remove(id));
        });
    }

    view! {
        <div
            class=format!("toast toast--{}", toast.kind.css_suffix())
            role="alert"
            on:click=move |_| toasts.update(|t| t.remove(id))
        >
            <span class="toast__message">{toast.message}</span>
            <button class="toast__close" aria-label="Dismiss">
                "✕"
            </button>
        </div>
    }
}
