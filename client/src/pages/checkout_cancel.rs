//! Landing page when the visitor abandons the payment processor.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn CheckoutCancelPage() -> impl IntoView {
    view! {
        <div class="page page--centered">
            <div class="status-card status-card--warning">
                <h1>"Payment cancelled"</h1>
                <p>"Your payment was cancelled and you have not been charged."</p>
                <p>"You can pick a plan again whenever you are ready."</p>
                <div class="status-card__actions">
                    <A href="/subscription" attr:class="btn btn--primary">
                        "Back to plans"
                    </A>
                    <A href="/" attr:class="btn">
                        "Home"
                    </A>
                </div>
            </div>
        </div>
    }
}
