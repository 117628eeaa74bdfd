//! Site footer.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::APP_VERSION;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">
                <strong>"Cookieflix"</strong>
                <p>"New 3D-printed cookie cutters every month, chosen by the community."</p>
            </div>
            <nav class="footer__links">
                <A href="/subscription">"Plans"</A>
                <A href="/catalog">"Catalog"</A>
                <A href="/profile">"Account"</A>
            </nav>
            <p class="footer__meta">{format!("Cookieflix v{APP_VERSION}")}</p>
        </footer>
    }
}
