//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::error_screen::ErrorScreen;
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::protected_route::ProtectedRoute;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    catalog::CatalogPage, category_selection::CategorySelectionPage, checkout_cancel::CheckoutCancelPage,
    checkout_success::CheckoutSuccessPage, dashboard::DashboardPage, home::HomePage, login::LoginPage,
    not_found::NotFoundPage, profile::ProfilePage, register::RegisterPage, subscription::SubscriptionPage,
};
use crate::state::{auth::AuthState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and toast contexts, restores the stored session, and
/// sets up client-side routing inside the shared page layout.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(toasts);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::state::auth::init(auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/cookieflix.css"/>
        <Title text="Cookieflix"/>

        <Router>
            <div class="layout">
                <Navbar/>
                <main class="layout__main">
                    <ErrorBoundary fallback=|errors| view! { <ErrorScreen errors/> }>
                        <Routes fallback=NotFoundPage>
                            <Route path=StaticSegment("") view=HomePage/>
                            <Route path=StaticSegment("login") view=LoginPage/>
                            <Route path=StaticSegment("register") view=RegisterPage/>
                            <Route
                                path=StaticSegment("dashboard")
                                view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                            />
                            <Route
                                path=StaticSegment("catalog")
                                view=|| view! { <ProtectedRoute><CatalogPage/></ProtectedRoute> }
                            />
                            <Route path=StaticSegment("subscription") view=SubscriptionPage/>
                            <Route
                                path=StaticSegment("profile")
                                view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }
                            />
                            <Route path=(StaticSegment("checkout"), StaticSegment("success")) view=CheckoutSuccessPage/>
                            <Route path=(StaticSegment("checkout"), StaticSegment("cancel")) view=CheckoutCancelPage/>
                            <Route
                                path=StaticSegment("category-selection")
                                view=|| view! { <ProtectedRoute><CategorySelectionPage/></ProtectedRoute> }
                            />
                        </Routes>
                    </ErrorBoundary>
                </main>
                <Footer/>
            </div>
            <ToastHost/>
        </Router>
    }
}
