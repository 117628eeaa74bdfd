//! Public landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Categories and plans come from the public catalog endpoints so the page
//! always shows what is actually on sale. Failures leave the sections empty;
//! the marketing copy still renders.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::{BillingPeriod, Category, SubscriptionPlan};
use crate::state::auth::AuthState;
use crate::util::pricing::{format_price, price_for};

/// Number of categories featured on the landing page.
const FEATURED_CATEGORIES: usize = 4;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let categories = RwSignal::new(Vec::<Category>::new());
    let plans = RwSignal::new(Vec::<SubscriptionPlan>::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let (fetched_categories, fetched_plans) =
            futures::join!(crate::net::api::fetch_categories(), crate::net::api::fetch_plans());
        match fetched_categories {
            Ok(list) => categories.set(list.into_iter().take(FEATURED_CATEGORIES).collect()),
            Err(e) => log::warn!("home categories: {e}"),
        }
        match fetched_plans {
            Ok(list) => plans.set(list),
            Err(e) => log::warn!("home plans: {e}"),
        }
    });

    let cta_href = move || if auth.get().is_authenticated() { "/subscription" } else { "/register" };

    view! {
        <div class="page home">
            <section class="hero">
                <h1 class="hero__title">"Cookie cutters that surprise you every month"</h1>
                <p class="hero__subtitle">
                    "Pick the themes you love, vote on the next designs, and receive fresh 3D-printed cutters at your door."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary btn--large" href=cta_href>
                        "Get started"
                    </a>
                    <A href="/subscription" attr:class="btn btn--large">
                        "See plans"
                    </A>
                </div>
            </section>

            <section class="home__steps">
                <h2>"How it works"</h2>
                <ol class="steps">
                    <li class="steps__item">
                        <strong>"Choose a plan"</strong>
                        <span>"Monthly, quarterly, semiannual or annual billing."</span>
                    </li>
                    <li class="steps__item">
                        <strong>"Pick your categories"</strong>
                        <span>"Films, games, holidays, animals and more."</span>
                    </li>
                    <li class="steps__item">
                        <strong>"Vote on designs"</strong>
                        <span>"The most voted designs ship next month."</span>
                    </li>
                </ol>
            </section>

            <Show when=move || !categories.get().is_empty()>
                <section class="home__categories">
                    <h2>"Popular categories"</h2>
                    <div class="category-grid">
                        <For each=move || categories.get() key=|c| c.id let:category>
                            <article class="category-tile">
                                {category
                                    .image_url
                                    .clone()
                                    .map(|src| view! { <img class="category-tile__image" src=src alt=category.name.clone()/> })}
                                <h3>{category.name.clone()}</h3>
                                <p>{category.description.clone()}</p>
                            </article>
                        </For>
                    </div>
                </section>
            </Show>

            <Show when=move || !plans.get().is_empty()>
                <section class="home__plans">
                    <h2>"Plans"</h2>
                    <div class="plan-summary">
                        <For each=move || plans.get() key=|p| p.id let:plan>
                            <div class="plan-summary__item" class:plan-summary__item--popular=plan.is_popular>
                                <h3>{plan.name.clone()}</h3>
                                <p class="plan-summary__price">
                                    {format!("{} / month", format_price(price_for(&plan, BillingPeriod::Monthly)))}
                                </p>
                                <p>{format!("{} cutters per month", plan.items_per_month)}</p>
                            </div>
                        </For>
                    </div>
                    <A href="/subscription" attr:class="btn btn--primary">
                        "Compare plans"
                    </A>
                </section>
            </Show>
        </div>
    }
}
