//! Member dashboard: subscription status, this month's picks, recent votes.
//!
//! SYSTEM CONTEXT
//! ==============
//! First authenticated landing route. Subscription, designs and the user's
//! votes are fetched together; a failed fetch degrades to an empty section
//! instead of blocking the page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::loader::Loader;
use crate::net::types::{ActiveSubscription, Design};
use crate::state::auth::AuthState;
use crate::state::subscription::{monthly_picks, recent_votes};
use crate::util::format::format_date;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let loading = RwSignal::new(true);
    let subscription = RwSignal::new(None::<ActiveSubscription>);
    let picks = RwSignal::new(Vec::<Design>::new());
    let votes = RwSignal::new(Vec::<Design>::new());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api;

        let (sub, designs, voted) =
            futures::join!(api::fetch_active_subscription(), api::fetch_designs(None), api::fetch_user_votes(None));
        let sub = sub.unwrap_or_else(|e| {
            log::warn!("dashboard subscription: {e}");
            None
        });
        let designs = designs.unwrap_or_default();
        picks.set(monthly_picks(&designs, sub.as_ref()));
        votes.set(recent_votes(voted.unwrap_or_default()));
        subscription.set(sub);
        loading.set(false);
    });

    let has_subscription = move || subscription.with(|s| s.as_ref().is_some_and(|s| s.is_active));

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <Loader/> }>
            <div class="page dashboard">
                <h1 class="page__title">"Dashboard"</h1>

                <section class="panel">
                    <h2>{move || format!("Welcome, {}", auth.get().display_name())}</h2>
                    <div class="dashboard__status">
                        <span class="status-dot" class:status-dot--on=has_subscription></span>
                        <Show
                            when=has_subscription
                            fallback=|| {
                                view! {
                                    <span>"No active subscription"</span>
                                    <A href="/subscription" attr:class="link">
                                        "Subscribe now"
                                    </A>
                                }
                                    .into_any()
                            }
                        >
                            <span>
                                {move || {
                                    subscription
                                        .get()
                                        .map(|s| {
                                            format!(
                                                "{} plan, billed {}. Next billing: {}",
                                                s.plan.name,
                                                s.billing_period.label().to_lowercase(),
                                                format_date(s.next_billing_date.as_deref()),
                                            )
                                        })
                                        .unwrap_or_default()
                                }}
                            </span>
                            <A href="/category-selection" attr:class="link">
                                "Choose categories"
                            </A>
                        </Show>
                    </div>
                    <A href="/profile" attr:class="link dashboard__profile-link">
                        "Manage your profile →"
                    </A>
                </section>

                <section class="panel">
                    <div class="panel__header">
                        <h2>"This month's cutters"</h2>
                        <A href="/catalog" attr:class="link">
                            "Explore the catalog"
                        </A>
                    </div>
                    <Show
                        when=move || !picks.get().is_empty()
                        fallback=move || {
                            view! {
                                <p class="panel__empty">
                                    {move || {
                                        if has_subscription() {
                                            "No designs available yet. Check back soon."
                                        } else {
                                            "Subscribe to see the cutters shipping this month."
                                        }
                                    }}
                                </p>
                            }
                        }
                    >
                        <div class="design-grid">
                            <For each=move || picks.get() key=|d| d.id let:design>
                                <article class="design-card design-card--static">
                                    <img class="design-card__image" src=design.image_url.clone() alt=design.name.clone()/>
                                    <div class="design-card__body">
                                        <h3 class="design-card__name">{design.name.clone()}</h3>
                                        <span class="design-card__votes">{format!("♥ {}", design.votes())}</span>
                                    </div>
                                </article>
                            </For>
                        </div>
                    </Show>
                </section>

                <section class="panel">
                    <h2>"Your votes"</h2>
                    <Show
                        when=move || !votes.get().is_empty()
                        fallback=|| {
                            view! {
                                <p class="panel__empty">
                                    "You have not voted yet. "
                                    <A href="/catalog" attr:class="link">
                                        "Vote for your favourites"
                                    </A>
                                </p>
                            }
                                .into_any()
                        }
                    >
                        <ul class="vote-list">
                            <For each=move || votes.get() key=|d| d.id let:design>
                                <li class="vote-list__item">
                                    <img src=design.image_url.clone() alt=design.name.clone()/>
                                    <span>{design.name.clone()}</span>
                                </li>
                            </For>
                        </ul>
                    </Show>
                </section>
            </div>
        </Show>
    }
}
