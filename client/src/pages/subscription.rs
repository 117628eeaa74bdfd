//! Plan comparison and checkout hand-off.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route: anyone can compare plans, but choosing one requires a
//! session. With an active subscription the visitor confirms first, since
//! checking out again replaces the current plan. Payment itself happens on
//! the processor's hosted page; this page only obtains its URL.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loader::Loader;
use crate::components::plan_card::PlanCard;
use crate::net::types::{ActiveSubscription, BillingPeriod, CheckoutRequest, SubscriptionPlan};
use crate::pages::login::login_href;
use crate::state::auth::AuthState;
use crate::state::subscription::{PlanAction, plan_action};
use crate::state::toast::ToastState;
use crate::util::pricing::{discount_percent, format_price, price_for};

/// Label for a billing period tab, with the best discount any plan offers.
fn period_tab_label(period: BillingPeriod, plans: &[SubscriptionPlan]) -> String {
    let best = plans.iter().map(|p| discount_percent(p, period)).max().unwrap_or(0);
    if best > 0 { format!("{} (up to -{best}%)", period.label()) } else { period.label().to_owned() }
}

fn is_current_plan(plan: &SubscriptionPlan, current: Option<&ActiveSubscription>) -> bool {
    current.is_some_and(|s| s.is_active && s.plan.id == plan.id)
}

#[component]
pub fn SubscriptionPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let plans = RwSignal::new(Vec::<SubscriptionPlan>::new());
    let loading = RwSignal::new(true);
    let period = RwSignal::new(BillingPeriod::Monthly);
    let current = RwSignal::new(None::<ActiveSubscription>);
    let pending = RwSignal::new(None::<SubscriptionPlan>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_plans().await {
            Ok(list) => plans.set(list.into_iter().filter(|p| p.is_active).collect()),
            Err(e) => {
                toasts.update(|t| {
                    t.error(e);
                });
            }
        }
        loading.set(false);
    });

    // The active subscription can only be read once the session is known.
    let subscription_requested = RwSignal::new(false);
    Effect::new(move || {
        let state = auth.get();
        if state.loading || !state.is_authenticated() || subscription_requested.get_untracked() {
            return;
        }
        subscription_requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_active_subscription().await {
                Ok(sub) => current.set(sub),
                Err(e) => log::warn!("active subscription: {e}"),
            }
        });
    });

    let start_checkout = Callback::new(move |plan: SubscriptionPlan| {
        let request = CheckoutRequest { plan_slug: plan.slug, billing_period: period.get_untracked() };
        busy.set(true);
        pending.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_checkout_session(&request).await {
                Ok(session) => crate::util::session::redirect_external(&session.checkout_url),
                Err(e) => {
                    toasts.update(|t| {
                        t.error(e);
                    });
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    });

    let on_choose = Callback::new(move |plan: SubscriptionPlan| {
        let action = plan_action(auth.get_untracked().is_authenticated(), current.get_untracked().as_ref());
        match action {
            PlanAction::RequireLogin => {
                toasts.update(|t| {
                    t.info("Sign in to subscribe to a plan");
                });
                navigate(&login_href("/subscription"), NavigateOptions::default());
            }
            PlanAction::Confirm => pending.set(Some(plan)),
            PlanAction::Checkout => start_checkout.run(plan),
        }
    });

    view! {
        <div class="page subscription">
            <header class="page__header">
                <h1 class="page__title">"Choose your plan"</h1>
                <p>"Every plan ships new cutters monthly. Longer billing periods cost less per month."</p>
            </header>

            <div class="period-tabs" role="tablist">
                {BillingPeriod::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <button
                                class="period-tabs__tab"
                                role="tab"
                                class:period-tabs__tab--active=move || period.get() == option
                                aria-selected=move || (period.get() == option).to_string()
                                on:click=move |_| period.set(option)
                            >
                                {move || plans.with(|p| period_tab_label(option, p))}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <Show when=move || !loading.get() fallback=|| view! { <Loader label="Loading plans..."/> }>
                <Show
                    when=move || !plans.get().is_empty()
                    fallback=|| view! { <p class="panel__empty">"No plans are available right now."</p> }
                >
                    <div class="plan-grid">
                        {move || {
                            let active = current.get();
                            plans
                                .get()
                                .into_iter()
                                .map(|plan| {
                                    let is_current = is_current_plan(&plan, active.as_ref());
                                    view! { <PlanCard plan period busy current=is_current on_choose/> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>

            <Show when=move || pending.get().is_some()>
                <ConfirmChangeDialog pending current period on_confirm=start_checkout/>
            </Show>
        </div>
    }
}

/// Asks before replacing an active subscription with a new checkout.
#[component]
fn ConfirmChangeDialog(
    pending: RwSignal<Option<SubscriptionPlan>>,
    current: RwSignal<Option<ActiveSubscription>>,
    period: RwSignal<BillingPeriod>,
    on_confirm: Callback<SubscriptionPlan>,
) -> impl IntoView {
    let on_cancel = move |_| pending.set(None);
    let summary = move || {
        let Some(plan) = pending.get() else {
            return String::new();
        };
        let from = current.get().map_or_else(|| "your current plan".to_owned(), |s| format!("the {} plan", s.plan.name));
        let chosen = period.get();
        format!(
            "You are about to switch from {from} to the {} plan at {} ({}). The new plan starts after payment.",
            plan.name,
            format_price(price_for(&plan, chosen)),
            chosen.label().to_lowercase(),
        )
    };

    view! {
        <div class="dialog-backdrop" on:click=on_cancel>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Change plan?"</h2>
                <p>{summary}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=on_cancel>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| {
                            if let Some(plan) = pending.get_untracked() {
                                on_confirm.run(plan);
                            }
                        }
                    >
                        "Continue to payment"
                    </button>
                </div>
            </div>
        </div>
    }
}
