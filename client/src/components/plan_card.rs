//! Subscription plan card with price for the chosen billing period.

use leptos::prelude::*;

use crate::net::types::{BillingPeriod, SubscriptionPlan};
use crate::util::pricing::{discount_percent, format_price, monthly_equivalent, price_for};

#[component]
pub fn PlanCard(
    plan: SubscriptionPlan,
    #[prop(into)] period: Signal<BillingPeriod>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(optional)] current: bool,
    on_choose: Callback<SubscriptionPlan>,
) -> impl IntoView {
    let popular = plan.is_popular;
    let pricing_plan = plan.clone();
    let total = {
        let plan = pricing_plan.clone();
        move || format_price(price_for(&plan, period.get()))
    };
    let per_month = {
        let plan = pricing_plan.clone();
        move || format!("{} / month", format_price(monthly_equivalent(&plan, period.get())))
    };
    let discount = Memo::new(move |_| discount_percent(&pricing_plan, period.get()));
    let features = plan
        .features
        .iter()
        .map(|f| view! { <li>{f.clone()}</li> })
        .collect::<Vec<_>>();
    let chosen = plan.clone();

    view! {
        <article class="plan-card" class:plan-card--popular=popular class:plan-card--current=current>
            <Show when=move || popular>
                <span class="plan-card__ribbon">"Most popular"</span>
            </Show>
            <h3 class="plan-card__name">{plan.name.clone()}</h3>
            <p class="plan-card__description">{plan.description.clone()}</p>
            <p class="plan-card__price">{total}</p>
            <p class="plan-card__monthly">{per_month}</p>
            <Show when=move || { discount.get() > 0 }>
                <span class="badge badge--success">{move || format!("Save {}%", discount.get())}</span>
            </Show>
            <ul class="plan-card__facts">
                <li>{format!("{} categories", plan.categories_count)}</li>
                <li>{format!("{} cutters per month", plan.items_per_month)}</li>
            </ul>
            <ul class="plan-card__features">{features}</ul>
            <button
                class="btn btn--primary plan-card__cta"
                disabled=move || current || busy.get()
                on:click=move |_| on_choose.run(chosen.clone())
            >
                {if current { "Current plan" } else { "Choose plan" }}
            </button>
        </article>
    }
}
