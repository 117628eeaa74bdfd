//! Preferred-category picker bounded by the plan's category allowance.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::loader::Loader;
use crate::net::types::{ActiveSubscription, Category};
use crate::state::subscription::CategorySelection;
use crate::state::toast::ToastState;

#[component]
pub fn CategorySelectionPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let loading = RwSignal::new(true);
    let categories = RwSignal::new(Vec::<Category>::new());
    let subscription = RwSignal::new(None::<ActiveSubscription>);
    let selection = RwSignal::new(CategorySelection::default());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api;

        let (fetched, sub) = futures::join!(api::fetch_categories(), api::fetch_active_subscription());
        match (fetched, sub) {
            (Ok(list), Ok(sub)) => {
                let limit = sub.as_ref().map_or(0, |s| s.plan.categories_count);
                selection.set(CategorySelection::new(limit, Vec::new()));
                categories.set(list.into_iter().filter(|c| c.is_active).collect());
                subscription.set(sub);
            }
            (Err(e), _) | (_, Err(e)) => {
                log::warn!("category selection: {e}");
                error.set(Some("Unable to load your data. Please try again later.".to_owned()));
            }
        }
        loading.set(false);
    });

    let on_toggle = move |id: i64| {
        let mut result = Ok(());
        selection.update(|s| result = s.toggle(id));
        error.set(result.err());
    };

    let on_submit = Callback::new(move |_: leptos::ev::MouseEvent| {
        if submitting.get() {
            return;
        }
        let ids = match selection.with_untracked(CategorySelection::submission) {
            Ok(ids) => ids,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        submitting.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_subscription_categories(&ids).await {
                    Ok(()) => {
                        toasts.update(|t| {
                            t.success("Categories updated!");
                        });
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(Some(e));
                        submitting.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ids, &navigate, toasts);
    });

    view! {
        <div class="page category-selection">
            <h1 class="page__title">"Choose your categories"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <Loader/> }>
                <Show
                    when=move || subscription.with(|s| s.as_ref().is_some_and(|s| s.is_active))
                    fallback=|| {
                        view! {
                            <div class="panel">
                                <p>"You need an active subscription to choose categories."</p>
                                <A href="/subscription" attr:class="btn btn--primary">
                                    "See plans"
                                </A>
                            </div>
                        }
                            .into_any()
                    }
                >
                    <p class="category-selection__hint">
                        {move || {
                            selection
                                .with(|s| {
                                    format!("Selected {} of {} categories allowed by your plan.", s.selected.len(), s.limit)
                                })
                        }}
                    </p>
                    <div class="category-grid">
                        <For each=move || categories.get() key=|c| c.id let:category>
                            {
                                let id = category.id;
                                view! {
                                    <button
                                        class="category-tile category-tile--selectable"
                                        class:category-tile--selected=move || selection.with(|s| s.contains(id))
                                        aria-pressed=move || selection.with(|s| s.contains(id)).to_string()
                                        on:click=move |_| on_toggle(id)
                                    >
                                        {category
                                            .image_url
                                            .clone()
                                            .map(|src| view! { <img class="category-tile__image" src=src alt=""/> })}
                                        <h3>{category.name.clone()}</h3>
                                        <p>{category.description.clone()}</p>
                                    </button>
                                }
                            }
                        </For>
                    </div>
                    <Show when=move || error.get().is_some()>
                        <p class="form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="category-selection__actions">
                        <A href="/dashboard" attr:class="btn">
                            "Cancel"
                        </A>
                        <button class="btn btn--primary" disabled=move || submitting.get() on:click=move |ev| on_submit.run(ev)>
                            {move || if submitting.get() { "Saving..." } else { "Save categories" }}
                        </button>
                    </div>
                </Show>
            </Show>
            <Show when=move || !loading.get() && error.get().is_some() && subscription.get().is_none()>
                <p class="form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
