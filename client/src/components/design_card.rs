//! Catalog entry rendered as a grid tile or a list row.

use leptos::prelude::*;

use crate::net::types::Design;
use crate::state::catalog::{CatalogDesign, ViewMode};

#[component]
pub fn DesignCard(
    entry: CatalogDesign,
    category_name: String,
    view_mode: ViewMode,
    on_open: Callback<i64>,
) -> impl IntoView {
    let id = entry.design.id;
    let votes = entry.design.votes();
    let voted = entry.has_voted;
    let Design { name, description, image_url, .. } = entry.design;

    view! {
        <article
            class="design-card"
            class:design-card--list=view_mode == ViewMode::List
            class:design-card--voted=voted
            on:click=move |_| on_open.run(id)
        >
            <img class="design-card__image" src=image_url alt=name.clone() loading="lazy"/>
            <div class="design-card__body">
                <h3 class="design-card__name">{name}</h3>
                <span class="design-card__category">{category_name}</span>
                {(view_mode == ViewMode::List).then(|| view! { <p class="design-card__description">{description}</p> })}
                <div class="design-card__meta">
                    <span class="design-card__votes">{format!("♥ {votes}")}</span>
                    <Show when=move || voted>
                        <span class="badge badge--success">"Voted"</span>
                    </Show>
                </div>
            </div>
        </article>
    }
}
