//! Design catalog with category filter, sort, view mode, pagination, voting.
//!
//! SYSTEM CONTEXT
//! ==============
//! All filtering and paging happens client-side over one fetch of every
//! design; the state machine lives in `state::catalog`. The selected
//! category is mirrored in `?category=` so filtered views can be linked and
//! survive reloads.
//!
//! DESIGN
//! ======
//! The URL is the source of truth for the category: picking a category
//! navigates, and an effect on the query map applies it to the state.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::design_card::DesignCard;
use crate::components::design_modal::DesignModal;
use crate::components::loader::Loader;
use crate::components::pagination::Pagination;
use crate::state::auth::AuthState;
use crate::state::catalog::{CatalogState, SortOrder, ViewMode, parse_category_param};
use crate::state::toast::ToastState;

/// Catalog URL for a category filter; `None` links to every category.
fn catalog_href(slug: Option<&str>) -> String {
    match slug {
        Some(slug) => {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .append_pair("category", slug)
                .finish();
            format!("/catalog?{query}")
        }
        None => "/catalog".to_owned(),
    }
}

/// "Showing 13-24 of 30 designs" style summary.
fn results_summary(page: usize, per_page: usize, total: usize) -> String {
    if total == 0 {
        return "No designs found".to_owned();
    }
    let first = (page.max(1) - 1) * per_page + 1;
    let last = (first + per_page - 1).min(total);
    format!("Showing {first}-{last} of {total} designs")
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let catalog = RwSignal::new(CatalogState::default());
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let slug = parse_category_param(query.with(|q| q.get("category")));
        catalog.update(|c| c.select_category(slug));
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api;

        let (categories, designs, voted) =
            futures::join!(api::fetch_categories(), api::fetch_designs(None), api::fetch_user_votes(None));
        match (categories, designs) {
            (Ok(categories), Ok(designs)) => {
                let voted = voted.unwrap_or_else(|e| {
                    log::warn!("catalog votes: {e}");
                    Vec::new()
                });
                let slug = parse_category_param(query.with_untracked(|q| q.get("category")));
                catalog.update(|c| {
                    c.load(categories, designs, &voted);
                    c.select_category(slug);
                });
            }
            (Err(e), _) | (_, Err(e)) => {
                toasts.update(|t| {
                    t.error(e.clone());
                });
                load_error.set(Some(e));
            }
        }
        loading.set(false);
    });

    let on_category = Callback::new(move |slug: Option<String>| {
        navigate(&catalog_href(slug.as_deref()), NavigateOptions::default());
    });

    let on_page = Callback::new(move |page: usize| {
        catalog.update(|c| c.go_to(page));
        #[cfg(feature = "hydrate")]
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    let on_open = Callback::new(move |id: i64| catalog.update(|c| c.open(id)));
    let on_close = Callback::new(move |()| catalog.update(CatalogState::close));

    let on_vote = Callback::new(move |()| {
        let authenticated = auth.get_untracked().is_authenticated();
        let mut attempt = Err(String::new());
        catalog.update(|c| attempt = c.begin_vote(authenticated));
        let design_id = match attempt {
            Ok(id) => id,
            Err(message) => {
                toasts.update(|t| {
                    t.warning(message);
                });
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::vote_for_design(design_id).await {
                Ok(()) => {
                    catalog.update(|c| c.apply_vote_success(design_id));
                    toasts.update(|t| {
                        t.success("Vote recorded!");
                    });
                }
                Err(e) => {
                    catalog.update(|c| c.apply_vote_failure(e.clone()));
                    toasts.update(|t| {
                        t.error(e);
                    });
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = design_id;
    });

    let page = Signal::derive(move || catalog.with(|c| c.page));
    let total_pages = Signal::derive(move || catalog.with(CatalogState::total_pages));
    let window = Signal::derive(move || catalog.with(CatalogState::page_window));

    view! {
        <div class="page catalog">
            <header class="catalog__header">
                <h1 class="page__title">
                    {move || catalog.with(|c| c.selected_category_name()).unwrap_or_else(|| "Catalog".to_owned())}
                </h1>
                <p class="catalog__subtitle">"Vote for the designs you want in next month's box."</p>
            </header>

            <Show when=move || !loading.get() fallback=|| view! { <Loader label="Loading catalog..."/> }>
                <Show
                    when=move || load_error.get().is_none()
                    fallback=move || {
                        view! { <p class="catalog__error">{move || load_error.get().unwrap_or_default()}</p> }
                    }
                >
                    <div class="catalog__layout">
                        <aside class="catalog__sidebar">
                            <h2>"Categories"</h2>
                            <ul class="category-filter">
                                <li>
                                    <button
                                        class="category-filter__item"
                                        class:category-filter__item--active=move || {
                                            catalog.with(|c| c.selected_category.is_none())
                                        }
                                        on:click={
                                            let on_category = on_category.clone();
                                            move |_| on_category.run(None)
                                        }
                                    >
                                        "All categories"
                                        <span class="category-filter__count">
                                            {move || catalog.with(CatalogState::total_designs)}
                                        </span>
                                    </button>
                                </li>
                                <For
                                    each=move || catalog.with(|c| c.categories.clone())
                                    key=|entry| entry.category.id
                                    let:entry
                                >
                                    {
                                        let slug = entry.category.slug.clone();
                                        let active_slug = slug.clone();
                                        let on_category = on_category.clone();
                                        view! {
                                            <li>
                                                <button
                                                    class="category-filter__item"
                                                    class:category-filter__item--active=move || {
                                                        catalog.with(|c| {
                                                            c.selected_category.as_deref() == Some(active_slug.as_str())
                                                        })
                                                    }
                                                    on:click=move |_| on_category.run(Some(slug.clone()))
                                                >
                                                    {entry.category.name.clone()}
                                                    <span class="category-filter__count">{entry.count}</span>
                                                </button>
                                            </li>
                                        }
                                    }
                                </For>
                            </ul>
                        </aside>

                        <section class="catalog__content">
                            <div class="catalog__toolbar">
                                <span class="catalog__summary">
                                    {move || {
                                        catalog
                                            .with(|c| {
                                                results_summary(c.page, crate::config::DESIGNS_PER_PAGE, c.filtered_count())
                                            })
                                    }}
                                </span>
                                <label class="catalog__sort">
                                    "Sort by "
                                    <select
                                        prop:value=move || catalog.with(|c| c.sort.as_str())
                                        on:change=move |ev| {
                                            let sort = SortOrder::parse(&event_target_value(&ev));
                                            catalog.update(|c| c.set_sort(sort));
                                        }
                                    >
                                        {SortOrder::ALL
                                            .iter()
                                            .map(|sort| view! { <option value=sort.as_str()>{sort.label()}</option> })
                                            .collect::<Vec<_>>()}
                                    </select>
                                </label>
                                <button
                                    class="btn catalog__view-toggle"
                                    title="Toggle grid/list view"
                                    on:click=move |_| catalog.update(CatalogState::toggle_view)
                                >
                                    {move || if catalog.with(|c| c.view) == ViewMode::Grid { "☰ List" } else { "▦ Grid" }}
                                </button>
                            </div>

                            <Show
                                when=move || { catalog.with(CatalogState::filtered_count) > 0 }
                                fallback=|| {
                                    view! { <p class="catalog__empty">"No designs in this category yet."</p> }
                                }
                            >
                                <div
                                    class="design-grid"
                                    class:design-grid--list=move || catalog.with(|c| c.view) == ViewMode::List
                                >
                                    {move || {
                                        catalog
                                            .with(|c| {
                                                c.page_items()
                                                    .into_iter()
                                                    .map(|entry| {
                                                        let category_name = c.category_name(entry.design.category_id);
                                                        view! {
                                                            <DesignCard
                                                                entry
                                                                category_name
                                                                view_mode=c.view
                                                                on_open
                                                            />
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()
                                            })
                                    }}
                                </div>
                                <Pagination page total_pages window on_select=on_page/>
                            </Show>
                        </section>
                    </div>
                </Show>
            </Show>

            <Show when=move || catalog.with(|c| c.selected.is_some())>
                <DesignModal catalog on_close on_vote/>
            </Show>
        </div>
    }
}
