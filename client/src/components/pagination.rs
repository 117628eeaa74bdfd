//! Numbered page navigation for the catalog.

use leptos::prelude::*;

/// Previous/next buttons around a window of page numbers.
///
/// Hidden when everything fits on one page.
#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] window: Signal<Vec<usize>>,
    on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="pagination" aria-label="Pagination">
                <button
                    class="pagination__step"
                    disabled=move || page.get() <= 1
                    on:click=move |_| on_select.run(page.get_untracked().saturating_sub(1))
                >
                    "‹ Prev"
                </button>
                {move || {
                    window
                        .get()
                        .into_iter()
                        .map(|n| {
                            view! {
                                <button
                                    class="pagination__page"
                                    class:pagination__page--current=move || page.get() == n
                                    aria-current=move || (page.get() == n).then_some("page")
                                    on:click=move |_| on_select.run(n)
                                >
                                    {n}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <button
                    class="pagination__step"
                    disabled=move || page.get() >= total_pages.get()
                    on:click=move |_| on_select.run(page.get_untracked() + 1)
                >
                    "Next ›"
                </button>
            </nav>
        </Show>
    }
}
