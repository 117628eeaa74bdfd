//! Detail dialog for one catalog design with the vote action.

use leptos::prelude::*;

use crate::state::catalog::{CatalogState, VoteStatus};

/// Reads the selected design from the catalog signal so a successful vote
/// updates the dialog in place.
#[component]
pub fn DesignModal(catalog: RwSignal<CatalogState>, on_close: Callback<()>, on_vote: Callback<()>) -> impl IntoView {
    let entry = move || catalog.with(|c| c.selected_design().cloned());
    let category = move || {
        catalog.with(|c| c.selected_design().map(|d| c.category_name(d.design.category_id)).unwrap_or_default())
    };
    let vote_status = move || catalog.with(|c| c.vote.clone());
    let has_voted = move || entry().is_some_and(|e| e.has_voted);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog dialog--design"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                {move || {
                    entry()
                        .map(|e| {
                            view! {
                                <img class="dialog__image" src=e.design.image_url.clone() alt=e.design.name.clone()/>
                                <h2>{e.design.name.clone()}</h2>
                                <p class="dialog__category">{category()}</p>
                                <p class="dialog__description">{e.design.description.clone()}</p>
                                <p class="dialog__votes">{format!("{} votes", e.design.votes())}</p>
                            }
                        })
                }}
                {move || match vote_status() {
                    VoteStatus::Voted => {
                        Some(view! { <p class="dialog__success">"Thanks! Your vote has been counted."</p> }.into_any())
                    }
                    VoteStatus::Failed(message) => Some(view! { <p class="dialog__error">{message}</p> }.into_any()),
                    VoteStatus::Idle | VoteStatus::Voting => None,
                }}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || has_voted() || vote_status() == VoteStatus::Voting
                        on:click=move |_| on_vote.run(())
                    >
                        {move || {
                            if has_voted() {
                                "Voted"
                            } else if vote_status() == VoteStatus::Voting {
                                "Voting..."
                            } else {
                                "Vote"
                            }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
