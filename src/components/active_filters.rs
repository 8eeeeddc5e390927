//! Active Filters Component
//!
//! "Filtering by" bar with removable tag chips.

use leptos::prelude::*;

use crate::filter::TagFilter;
use crate::models::PlaceTag;

#[component]
pub fn ActiveFilters(
    filter: ReadSignal<TagFilter>,
    #[prop(into)] on_remove: Callback<PlaceTag>,
    #[prop(into)] on_clear_all: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="active-filter-container">
            <span class="active-filter-label">"Filtering by:"</span>
            <For
                each={move || filter.get().iter().collect::<Vec<_>>()}
                key=|tag| *tag
                children={move |tag| view! {
                    <span class="active-filter-chip">
                        {tag.label()}
                        <button
                            class="active-filter-remove"
                            aria-label=format!("Remove {} filter", tag.label())
                            on:click=move |_| on_remove.run(tag)
                        >
                            "×"
                        </button>
                    </span>
                }}
            />
            <Show when=move || filter.get().offers_clear_all()>
                <button class="clear-all-button" on:click=move |_| on_clear_all.run(())>"Clear all"</button>
            </Show>
        </div>
    }
}
