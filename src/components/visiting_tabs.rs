//! Visiting Guide Tabs Component
//!
//! Stay / See / Eat tabs over filterable place cards.

use leptos::prelude::*;

use super::{ActiveFilters, PlaceCard};
use crate::content::{places, STAY_NOTE};
use crate::filter::{filter_places, TagFilter};
use crate::models::{PlaceCategory, PlaceTag};

#[component]
pub fn VisitingTabs() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(PlaceCategory::Stay);
    let (filter, set_filter) = signal(TagFilter::new());

    let filtered = Memo::new(move |_| filter_places(&places(active_tab.get()), &filter.get()));

    let change_tab = move |tab: PlaceCategory| {
        set_active_tab.set(tab);
        set_filter.update(|f| f.clear());
    };
    let on_tag_click = Callback::new(move |tag: PlaceTag| set_filter.update(|f| f.toggle(tag)));
    let on_remove = Callback::new(move |tag: PlaceTag| set_filter.update(|f| f.remove(tag)));
    let on_clear_all = Callback::new(move |_| set_filter.update(|f| f.clear()));

    view! {
        <div class="visiting-tabs">
            <div class="tab-navigation" role="tablist">
                {PlaceCategory::ALL.into_iter().map(|tab| view! {
                    <button
                        class="tab-button"
                        role="tab"
                        id=tab.slug()
                        class:active=move || active_tab.get() == tab
                        aria-selected=move || (active_tab.get() == tab).to_string()
                        on:click=move |_| change_tab(tab)
                    >
                        {tab.label()}
                    </button>
                }).collect_view()}
            </div>

            <Show when=move || active_tab.get() == PlaceCategory::Stay>
                <p class="stay-note">{STAY_NOTE}</p>
            </Show>

            <Show when=move || !filter.get().is_empty()>
                <ActiveFilters filter=filter on_remove=on_remove on_clear_all=on_clear_all />
            </Show>

            <div class="tab-content">
                <Show
                    when=move || !filtered.get().is_empty()
                    fallback=|| view! { <p class="no-results">"No places found with these filters."</p> }
                >
                    <div class="place-grid">
                        <For
                            each=move || filtered.get()
                            key=|place| place.label
                            children=move |place| view! {
                                <PlaceCard place=place filter=filter on_tag_click=on_tag_click />
                            }
                        />
                    </div>
                </Show>
            </div>
        </div>
    }
}
