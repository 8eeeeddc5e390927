//! Place Card Component

use leptos::prelude::*;

use crate::content::{cost_label, PLACE_PLACEHOLDER};
use crate::filter::TagFilter;
use crate::models::{Place, PlaceTag};

#[component]
pub fn PlaceCard(
    place: Place,
    filter: ReadSignal<TagFilter>,
    #[prop(into)] on_tag_click: Callback<PlaceTag>,
) -> impl IntoView {
    view! {
        <div class="place-card">
            <div class="place-card-image-section">
                <img
                    src=place.image
                    alt=place.alt
                    on:error=|ev| {
                        let img: web_sys::HtmlImageElement = event_target(&ev);
                        img.set_src(PLACE_PLACEHOLDER);
                    }
                />
                <span class="place-card-cost-badge">{cost_label(place.cost)}</span>
                {place.distance_from_venue.map(|distance| view! {
                    <span class="place-card-distance-badge">{format!("{} from venue", distance)}</span>
                })}
            </div>

            <div class="place-card-content">
                <p class="place-card-title">{place.label}</p>
                <div class="place-card-tags">
                    {place.tags.iter().copied().map(|tag| view! {
                        <button
                            class="place-tag"
                            class:place-tag-active=move || filter.get().contains(tag)
                            on:click=move |_| on_tag_click.run(tag)
                        >
                            {tag.label()}
                        </button>
                    }).collect_view()}
                </div>
                <p class="place-card-details">{place.details}</p>
                {place.tip.map(|tip| view! { <p class="place-card-tip">{format!("Tip: {}", tip)}</p> })}
                <div class="place-card-links">
                    <a class="link-btn" href=place.directions_link.clone() target="_blank" rel="noopener noreferrer">"Directions"</a>
                    <a class="link-btn" href=place.website_link target="_blank" rel="noopener noreferrer">"Website"</a>
                </div>
            </div>
        </div>
    }
}
