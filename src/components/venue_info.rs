//! Venue Info Component
//!
//! Venue card, the practical details grid and a pointer to the FAQ.

use leptos::prelude::*;

use super::NavLink;
use crate::content::directions_link;
use crate::context::Page;
use crate::models::{ImportantDetail, VenueInfo};

#[component]
pub fn VenueInfoSection(venue: VenueInfo, details: Vec<ImportantDetail>) -> impl IntoView {
    let directions = directions_link(venue.address);

    view! {
        <div class="venue-info">
            <div class="venue-card">
                <img class="venue-image" src=venue.image alt=venue.alt />
                <p class="venue-name">{venue.name}</p>
                <p class="venue-details">{venue.details}</p>
                <div class="venue-links">
                    <a class="link-btn" href=venue.website_link target="_blank" rel="noopener noreferrer">"Website"</a>
                    <a class="link-btn" href=directions target="_blank" rel="noopener noreferrer">"Directions"</a>
                </div>
            </div>

            <div class="venue-important-details">
                <p class="section-title">"Important Details"</p>
                <div class="important-details-grid">
                    {details.into_iter().map(|detail| view! {
                        <div class="important-detail">
                            <p class="important-detail-title">{detail.title}</p>
                            <p class="important-detail-text">{detail.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>

            <div class="venue-more">
                <NavLink page=Page::Faqs class="venue-faq-link">
                    "Need more details? See the Frequently Asked Questions"
                </NavLink>
            </div>
        </div>
    }
}
