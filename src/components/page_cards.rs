//! Page Link Cards Component

use leptos::prelude::*;

use super::NavLink;
use crate::models::PageCard;

#[component]
pub fn PageCards(cards: Vec<PageCard>) -> impl IntoView {
    view! {
        <div class="page-cards">
            {cards.into_iter().map(|card| view! {
                <div class="page-card">
                    <img class="page-card-image" src=card.image alt=card.alt />
                    <NavLink page=card.page class="page-card-button">{card.label}</NavLink>
                    <p class="page-card-details">{card.details}</p>
                </div>
            }).collect_view()}
        </div>
    }
}
