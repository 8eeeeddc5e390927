use leptos::prelude::*;

use crate::components::{Menu, Timeline, TopNav, VenueInfoSection};
use crate::content::{important_details, timeline_events, venue};
use crate::context::Page;

#[component]
pub fn DetailsPage() -> impl IntoView {
    view! {
        <div class="page details-page">
            <TopNav current=Page::Details />
            <header class="page-header">
                <h1>"Wedding Details"</h1>
                <p class="page-subtitle">"Everything you need to know about our special day!"</p>
            </header>

            <section class="wedding-timeline">
                <h2>"Timeline"</h2>
                <Timeline events=timeline_events() />
            </section>

            <section class="wedding-venue">
                <h2>"Venue"</h2>
                <VenueInfoSection venue=venue() details=important_details() />
            </section>

            <Menu current=Page::Details />
        </div>
    }
}
