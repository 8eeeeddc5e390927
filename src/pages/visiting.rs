use leptos::prelude::*;

use crate::components::{Menu, TopNav, VisitingTabs};
use crate::context::Page;

#[component]
pub fn VisitingPage() -> impl IntoView {
    view! {
        <div class="page visiting-page">
            <TopNav current=Page::VisitingNashville />
            <header class="page-header">
                <h1>"Visiting Nashville"</h1>
                <p class="page-subtitle">
                    "Make the most of your trip to Music City! Here are some of our favorite spots for lodging, sightseeing, and dining."
                </p>
            </header>

            <VisitingTabs />

            <Menu current=Page::VisitingNashville />
        </div>
    }
}
