use leptos::prelude::*;

use crate::components::{FaqAccordion, Menu, TopNav};
use crate::context::Page;

#[component]
pub fn FaqsPage() -> impl IntoView {
    view! {
        <div class="page faqs-page">
            <TopNav current=Page::Faqs />
            <header class="page-header">
                <h1>"Frequently Asked Questions"</h1>
                <p class="page-subtitle">"Have a question? We might have already answered it below!"</p>
            </header>

            <FaqAccordion />

            <Menu current=Page::Faqs />
        </div>
    }
}
