use leptos::prelude::*;

use crate::components::{Menu, RegistryGrid, TopNav};
use crate::context::Page;

#[component]
pub fn RegistryPage() -> impl IntoView {
    view! {
        <div class="page registry-page">
            <TopNav current=Page::Registry />
            <header class="page-header">
                <h1>"Registry"</h1>
                <p class="page-subtitle">
                    "Your presence at our wedding is the greatest gift of all. But if you'd like to get us something else, here are some ideas we'd love!"
                </p>
            </header>

            <RegistryGrid />

            <Menu current=Page::Registry />
        </div>
    }
}
