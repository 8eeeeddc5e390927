use leptos::prelude::*;

use crate::components::{Menu, NavLink};
use crate::context::Page;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page not-found-page">
            <div class="not-found">
                <span class="not-found-icon">"💔"</span>
                <p class="not-found-text">"Oops! Looks like this page wandered off before the wedding."</p>
                <NavLink page=Page::Home class="submit-btn">"Back to Home"</NavLink>
            </div>

            <Menu current=Page::NotFound />
        </div>
    }
}
