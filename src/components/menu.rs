//! Footer Menu Component
//!
//! Links to every page except the current one.

use leptos::prelude::*;

use super::NavLink;
use crate::context::Page;

#[component]
pub fn Menu(current: Page) -> impl IntoView {
    view! {
        <footer class="menu">
            <div class="menu-links">
                {Page::menu_links(current).into_iter().map(|page| view! {
                    <NavLink page=page class="menu-link">{page.label()}</NavLink>
                }).collect_view()}
            </div>
        </footer>
    }
}
