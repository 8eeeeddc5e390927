//! Nav Link Component
//!
//! Anchor that switches page through history instead of reloading.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};

#[component]
pub fn NavLink(
    page: Page,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();

    let on_click = move |ev: web_sys::MouseEvent| {
        // Let the browser handle new-tab clicks
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        ctx.navigate(page);
    };

    view! {
        <a href=page.path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
