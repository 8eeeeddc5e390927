//! Wedding Site App
//!
//! Root component: owns the routing signal and the site store, and switches
//! pages on navigation and browser history events.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::context::{AppContext, Page};
use crate::pages::{DetailsPage, FaqsPage, HomePage, NotFoundPage, RegistryPage, VisitingPage};
use crate::store::SiteState;

fn initial_page() -> Page {
    window()
        .location()
        .pathname()
        .map(|path| Page::from_path(&path))
        .unwrap_or(Page::Home)
}

#[component]
pub fn App() -> impl IntoView {
    let (current_page, set_current_page) = signal(initial_page());

    // Provide context to all children
    let ctx = AppContext::new((current_page, set_current_page));
    provide_context(ctx);
    provide_context(Store::new(SiteState::new()));

    // Back / forward buttons
    let _ = window_event_listener(ev::popstate, move |_| ctx.sync_with_location());

    Effect::new(move |_| {
        let page = current_page.get();
        web_sys::console::log_1(&format!("[APP] Page: {}", page.path()).into());
    });

    view! {
        <main class="site">
            {move || match current_page.get() {
                Page::Home => view! { <HomePage /> }.into_any(),
                Page::Details => view! { <DetailsPage /> }.into_any(),
                Page::VisitingNashville => view! { <VisitingPage /> }.into_any(),
                Page::Registry => view! { <RegistryPage /> }.into_any(),
                Page::Faqs => view! { <FaqsPage /> }.into_any(),
                Page::NotFound => view! { <NotFoundPage /> }.into_any(),
            }}
        </main>
    }
}
