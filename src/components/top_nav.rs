//! Top Navigation Component

use leptos::prelude::*;

use super::NavLink;
use crate::context::Page;

/// (page, label, short label for narrow screens)
const NAV_ITEMS: &[(Page, &str, Option<&str>)] = &[
    (Page::Home, "Home", None),
    (Page::Details, "Details", None),
    (Page::VisitingNashville, "Visiting Nashville", Some("Nashville")),
    (Page::Registry, "Registry", None),
    (Page::Faqs, "FAQs", None),
];

#[component]
pub fn TopNav(current: Page) -> impl IntoView {
    let last = NAV_ITEMS.len() - 1;

    view! {
        <nav class="top-nav">
            {NAV_ITEMS.iter().enumerate().map(|(index, (page, label, short))| {
                let text = view! {
                    <span class="nav-label-full">{*label}</span>
                    {short.map(|s| view! { <span class="nav-label-short">{s}</span> })}
                };
                let entry = if *page == current {
                    view! { <span class="top-nav-item active" aria-current="page">{text}</span> }.into_any()
                } else {
                    view! { <NavLink page=*page class="top-nav-item">{text}</NavLink> }.into_any()
                };
                view! {
                    {entry}
                    {(index < last).then(|| view! { <span class="top-nav-divider">"·"</span> })}
                }
            }).collect_view()}
        </nav>
    }
}
