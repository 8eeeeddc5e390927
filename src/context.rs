//! Application Context
//!
//! Current page routing shared via Leptos Context API.

use leptos::prelude::*;

/// Pages of the site, one per route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Details,
    VisitingNashville,
    Registry,
    Faqs,
    NotFound,
}

impl Page {
    /// Pages listed in the footer menu, in display order
    pub const MENU: [Page; 5] = [
        Page::Home,
        Page::Details,
        Page::VisitingNashville,
        Page::Registry,
        Page::Faqs,
    ];

    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Page::Home,
            "/details" => Page::Details,
            "/visiting-nashville" => Page::VisitingNashville,
            "/registry" => Page::Registry,
            "/faqs" => Page::Faqs,
            _ => Page::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Details => "/details",
            Page::VisitingNashville => "/visiting-nashville",
            Page::Registry => "/registry",
            Page::Faqs => "/faqs",
            Page::NotFound => "/404",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Details => "Details",
            Page::VisitingNashville => "Visiting Nashville",
            Page::Registry => "Registry",
            Page::Faqs => "Frequently Asked Questions",
            Page::NotFound => "Not Found",
        }
    }

    /// Menu entries other than the current page
    pub fn menu_links(current: Page) -> Vec<Page> {
        Page::MENU.into_iter().filter(|p| *p != current).collect()
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page being displayed - read
    pub current_page: ReadSignal<Page>,
    /// Page being displayed - write
    set_current_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(current_page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            current_page: current_page.0,
            set_current_page: current_page.1,
        }
    }

    /// Push a history entry and switch page
    pub fn navigate(&self, page: Page) {
        if self.current_page.get_untracked() == page {
            return;
        }
        let window = window();
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(page.path()));
        }
        self.set_current_page.set(page);
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }

    /// Sync page with the browser location (back/forward buttons)
    pub fn sync_with_location(&self) {
        if let Ok(path) = window().location().pathname() {
            self.set_current_page.set(Page::from_path(&path));
            window().scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
