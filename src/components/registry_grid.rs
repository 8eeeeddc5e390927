//! Registry Grid Component
//!
//! Loads the registry list from the backend on mount (keeping the built-in
//! table if that fails) and renders one card per item, special funds first.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{GiftFormView, Modal};
use crate::commands;
use crate::content::REGISTRY_PLACEHOLDER;
use crate::models::RegistryItem;
use crate::registry::{find_item, is_fully_gifted, price_label, progress_label, progress_percent, remaining, sort_registry_items};
use crate::store::{store_record_gift, store_set_registry_items, use_site_store, SiteStateStoreFields};

#[component]
pub fn RegistryGrid() -> impl IntoView {
    let store = use_site_store();

    // Load on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_registry_items().await {
                Ok(items) if !items.is_empty() => store_set_registry_items(&store, items),
                Ok(_) => {
                    web_sys::console::log_1(&"[REGISTRY] Backend list empty, keeping built-in items".into());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[REGISTRY] Using built-in items: {}", e).into());
                }
            }
        });
    });

    let sorted = Memo::new(move |_| sort_registry_items(&store.registry_items().get()));

    view! {
        <div class="registry-grid">
            <For
                each=move || sorted.get()
                key=|item| item.id.clone()
                children=move |item| view! { <RegistryItemCard item=item /> }
            />
        </div>
    }
}

/// Renders the store's current copy of the item, so a reloaded list updates
/// every field. `item` is only used until the id is found.
#[component]
fn RegistryItemCard(item: RegistryItem) -> impl IntoView {
    let store = use_site_store();
    let (opened, set_opened) = signal(false);

    let item_id = StoredValue::new(item.id.clone());
    let current = Memo::new(move |_| {
        item_id
            .with_value(|id| find_item(&store.registry_items().read(), id))
            .unwrap_or_else(|| item.clone())
    });

    let fully_gifted = Memo::new(move |_| is_fully_gifted(&current.get()));
    let remaining_count = Signal::derive(move || remaining(&current.get()));
    let special = Memo::new(move |_| current.with(|item| item.is_special_fund));

    let on_gift = Callback::new(move |quantity: u32| {
        store_record_gift(&store, &item_id.get_value(), quantity);
    });
    let close = Callback::new(move |_| set_opened.set(false));

    let modal_title = Signal::derive(move || {
        let title = if special.get() { "I Contributed to This!" } else { "I Purchased This!" };
        title.to_string()
    });

    view! {
        <div class="registry-card" class:fully-gifted=move || fully_gifted.get()>
            <div class="registry-card-image-section">
                <img
                    src=move || current.with(|item| item.image.clone())
                    alt=move || current.with(|item| item.alt.clone())
                    on:error=|ev| {
                        let img: web_sys::HtmlImageElement = event_target(&ev);
                        img.set_src(REGISTRY_PLACEHOLDER);
                    }
                />
                <span class="registry-price-badge">{move || price_label(current.with(|item| item.price))}</span>
                <Show when=move || fully_gifted.get()>
                    <div class="registry-thank-you">
                        <span class="registry-heart">"♥"</span>
                        <span>"Thank You!"</span>
                    </div>
                </Show>
            </div>

            <div class="registry-card-content">
                <p class="registry-card-title">{move || current.with(|item| item.label.clone())}</p>
                <p class="registry-card-description">{move || current.with(|item| item.description.clone())}</p>

                {move || {
                    let now = current.get();
                    progress_label(&now).map(|text| {
                        let percent = progress_percent(&now).unwrap_or(0);
                        view! {
                            <div class="registry-progress">
                                <div class="registry-progress-header">
                                    <span>{text}</span>
                                    <span>{format!("{}%", percent)}</span>
                                </div>
                                <progress max="100" value=percent.min(100).to_string()></progress>
                            </div>
                        }
                    })
                }}

                <div class="registry-card-actions">
                    <a
                        class="link-btn"
                        href=move || current.with(|item| item.purchase_link.clone())
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {move || if special.get() { "Contribute" } else { "Purchase" }}
                    </a>
                    <button
                        class="link-btn"
                        disabled=move || fully_gifted.get()
                        on:click=move |_| set_opened.set(true)
                    >
                        {move || if special.get() { "I Contributed" } else { "I Purchased" }}
                    </button>
                </div>
            </div>

            <Modal opened=opened title=modal_title on_close=close>
                <GiftFormView
                    item=current.get_untracked()
                    remaining=remaining_count
                    on_gift=on_gift
                    on_close=close
                />
            </Modal>
        </div>
    }
}
