//! Global Site State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::content::initial_registry_items;
use crate::models::RegistryItem;
use crate::registry::apply_gift;

/// Site state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SiteState {
    /// Registry items in authoring order (sorted at render time)
    pub registry_items: Vec<RegistryItem>,
}

impl SiteState {
    pub fn new() -> Self {
        Self {
            registry_items: initial_registry_items(),
        }
    }
}

/// Type alias for the store
pub type SiteStore = Store<SiteState>;

/// Get the site store from context
pub fn use_site_store() -> SiteStore {
    expect_context::<SiteStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the registry list with the backend's
pub fn store_set_registry_items(store: &SiteStore, items: Vec<RegistryItem>) {
    store.registry_items().set(items);
}

/// Optimistic increment after a successful gift claim
pub fn store_record_gift(store: &SiteStore, item_id: &str, quantity: u32) {
    apply_gift(&mut store.registry_items().write(), item_id, quantity);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_from_built_in_registry() {
        let state = SiteState::new();
        assert_eq!(state.registry_items, initial_registry_items());
        assert!(!state.registry_items.is_empty());
    }
}
