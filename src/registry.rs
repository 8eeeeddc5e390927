//! Registry Helpers
//!
//! Progress, ordering and display rules for registry items.

use crate::models::RegistryItem;

/// Units still needed, None for unlimited items
pub fn remaining(item: &RegistryItem) -> Option<u32> {
    item.requested_quantity
        .map(|requested| requested.saturating_sub(item.received_quantity))
}

/// Unlimited items are never fully gifted
pub fn is_fully_gifted(item: &RegistryItem) -> bool {
    match item.requested_quantity {
        Some(requested) => item.received_quantity >= requested,
        None => false,
    }
}

/// Rounded percentage gifted, None for unlimited items
pub fn progress_percent(item: &RegistryItem) -> Option<u32> {
    let requested = item.requested_quantity?;
    if requested == 0 {
        return Some(100);
    }
    Some(((item.received_quantity as f64 / requested as f64) * 100.0).round() as u32)
}

/// Special funds first, then items still needed, then fully gifted ones
pub fn sort_registry_items(items: &[RegistryItem]) -> Vec<RegistryItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|item| (!item.is_special_fund, is_fully_gifted(item)));
    sorted
}

/// Current copy of the item with `id`
pub fn find_item(items: &[RegistryItem], id: &str) -> Option<RegistryItem> {
    items.iter().find(|item| item.id == id).cloned()
}

/// Optimistically record a gift in local state
pub fn apply_gift(items: &mut [RegistryItem], item_id: &str, quantity: u32) {
    if let Some(item) = items.iter_mut().find(|item| item.id == item_id) {
        item.received_quantity += quantity;
    }
}

pub fn price_label(price: f64) -> String {
    if price == 0.0 {
        return "Any Amount".to_string();
    }
    let cents = (price * 100.0).round() as u64;
    let mut amount = with_thousands(cents / 100);
    if cents % 100 != 0 {
        let fraction = format!("{:02}", cents % 100);
        amount.push('.');
        amount.push_str(fraction.trim_end_matches('0'));
    }
    if price >= 100.0 {
        format!("${}", amount)
    } else {
        format!("${} each", amount)
    }
}

fn with_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn indefinite_article(label: &str) -> &'static str {
    match label.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

pub fn progress_label(item: &RegistryItem) -> Option<String> {
    let requested = item.requested_quantity?;
    if is_fully_gifted(item) {
        Some("Fully gifted!".to_string())
    } else {
        Some(format!("{} of {} gifted", item.received_quantity, requested))
    }
}
