//! Static Site Content
//!
//! Hardcoded data tables rendered by the pages.

mod details;
mod faqs;
mod places;
mod registry;

pub use details::{
    important_details, overview_details, page_cards, timeline_events, venue, COUPLE, WEDDING_DATE,
};
pub use faqs::faq_entries;
pub use places::{cost_label, places, PLACE_PLACEHOLDER, STAY_NOTE};
pub use registry::{initial_registry_items, REGISTRY_PLACEHOLDER};

use chrono::NaiveDate;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters kept as-is in a maps query; space is handled separately
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b' ');

/// Google Maps search link for a place name or address
pub fn directions_link(query: &str) -> String {
    let encoded = utf8_percent_encode(query.trim(), QUERY_ENCODE_SET)
        .to_string()
        .replace(' ', "+");
    format!("https://maps.google.com/?q={}", encoded)
}

/// Days from `today` until the wedding (negative once it has passed)
pub fn days_until(today: NaiveDate) -> i64 {
    (WEDDING_DATE - today).num_days()
}

/// Hero countdown text
pub fn countdown_label(days: i64) -> String {
    match days {
        d if d > 1 => format!("In {} days...", d),
        1 => "In 1 day...".to_string(),
        0 => "Today's the day!".to_string(),
        _ => "Just married!".to_string(),
    }
}

/// Today's date from the browser clock
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or(WEDDING_DATE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlaceCategory;

    #[test]
    fn test_directions_link() {
        assert_eq!(
            directions_link("Centennial Park Nashville"),
            "https://maps.google.com/?q=Centennial+Park+Nashville"
        );
        assert_eq!(
            directions_link("Cheekwood Estate & Gardens"),
            "https://maps.google.com/?q=Cheekwood+Estate+%26+Gardens"
        );
        assert_eq!(
            directions_link("Hattie B's"),
            "https://maps.google.com/?q=Hattie+B%27s"
        );
    }

    #[test]
    fn test_days_until() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        assert_eq!(days_until(date), 10);
        assert_eq!(days_until(WEDDING_DATE), 0);
        assert_eq!(days_until(NaiveDate::from_ymd_opt(2026, 10, 12).unwrap()), -1);
    }

    #[test]
    fn test_countdown_label() {
        assert_eq!(countdown_label(10), "In 10 days...");
        assert_eq!(countdown_label(1), "In 1 day...");
        assert_eq!(countdown_label(0), "Today's the day!");
        assert_eq!(countdown_label(-3), "Just married!");
    }

    #[test]
    fn test_place_lists_sorted_by_label() {
        for category in PlaceCategory::ALL {
            let list = places(category);
            assert!(!list.is_empty());
            let labels: Vec<&str> = list.iter().map(|p| p.label).collect();
            let mut sorted = labels.clone();
            sorted.sort_by_key(|l| l.to_lowercase());
            assert_eq!(labels, sorted);
        }
    }

    #[test]
    fn test_every_faq_category_has_entries() {
        for category in crate::models::FaqCategory::ORDER {
            assert!(!faq_entries(category).is_empty());
        }
    }

    #[test]
    fn test_initial_registry_has_one_special_fund() {
        let items = initial_registry_items();
        let funds: Vec<_> = items.iter().filter(|i| i.is_special_fund).collect();
        assert_eq!(funds.len(), 1);
        assert!(funds[0].requested_quantity.is_none());
    }
}
