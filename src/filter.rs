//! Tag Filter
//!
//! Client-side AND-filter over place tags.

use crate::models::{Place, PlaceTag};

/// Selected tags, kept in selection order for display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    selected: Vec<PlaceTag>,
}

impl TagFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the tag if absent, remove it if present
    pub fn toggle(&mut self, tag: PlaceTag) {
        if let Some(pos) = self.selected.iter().position(|t| *t == tag) {
            self.selected.remove(pos);
        } else {
            self.selected.push(tag);
        }
    }

    pub fn remove(&mut self, tag: PlaceTag) {
        self.selected.retain(|t| *t != tag);
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, tag: PlaceTag) -> bool {
        self.selected.contains(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = PlaceTag> + '_ {
        self.selected.iter().copied()
    }

    /// "Clear all" only makes sense with several tags selected
    pub fn offers_clear_all(&self) -> bool {
        self.selected.len() > 1
    }

    /// A record matches if every selected tag is in its tag list
    pub fn matches(&self, tags: &[PlaceTag]) -> bool {
        self.selected.iter().all(|tag| tags.contains(tag))
    }
}

/// Places matching the filter, in their original order
pub fn filter_places(places: &[Place], filter: &TagFilter) -> Vec<Place> {
    places
        .iter()
        .filter(|place| filter.matches(&place.tags))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_place(label: &'static str, tags: &[PlaceTag]) -> Place {
        Place {
            label,
            details: "",
            image: "",
            alt: "",
            directions_link: String::new(),
            website_link: "",
            cost: 0,
            tip: None,
            distance_from_venue: None,
            tags: tags.to_vec(),
        }
    }

    fn sample() -> Vec<Place> {
        vec![
            make_place("Parthenon", &[PlaceTag::Midtown, PlaceTag::History, PlaceTag::Parking]),
            make_place("Ryman", &[PlaceTag::Downtown, PlaceTag::History, PlaceTag::Music]),
            make_place("Zoo", &[PlaceTag::Outdoors, PlaceTag::Parking]),
        ]
    }

    fn labels(places: &[Place]) -> Vec<&'static str> {
        places.iter().map(|p| p.label).collect()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = TagFilter::new();
        assert_eq!(filter_places(&sample(), &filter).len(), 3);
    }

    #[test]
    fn test_single_tag() {
        let mut filter = TagFilter::new();
        filter.toggle(PlaceTag::History);
        assert_eq!(labels(&filter_places(&sample(), &filter)), vec!["Parthenon", "Ryman"]);
    }

    #[test]
    fn test_all_tags_required() {
        let mut filter = TagFilter::new();
        filter.toggle(PlaceTag::History);
        filter.toggle(PlaceTag::Parking);
        assert_eq!(labels(&filter_places(&sample(), &filter)), vec!["Parthenon"]);

        filter.toggle(PlaceTag::Music);
        assert!(filter_places(&sample(), &filter).is_empty());
    }

    #[test]
    fn test_toggle_twice_removes() {
        let mut filter = TagFilter::new();
        filter.toggle(PlaceTag::Parking);
        filter.toggle(PlaceTag::Parking);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_selection_order_and_clear_all() {
        let mut filter = TagFilter::new();
        filter.toggle(PlaceTag::Music);
        assert!(!filter.offers_clear_all());
        filter.toggle(PlaceTag::Downtown);
        assert!(filter.offers_clear_all());
        assert_eq!(filter.iter().collect::<Vec<_>>(), vec![PlaceTag::Music, PlaceTag::Downtown]);

        filter.remove(PlaceTag::Music);
        assert_eq!(filter.len(), 1);
        assert!(filter.contains(PlaceTag::Downtown));

        filter.clear();
        assert!(filter.is_empty());
    }
}
