//! UI Components
//!
//! Reusable Leptos components.

mod active_filters;
mod faq_accordion;
mod form_field;
mod gift_form;
mod menu;
mod modal;
mod nav_link;
mod overview_boxes;
mod page_cards;
mod place_card;
mod registry_grid;
mod rsvp_form;
mod submit_message;
mod timeline;
mod top_nav;
mod venue_info;
mod visiting_tabs;

pub use active_filters::ActiveFilters;
pub use faq_accordion::FaqAccordion;
pub use form_field::FormField;
pub use gift_form::GiftFormView;
pub use menu::Menu;
pub use modal::Modal;
pub use nav_link::NavLink;
pub use overview_boxes::OverviewBoxes;
pub use page_cards::PageCards;
pub use place_card::PlaceCard;
pub use registry_grid::RegistryGrid;
pub use rsvp_form::RsvpBox;
pub use submit_message::SubmitMessageBox;
pub use timeline::Timeline;
pub use top_nav::TopNav;
pub use venue_info::VenueInfoSection;
pub use visiting_tabs::VisitingTabs;
