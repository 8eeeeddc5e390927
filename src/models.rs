//! Frontend Models
//!
//! Content records rendered by the views and payloads exchanged with the backend.

use serde::{Deserialize, Serialize};

/// Tag attached to a place, used by the visiting guide filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaceTag {
    // Locations
    Downtown,
    Germantown,
    Midtown,
    WedgewoodHouston,
    CapitolView,
    OpryMills,
    SoutheastNashville,
    EastNashville,
    Gulch,
    GreenHills,
    // Stay
    Upscale,
    Parking,
    Valet,
    // See
    Sports,
    Arts,
    Music,
    Indoors,
    Outdoors,
    LateNight,
    History,
    Free,
    // Eat
    TexMex,
    Sushi,
    American,
    FastFood,
    Drinks,
    Pizza,
    Bbq,
    Asian,
    Seafood,
    Italian,
    Southern,
    HotChicken,
    MultipleOptions,
    MultipleLocations,
    ReservationRequired,
    TouristFavorite,
    MichelinStar,
    Casual,
    Breakfast,
}

impl PlaceTag {
    pub fn label(&self) -> &'static str {
        match self {
            PlaceTag::Downtown => "Downtown",
            PlaceTag::Germantown => "Germantown",
            PlaceTag::Midtown => "Midtown",
            PlaceTag::WedgewoodHouston => "Wedgewood-Houston",
            PlaceTag::CapitolView => "Capitol View",
            PlaceTag::OpryMills => "Opry Mills",
            PlaceTag::SoutheastNashville => "Southeast Nashville",
            PlaceTag::EastNashville => "East Nashville",
            PlaceTag::Gulch => "The Gulch",
            PlaceTag::GreenHills => "Green Hills",
            PlaceTag::Upscale => "Upscale",
            PlaceTag::Parking => "Parking",
            PlaceTag::Valet => "Valet Required",
            PlaceTag::Sports => "Sports",
            PlaceTag::Arts => "Arts & Culture",
            PlaceTag::Music => "Music",
            PlaceTag::Indoors => "Indoors",
            PlaceTag::Outdoors => "Outdoors",
            PlaceTag::LateNight => "Late Night",
            PlaceTag::History => "History",
            PlaceTag::Free => "Free",
            PlaceTag::TexMex => "Tex-Mex",
            PlaceTag::Sushi => "Sushi",
            PlaceTag::American => "American",
            PlaceTag::FastFood => "Fast Food",
            PlaceTag::Drinks => "Drinks",
            PlaceTag::Pizza => "Pizza",
            PlaceTag::Bbq => "BBQ",
            PlaceTag::Asian => "Asian",
            PlaceTag::Seafood => "Seafood",
            PlaceTag::Italian => "Italian",
            PlaceTag::Southern => "Southern",
            PlaceTag::HotChicken => "Hot Chicken",
            PlaceTag::MultipleOptions => "Multiple Food Options",
            PlaceTag::MultipleLocations => "Multiple Locations",
            PlaceTag::ReservationRequired => "Reservation Required",
            PlaceTag::TouristFavorite => "Tourist Favorite",
            PlaceTag::MichelinStar => "Michelin Star",
            PlaceTag::Casual => "Casual",
            PlaceTag::Breakfast => "Breakfast",
        }
    }
}

/// Tabs of the visiting guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceCategory {
    Stay,
    See,
    Eat,
}

impl PlaceCategory {
    pub const ALL: [PlaceCategory; 3] = [PlaceCategory::Stay, PlaceCategory::See, PlaceCategory::Eat];

    pub fn label(&self) -> &'static str {
        match self {
            PlaceCategory::Stay => "Places to Stay",
            PlaceCategory::See => "Places to See",
            PlaceCategory::Eat => "Places to Eat",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            PlaceCategory::Stay => "places-to-stay",
            PlaceCategory::See => "places-to-see",
            PlaceCategory::Eat => "places-to-eat",
        }
    }
}

/// A place to stay, see or eat
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub label: &'static str,
    pub details: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
    pub directions_link: String,
    pub website_link: &'static str,
    /// 0 = free, 1-4 = $ to $$$$
    pub cost: u8,
    pub tip: Option<&'static str>,
    pub distance_from_venue: Option<&'static str>,
    pub tags: Vec<PlaceTag>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaqCategory {
    General,
    Venue,
    Ceremony,
    Accommodations,
    Gifts,
}

impl FaqCategory {
    /// Display order of the category tabs
    pub const ORDER: [FaqCategory; 5] = [
        FaqCategory::General,
        FaqCategory::Venue,
        FaqCategory::Ceremony,
        FaqCategory::Accommodations,
        FaqCategory::Gifts,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FaqCategory::General => "General",
            FaqCategory::Venue => "Venue & Parking",
            FaqCategory::Ceremony => "Ceremony",
            FaqCategory::Accommodations => "Travel & Accommodations",
            FaqCategory::Gifts => "Gifts & Registry",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    /// Inline Markdown
    pub answer: &'static str,
}

/// Registry item (matches backend `RegistryItemResponse`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryItem {
    pub id: String,
    pub label: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub alt: String,
    /// None = unlimited (special fund)
    pub requested_quantity: Option<u32>,
    pub received_quantity: u32,
    pub purchase_link: String,
    #[serde(rename = "isSpecialFund", default)]
    pub is_special_fund: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEvent {
    pub title: &'static str,
    pub time: &'static str,
    pub description: &'static str,
}

/// Practical note shown under the venue card
#[derive(Debug, Clone, PartialEq)]
pub struct ImportantDetail {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewDetail {
    pub label: &'static str,
    pub details: &'static str,
    pub sub_details: Option<&'static str>,
}

/// Link card shown on the home page
#[derive(Debug, Clone, PartialEq)]
pub struct PageCard {
    pub label: &'static str,
    pub details: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
    pub page: crate::context::Page,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VenueInfo {
    pub name: &'static str,
    pub details: &'static str,
    pub address: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
    pub website_link: &'static str,
}

/// Generic `{success, message?}` backend response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of the registry list endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegistryItemsResponse {
    pub success: bool,
    #[serde(default)]
    pub items: Vec<RegistryItem>,
    #[serde(default)]
    pub error: Option<String>,
}
