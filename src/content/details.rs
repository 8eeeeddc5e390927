use chrono::NaiveDate;

use crate::context::Page;
use crate::models::{ImportantDetail, OverviewDetail, PageCard, TimelineEvent, VenueInfo};

pub const COUPLE: &str = "Aspen and Ben";

pub const WEDDING_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2026, 10, 11) {
    Some(date) => date,
    None => panic!("invalid wedding date"),
};

pub fn overview_details() -> Vec<OverviewDetail> {
    vec![
        OverviewDetail { label: "When", details: "October 11, 2026", sub_details: Some("Ceremony at 4:00 PM") },
        OverviewDetail { label: "Where", details: "Noah Liff Opera Center", sub_details: Some("Nashville, TN") },
        OverviewDetail { label: "Attire", details: "Semi-formal", sub_details: None },
    ]
}

pub fn timeline_events() -> Vec<TimelineEvent> {
    vec![
        TimelineEvent {
            title: "Ceremony",
            time: "4:00 PM",
            description: "Join us as we say \"I do\"! The ceremony will be held at the beautiful Noah Liff Opera Center. Please arrive 15-20 minutes early to find your seats.",
        },
        TimelineEvent {
            title: "Cocktail Hour",
            time: "5:00 PM",
            description: "Enjoy drinks and hors d'oeuvres while we take photos and the room is transformed for the reception. Mingle with friends and family!",
        },
        TimelineEvent {
            title: "Reception",
            time: "6:00 PM",
            description: "Let the celebration begin! Join us for dinner, dancing, and an unforgettable evening celebrating our love story.",
        },
        TimelineEvent {
            title: "Last Call",
            time: "9:00 PM",
            description: "All good things must come to an end! The reception will wrap up at 10:00 PM. Thank you for celebrating with us!",
        },
    ]
}

pub fn venue() -> VenueInfo {
    VenueInfo {
        name: "The Noah Liff Opera Center",
        details: "Home to Nashville Opera, sharing space with the Nashville Ballet. It sits in Sylvan Park, a quiet neighborhood just west of Midtown and about 15 minutes from downtown.",
        address: "The Noah Liff Opera Center, 3622 Redmon St, Nashville, TN 37209",
        image: "/images/noah_liff_frontview.webp",
        alt: "An exterior view of the Noah Liff Opera Center",
        website_link: "https://noahliffoperacenter.org/about-us",
    }
}

pub fn important_details() -> Vec<ImportantDetail> {
    vec![
        ImportantDetail {
            title: "Attire",
            description: "Semi-formal attire is requested. Please dress comfortably but elegantly for the celebration.",
        },
        ImportantDetail {
            title: "Parking",
            description: "Plentiful free parking is available on-site, but we still encourage you to carpool if possible!",
        },
        ImportantDetail {
            title: "What to Expect",
            description: "The ceremony and reception will both be held at the venue. Dinner and drinks will be provided.",
        },
        ImportantDetail {
            title: "Photos & Phones",
            description: "We kindly ask that you keep phones and cameras away during the ceremony so everyone can be fully present. After that, snap away! We'd love to see your photos from the rest of the celebration.",
        },
        ImportantDetail {
            title: "Drinks",
            description: "Alcohol will be served at the cocktail hour and reception, please plan your transportation accordingly.",
        },
    ]
}

pub fn page_cards() -> Vec<PageCard> {
    vec![
        PageCard {
            label: "Wedding Details",
            details: "See what you need to know before attending!",
            image: "/images/ragsdale_ceremony_setup.webp",
            alt: "The Ragsdale Lobby of the Noah Liff Opera Center set up for a ceremony",
            page: Page::Details,
        },
        PageCard {
            label: "Visiting Nashville",
            details: "Things to know and sights to see in Music City!",
            image: "/images/nashville_skyline.webp",
            alt: "The Nashville skyline at night",
            page: Page::VisitingNashville,
        },
        PageCard {
            label: "Registry",
            details: "Want to send a gift our way? Here are some ideas!",
            image: "/images/registry_gifts.webp",
            alt: "A set of decorative gift boxes",
            page: Page::Registry,
        },
        PageCard {
            label: "Frequently Asked Questions",
            details: "Confused about something? Check our FAQ!",
            image: "/images/question_cards.webp",
            alt: "Cards on a table with question marks on them",
            page: Page::Faqs,
        },
    ]
}
