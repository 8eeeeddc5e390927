use crate::models::{FaqCategory, FaqEntry};

const fn entry(question: &'static str, answer: &'static str) -> FaqEntry {
    FaqEntry { question, answer }
}

pub fn faq_entries(category: FaqCategory) -> Vec<FaqEntry> {
    match category {
        FaqCategory::General => vec![
            entry(
                "When is the wedding?",
                "Our wedding will be held on **October 11, 2026**. The ceremony begins at 4:00 PM.",
            ),
            entry(
                "What is the dress code?",
                "**Semi-formal** attire is requested. Think cocktail dresses, dressy separates, or suits. Please dress comfortably but elegantly!",
            ),
            entry(
                "Can I bring a plus one?",
                "Due to venue capacity, we can only accommodate guests named on the invitation. Please refer to your invitation for details.",
            ),
            entry(
                "Are children welcome?",
                "While we love your little ones, our wedding will be an adult-only celebration. We hope this gives you a chance to enjoy a night out!",
            ),
        ],
        FaqCategory::Venue => vec![
            entry(
                "Where is the wedding?",
                "The ceremony and reception will both be held at the [Noah Liff Opera Center](https://noahliffoperacenter.org/about-us) in Nashville, TN. It's located in the Sylvan Park neighborhood, about 15 minutes from downtown.",
            ),
            entry(
                "Is there parking available?",
                "Yes! There is free parking available on-site. We still encourage carpooling if possible.",
            ),
            entry(
                "Will the wedding be indoors or outdoors?",
                "The entire event will be held indoors, so no need to worry about the weather!",
            ),
        ],
        FaqCategory::Ceremony => vec![
            entry(
                "What time should I arrive?",
                "We recommend arriving 15-20 minutes before the ceremony starts at 4:00 PM to find parking and get settled.",
            ),
            entry(
                "Can I take photos during the ceremony?",
                "We kindly ask that you keep phones and cameras away during the ceremony so everyone can be fully present. We'll have a professional photographer capturing the moment! After the ceremony, *snap away!*",
            ),
        ],
        FaqCategory::Accommodations => vec![
            entry(
                "Are there hotels nearby?",
                "Yes! Check out our [Visiting Nashville](/visiting-nashville) page for hotel recommendations in various price ranges and neighborhoods.",
            ),
            entry(
                "Will there be transportation provided?",
                "Transportation will not be provided, so please plan accordingly. Rideshare services like Uber and Lyft are readily available in Nashville.",
            ),
        ],
        FaqCategory::Gifts => vec![
            entry(
                "Do you have a registry?",
                "Yes! You can find our [registry](/registry) on our website. Your presence is the greatest gift, but if you'd like to give something, we'd be grateful for contributions to our honeymoon fund or items from our registry.",
            ),
            entry(
                "Can I bring a gift to the wedding?",
                "We kindly ask that gifts be shipped directly to us rather than brought to the venue. This helps us avoid any mix-ups on the big day!",
            ),
        ],
    }
}
