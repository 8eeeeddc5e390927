use super::directions_link;
use crate::models::{Place, PlaceCategory, PlaceTag};
use PlaceTag::*;

pub const STAY_NOTE: &str = "We haven't stayed at these spots ourselves, but chose them based on reviews and proximity to the wedding venue. Tennessee is beautiful and there are also many great Airbnb options in the area! You probably can't go wrong with any lodging option you find.";

/// Shown when a place image fails to load
pub const PLACE_PLACEHOLDER: &str = "https://placehold.co/800x600/f5f0ed/5e4838?text=Place";

#[allow(clippy::too_many_arguments)]
fn place(
    label: &'static str,
    details: &'static str,
    image: &'static str,
    alt: &'static str,
    maps_query: &str,
    cost: u8,
    website_link: &'static str,
    tags: &[PlaceTag],
) -> Place {
    Place {
        label,
        details,
        image,
        alt,
        directions_link: directions_link(maps_query),
        website_link,
        cost,
        tip: None,
        distance_from_venue: None,
        tags: tags.to_vec(),
    }
}

/// Places for a guide tab, alphabetical by label
pub fn places(category: PlaceCategory) -> Vec<Place> {
    let mut list = match category {
        PlaceCategory::Stay => places_to_stay(),
        PlaceCategory::See => places_to_see(),
        PlaceCategory::Eat => places_to_eat(),
    };
    list.sort_by_key(|p| p.label.to_lowercase());
    list
}

fn places_to_stay() -> Vec<Place> {
    vec![
        Place {
            distance_from_venue: Some("5 min"),
            ..place(
                "Hilton Garden Inn Nashville West End",
                "Very close to the wedding venue! Also near Vanderbilt University, Centennial Park, and the Parthenon.",
                "/images/places/hilton_west_end.webp",
                "Hilton Garden Inn Nashville West End",
                "Hilton Garden Inn Nashville Vanderbilt",
                2,
                "https://www.hilton.com/en/hotels/bnagigi-hilton-garden-inn-nashville-west-end-avenue/",
                &[Midtown, Parking],
            )
        },
        Place {
            distance_from_venue: Some("15 min"),
            ..place(
                "Hilton Nashville Downtown",
                "In the heart of Lower Broadway, right next to Bridgestone Arena. Perfect if you want to be in the middle of all the action in Nashville!",
                "/images/places/hilton_downtown.webp",
                "Hilton Nashville Downtown",
                "Hilton Nashville Downtown Broadway",
                3,
                "https://www.hilton.com/en/hotels/bnanshf-hilton-nashville-downtown/",
                &[Downtown, Valet],
            )
        },
        Place {
            distance_from_venue: Some("15 min"),
            ..place(
                "The Joseph",
                "One of Nashville's most acclaimed luxury hotels. Home to Yolan, widely considered the best Italian restaurant in the city (though we haven't tried it yet!).",
                "/images/places/joseph.webp",
                "The Joseph hotel",
                "The Joseph Nashville",
                4,
                "https://www.thejosephnashville.com",
                &[Downtown, Upscale, Valet],
            )
        },
    ]
}

fn places_to_see() -> Vec<Place> {
    vec![
        place(
            "Bicentennial Capitol Mall State Park",
            "A 19-acre park celebrating Tennessee history. Features a 200-foot granite map of the state and a WWII memorial.",
            "/images/places/bicentennial.webp",
            "Bicentennial Capitol Mall",
            "Bicentennial Capitol Mall State Park",
            0,
            "https://tnstateparks.com/parks/bicentennial-mall",
            &[Downtown, Outdoors, History, Free, Parking],
        ),
        place(
            "Centennial Park",
            "Beautiful 132-acre park surrounding the Parthenon. Perfect for a morning walk, picnic, or jog around the lake. This is where we took our engagement photos!",
            "/images/places/centennial.webp",
            "Centennial Park",
            "Centennial Park Nashville",
            0,
            "https://www.nashville.gov/departments/parks/parks/centennial-park",
            &[Midtown, Outdoors, Parking, Free],
        ),
        Place {
            tip: Some("Visit in the fall when the leaves change."),
            ..place(
                "Cheekwood Estate & Gardens",
                "55 acres of botanical gardens and an art museum. Stunning in fall when the leaves change!",
                "/images/places/cheekwood.webp",
                "Cheekwood botanical gardens",
                "Cheekwood Estate and Gardens",
                2,
                "https://cheekwood.org",
                &[Outdoors, History, Parking, Arts],
            )
        },
        place(
            "Grand Ole Opry",
            "The show that made country music famous! Catch a live performance at this legendary venue - it's been running since 1925.",
            "/images/places/grand_ole_opry.webp",
            "Grand Ole Opry",
            "Grand Ole Opry Nashville",
            3,
            "https://www.opry.com",
            &[OpryMills, Indoors, History, Music, Parking],
        ),
        place(
            "Lower Broadway",
            "The heart of Nashville! Honky-tonks, live music, and people-watching. No cover charges at most bars.",
            "/images/places/broadway.webp",
            "Lower Broadway at night",
            "Lower Broadway Nashville TN",
            0,
            "https://www.visitmusiccity.com/explore-nashville/neighborhoods/downtown",
            &[Downtown, Indoors, Outdoors, Music, LateNight, Drinks],
        ),
        place(
            "Nashville Farmers' Market",
            "Year-round market with fresh produce, local vendors, and international food stalls. The Market House has great lunch spots!",
            "/images/places/farmers_market.webp",
            "Nashville Farmers' Market",
            "Nashville Farmers Market",
            0,
            "https://www.nashvillefarmersmarket.org",
            &[Downtown, Indoors, Outdoors, Parking, Free],
        ),
        place(
            "Nashville Predators Hockey",
            "Catch a Preds game at Bridgestone Arena! Even if you're not a hockey fan, the atmosphere is electric.",
            "/images/places/predators.webp",
            "Bridgestone Arena",
            "Bridgestone Arena Nashville",
            3,
            "https://www.nhl.com/predators",
            &[Downtown, Indoors, Sports],
        ),
        place(
            "Nashville SC Soccer",
            "Catch an MLS match at GEODIS Park! Nashville's soccer club has one of the best atmospheres in the league.",
            "/images/places/nashville_sc.webp",
            "Nashville SC at GEODIS Park",
            "GEODIS Park Nashville",
            2,
            "https://www.nashvillesc.com",
            &[WedgewoodHouston, Outdoors, Sports],
        ),
        place(
            "Nashville Zoo at Grassmere",
            "A 188-acre zoo with over 6,000 animals. Great for families with kids of all ages. The Jungle Gym playground is a must!",
            "/images/places/zoo.webp",
            "Nashville Zoo",
            "Nashville Zoo",
            2,
            "https://www.nashvillezoo.org",
            &[SoutheastNashville, Outdoors, Parking],
        ),
        place(
            "Nelson's Green Brier Distillery",
            "Tennessee whiskey distillery in Marathon Village. Tours and tastings available - learn about Nashville's whiskey history!",
            "/images/places/nelsons_green_brier.webp",
            "Nelson's Green Brier Distillery",
            "Nelsons Green Brier Distillery",
            2,
            "https://greenbrierdistillery.com",
            &[CapitolView, Indoors, History, Parking],
        ),
        place(
            "Parthenon",
            "A full-scale replica of the original Parthenon in Athens, housing a 42-foot statue of Athena. A must-see Nashville landmark!",
            "/images/places/parthenon.webp",
            "Parthenon",
            "The Parthenon Nashville",
            1,
            "https://www.nashvilleparthenon.com",
            &[Midtown, Indoors, Outdoors, History, Parking, Arts],
        ),
        place(
            "Regal Opry Mills IMAX",
            "Catch the latest blockbuster on the giant IMAX screen. Located in Opry Mills mall with plenty of shopping nearby.",
            "/images/places/regal_opry_mills.webp",
            "Regal Opry Mills IMAX",
            "Regal Opry Mills IMAX",
            2,
            "https://www.regmovies.com/theatres/regal-opry-mills-0615",
            &[OpryMills, Indoors, Parking, LateNight],
        ),
        place(
            "Ryman Auditorium",
            "The 'Mother Church of Country Music.' Take a tour or catch a show - the acoustics are incredible.",
            "/images/places/ryman.webp",
            "Ryman Auditorium",
            "Ryman Auditorium",
            2,
            "https://www.ryman.com",
            &[Downtown, Indoors, History, Music, Arts],
        ),
        place(
            "Tennessee Performing Arts Center (TPAC)",
            "Broadway shows, concerts, and performances. Check the schedule - they often have amazing touring productions!",
            "/images/places/tpac.webp",
            "Tennessee Performing Arts Center",
            "Tennessee Performing Arts Center",
            3,
            "https://www.tpac.org",
            &[Downtown, Indoors, Arts],
        ),
        place(
            "Tennessee State Capitol",
            "One of the oldest working state capitols in the U.S. Free guided tours available. Beautiful Greek Revival architecture.",
            "/images/places/capitol.webp",
            "Tennessee State Capitol building",
            "Tennessee State Capitol",
            0,
            "https://www.capitol.tn.gov/about/capitolvisit.html",
            &[Downtown, Indoors, History, Free],
        ),
        place(
            "Tennessee State Museum",
            "Explore Tennessee's history from prehistoric times to the present. Free admission makes it a great rainy day activity!",
            "/images/places/state_museum.webp",
            "Tennessee State Museum",
            "Tennessee State Museum",
            0,
            "https://tnmuseum.org",
            &[Downtown, Indoors, History, Free, Parking, Arts],
        ),
    ]
}

fn places_to_eat() -> Vec<Place> {
    vec![
        Place {
            tip: Some("Book the weekend brunch ahead of time."),
            ..place(
                "Adele's",
                "Elevated Southern comfort food with farm-to-table ingredients. Famous for their weekend brunch buffet and handcrafted cocktails.",
                "/images/places/adeles.webp",
                "Adele's restaurant",
                "Adeles Nashville 1210 McGavock St",
                3,
                "https://www.adelesnashville.com",
                &[Gulch, Upscale, Southern, Breakfast, Parking, ReservationRequired],
            )
        },
        place(
            "Assembly Food Hall",
            "Massive food hall in downtown with 30+ vendors. Something for everyone - from Nashville hot chicken to sushi to tacos!",
            "/images/places/assembly_food_hall.webp",
            "Assembly Food Hall at Fifth + Broadway",
            "Assembly Food Hall Nashville",
            2,
            "https://www.assemblyfoodhall.com",
            &[Downtown, MultipleOptions, Casual, TouristFavorite],
        ),
        place(
            "Bastion",
            "Intimate 24-seat restaurant with a creative tasting menu. The cocktail bar next door is also excellent.",
            "/images/places/bastion.webp",
            "Bastion restaurant",
            "Bastion Nashville",
            4,
            "https://www.bastionnashville.com",
            &[WedgewoodHouston, Upscale, American, Drinks, MichelinStar, ReservationRequired],
        ),
        place(
            "Butchertown Hall",
            "Texas-style BBQ meets Nashville. Smoked meats, great sides, and an excellent beer selection.",
            "/images/places/butchertown_hall.webp",
            "Butchertown Hall BBQ",
            "Butchertown Hall Nashville",
            3,
            "https://www.butchertownhall.com",
            &[Germantown, Upscale, Bbq, ReservationRequired],
        ),
        place(
            "Condado Tacos",
            "Build-your-own tacos with creative toppings. The Capitol View location has great outdoor seating!",
            "/images/places/condado.webp",
            "Condado Tacos",
            "Condado Tacos, 501 12th Ave S, Nashville, TN 37203",
            2,
            "https://locations.condadotacos.com/tn/418-11th-ave-n.",
            &[CapitolView, Casual, TexMex, Parking],
        ),
        place(
            "Cookout",
            "Late-night fast food heaven! Cheap, delicious, and open late. The milkshakes are legendary.",
            "/images/places/cookout.webp",
            "Cookout restaurant",
            "Cookout Nashville",
            1,
            "https://cookout.com",
            &[FastFood, LateNight, Parking, MultipleLocations],
        ),
        place(
            "Emmy Squared",
            "Detroit-style pizza with crispy, cheesy edges. The Colony is a fan favorite!",
            "/images/places/emmy_squared.webp",
            "Emmy Squared pizza",
            "Emmy Squared Nashville",
            2,
            "https://www.emmysquaredpizza.com/location/germantown-nashville-tn/",
            &[Germantown, Gulch, GreenHills, Casual, Pizza, MultipleLocations],
        ),
        place(
            "Fishmonger",
            "Fresh seafood and raw bar with a focus on quality. Great oysters and creative seafood dishes!",
            "/images/places/fishmonger.webp",
            "Fishmonger restaurant",
            "Fishmonger Nashville",
            3,
            "https://fishmongergroup.com",
            &[Germantown, Casual, Seafood],
        ),
        place(
            "Greenhouse Bar",
            "Rooftop bar with stunning views of the Nashville skyline. Great cocktails and a relaxed vibe.",
            "/images/places/greenhouse.webp",
            "Greenhouse Bar rooftop",
            "Greenhouse Bar Nashville",
            2,
            "https://www.greenhousenash.com/",
            &[GreenHills, Drinks, Casual],
        ),
        Place {
            tip: Some("'Shut the Cluck Up' is NOT for beginners!"),
            ..place(
                "Hattie B's Hot Chicken",
                "Nashville hot chicken at its finest.",
                "/images/places/hattie_bs.webp",
                "Hattie B's hot chicken plate",
                "Hattie Bs Hot Chicken Nashville",
                1,
                "https://hattieb.com",
                &[Midtown, Casual, American, HotChicken, TouristFavorite, Parking, MultipleLocations],
            )
        },
        place(
            "Hawkers Asian Street Food",
            "Pan-Asian street food with bold flavors. Great for sharing - order a bunch of small plates!",
            "/images/places/hawkers.webp",
            "Hawkers Asian Street Food",
            "Hawkers Asian Street Food Nashville",
            2,
            "https://www.eathawkers.com",
            &[EastNashville, Casual, Asian, Parking],
        ),
        place(
            "Little Hats Market",
            "Classic Italian deli with amazing sandwiches. The pastrami is a must-try!",
            "/images/places/little_hats.webp",
            "Little Hats Deli",
            "Little Hats Deli Nashville",
            2,
            "https://www.littlehatsmarket.com",
            &[Germantown, Casual, Italian, Parking],
        ),
        place(
            "Locust",
            "Farm-to-table fine dining in East Nashville. Beautiful space with a seasonal menu that changes frequently.",
            "/images/places/locust.webp",
            "Locust restaurant",
            "Locust Nashville",
            4,
            "https://www.locustnashville.com",
            &[EastNashville, Upscale, American, MichelinStar, ReservationRequired],
        ),
        place(
            "Oku",
            "Modern Japanese restaurant with a beautiful sushi bar. The omakase is a special treat!",
            "/images/places/oku.webp",
            "Oku Japanese restaurant",
            "Oku Nashville",
            3,
            "https://www.o-kusushi.com/location/o-ku-nashville/",
            &[Germantown, Upscale, Sushi, Parking, ReservationRequired],
        ),
        place(
            "Ole Smoky Distillery",
            "Tennessee moonshine distillery on Broadway. Free tastings and live music - a fun stop on a Broadway crawl!",
            "/images/places/ole_smoky.webp",
            "Ole Smoky Distillery on Broadway",
            "Ole Smoky Distillery Nashville",
            1,
            "https://olesmoky.com/pages/nashville",
            &[Downtown, Drinks, Music, MultipleOptions, TouristFavorite, Casual],
        ),
        place(
            "Pizza Perfect",
            "New York-style pizza by the slice. Perfect for a quick, satisfying meal.",
            "/images/places/pizza_perfect.webp",
            "Pizza Perfect",
            "Pizza Perfect Nashville",
            1,
            "https://www.pizzaperfectonline.com",
            &[Midtown, Casual, Pizza, LateNight],
        ),
        place(
            "The Catbird Seat",
            "Nashville's premier tasting menu experience. Intimate 22-seat counter surrounding the open kitchen.",
            "/images/places/catbird_seat.webp",
            "The Catbird Seat plated dish",
            "The Catbird Seat Nashville",
            4,
            "https://www.thecatbirdseatrestaurant.com",
            &[Gulch, Upscale, American, MichelinStar, ReservationRequired],
        ),
    ]
}

/// `$` per cost level, "Free" for zero
pub fn cost_label(cost: u8) -> String {
    if cost == 0 {
        "Free".to_string()
    } else {
        "$".repeat(cost as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_label() {
        assert_eq!(cost_label(0), "Free");
        assert_eq!(cost_label(1), "$");
        assert_eq!(cost_label(4), "$$$$");
    }

    #[test]
    fn test_stay_tab_has_distances() {
        let stays = places(PlaceCategory::Stay);
        assert_eq!(stays.len(), 3);
        assert!(stays.iter().all(|p| p.distance_from_venue.is_some()));
        assert_eq!(stays[0].label, "Hilton Garden Inn Nashville West End");
    }

    #[test]
    fn test_directions_links_use_maps_query() {
        for category in PlaceCategory::ALL {
            for p in places(category) {
                assert!(p.directions_link.starts_with("https://maps.google.com/?q="));
                assert!(!p.directions_link.contains(' '));
            }
        }
    }
}
