//! Sample guests and registry items for local development.

use tracing::info;

use crate::domain::{DomainResult, Guest, RegistryItem};
use crate::repository::{GuestRepository, RegistryRepository};

pub fn sample_guests() -> Vec<Guest> {
    let mut john = Guest::new(1, "John", "Doe");
    john.email = "john@example.com".to_string();
    john.phone = "(123) 456-7890".to_string();

    let mut jane = Guest::new(2, "Jane", "Smith");
    jane.email = "jane@example.com".to_string();
    jane.phone = "(098) 765-4321".to_string();

    vec![john, jane]
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    label: &str,
    description: &str,
    price: f64,
    image: &str,
    alt: &str,
    requested_quantity: Option<u32>,
    received_quantity: u32,
    purchase_link: &str,
) -> RegistryItem {
    RegistryItem {
        id: id.to_string(),
        label: label.to_string(),
        description: description.to_string(),
        price,
        image: image.to_string(),
        alt: alt.to_string(),
        requested_quantity,
        received_quantity,
        purchase_link: purchase_link.to_string(),
        is_special_fund: false,
    }
}

pub fn sample_registry_items() -> Vec<RegistryItem> {
    vec![
        RegistryItem {
            is_special_fund: true,
            ..item(
                "family-recipes",
                "Family Recipes",
                "Share your favorite family recipes with us! We'd love to cook your cherished dishes in our new home together.",
                0.0,
                "https://picsum.photos/seed/recipes/800/600",
                "Handwritten recipe cards",
                None,
                0,
                "",
            )
        },
        item(
            "kitchenaid-mixer",
            "KitchenAid Stand Mixer",
            "A classic kitchen essential for baking together. We would love the Artisan series in any neutral color!",
            350.0,
            "https://picsum.photos/seed/mixer/800/600",
            "KitchenAid Stand Mixer",
            Some(1),
            0,
            "https://www.williams-sonoma.com",
        ),
        item(
            "le-creuset",
            "Le Creuset Dutch Oven",
            "Perfect for cozy soups and stews. The 5.5 quart size in any color would be wonderful.",
            400.0,
            "https://picsum.photos/seed/dutchoven/800/600",
            "Le Creuset Dutch Oven",
            Some(1),
            0,
            "https://www.lecreuset.com",
        ),
        item(
            "towel-set",
            "Luxury Bath Towel Set",
            "Soft, plush towels for our new home. We prefer white or neutral tones.",
            120.0,
            "https://picsum.photos/seed/towels/800/600",
            "Luxury bath towels",
            Some(2),
            1,
            "https://www.parachutehome.com",
        ),
        item(
            "dyson-vacuum",
            "Dyson Vacuum",
            "A powerful cordless vacuum to keep our home spotless. The V15 would be amazing!",
            650.0,
            "https://picsum.photos/seed/vacuum/800/600",
            "Dyson cordless vacuum",
            Some(1),
            0,
            "https://www.dyson.com",
        ),
        item(
            "dinner-plates",
            "Dinner Plate Set",
            "Beautiful everyday dinnerware for hosting friends and family. Service for 8 preferred.",
            200.0,
            "https://picsum.photos/seed/plates/800/600",
            "Ceramic dinner plates",
            Some(1),
            0,
            "https://www.crateandbarrel.com",
        ),
    ]
}

/// Write the sample data, overwriting stored rows with the same ids.
pub async fn seed_sample_data(
    guests: &dyn GuestRepository,
    registry: &dyn RegistryRepository,
) -> DomainResult<()> {
    info!("Seeding database with sample data...");

    for guest in sample_guests() {
        guests.save(&guest).await?;
        info!(guest = %guest.full_name(), "Added guest");
    }

    for item in sample_registry_items() {
        registry.save(&item).await?;
        info!(item = %item.label, "Added registry item");
    }

    info!("Seed data populated successfully");
    Ok(())
}

/// Seed only into an empty database, so restarts keep recorded gifts.
pub async fn seed_if_empty(
    guests: &dyn GuestRepository,
    registry: &dyn RegistryRepository,
) -> DomainResult<bool> {
    if !guests.list().await?.is_empty() || !registry.list().await?.is_empty() {
        return Ok(false);
    }
    seed_sample_data(guests, registry).await?;
    Ok(true)
}
