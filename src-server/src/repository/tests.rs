//! Repository Integration Tests
//!
//! Guest and registry repositories against in-memory SQLite databases.

#[cfg(test)]
mod tests {
    use crate::domain::{GiftError, GiftValidationError, Guest, NewGift, RegistryItem, RsvpUpdate};
    use crate::repository::{
        init_db, GuestRepository, RegistryRepository, Repository, SqliteGuestRepository,
        SqliteRegistryRepository,
    };
    use std::path::Path;
    use std::sync::Arc;

    async fn setup_repos() -> (SqliteGuestRepository, SqliteRegistryRepository) {
        // Use in-memory database for tests
        let db_state = init_db(Path::new(":memory:")).await.expect("Failed to init test DB");
        (
            SqliteGuestRepository::new(db_state.connection()),
            SqliteRegistryRepository::new(db_state.connection()),
        )
    }

    fn registry_item(id: &str, label: &str, requested: Option<u32>, received: u32) -> RegistryItem {
        RegistryItem {
            id: id.to_string(),
            label: label.to_string(),
            description: format!("{} description", label),
            price: 100.0,
            image: String::new(),
            alt: label.to_string(),
            requested_quantity: requested,
            received_quantity: received,
            purchase_link: String::new(),
            is_special_fund: false,
        }
    }

    fn gift(label: &str, quantity: u32) -> NewGift {
        NewGift {
            item_label: label.to_string(),
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: "jane@example.com".to_string(),
            quantity,
            is_special_fund: false,
        }
    }

    #[tokio::test]
    async fn test_save_assigns_guest_id() {
        let (guests, _) = setup_repos().await;

        let created = guests.save(&Guest::new(0, "John", "Doe")).await.expect("save");
        assert!(created.id > 0);

        let found = guests.find_by_id(created.id).await.expect("find").unwrap();
        assert_eq!(found.full_name(), "John Doe");
        assert_eq!(found.attending, None);
    }

    #[tokio::test]
    async fn test_save_with_id_overwrites() {
        let (guests, _) = setup_repos().await;

        guests.save(&Guest::new(1, "John", "Doe")).await.unwrap();
        let mut renamed = Guest::new(1, "Johnny", "Doe");
        renamed.email = "johnny@example.com".to_string();
        guests.save(&renamed).await.unwrap();

        let all = guests.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].first_name, "Johnny");
        assert_eq!(all[0].email, "johnny@example.com");
    }

    #[tokio::test]
    async fn test_find_by_name_is_exact() {
        let (guests, _) = setup_repos().await;
        guests.save(&Guest::new(0, "Jane", "Smith")).await.unwrap();

        assert!(guests.find_by_name("Jane", "Smith").await.unwrap().is_some());
        assert!(guests.find_by_name("Jane", "Smyth").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_rsvp_keeps_contact_when_empty() {
        let (guests, _) = setup_repos().await;
        let mut guest = Guest::new(0, "John", "Doe");
        guest.email = "john@example.com".to_string();
        guest.phone = "(123) 456-7890".to_string();
        let guest = guests.save(&guest).await.unwrap();

        let update = RsvpUpdate {
            email: String::new(),
            phone: String::new(),
            attending: true,
        };
        let updated = guests.update_rsvp(guest.id, &update).await.expect("update");

        assert_eq!(updated.attending, Some(true));
        assert_eq!(updated.email, "john@example.com");
        assert_eq!(updated.phone, "(123) 456-7890");
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_update_rsvp_overwrites_contact_when_given() {
        let (guests, _) = setup_repos().await;
        let guest = guests.save(&Guest::new(0, "John", "Doe")).await.unwrap();

        let update = RsvpUpdate {
            email: "new@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            attending: false,
        };
        let updated = guests.update_rsvp(guest.id, &update).await.unwrap();

        assert_eq!(updated.attending, Some(false));
        assert_eq!(updated.email, "new@example.com");
        assert_eq!(updated.phone, "(555) 123-4567");
    }

    #[tokio::test]
    async fn test_update_rsvp_unknown_guest() {
        let (guests, _) = setup_repos().await;
        let update = RsvpUpdate {
            email: String::new(),
            phone: String::new(),
            attending: true,
        };
        assert!(guests.update_rsvp(42, &update).await.is_err());
    }

    #[tokio::test]
    async fn test_registry_list_keeps_insert_order() {
        let (_, registry) = setup_repos().await;
        registry.save(&registry_item("b", "Zebra Rug", Some(1), 0)).await.unwrap();
        registry.save(&registry_item("a", "Apron", Some(1), 0)).await.unwrap();
        // Re-saving keeps the original position
        registry.save(&registry_item("b", "Zebra Rug", Some(2), 0)).await.unwrap();

        let items = registry.list().await.unwrap();
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(items[0].requested_quantity, Some(2));
    }

    #[tokio::test]
    async fn test_duplicate_label_is_conflict() {
        let (_, registry) = setup_repos().await;
        registry.save(&registry_item("a", "Apron", Some(1), 0)).await.unwrap();

        let err = registry.save(&registry_item("b", "Apron", Some(1), 0)).await.unwrap_err();
        assert!(matches!(err, crate::domain::DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_record_gift_increments_received() {
        let (_, registry) = setup_repos().await;
        registry
            .save(&registry_item("towel-set", "Luxury Bath Towel Set", Some(2), 1))
            .await
            .unwrap();

        let record = registry.record_gift(&gift("Luxury Bath Towel Set", 1)).await.expect("gift");
        assert!(record.id > 0);
        assert_eq!(record.quantity, 1);

        let item = registry.find_by_id("towel-set".to_string()).await.unwrap().unwrap();
        assert_eq!(item.received_quantity, 2);
        assert_eq!(registry.list_gifts().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_record_gift_rejections_leave_no_trace() {
        let (_, registry) = setup_repos().await;
        registry.save(&registry_item("mixer", "Stand Mixer", Some(2), 1)).await.unwrap();

        let err = registry.record_gift(&gift("Stand Mixer", 2)).await.unwrap_err();
        assert_eq!(
            err,
            GiftError::Rejected(GiftValidationError::QuantityExceeded {
                label: "Stand Mixer".to_string(),
                remaining: 1,
            })
        );

        let err = registry.record_gift(&gift("Blender", 1)).await.unwrap_err();
        assert_eq!(
            err,
            GiftError::Rejected(GiftValidationError::NotFound { label: "Blender".to_string() })
        );

        assert!(registry.list_gifts().await.unwrap().is_empty());
        let item = registry.find_by_id("mixer".to_string()).await.unwrap().unwrap();
        assert_eq!(item.received_quantity, 1);
    }

    #[tokio::test]
    async fn test_unlimited_item_count_unchanged() {
        let (_, registry) = setup_repos().await;
        let mut fund = registry_item("family-recipes", "Family Recipes", None, 0);
        fund.is_special_fund = true;
        registry.save(&fund).await.unwrap();

        let mut contribution = gift("Family Recipes", 1);
        contribution.is_special_fund = true;
        registry.record_gift(&contribution).await.unwrap();
        registry.record_gift(&contribution).await.unwrap();

        let item = registry.find_by_id("family-recipes".to_string()).await.unwrap().unwrap();
        assert_eq!(item.received_quantity, 0);
        assert_eq!(registry.list_gifts().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_gifts_never_overgift() {
        let (_, registry) = setup_repos().await;
        registry.save(&registry_item("vacuum", "Dyson Vacuum", Some(1), 0)).await.unwrap();
        let registry = Arc::new(registry);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                tokio::spawn(async move { registry.record_gift(&gift("Dyson Vacuum", 1)).await })
            })
            .collect();

        let mut accepted = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                accepted += 1;
            }
        }

        assert_eq!(accepted, 1);
        let item = registry.find_by_id("vacuum".to_string()).await.unwrap().unwrap();
        assert_eq!(item.received_quantity, 1);
    }

    #[tokio::test]
    async fn test_closed_database_reports_internal_error() {
        let db_state = init_db(Path::new(":memory:")).await.unwrap();
        let guests = SqliteGuestRepository::new(db_state.connection());
        db_state.close().await;

        let err = guests.list().await.unwrap_err();
        assert_eq!(err.to_string(), "Internal error: Database not initialized");
    }
}
