//! Registry Service

use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use super::ServiceError;
use crate::domain::{NewGift, RegistryItem};
use crate::normalize::{normalize_email, normalize_name};
use crate::repository::RegistryRepository;

/// Body of a gift claim
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GiftRequest {
    #[serde(rename = "firstname", default)]
    pub first_name: String,
    #[serde(rename = "lastname", default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(rename = "itemLabel", default)]
    pub item_label: String,
    #[serde(rename = "isSpecialFund", default)]
    pub is_special_fund: bool,
}

pub struct RegistryService {
    registry: Arc<dyn RegistryRepository>,
}

impl RegistryService {
    pub fn new(registry: Arc<dyn RegistryRepository>) -> Self {
        Self { registry }
    }

    /// All items in display order, with the placeholder image filled in.
    pub async fn list_items(&self) -> Result<Vec<RegistryItem>, ServiceError> {
        let items = self.registry.list().await?;
        Ok(items.into_iter().map(RegistryItem::with_display_image).collect())
    }

    /// Record a gift and return the thank-you message.
    pub async fn record_gift(&self, request: GiftRequest) -> Result<String, ServiceError> {
        let gift = Self::validate(request)?;
        let record = self.registry.record_gift(&gift).await?;

        info!(
            gift_id = record.id,
            item = %record.item_label,
            quantity = record.quantity,
            special_fund = record.is_special_fund,
            "Gift recorded"
        );

        let giver = format!("{} {}", record.first_name, record.last_name);
        Ok(if record.is_special_fund {
            format!(
                "Thank you, {}, for your generous contribution to our {}!",
                giver, record.item_label
            )
        } else {
            format!("Thank you, {}, for gifting us {}!", giver, record.item_label)
        })
    }

    fn validate(request: GiftRequest) -> Result<NewGift, ServiceError> {
        let first_name = normalize_name(&request.first_name);
        let last_name = normalize_name(&request.last_name);
        if first_name.is_empty() || last_name.is_empty() {
            return Err(ServiceError::InvalidRequest(
                "First name and last name are required".to_string(),
            ));
        }

        let item_label = request.item_label.trim();
        if item_label.is_empty() {
            return Err(ServiceError::InvalidRequest("Item label is required".to_string()));
        }

        // Special funds take a contribution without a count
        let quantity = match request.quantity {
            q if q >= 1 => q,
            _ if request.is_special_fund => 1,
            _ => {
                return Err(ServiceError::InvalidRequest(
                    "Quantity must be at least 1".to_string(),
                ))
            }
        };
        let quantity = u32::try_from(quantity)
            .map_err(|_| ServiceError::InvalidRequest("Quantity is too large".to_string()))?;

        Ok(NewGift {
            item_label: item_label.to_string(),
            first_name,
            last_name,
            email: normalize_email(&request.email),
            quantity,
            is_special_fund: request.is_special_fund,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, GiftValidationError, PLACEHOLDER_IMAGE};
    use crate::service::mock::MockRegistryRepository;

    fn item(id: &str, label: &str, requested: Option<u32>, received: u32) -> RegistryItem {
        RegistryItem {
            id: id.to_string(),
            label: label.to_string(),
            description: String::new(),
            price: 50.0,
            image: format!("https://picsum.photos/seed/{id}/800/600"),
            alt: label.to_string(),
            requested_quantity: requested,
            received_quantity: received,
            purchase_link: String::new(),
            is_special_fund: false,
        }
    }

    fn request(label: &str, quantity: i64) -> GiftRequest {
        GiftRequest {
            first_name: "jane".to_string(),
            last_name: "SMITH".to_string(),
            email: " Jane@Example.com".to_string(),
            quantity,
            item_label: label.to_string(),
            is_special_fund: false,
        }
    }

    fn service_with(items: Vec<RegistryItem>) -> (RegistryService, Arc<MockRegistryRepository>) {
        let repo = Arc::new(MockRegistryRepository::with_items(items));
        (RegistryService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_list_items_fills_placeholder() {
        let mut bare = item("plates", "Dinner Plate Set", Some(1), 0);
        bare.image = String::new();
        let (service, _) = service_with(vec![item("mixer", "Stand Mixer", Some(1), 0), bare]);

        let items = service.list_items().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].image, "https://picsum.photos/seed/mixer/800/600");
        assert_eq!(items[1].image, PLACEHOLDER_IMAGE);
    }

    #[tokio::test]
    async fn test_gift_success() {
        let (service, repo) = service_with(vec![item("towel-set", "Luxury Bath Towel Set", Some(2), 1)]);

        let message = service.record_gift(request("Luxury Bath Towel Set", 1)).await.unwrap();
        assert_eq!(message, "Thank you, Jane Smith, for gifting us Luxury Bath Towel Set!");

        let gifts = repo.gifts();
        assert_eq!(gifts.len(), 1);
        assert_eq!(gifts[0].email, "jane@example.com");
        assert_eq!(repo.item("towel-set").unwrap().received_quantity, 2);
    }

    #[tokio::test]
    async fn test_gift_item_not_found() {
        let (service, _) = service_with(vec![]);

        let err = service.record_gift(request("Blender", 1)).await.unwrap_err();
        assert_eq!(err.to_string(), "Registry item 'Blender' was not found");
    }

    #[tokio::test]
    async fn test_gift_fully_gifted() {
        let (service, _) = service_with(vec![item("mixer", "Stand Mixer", Some(1), 1)]);

        let err = service.record_gift(request("Stand Mixer", 1)).await.unwrap_err();
        assert_eq!(
            err,
            ServiceError::Gift(GiftValidationError::FullyGifted { label: "Stand Mixer".into() })
        );
        assert_eq!(err.to_string(), "Thank you, but 'Stand Mixer' has already been fully gifted!");
    }

    #[tokio::test]
    async fn test_gift_exceeds_remaining() {
        let (service, repo) = service_with(vec![item("towel-set", "Towels", Some(3), 1)]);

        let err = service.record_gift(request("Towels", 3)).await.unwrap_err();
        assert_eq!(err.to_string(), "Only 2 more of 'Towels' needed. Please adjust your quantity.");
        assert!(repo.gifts().is_empty());
    }

    #[tokio::test]
    async fn test_unlimited_item_accepts_any_quantity() {
        let (service, repo) = service_with(vec![item("honeymoon", "Honeymoon", None, 0)]);

        service.record_gift(request("Honeymoon", 25)).await.unwrap();
        assert_eq!(repo.item("honeymoon").unwrap().received_quantity, 0);
    }

    #[tokio::test]
    async fn test_special_fund_contribution() {
        let mut fund = item("family-recipes", "Family Recipes", None, 0);
        fund.is_special_fund = true;
        let (service, repo) = service_with(vec![fund]);

        let mut req = request("Family Recipes", 0);
        req.is_special_fund = true;
        let message = service.record_gift(req).await.unwrap();

        assert_eq!(
            message,
            "Thank you, Jane Smith, for your generous contribution to our Family Recipes!"
        );
        assert_eq!(repo.gifts()[0].quantity, 1);
    }

    #[tokio::test]
    async fn test_gift_request_validation() {
        let (service, _) = service_with(vec![item("mixer", "Stand Mixer", Some(1), 0)]);

        let mut req = request("Stand Mixer", 1);
        req.last_name = "  ".to_string();
        let err = service.record_gift(req).await.unwrap_err();
        assert_eq!(err.to_string(), "First name and last name are required");

        let err = service.record_gift(request("", 1)).await.unwrap_err();
        assert_eq!(err.to_string(), "Item label is required");

        let err = service.record_gift(request("Stand Mixer", 0)).await.unwrap_err();
        assert_eq!(err.to_string(), "Quantity must be at least 1");

        let err = service.record_gift(request("Stand Mixer", -2)).await.unwrap_err();
        assert_eq!(err.to_string(), "Quantity must be at least 1");
    }

    #[tokio::test]
    async fn test_storage_failure() {
        let service = RegistryService::new(Arc::new(MockRegistryRepository::failing()));

        let err = service.record_gift(request("Stand Mixer", 1)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::Internal(_))));
        assert!(service.list_items().await.is_err());
    }
}
