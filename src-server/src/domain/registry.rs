//! Registry Entities
//!
//! Registry items, gift records and the rules deciding whether a gift fits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{DomainError, Entity};

/// Placeholder shown for items stored without an image
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/800x600/e8ddd4/5e4838?text=Gift";

/// A registry item, serialized the way the site reads it
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
    #[serde(rename = "isSpecialFund")]
    pub is_special_fund: bool,
}

impl Entity for RegistryItem {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}

impl RegistryItem {
    /// Remaining quantity, or None when the item takes unlimited gifts.
    pub fn remaining(&self) -> Option<u32> {
        if self.is_special_fund {
            return None;
        }
        self.requested_quantity
            .map(|requested| requested.saturating_sub(self.received_quantity))
    }

    /// Check whether `quantity` more can still be gifted.
    pub fn check_gift(&self, quantity: u32) -> Result<(), GiftValidationError> {
        match self.remaining() {
            None => Ok(()),
            Some(0) => Err(GiftValidationError::FullyGifted {
                label: self.label.clone(),
            }),
            Some(remaining) if quantity > remaining => Err(GiftValidationError::QuantityExceeded {
                label: self.label.clone(),
                remaining,
            }),
            Some(_) => Ok(()),
        }
    }

    /// Copy of the item with the placeholder image filled in.
    pub fn with_display_image(mut self) -> Self {
        if self.image.trim().is_empty() {
            self.image = PLACEHOLDER_IMAGE.to_string();
        }
        self
    }
}

/// A gift about to be recorded
#[derive(Debug, Clone, PartialEq)]
pub struct NewGift {
    pub item_label: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub quantity: u32,
    pub is_special_fund: bool,
}

/// A stored gift: who gave what
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftRecord {
    pub id: i64,
    pub item_label: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub quantity: u32,
    pub is_special_fund: bool,
    pub created_at: DateTime<Utc>,
}

impl Entity for GiftRecord {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Reasons a gift cannot be accepted. Display text is shown to the guest.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GiftValidationError {
    #[error("Registry item '{label}' was not found")]
    NotFound { label: String },
    #[error("Thank you, but '{label}' has already been fully gifted!")]
    FullyGifted { label: String },
    #[error("Only {remaining} more of '{label}' needed. Please adjust your quantity.")]
    QuantityExceeded { label: String, remaining: u32 },
}

/// Failure of a gift write: either the gift was rejected or storage failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GiftError {
    #[error(transparent)]
    Rejected(#[from] GiftValidationError),
    #[error(transparent)]
    Storage(#[from] DomainError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(requested: Option<u32>, received: u32) -> RegistryItem {
        RegistryItem {
            id: "towel-set".into(),
            label: "Luxury Bath Towel Set".into(),
            description: String::new(),
            price: 120.0,
            image: String::new(),
            alt: String::new(),
            requested_quantity: requested,
            received_quantity: received,
            purchase_link: String::new(),
            is_special_fund: false,
        }
    }

    #[test]
    fn test_check_gift_within_remaining() {
        assert_eq!(item(Some(2), 1).check_gift(1), Ok(()));
    }

    #[test]
    fn test_check_gift_fully_gifted() {
        let err = item(Some(2), 2).check_gift(1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Thank you, but 'Luxury Bath Towel Set' has already been fully gifted!"
        );
    }

    #[test]
    fn test_check_gift_exceeds_remaining() {
        let err = item(Some(3), 1).check_gift(3).unwrap_err();
        assert_eq!(
            err,
            GiftValidationError::QuantityExceeded { label: "Luxury Bath Towel Set".into(), remaining: 2 }
        );
        assert_eq!(
            err.to_string(),
            "Only 2 more of 'Luxury Bath Towel Set' needed. Please adjust your quantity."
        );
    }

    #[test]
    fn test_unlimited_and_special_fund_never_reject() {
        assert_eq!(item(None, 40).check_gift(100), Ok(()));

        let mut fund = item(Some(1), 1);
        fund.is_special_fund = true;
        assert_eq!(fund.check_gift(5), Ok(()));
    }

    #[test]
    fn test_display_image_placeholder() {
        assert_eq!(item(None, 0).with_display_image().image, PLACEHOLDER_IMAGE);

        let mut with_image = item(None, 0);
        with_image.image = "https://picsum.photos/seed/towels/800/600".into();
        assert_eq!(
            with_image.with_display_image().image,
            "https://picsum.photos/seed/towels/800/600"
        );
    }
}
