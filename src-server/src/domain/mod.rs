//! Domain Layer
//!
//! Guests, registry items and gift records, plus the shared error types.
//! This layer has NO storage or HTTP dependencies.

mod entity;
mod guest;
mod registry;

pub use entity::{DomainError, DomainResult, Entity};
pub use guest::{attending_label, Guest, RsvpUpdate};
pub use registry::{GiftError, GiftRecord, GiftValidationError, NewGift, RegistryItem, PLACEHOLDER_IMAGE};
