//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;

use crate::domain::{
    DomainResult, Entity, GiftError, GiftRecord, Guest, NewGift, RegistryItem, RsvpUpdate,
};

/// Core repository trait shared by every stored entity
///
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Insert the entity, replacing any stored entity with the same ID
    async fn save(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities
    async fn list(&self) -> DomainResult<Vec<T>>;
}

/// Guest list lookups and RSVP writes
#[async_trait]
pub trait GuestRepository: Repository<Guest> {
    /// Exact match on already normalized names
    async fn find_by_name(&self, first_name: &str, last_name: &str) -> DomainResult<Option<Guest>>;

    /// Store an RSVP and return the updated guest
    async fn update_rsvp(&self, id: i64, update: &RsvpUpdate) -> DomainResult<Guest>;
}

/// Registry items and the gifts made against them
#[async_trait]
pub trait RegistryRepository: Repository<RegistryItem> {
    async fn find_by_label(&self, label: &str) -> DomainResult<Option<RegistryItem>>;

    /// Validate availability and store the gift atomically.
    ///
    /// Items with a requested quantity get their received quantity raised
    /// by the gifted amount in the same write.
    async fn record_gift(&self, gift: &NewGift) -> Result<GiftRecord, GiftError>;

    async fn list_gifts(&self) -> DomainResult<Vec<GiftRecord>>;
}
