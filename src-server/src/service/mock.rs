//! In-memory repositories for service tests.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::{
    DomainError, DomainResult, GiftError, GiftRecord, GiftValidationError, Guest, NewGift,
    RegistryItem, RsvpUpdate,
};
use crate::repository::{GuestRepository, RegistryRepository, Repository};

fn storage_down() -> DomainError {
    DomainError::Internal("storage unavailable".to_string())
}

#[derive(Default)]
pub struct MockGuestRepository {
    guests: Mutex<Vec<Guest>>,
    updates: AtomicUsize,
    fail: bool,
}

impl MockGuestRepository {
    pub fn with_guests(guests: Vec<Guest>) -> Self {
        Self {
            guests: Mutex::new(guests),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub fn guest(&self, id: i64) -> Option<Guest> {
        self.guests.lock().unwrap().iter().find(|g| g.id == id).cloned()
    }

    fn check(&self) -> DomainResult<()> {
        if self.fail {
            Err(storage_down())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Repository<Guest> for MockGuestRepository {
    async fn save(&self, entity: &Guest) -> DomainResult<Guest> {
        self.check()?;
        let mut guests = self.guests.lock().unwrap();
        guests.retain(|g| g.id != entity.id);
        guests.push(entity.clone());
        Ok(entity.clone())
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Guest>> {
        self.check()?;
        Ok(self.guest(id))
    }

    async fn list(&self) -> DomainResult<Vec<Guest>> {
        self.check()?;
        Ok(self.guests.lock().unwrap().clone())
    }
}

#[async_trait]
impl GuestRepository for MockGuestRepository {
    async fn find_by_name(&self, first_name: &str, last_name: &str) -> DomainResult<Option<Guest>> {
        self.check()?;
        Ok(self
            .guests
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.first_name == first_name && g.last_name == last_name)
            .cloned())
    }

    async fn update_rsvp(&self, id: i64, update: &RsvpUpdate) -> DomainResult<Guest> {
        self.check()?;
        let mut guests = self.guests.lock().unwrap();
        let guest = guests
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("Guest {}", id)))?;

        guest.attending = Some(update.attending);
        guest.updated_at = Some(Utc::now());
        if !update.email.is_empty() {
            guest.email = update.email.clone();
        }
        if !update.phone.is_empty() {
            guest.phone = update.phone.clone();
        }
        self.updates.fetch_add(1, Ordering::SeqCst);
        Ok(guest.clone())
    }
}

#[derive(Default)]
pub struct MockRegistryRepository {
    items: Mutex<Vec<RegistryItem>>,
    gifts: Mutex<Vec<GiftRecord>>,
    fail: bool,
}

impl MockRegistryRepository {
    pub fn with_items(items: Vec<RegistryItem>) -> Self {
        Self {
            items: Mutex::new(items),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn item(&self, id: &str) -> Option<RegistryItem> {
        self.items.lock().unwrap().iter().find(|i| i.id == id).cloned()
    }

    pub fn gifts(&self) -> Vec<GiftRecord> {
        self.gifts.lock().unwrap().clone()
    }

    fn check(&self) -> DomainResult<()> {
        if self.fail {
            Err(storage_down())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Repository<RegistryItem> for MockRegistryRepository {
    async fn save(&self, entity: &RegistryItem) -> DomainResult<RegistryItem> {
        self.check()?;
        let mut items = self.items.lock().unwrap();
        items.retain(|i| i.id != entity.id);
        items.push(entity.clone());
        Ok(entity.clone())
    }

    async fn find_by_id(&self, id: String) -> DomainResult<Option<RegistryItem>> {
        self.check()?;
        Ok(self.item(&id))
    }

    async fn list(&self) -> DomainResult<Vec<RegistryItem>> {
        self.check()?;
        Ok(self.items.lock().unwrap().clone())
    }
}

#[async_trait]
impl RegistryRepository for MockRegistryRepository {
    async fn find_by_label(&self, label: &str) -> DomainResult<Option<RegistryItem>> {
        self.check()?;
        Ok(self.items.lock().unwrap().iter().find(|i| i.label == label).cloned())
    }

    async fn record_gift(&self, gift: &NewGift) -> Result<GiftRecord, GiftError> {
        self.check()?;
        let mut items = self.items.lock().unwrap();
        let item = items
            .iter_mut()
            .find(|i| i.label == gift.item_label)
            .ok_or_else(|| GiftValidationError::NotFound {
                label: gift.item_label.clone(),
            })?;
        item.check_gift(gift.quantity)?;
        if item.remaining().is_some() {
            item.received_quantity += gift.quantity;
        }

        let mut gifts = self.gifts.lock().unwrap();
        let record = GiftRecord {
            id: gifts.len() as i64 + 1,
            item_label: item.label.clone(),
            first_name: gift.first_name.clone(),
            last_name: gift.last_name.clone(),
            email: gift.email.clone(),
            quantity: gift.quantity,
            is_special_fund: gift.is_special_fund,
            created_at: Utc::now(),
        };
        gifts.push(record.clone());
        Ok(record)
    }

    async fn list_gifts(&self) -> DomainResult<Vec<GiftRecord>> {
        self.check()?;
        Ok(self.gifts())
    }
}
