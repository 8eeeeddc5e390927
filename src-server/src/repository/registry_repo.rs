//! Registry Repository
//!
//! SQLite-backed registry items and gift records. Gift recording runs in a
//! single transaction so concurrent claims cannot over-gift an item.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::db::{db_error, not_initialized, SharedConnection};
use super::traits::{RegistryRepository, Repository};
use crate::domain::{
    DomainError, DomainResult, GiftError, GiftRecord, GiftValidationError, NewGift, RegistryItem,
};

const ITEM_COLUMNS: &str = "id, label, description, price, image, alt, requested_quantity, \
                            received_quantity, purchase_link, is_special_fund";

const GIFT_COLUMNS: &str =
    "id, item_label, first_name, last_name, email, quantity, is_special_fund, created_at";

/// SQLite implementation of the registry
pub struct SqliteRegistryRepository {
    conn: SharedConnection,
}

impl SqliteRegistryRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

fn row_to_item(row: &Row<'_>) -> rusqlite::Result<RegistryItem> {
    Ok(RegistryItem {
        id: row.get(0)?,
        label: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        image: row.get(4)?,
        alt: row.get(5)?,
        requested_quantity: row.get(6)?,
        received_quantity: row.get(7)?,
        purchase_link: row.get(8)?,
        is_special_fund: row.get(9)?,
    })
}

fn row_to_gift(row: &Row<'_>) -> rusqlite::Result<GiftRecord> {
    let created_at: i64 = row.get(7)?;
    Ok(GiftRecord {
        id: row.get(0)?,
        item_label: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        email: row.get(4)?,
        quantity: row.get(5)?,
        is_special_fund: row.get(6)?,
        created_at: DateTime::<Utc>::from_timestamp_millis(created_at).unwrap_or_default(),
    })
}

fn select_item_by_label(conn: &Connection, label: &str) -> DomainResult<Option<RegistryItem>> {
    conn.query_row(
        &format!("SELECT {ITEM_COLUMNS} FROM registry_items WHERE label = ?1"),
        params![label],
        row_to_item,
    )
    .optional()
    .map_err(db_error)
}

#[async_trait]
impl Repository<RegistryItem> for SqliteRegistryRepository {
    async fn save(&self, entity: &RegistryItem) -> DomainResult<RegistryItem> {
        if entity.id.trim().is_empty() {
            return Err(DomainError::InvalidInput("Registry item id is required".to_string()));
        }

        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        // New items go to the end; existing ones keep their place
        conn.execute(
            "INSERT INTO registry_items (
                id, label, description, price, image, alt, requested_quantity,
                received_quantity, purchase_link, is_special_fund, position
             )
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10,
                (SELECT COALESCE(MAX(position), -1) + 1 FROM registry_items))
             ON CONFLICT(id) DO UPDATE SET
                label = excluded.label,
                description = excluded.description,
                price = excluded.price,
                image = excluded.image,
                alt = excluded.alt,
                requested_quantity = excluded.requested_quantity,
                received_quantity = excluded.received_quantity,
                purchase_link = excluded.purchase_link,
                is_special_fund = excluded.is_special_fund",
            params![
                entity.id,
                entity.label,
                entity.description,
                entity.price,
                entity.image,
                entity.alt,
                entity.requested_quantity,
                entity.received_quantity,
                entity.purchase_link,
                entity.is_special_fund
            ],
        )
        .map_err(db_error)?;

        Ok(entity.clone())
    }

    async fn find_by_id(&self, id: String) -> DomainResult<Option<RegistryItem>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        conn.query_row(
            &format!("SELECT {ITEM_COLUMNS} FROM registry_items WHERE id = ?1"),
            params![id],
            row_to_item,
        )
        .optional()
        .map_err(db_error)
    }

    async fn list(&self) -> DomainResult<Vec<RegistryItem>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {ITEM_COLUMNS} FROM registry_items ORDER BY position, label"
            ))
            .map_err(db_error)?;
        let items = stmt
            .query_map([], row_to_item)
            .map_err(db_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_error)?;
        Ok(items)
    }
}

#[async_trait]
impl RegistryRepository for SqliteRegistryRepository {
    async fn find_by_label(&self, label: &str) -> DomainResult<Option<RegistryItem>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;
        select_item_by_label(conn, label)
    }

    async fn record_gift(&self, gift: &NewGift) -> Result<GiftRecord, GiftError> {
        let mut guard = self.conn.lock().await;
        let conn = guard.as_mut().ok_or_else(not_initialized)?;

        let tx = conn.transaction().map_err(db_error)?;

        let item = select_item_by_label(&tx, &gift.item_label)?.ok_or_else(|| {
            GiftValidationError::NotFound {
                label: gift.item_label.clone(),
            }
        })?;
        item.check_gift(gift.quantity)?;

        let created_at = Utc::now();
        tx.execute(
            "INSERT INTO gifts (item_label, first_name, last_name, email, quantity, is_special_fund, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                item.label,
                gift.first_name,
                gift.last_name,
                gift.email,
                gift.quantity,
                gift.is_special_fund,
                created_at.timestamp_millis()
            ],
        )
        .map_err(db_error)?;
        let id = tx.last_insert_rowid();

        // Unlimited items and special funds do not track a count
        if item.remaining().is_some() {
            tx.execute(
                "UPDATE registry_items SET received_quantity = received_quantity + ?1 WHERE id = ?2",
                params![gift.quantity, item.id],
            )
            .map_err(db_error)?;
        }

        tx.commit().map_err(db_error)?;

        Ok(GiftRecord {
            id,
            item_label: item.label,
            first_name: gift.first_name.clone(),
            last_name: gift.last_name.clone(),
            email: gift.email.clone(),
            quantity: gift.quantity,
            is_special_fund: gift.is_special_fund,
            created_at,
        })
    }

    async fn list_gifts(&self) -> DomainResult<Vec<GiftRecord>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let mut stmt = conn
            .prepare(&format!("SELECT {GIFT_COLUMNS} FROM gifts ORDER BY id"))
            .map_err(db_error)?;
        let gifts = stmt
            .query_map([], row_to_gift)
            .map_err(db_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_error)?;
        Ok(gifts)
    }
}
