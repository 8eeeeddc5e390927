//! Guest Repository
//!
//! SQLite-backed guest list with RSVP updates.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::db::{db_error, not_initialized, SharedConnection};
use super::traits::{GuestRepository, Repository};
use crate::domain::{DomainError, DomainResult, Guest, RsvpUpdate};

const GUEST_COLUMNS: &str = "id, first_name, last_name, email, phone, attending, updated_at";

/// SQLite implementation of the guest list
pub struct SqliteGuestRepository {
    conn: SharedConnection,
}

impl SqliteGuestRepository {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

fn row_to_guest(row: &Row<'_>) -> rusqlite::Result<Guest> {
    let updated_at: Option<i64> = row.get(6)?;
    Ok(Guest {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
        attending: row.get(5)?,
        updated_at: updated_at.and_then(DateTime::<Utc>::from_timestamp_millis),
    })
}

fn select_guest(conn: &Connection, id: i64) -> DomainResult<Option<Guest>> {
    conn.query_row(
        &format!("SELECT {GUEST_COLUMNS} FROM guests WHERE id = ?1"),
        params![id],
        row_to_guest,
    )
    .optional()
    .map_err(db_error)
}

#[async_trait]
impl Repository<Guest> for SqliteGuestRepository {
    async fn save(&self, entity: &Guest) -> DomainResult<Guest> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let updated_at = entity.updated_at.map(|t| t.timestamp_millis());
        // id 0 means "assign one"
        let id = (entity.id > 0).then_some(entity.id);

        conn.execute(
            "INSERT INTO guests (id, first_name, last_name, email, phone, attending, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(id) DO UPDATE SET
                first_name = excluded.first_name,
                last_name = excluded.last_name,
                email = excluded.email,
                phone = excluded.phone,
                attending = excluded.attending,
                updated_at = excluded.updated_at",
            params![
                id,
                entity.first_name,
                entity.last_name,
                entity.email,
                entity.phone,
                entity.attending,
                updated_at
            ],
        )
        .map_err(db_error)?;

        let mut guest = entity.clone();
        guest.id = id.unwrap_or_else(|| conn.last_insert_rowid());
        Ok(guest)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Guest>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;
        select_guest(conn, id)
    }

    async fn list(&self) -> DomainResult<Vec<Guest>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {GUEST_COLUMNS} FROM guests ORDER BY last_name, first_name"
            ))
            .map_err(db_error)?;
        let guests = stmt
            .query_map([], row_to_guest)
            .map_err(db_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_error)?;
        Ok(guests)
    }
}

#[async_trait]
impl GuestRepository for SqliteGuestRepository {
    async fn find_by_name(&self, first_name: &str, last_name: &str) -> DomainResult<Option<Guest>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        conn.query_row(
            &format!(
                "SELECT {GUEST_COLUMNS} FROM guests WHERE first_name = ?1 AND last_name = ?2 ORDER BY id LIMIT 1"
            ),
            params![first_name, last_name],
            row_to_guest,
        )
        .optional()
        .map_err(db_error)
    }

    async fn update_rsvp(&self, id: i64, update: &RsvpUpdate) -> DomainResult<Guest> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(not_initialized)?;

        let changed = conn
            .execute(
                "UPDATE guests SET
                    attending = ?1,
                    updated_at = ?2,
                    email = CASE WHEN ?3 = '' THEN email ELSE ?3 END,
                    phone = CASE WHEN ?4 = '' THEN phone ELSE ?4 END
                 WHERE id = ?5",
                params![
                    update.attending,
                    Utc::now().timestamp_millis(),
                    update.email,
                    update.phone,
                    id
                ],
            )
            .map_err(db_error)?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("Guest {}", id)));
        }

        select_guest(conn, id)?.ok_or_else(|| DomainError::NotFound(format!("Guest {}", id)))
    }
}
