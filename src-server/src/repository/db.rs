//! Database Connection and Setup
//!
//! Manages SQLite database connection and migrations.

use rusqlite::{Connection, ErrorCode};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Connection handle shared by all repositories
pub type SharedConnection = Arc<Mutex<Option<Connection>>>;

/// Database state wrapper
#[derive(Clone)]
pub struct DbState {
    conn: SharedConnection,
    path: PathBuf,
}

impl DbState {
    pub fn connection(&self) -> SharedConnection {
        self.conn.clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Close the connection; later repository calls fail with `Internal`
    pub async fn close(&self) {
        self.conn.lock().await.take();
    }
}

/// Map a SQLite error onto the domain error type
pub(crate) fn db_error(e: rusqlite::Error) -> DomainError {
    match e.sqlite_error_code() {
        Some(ErrorCode::ConstraintViolation) => DomainError::Conflict(e.to_string()),
        _ => DomainError::Internal(e.to_string()),
    }
}

pub(crate) fn not_initialized() -> DomainError {
    DomainError::Internal("Database not initialized".to_string())
}

/// Initialize database with path (`:memory:` for a private in-memory database)
pub async fn init_db(db_path: &Path) -> DomainResult<DbState> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| DomainError::Internal(format!("Failed to create db dir: {}", e)))?;
    }

    let conn = Connection::open(db_path).map_err(db_error)?;
    conn.busy_timeout(Duration::from_secs(5)).map_err(db_error)?;

    // Run migrations
    run_migrations(&conn)?;

    Ok(DbState {
        conn: Arc::new(Mutex::new(Some(conn))),
        path: db_path.to_path_buf(),
    })
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS guests (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT NOT NULL DEFAULT '',
            phone TEXT NOT NULL DEFAULT '',
            attending INTEGER,
            updated_at INTEGER
        );
        CREATE INDEX IF NOT EXISTS idx_guests_name ON guests(first_name, last_name);

        CREATE TABLE IF NOT EXISTS registry_items (
            id TEXT PRIMARY KEY,
            label TEXT NOT NULL UNIQUE,
            description TEXT NOT NULL DEFAULT '',
            price REAL NOT NULL DEFAULT 0,
            image TEXT NOT NULL DEFAULT '',
            alt TEXT NOT NULL DEFAULT '',
            requested_quantity INTEGER,
            received_quantity INTEGER NOT NULL DEFAULT 0,
            purchase_link TEXT NOT NULL DEFAULT '',
            is_special_fund INTEGER NOT NULL DEFAULT 0,
            position INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS gifts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            item_label TEXT NOT NULL,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT NOT NULL DEFAULT '',
            quantity INTEGER NOT NULL,
            is_special_fund INTEGER NOT NULL DEFAULT 0,
            created_at INTEGER NOT NULL
        );",
    )
    .map_err(db_error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_column(conn: &Connection, table: &str, column: &str) -> bool {
        conn.prepare(&format!("SELECT {column} FROM {table} LIMIT 0")).is_ok()
    }

    #[tokio::test]
    async fn test_init_memory_db_runs_migrations() {
        let state = init_db(Path::new(":memory:")).await.expect("init");
        let conn = state.connection();
        let guard = conn.lock().await;
        let conn = guard.as_ref().unwrap();

        assert!(has_column(conn, "guests", "attending"));
        assert!(has_column(conn, "registry_items", "position"));
        assert!(has_column(conn, "gifts", "created_at"));
        assert!(!has_column(conn, "gifts", "nope"));
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("wedding.db");

        let first = init_db(&path).await.expect("first init");
        first.close().await;

        let second = init_db(&path).await.expect("second init");
        assert_eq!(second.path(), path.as_path());
    }

    #[tokio::test]
    async fn test_closed_state_has_no_connection() {
        let state = init_db(Path::new(":memory:")).await.unwrap();
        state.close().await;
        assert!(state.connection().lock().await.is_none());
    }
}
