//! libSQL-backed repositories for the validation entities.
//!
//! The database row is the cache: the orchestrator treats these
//! repositories as the source of truth and holds no state of its own.
//! Every `create` here follows the create-or-recover contract — attempt
//! the INSERT, and on a uniqueness violation re-read the existing row by
//! natural key — so two callers racing to create the same entity converge
//! on the same row instead of failing.

pub mod error;
mod helpers;
mod migrations;
pub mod repos;

pub use error::{StoreError, StoreResult};

/// Central database handle.
///
/// Wraps a libSQL database and connection. Opened once at startup and
/// shared behind an `Arc`; the connection is safe to use concurrently.
pub struct Store {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl Store {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or migrations
    /// fail.
    pub async fn open_local(path: impl AsRef<std::path::Path>) -> StoreResult<Self> {
        let db = libsql::Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Per-connection pragma in SQLite.
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| StoreError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let store = Self { db, conn };
        store.run_migrations().await?;
        Ok(store)
    }

    pub(crate) fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

#[cfg(any(test, feature = "mock"))]
impl Store {
    /// In-memory store for tests.
    pub async fn open_in_memory() -> StoreResult<Self> {
        Self::open_local(":memory:").await
    }
}
