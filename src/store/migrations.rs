//! Schema migration runner.
//!
//! The SQL is embedded at compile time and executed on every open; all
//! statements use `IF NOT EXISTS` so re-running is idempotent.

use super::Store;
use super::error::{StoreError, StoreResult};

const MIGRATION_001: &str = include_str!("../../migrations/001_initial.sql");

impl Store {
    pub(crate) async fn run_migrations(&self) -> StoreResult<()> {
        self.conn()
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| StoreError::Migration(format!("001_initial: {e}")))?;
        Ok(())
    }
}
