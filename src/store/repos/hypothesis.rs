//! Hypothesis repository — get by natural key, get by id, get-or-create.

use tracing::debug;

use crate::domain::Hypothesis;
use crate::store::Store;
use crate::store::error::{StoreError, StoreResult, is_unique_violation};

fn row_to_hypothesis(row: &libsql::Row) -> StoreResult<Hypothesis> {
    Ok(Hypothesis {
        id: row.get::<i64>(0)?,
        title: row.get::<String>(1)?,
    })
}

impl Store {
    /// Get a hypothesis by its title (the natural key).
    pub async fn get_hypothesis_by_title(&self, title: &str) -> StoreResult<Option<Hypothesis>> {
        let mut rows = self
            .conn()
            .query("SELECT id, title FROM hypotheses WHERE title = ?1", [title])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_hypothesis(&row)?)),
            None => Ok(None),
        }
    }

    /// Get a hypothesis by id.
    pub async fn get_hypothesis(&self, id: i64) -> StoreResult<Option<Hypothesis>> {
        let mut rows = self
            .conn()
            .query("SELECT id, title FROM hypotheses WHERE id = ?1", [id])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_hypothesis(&row)?)),
            None => Ok(None),
        }
    }

    /// Get the hypothesis with this title, creating it if absent.
    ///
    /// Create-or-recover: a uniqueness violation from a racing create is
    /// resolved by re-reading the existing row, never surfaced.
    pub async fn get_or_create_hypothesis(&self, title: &str) -> StoreResult<Hypothesis> {
        if let Some(existing) = self.get_hypothesis_by_title(title).await? {
            return Ok(existing);
        }

        match self
            .conn()
            .execute("INSERT INTO hypotheses (title) VALUES (?1)", [title])
            .await
        {
            Ok(_) => {
                let id = self.conn().last_insert_rowid();
                debug!(id, "hypothesis created");
                Ok(Hypothesis {
                    id,
                    title: title.to_string(),
                })
            }
            Err(e) if is_unique_violation(&e) => self
                .get_hypothesis_by_title(title)
                .await?
                .ok_or(StoreError::UnrecoveredConflict {
                    entity: "hypotheses",
                }),
            Err(e) => Err(e.into()),
        }
    }

    /// List all hypotheses ordered by id.
    pub async fn list_hypotheses(&self) -> StoreResult<Vec<Hypothesis>> {
        let mut rows = self
            .conn()
            .query("SELECT id, title FROM hypotheses ORDER BY id", ())
            .await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_hypothesis(&row)?);
        }
        Ok(items)
    }
}
