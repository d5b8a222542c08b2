//! ValidationResult repository.
//!
//! At most one result per `(hypothesis_id, article_id)` pair; the row is
//! the durable cache entry the orchestrator consults before ever touching
//! the fetcher or the judge.

use tracing::debug;

use crate::domain::ValidationResult;
use crate::judge::Assessment;
use crate::store::Store;
use crate::store::error::{StoreError, StoreResult, is_unique_violation};

const SELECT_COLS: &str = "id, hypothesis_id, article_id, relevancy, key_take, validity";

fn row_to_result(row: &libsql::Row) -> StoreResult<ValidationResult> {
    Ok(ValidationResult {
        id: row.get::<i64>(0)?,
        hypothesis_id: row.get::<i64>(1)?,
        article_id: row.get::<i64>(2)?,
        relevancy: row.get::<f64>(3)?,
        key_take: row.get::<String>(4)?,
        validity: row.get::<f64>(5)?,
    })
}

impl Store {
    /// Get the cached result for a `(hypothesis, article)` pair.
    pub async fn get_result(
        &self,
        hypothesis_id: i64,
        article_id: i64,
    ) -> StoreResult<Option<ValidationResult>> {
        let sql = format!(
            "SELECT {SELECT_COLS} FROM validation_results \
             WHERE hypothesis_id = ?1 AND article_id = ?2"
        );
        let mut rows = self
            .conn()
            .query(&sql, [hypothesis_id, article_id])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_result(&row)?)),
            None => Ok(None),
        }
    }

    /// Persist a judge assessment for a pair.
    ///
    /// Two concurrent validations of the same pair can both reach this
    /// point; the loser of the race recovers by re-reading the winner's
    /// row, so both callers observe the same stored judgment.
    pub async fn create_result(
        &self,
        hypothesis_id: i64,
        article_id: i64,
        assessment: &Assessment,
    ) -> StoreResult<ValidationResult> {
        let insert = self
            .conn()
            .execute(
                "INSERT INTO validation_results \
                 (hypothesis_id, article_id, relevancy, key_take, validity) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    hypothesis_id,
                    article_id,
                    assessment.relevancy,
                    assessment.key_take.as_str(),
                    assessment.validity
                ],
            )
            .await;

        match insert {
            Ok(_) => {
                let id = self.conn().last_insert_rowid();
                debug!(id, hypothesis_id, article_id, "validation result stored");
                Ok(ValidationResult {
                    id,
                    hypothesis_id,
                    article_id,
                    relevancy: assessment.relevancy,
                    key_take: assessment.key_take.clone(),
                    validity: assessment.validity,
                })
            }
            Err(e) if is_unique_violation(&e) => self
                .get_result(hypothesis_id, article_id)
                .await?
                .ok_or(StoreError::UnrecoveredConflict {
                    entity: "validation_results",
                }),
            Err(e) => Err(e.into()),
        }
    }
}
