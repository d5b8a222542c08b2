//! Research repository — list and search by item pair.

use crate::domain::Research;
use crate::store::Store;
use crate::store::error::StoreResult;

fn row_to_research(row: &libsql::Row) -> StoreResult<Research> {
    Ok(Research {
        id: row.get::<i64>(0)?,
        primary_item: row.get::<String>(1)?,
        secondary_item: row.get::<String>(2)?,
    })
}

impl Store {
    /// Create a research grouping.
    pub async fn create_research(
        &self,
        primary_item: &str,
        secondary_item: &str,
    ) -> StoreResult<Research> {
        self.conn()
            .execute(
                "INSERT INTO researches (primary_item, secondary_item) VALUES (?1, ?2)",
                [primary_item, secondary_item],
            )
            .await?;
        Ok(Research {
            id: self.conn().last_insert_rowid(),
            primary_item: primary_item.to_string(),
            secondary_item: secondary_item.to_string(),
        })
    }

    /// List all researches ordered by id.
    pub async fn list_researches(&self) -> StoreResult<Vec<Research>> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, primary_item, secondary_item FROM researches ORDER BY id",
                (),
            )
            .await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_research(&row)?);
        }
        Ok(items)
    }

    /// Search researches by primary and/or secondary item (exact match,
    /// either filter optional).
    pub async fn search_researches(
        &self,
        primary_item: Option<&str>,
        secondary_item: Option<&str>,
    ) -> StoreResult<Vec<Research>> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, primary_item, secondary_item FROM researches \
                 WHERE (?1 IS NULL OR primary_item = ?1) \
                   AND (?2 IS NULL OR secondary_item = ?2) \
                 ORDER BY id",
                libsql::params![primary_item, secondary_item],
            )
            .await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_research(&row)?);
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use crate::store::Store;

    #[tokio::test]
    async fn search_filters_by_either_item() {
        let store = Store::open_in_memory().await.unwrap();

        store.create_research("Obesity", "GLP-1").await.unwrap();
        store.create_research("Obesity", "SGLT2").await.unwrap();
        store.create_research("Oncology", "GLP-1").await.unwrap();

        assert_eq!(store.list_researches().await.unwrap().len(), 3);
        assert_eq!(
            store
                .search_researches(Some("Obesity"), None)
                .await
                .unwrap()
                .len(),
            2
        );
        assert_eq!(
            store
                .search_researches(None, Some("GLP-1"))
                .await
                .unwrap()
                .len(),
            2
        );
        assert_eq!(
            store
                .search_researches(Some("Obesity"), Some("SGLT2"))
                .await
                .unwrap()
                .len(),
            1
        );
    }
}
