//! Article repository.
//!
//! The natural key is `(url, research_id)`. The unique index leaves NULL
//! research rows unconstrained (SQLite treats NULLs as distinct), so the
//! lookup matches NULL explicitly with `IS` to keep get-or-create
//! idempotent for research-less articles.

use tracing::debug;

use crate::domain::{Article, NewArticle, derive_topic_fields};
use crate::store::Store;
use crate::store::error::{StoreError, StoreResult, is_unique_violation};
use crate::store::helpers::{get_opt_i64, get_opt_string};

const SELECT_COLS: &str =
    "id, title, url, content, topic, main_item, secondary_item, research_id";

fn row_to_article(row: &libsql::Row) -> StoreResult<Article> {
    Ok(Article {
        id: row.get::<i64>(0)?,
        title: get_opt_string(row, 1)?,
        url: row.get::<String>(2)?,
        content: row.get::<String>(3)?,
        topic: get_opt_string(row, 4)?,
        main_item: get_opt_string(row, 5)?,
        secondary_item: get_opt_string(row, 6)?,
        research_id: get_opt_i64(row, 7)?,
    })
}

impl Store {
    /// Get an article by its natural key.
    pub async fn get_article_by_url(
        &self,
        url: &str,
        research_id: Option<i64>,
    ) -> StoreResult<Option<Article>> {
        let sql =
            format!("SELECT {SELECT_COLS} FROM articles WHERE url = ?1 AND research_id IS ?2");
        let mut rows = self
            .conn()
            .query(&sql, libsql::params![url, research_id])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_article(&row)?)),
            None => Ok(None),
        }
    }

    /// Get an article by id.
    pub async fn get_article(&self, id: i64) -> StoreResult<Option<Article>> {
        let sql = format!("SELECT {SELECT_COLS} FROM articles WHERE id = ?1");
        let mut rows = self.conn().query(&sql, [id]).await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_article(&row)?)),
            None => Ok(None),
        }
    }

    /// Persist a new article, applying the topic derivation.
    ///
    /// On a uniqueness race against another create of the same
    /// `(url, research_id)`, recovers by re-reading the existing row.
    pub async fn create_article(&self, new: NewArticle) -> StoreResult<Article> {
        let fields = derive_topic_fields(
            new.topic.as_deref(),
            new.main_item.as_deref(),
            new.secondary_item.as_deref(),
        );

        let insert = self
            .conn()
            .execute(
                "INSERT INTO articles \
                 (title, url, content, topic, main_item, secondary_item, research_id) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params![
                    new.title.as_deref(),
                    new.url.as_str(),
                    new.content.as_str(),
                    fields.topic.as_deref(),
                    fields.main_item.as_deref(),
                    fields.secondary_item.as_deref(),
                    new.research_id
                ],
            )
            .await;

        match insert {
            Ok(_) => {
                let id = self.conn().last_insert_rowid();
                debug!(id, url = %new.url, "article created");
                Ok(Article {
                    id,
                    title: new.title,
                    url: new.url,
                    content: new.content,
                    topic: fields.topic,
                    main_item: fields.main_item,
                    secondary_item: fields.secondary_item,
                    research_id: new.research_id,
                })
            }
            Err(e) if is_unique_violation(&e) => self
                .get_article_by_url(&new.url, new.research_id)
                .await?
                .ok_or(StoreError::UnrecoveredConflict { entity: "articles" }),
            Err(e) => Err(e.into()),
        }
    }

    /// List all articles grouped under a research.
    pub async fn get_articles_by_research(&self, research_id: i64) -> StoreResult<Vec<Article>> {
        let sql =
            format!("SELECT {SELECT_COLS} FROM articles WHERE research_id = ?1 ORDER BY id");
        let mut rows = self.conn().query(&sql, [research_id]).await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_article(&row)?);
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::NewArticle;
    use crate::store::Store;

    fn article(url: &str, research_id: Option<i64>) -> NewArticle {
        NewArticle {
            title: Some("A title".to_string()),
            url: url.to_string(),
            content: "Body text".to_string(),
            research_id,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn natural_key_lookup_matches_null_research() {
        let store = Store::open_in_memory().await.unwrap();

        let created = store
            .create_article(article("https://example.org/a", None))
            .await
            .unwrap();
        let found = store
            .get_article_by_url("https://example.org/a", None)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.id, created.id);
    }

    #[tokio::test]
    async fn same_url_distinct_research_rows_coexist() {
        let store = Store::open_in_memory().await.unwrap();
        let research = store.create_research("Obesity", "GLP-1").await.unwrap();

        let a = store
            .create_article(article("https://example.org/a", None))
            .await
            .unwrap();
        let b = store
            .create_article(article("https://example.org/a", Some(research.id)))
            .await
            .unwrap();

        assert_ne!(a.id, b.id);
        let by_research = store
            .get_article_by_url("https://example.org/a", Some(research.id))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_research.id, b.id);
    }

    #[tokio::test]
    async fn duplicate_create_recovers_existing_row() {
        let store = Store::open_in_memory().await.unwrap();
        let research = store.create_research("Obesity", "GLP-1").await.unwrap();

        let first = store
            .create_article(article("https://example.org/a", Some(research.id)))
            .await
            .unwrap();
        let second = store
            .create_article(article("https://example.org/a", Some(research.id)))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
    }

    #[tokio::test]
    async fn topic_derivation_applied_on_create() {
        let store = Store::open_in_memory().await.unwrap();

        let created = store
            .create_article(NewArticle {
                url: "https://example.org/t".to_string(),
                content: "text".to_string(),
                topic: Some("Obesity - GLP-1 receptor".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(created.main_item.as_deref(), Some("Obesity"));
        assert_eq!(created.secondary_item.as_deref(), Some("GLP-1 receptor"));

        let fetched = store.get_article(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.topic.as_deref(), Some("Obesity - GLP-1 receptor"));
    }

    #[tokio::test]
    async fn list_by_research() {
        let store = Store::open_in_memory().await.unwrap();
        let research = store.create_research("Obesity", "GLP-1").await.unwrap();

        store
            .create_article(article("https://example.org/a", Some(research.id)))
            .await
            .unwrap();
        store
            .create_article(article("https://example.org/b", Some(research.id)))
            .await
            .unwrap();
        store
            .create_article(article("https://example.org/c", None))
            .await
            .unwrap();

        let items = store.get_articles_by_research(research.id).await.unwrap();
        assert_eq!(items.len(), 2);
    }
}
