//! Reference taxonomy repositories: entity types, diseases, targets,
//! drugs, effects. Plain lookup tables used to classify articles; no
//! algorithmic behavior.

use crate::domain::{Disease, Drug, Effect, EntityType, Target};
use crate::store::Store;
use crate::store::error::StoreResult;
use crate::store::helpers::{get_opt_i64, get_opt_string};

impl Store {
    /// List all entity types ordered by id.
    pub async fn list_entity_types(&self) -> StoreResult<Vec<EntityType>> {
        let mut rows = self
            .conn()
            .query("SELECT id, name FROM entity_types ORDER BY id", ())
            .await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(EntityType {
                id: row.get::<i64>(0)?,
                name: row.get::<String>(1)?,
            });
        }
        Ok(items)
    }

    /// List all diseases ordered by name.
    pub async fn list_diseases(&self) -> StoreResult<Vec<Disease>> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, name, entity_type_id FROM diseases ORDER BY name",
                (),
            )
            .await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(Disease {
                id: row.get::<i64>(0)?,
                name: row.get::<String>(1)?,
                entity_type_id: get_opt_i64(&row, 2)?,
            });
        }
        Ok(items)
    }

    /// List targets, optionally narrowed to one disease.
    pub async fn list_targets(&self, disease_id: Option<i64>) -> StoreResult<Vec<Target>> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, name, entity_type_id, disease_id FROM targets \
                 WHERE (?1 IS NULL OR disease_id = ?1) ORDER BY name",
                libsql::params![disease_id],
            )
            .await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(Target {
                id: row.get::<i64>(0)?,
                name: row.get::<String>(1)?,
                entity_type_id: get_opt_i64(&row, 2)?,
                disease_id: get_opt_i64(&row, 3)?,
            });
        }
        Ok(items)
    }

    /// List all drugs ordered by name.
    pub async fn list_drugs(&self) -> StoreResult<Vec<Drug>> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, name, entity_type_id FROM drugs ORDER BY name",
                (),
            )
            .await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(Drug {
                id: row.get::<i64>(0)?,
                name: row.get::<String>(1)?,
                entity_type_id: get_opt_i64(&row, 2)?,
            });
        }
        Ok(items)
    }

    /// List effects, optionally narrowed to one drug.
    pub async fn list_effects(&self, drug_id: Option<i64>) -> StoreResult<Vec<Effect>> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, name, entity_type_id, drug_id, effect_type FROM effects \
                 WHERE (?1 IS NULL OR drug_id = ?1) ORDER BY name",
                libsql::params![drug_id],
            )
            .await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(Effect {
                id: row.get::<i64>(0)?,
                name: row.get::<String>(1)?,
                entity_type_id: get_opt_i64(&row, 2)?,
                drug_id: get_opt_i64(&row, 3)?,
                effect_type: get_opt_string(&row, 4)?,
            });
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use crate::store::Store;

    #[tokio::test]
    async fn taxonomy_tables_start_empty_and_list() {
        let store = Store::open_in_memory().await.unwrap();

        store
            .conn()
            .execute("INSERT INTO entity_types (name) VALUES ('disease')", ())
            .await
            .unwrap();
        store
            .conn()
            .execute(
                "INSERT INTO diseases (name, entity_type_id) VALUES ('Obesity', 1)",
                (),
            )
            .await
            .unwrap();
        store
            .conn()
            .execute("INSERT INTO drugs (name) VALUES ('Semaglutide')", ())
            .await
            .unwrap();
        store
            .conn()
            .execute(
                "INSERT INTO effects (name, drug_id, effect_type) VALUES ('Nausea', 1, 'side')",
                (),
            )
            .await
            .unwrap();

        assert_eq!(store.list_entity_types().await.unwrap().len(), 1);
        assert_eq!(store.list_diseases().await.unwrap().len(), 1);
        assert_eq!(store.list_drugs().await.unwrap().len(), 1);

        let effects = store.list_effects(Some(1)).await.unwrap();
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].effect_type.as_deref(), Some("side"));
        assert!(store.list_effects(Some(99)).await.unwrap().is_empty());
    }
}
