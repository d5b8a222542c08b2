//! Domain entities and the derivation rules attached to them.
//!
//! Entities map 1:1 onto store rows. The two derivations that belong to the
//! data model rather than any particular caller live here:
//! [`topic::derive_topic_fields`] (topic ⇄ main/secondary item synthesis)
//! and [`title::derive_article_title`] (title from fetched content).

pub mod title;
pub mod topic;


pub use title::{UNTITLED_ARTICLE, derive_article_title};
pub use topic::{TopicFields, derive_topic_fields};

use serde::{Deserialize, Serialize};

/// A natural-language claim to be checked against evidence.
///
/// `title` is the natural key, globally unique. Never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    pub id: i64,
    pub title: String,
}

/// A fetched unit of text evidence tied to a URL and an optional research
/// grouping. Natural key is `(url, research_id)`; content is fetched once
/// and reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: Option<String>,
    pub url: String,
    pub content: String,
    pub topic: Option<String>,
    pub main_item: Option<String>,
    pub secondary_item: Option<String>,
    pub research_id: Option<i64>,
}

/// Fields for an article that has not been persisted yet.
///
/// The topic derivation from [`derive_topic_fields`] is applied by the store
/// on create, so callers pass whatever subset they have.
#[derive(Debug, Clone, Default)]
pub struct NewArticle {
    pub title: Option<String>,
    pub url: String,
    pub content: String,
    pub topic: Option<String>,
    pub main_item: Option<String>,
    pub secondary_item: Option<String>,
    pub research_id: Option<i64>,
}

/// The persisted outcome of scoring one hypothesis against one article.
/// Acts as a durable cache entry: created exactly once per
/// `(hypothesis_id, article_id)` pair, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub id: i64,
    pub hypothesis_id: i64,
    pub article_id: i64,
    pub relevancy: f64,
    pub key_take: String,
    pub validity: f64,
}

/// A reference grouping of articles by a `(primary_item, secondary_item)`
/// pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Research {
    pub id: i64,
    pub primary_item: String,
    pub secondary_item: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityType {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disease {
    pub id: i64,
    pub name: String,
    pub entity_type_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: i64,
    pub name: String,
    pub entity_type_id: Option<i64>,
    pub disease_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drug {
    pub id: i64,
    pub name: String,
    pub entity_type_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub id: i64,
    pub name: String,
    pub entity_type_id: Option<i64>,
    pub drug_id: Option<i64>,
    pub effect_type: Option<String>,
}
