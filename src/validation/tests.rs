use std::sync::Arc;

use crate::fetch::MockFetcher;
use crate::judge::{Assessment, MockJudge};
use crate::store::Store;

use super::{ArticleRef, IngestOptions, ValidationError, Validator};

const PAGE: &str = "A study of mitochondrial function in aging tissue\n\
    The experiments described here measure respiration rates across cohorts.";

fn assessment() -> Assessment {
    Assessment {
        relevancy: 88.0,
        key_take: "The article directly supports the hypothesis.".to_string(),
        validity: 71.0,
    }
}

async fn validator() -> Validator<MockJudge, MockFetcher> {
    let store = Arc::new(Store::open_in_memory().await.unwrap());
    Validator::new(store, MockJudge::scoring(assessment()), MockFetcher::new())
}

#[tokio::test]
async fn validate_url_fetches_scores_and_persists() {
    let v = validator().await;
    v.fetcher().insert("https://example.org/a", PAGE);

    let result = v
        .validate("mitochondria drive aging", ArticleRef::Url("https://example.org/a"))
        .await
        .unwrap();

    assert_eq!(result, assessment());

    let article = v
        .store()
        .get_article_by_url("https://example.org/a", None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        article.title.as_deref(),
        Some("A study of mitochondrial function in aging tissue")
    );
    assert!(
        v.store()
            .get_result(1, article.id)
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn repeat_validation_is_served_from_the_stored_row() {
    let v = validator().await;
    v.fetcher().insert("https://example.org/a", PAGE);

    let first = v
        .validate_url("mitochondria drive aging", "https://example.org/a", None)
        .await
        .unwrap();

    // Change the scripted judgment; the cached row must still win.
    v.judge().set_assessment(Assessment {
        relevancy: 1.0,
        key_take: "A contradictory later judgment.".to_string(),
        validity: 1.0,
    });

    let second = v
        .validate_url("mitochondria drive aging", "https://example.org/a", None)
        .await
        .unwrap();

    assert_eq!(second, first);
    assert_eq!(v.judge().score_calls(), 1);
    assert_eq!(v.fetcher().fetch_count("https://example.org/a"), 1);
}

#[tokio::test]
async fn url_is_trimmed_before_lookup() {
    let v = validator().await;
    v.fetcher().insert("https://example.org/a", PAGE);

    v.validate_url("claim", "https://example.org/a", None)
        .await
        .unwrap();
    v.validate_url("claim", "  https://example.org/a \n", None)
        .await
        .unwrap();

    assert_eq!(v.fetcher().total_fetches(), 1);
    assert_eq!(v.judge().score_calls(), 1);
}

#[tokio::test]
async fn fetch_failure_leaves_no_article_behind() {
    let v = validator().await;

    let err = v
        .validate_url("claim", "https://example.org/missing", None)
        .await
        .unwrap_err();
    assert!(matches!(err, ValidationError::ContentUnavailable { ref url }
        if url == "https://example.org/missing"));

    assert!(
        v.store()
            .get_article_by_url("https://example.org/missing", None)
            .await
            .unwrap()
            .is_none()
    );
    assert_eq!(v.judge().score_calls(), 0);
}

#[tokio::test]
async fn judge_failure_keeps_the_article_and_retry_skips_the_fetch() {
    let v = validator().await;
    v.fetcher().insert("https://example.org/a", PAGE);
    v.judge().fail_scoring("provider down");

    let err = v
        .validate_url("claim", "https://example.org/a", None)
        .await
        .unwrap_err();
    assert!(matches!(err, ValidationError::Judge(_)));

    // Article persisted, no result row.
    let article = v
        .store()
        .get_article_by_url("https://example.org/a", None)
        .await
        .unwrap()
        .unwrap();
    assert!(v.store().get_result(1, article.id).await.unwrap().is_none());

    v.judge().set_assessment(assessment());
    let result = v
        .validate_url("claim", "https://example.org/a", None)
        .await
        .unwrap();

    assert_eq!(result, assessment());
    assert_eq!(v.fetcher().fetch_count("https://example.org/a"), 1);
}

#[tokio::test]
async fn article_id_form_never_fetches() {
    let v = validator().await;
    v.fetcher().insert("https://example.org/a", PAGE);

    let article = v
        .upload_article("https://example.org/a", None, &IngestOptions::default())
        .await
        .unwrap();

    let result = v
        .validate("claim", ArticleRef::Id(article.id))
        .await
        .unwrap();

    assert_eq!(result, assessment());
    assert_eq!(v.fetcher().fetch_count("https://example.org/a"), 1);
}

#[tokio::test]
async fn unknown_article_id_is_rejected() {
    let v = validator().await;

    let err = v.validate("claim", ArticleRef::Id(404)).await.unwrap_err();
    assert!(matches!(err, ValidationError::ArticleNotFound { id: 404 }));
    assert_eq!(v.judge().score_calls(), 0);
}

#[tokio::test]
async fn upload_articles_skips_known_and_collects_failures() {
    let v = validator().await;
    v.fetcher().insert("https://example.org/a", PAGE);
    v.fetcher().insert("https://example.org/b", PAGE);

    // Pre-ingest one URL so the bulk pass finds it already stored.
    v.upload_article("https://example.org/a", None, &IngestOptions::default())
        .await
        .unwrap();

    let urls: Vec<String> = [
        "https://example.org/a",
        " https://example.org/b ",
        "https://example.org/b",
        "https://example.org/broken",
        "",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let report = v
        .upload_articles(&urls, &IngestOptions::default())
        .await
        .unwrap();

    assert_eq!(report.uploaded_count, 2);
    assert_eq!(report.failed_urls, vec!["https://example.org/broken"]);
    // The known URL was not refetched.
    assert_eq!(v.fetcher().fetch_count("https://example.org/a"), 1);
}

#[tokio::test]
async fn batch_validates_discovered_articles_and_reports_failures() {
    let v = validator().await;
    v.judge().set_discover_urls(&[
        "https://pmc.ncbi.nlm.nih.gov/articles/PMC1/",
        "https://pmc.ncbi.nlm.nih.gov/articles/PMC2/",
        "https://pmc.ncbi.nlm.nih.gov/articles/PMC3/",
    ]);
    v.fetcher()
        .insert("https://pmc.ncbi.nlm.nih.gov/articles/PMC1/", PAGE);
    v.fetcher()
        .insert("https://pmc.ncbi.nlm.nih.gov/articles/PMC2/", PAGE);

    let report = v.create_and_validate("claim", 3).await.unwrap();

    assert_eq!(report.results.len(), 2);
    assert_eq!(
        report.failed_articles,
        vec!["https://pmc.ncbi.nlm.nih.gov/articles/PMC3/"]
    );
    assert_eq!(report.failed_count(), 1);
    for entry in &report.results {
        assert_eq!(entry.relevancy, 88.0);
        assert_eq!(entry.validity, 71.0);
    }
    assert_eq!(v.judge().discover_calls(), 1);
    assert_eq!(v.judge().score_calls(), 2);
}

#[tokio::test]
async fn batch_aborts_when_discovery_fails() {
    let v = validator().await;
    v.judge().fail_discovery("provider down");

    let err = v.create_and_validate("claim", 3).await.unwrap_err();
    assert!(matches!(err, ValidationError::Discovery(_)));
    assert_eq!(v.fetcher().total_fetches(), 0);
}

#[tokio::test]
async fn batch_with_empty_discovery_is_an_empty_report() {
    let v = validator().await;
    v.judge().set_discover_urls(&[]);

    let report = v.create_and_validate("claim", 5).await.unwrap();

    assert!(report.results.is_empty());
    assert!(report.failed_articles.is_empty());
}
