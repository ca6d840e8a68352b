// tests/pipeline.rs

//! End-to-end tests for the ingestion pipeline, using a stub fetcher, an
//! in-memory store and a recording reporter.

use std::sync::Mutex;

use async_trait::async_trait;

use planning_crawler::error::{AppError, Result};
use planning_crawler::models::Config;
use planning_crawler::pipeline::{Reporter, run_ingest};
use planning_crawler::storage::{ApplicationStore, SqliteStore};
use planning_crawler::utils::PageFetcher;

/// Fetcher returning a canned page, or a simulated transport failure.
struct StubFetcher {
    page: Option<String>,
}

impl StubFetcher {
    fn page(html: &str) -> Self {
        Self {
            page: Some(html.to_string()),
        }
    }

    fn failing() -> Self {
        Self { page: None }
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, _url: &str) -> Result<String> {
        match &self.page {
            Some(page) => Ok(page.clone()),
            None => Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))),
        }
    }
}

/// Reporter that records emitted events for assertions.
#[derive(Default)]
struct RecordingReporter {
    infos: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingReporter {
    fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

async fn store() -> SqliteStore {
    SqliteStore::in_memory().await.unwrap()
}

async fn row_count(store: &SqliteStore) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM applications")
        .fetch_one(store.pool())
        .await
        .unwrap()
}

const LISTING_PAGE: &str = r#"
    <html><body><ul>
      <li class="link-listing__no-icon">
        <a href="/da1">DA 2024/1 - 10 Main Rd, Smithton - Dwelling (advertised to 2024-06-14)</a>
      </li>
      <li class="link-listing__no-icon">
        <a href="/da2">DA 2024/2 - 5 Shore St - Subdivision</a>
      </li>
    </ul></body></html>
"#;

#[tokio::test]
async fn first_run_inserts_all_records() {
    let config = Config::default();
    let store = store().await;
    let reporter = RecordingReporter::default();

    let summary = run_ingest(&config, &StubFetcher::page(LISTING_PAGE), &store, &reporter)
        .await
        .unwrap();

    assert_eq!(summary.candidates, 2);
    assert_eq!(summary.inserted, 2);
    assert_eq!(summary.skipped, 0);
    assert_eq!(summary.invalid, 0);
    assert_eq!(row_count(&store).await, 2);

    assert!(store.exists("DA 2024/1").await.unwrap());
    assert!(store.exists("DA 2024/2").await.unwrap());
    assert!(
        reporter
            .infos()
            .iter()
            .any(|m| m.contains("Data for DA 2024/1 saved"))
    );
}

#[tokio::test]
async fn second_run_against_unchanged_page_skips_everything() {
    let config = Config::default();
    let store = store().await;
    let fetcher = StubFetcher::page(LISTING_PAGE);
    let reporter = RecordingReporter::default();

    run_ingest(&config, &fetcher, &store, &reporter).await.unwrap();
    let second = run_ingest(&config, &fetcher, &store, &reporter).await.unwrap();

    assert_eq!(second.inserted, 0);
    assert_eq!(second.skipped, 2);
    assert_eq!(row_count(&store).await, 2);
    assert!(
        reporter
            .infos()
            .iter()
            .any(|m| m.contains("Duplicate entry for document DA 2024/1"))
    );
}

#[tokio::test]
async fn duplicate_references_within_one_page_insert_once() {
    let page = r#"
        <ul>
          <li class="link-listing__no-icon"><a>DA 7 - 1 A St - Shed</a></li>
          <li class="link-listing__no-icon"><a>DA 7 - 1 A St - Shed</a></li>
        </ul>
    "#;
    let config = Config::default();
    let store = store().await;
    let reporter = RecordingReporter::default();

    let summary = run_ingest(&config, &StubFetcher::page(page), &store, &reporter)
        .await
        .unwrap();

    assert_eq!(summary.inserted, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(row_count(&store).await, 1);
}

#[tokio::test]
async fn fetch_failure_is_fatal_and_leaves_store_empty() {
    let config = Config::default();
    let store = store().await;
    let reporter = RecordingReporter::default();

    let result = run_ingest(&config, &StubFetcher::failing(), &store, &reporter).await;

    assert!(result.is_err());
    assert_eq!(row_count(&store).await, 0);
    assert!(
        reporter
            .errors()
            .iter()
            .any(|m| m.contains("Failed to fetch page content"))
    );
}

#[tokio::test]
async fn empty_page_completes_with_zero_counts() {
    let config = Config::default();
    let store = store().await;
    let reporter = RecordingReporter::default();

    let summary = run_ingest(
        &config,
        &StubFetcher::page("<html><body></body></html>"),
        &store,
        &reporter,
    )
    .await
    .unwrap();

    assert_eq!(summary.candidates, 0);
    assert_eq!(summary.inserted, 0);
    assert_eq!(summary.skipped, 0);
    assert_eq!(row_count(&store).await, 0);
}

#[tokio::test]
async fn empty_reference_is_reported_invalid_and_not_stored() {
    let page = r#"
        <ul>
          <li class="link-listing__no-icon"><a href="/empty"> </a></li>
          <li class="link-listing__no-icon"><a>DA 8 - 3 B St - Garage</a></li>
        </ul>
    "#;
    let config = Config::default();
    let store = store().await;
    let reporter = RecordingReporter::default();

    let summary = run_ingest(&config, &StubFetcher::page(page), &store, &reporter)
        .await
        .unwrap();

    assert_eq!(summary.invalid, 1);
    assert_eq!(summary.inserted, 1);
    assert_eq!(row_count(&store).await, 1);
    assert!(
        reporter
            .errors()
            .iter()
            .any(|m| m.contains("no council reference"))
    );
}

#[tokio::test]
async fn misconfigured_selector_is_an_error() {
    let mut config = Config::default();
    config.listing.row_selector = "[[broken".to_string();
    let store = store().await;
    let reporter = RecordingReporter::default();

    let result = run_ingest(&config, &StubFetcher::page(LISTING_PAGE), &store, &reporter).await;

    assert!(matches!(result, Err(AppError::Selector { .. })));
}
