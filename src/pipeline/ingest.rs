// src/pipeline/ingest.rs

//! Listing ingestion pipeline.
//!
//! One run: fetch the listing page, extract candidate entries, decompose
//! each into a record, and persist the records not already stored.
//! Candidates are processed strictly sequentially in document order.

use chrono::Local;

use crate::error::Result;
use crate::models::{Config, PlanningApplication};
use crate::pipeline::report::Reporter;
use crate::services::{self, ListingScraper};
use crate::storage::ApplicationStore;
use crate::utils::PageFetcher;

/// Outcome of processing one candidate listing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Record was new and has been stored
    Inserted,
    /// A record with the same council reference already existed
    Skipped,
    /// Council reference decomposed to an empty string; not stored
    Invalid,
}

/// Summary of an ingestion run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IngestSummary {
    pub candidates: usize,
    pub inserted: usize,
    pub skipped: usize,
    pub invalid: usize,
}

impl IngestSummary {
    fn record(&mut self, outcome: RecordOutcome) {
        match outcome {
            RecordOutcome::Inserted => self.inserted += 1,
            RecordOutcome::Skipped => self.skipped += 1,
            RecordOutcome::Invalid => self.invalid += 1,
        }
    }
}

/// Run one ingestion pass.
///
/// A fetch failure is fatal and leaves the store untouched beyond schema
/// creation. A store failure aborts the remaining candidates; inserts
/// already committed remain.
pub async fn run_ingest(
    config: &Config,
    fetcher: &dyn PageFetcher,
    store: &dyn ApplicationStore,
    reporter: &dyn Reporter,
) -> Result<IngestSummary> {
    store.ensure_schema().await?;

    reporter.info(&format!("Fetching page content from: {}", config.fetch.url));
    let page = match fetcher.fetch(&config.fetch.url).await {
        Ok(page) => page,
        Err(e) => {
            reporter.error(&format!("Failed to fetch page content: {e}"));
            return Err(e);
        }
    };
    reporter.info("Successfully fetched page content.");

    let scraper = ListingScraper::new(&config.listing)?;
    let candidates = scraper.extract_candidates(&page);

    let date_scraped = Local::now().date_naive();
    let mut summary = IngestSummary {
        candidates: candidates.len(),
        ..IngestSummary::default()
    };

    for candidate in candidates {
        let outcome = ingest_candidate(&candidate, date_scraped, store, reporter).await?;
        summary.record(outcome);
    }

    reporter.info(&format!(
        "Run complete: {} inserted, {} skipped, {} invalid.",
        summary.inserted, summary.skipped, summary.invalid
    ));

    Ok(summary)
}

/// Decompose one candidate and insert it if its reference is new.
async fn ingest_candidate(
    candidate: &str,
    date_scraped: chrono::NaiveDate,
    store: &dyn ApplicationStore,
    reporter: &dyn Reporter,
) -> Result<RecordOutcome> {
    let fields = services::decompose(candidate);
    reporter.info(&format!(
        "Extracted Data: Address: {}, Council Reference: {}, Description: {}",
        fields.address, fields.council_reference, fields.description
    ));

    if fields.council_reference.is_empty() {
        reporter.error(&format!(
            "Listing has no council reference, not storing: {candidate:?}"
        ));
        return Ok(RecordOutcome::Invalid);
    }

    let application = PlanningApplication::new(
        fields.council_reference,
        fields.address,
        fields.description,
        date_scraped,
    );

    if store.insert_if_absent(&application).await? {
        reporter.info(&format!(
            "Data for {} saved to database.",
            application.council_reference
        ));
        Ok(RecordOutcome::Inserted)
    } else {
        reporter.info(&format!(
            "Duplicate entry for document {} found. Skipping insertion.",
            application.council_reference
        ));
        Ok(RecordOutcome::Skipped)
    }
}
