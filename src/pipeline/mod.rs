//! Pipeline entry points for crawler operations.
//!
//! - `run_ingest`: Fetch the listing page and persist new applications

pub mod ingest;
pub mod report;

pub use ingest::{IngestSummary, RecordOutcome, run_ingest};
pub use report::{LogReporter, Reporter};
