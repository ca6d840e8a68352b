//! Planning application data structure.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A planning application extracted from the council's listing page.
///
/// Only `council_reference`, `address`, `description` and `date_scraped`
/// are populated by the listing extraction; the remaining fields exist in
/// the schema for data the listing text does not currently expose.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanningApplication {
    /// Council's unique reference for the application
    pub council_reference: String,

    /// Site address (empty string if the listing text carries none)
    pub address: String,

    /// Short description of the proposed development
    pub description: String,

    /// Date this record was scraped (run date, not parsed from the page)
    pub date_scraped: NaiveDate,

    /// Date the application was received by council
    pub date_received: Option<String>,

    /// Closing date for public comment
    pub on_notice_to: Option<String>,

    /// Applicant name
    pub applicant: Option<String>,

    /// Owner name
    pub owner: Option<String>,

    /// Current stage description
    pub stage_description: Option<String>,

    /// Current stage status
    pub stage_status: Option<String>,

    /// Associated document description
    pub document_description: Option<String>,

    /// Land title reference
    pub title_reference: Option<String>,
}

impl PlanningApplication {
    /// Build a record from decomposed listing fields and the run date.
    pub fn new(
        council_reference: String,
        address: String,
        description: String,
        date_scraped: NaiveDate,
    ) -> Self {
        Self {
            council_reference,
            address,
            description,
            date_scraped,
            date_received: None,
            on_notice_to: None,
            applicant: None,
            owner: None,
            stage_description: None,
            stage_status: None,
            document_description: None,
            title_reference: None,
        }
    }
}
