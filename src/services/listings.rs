// src/services/listings.rs

//! Listing extraction service.
//!
//! Selects listing entries from the council's planning page and decomposes
//! each entry's anchor text into structured fields. The anchor text follows
//! the loose convention
//! `"<reference> - <address parts...> - <description> (<annotation>)"`.

use scraper::{Html, Selector};

use crate::error::{AppError, Result};
use crate::models::ListingConfig;

/// Fields decomposed from one listing entry's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFields {
    pub council_reference: String,
    pub address: String,
    pub description: String,
}

/// Service for extracting listing entries from the planning page.
pub struct ListingScraper {
    row_selector: Selector,
    link_selector: Selector,
}

impl ListingScraper {
    /// Create a new listing scraper with the given selector configuration.
    pub fn new(config: &ListingConfig) -> Result<Self> {
        Ok(Self {
            row_selector: parse_selector(&config.row_selector)?,
            link_selector: parse_selector(&config.link_selector)?,
        })
    }

    /// Extract one candidate string per listing entry, in document order.
    ///
    /// A row without a link element yields no candidate. An empty result
    /// is valid and simply produces zero records downstream.
    pub fn extract_candidates(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        document
            .select(&self.row_selector)
            .filter_map(|row| {
                let link = row.select(&self.link_selector).next()?;
                let text: String = link.text().collect();
                Some(text.trim().to_string())
            })
            .collect()
    }
}

/// Decompose one listing text into its structured fields.
///
/// Splits on the literal `" - "` separator: the first part is the council
/// reference, the last part (truncated at the first `'('`) is the
/// description, and anything strictly between the two is the address.
/// Malformed text is never an error; missing parts degrade to empty
/// strings. No validation beyond trimming is applied, so an empty
/// reference passes through to the caller.
pub fn decompose(text: &str) -> ListingFields {
    let parts: Vec<&str> = text.split(" - ").collect();

    let council_reference = parts.first().unwrap_or(&"").trim().to_string();

    let address = if parts.len() >= 3 {
        parts[1..parts.len() - 1].join(" - ").trim().to_string()
    } else {
        String::new()
    };

    let last = parts.last().unwrap_or(&"");
    let description = last.split('(').next().unwrap_or("").trim().to_string();

    ListingFields {
        council_reference,
        address,
        description,
    }
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}
