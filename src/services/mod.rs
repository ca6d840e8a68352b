//! Service layer for the crawler application.
//!
//! This module contains the business logic for:
//! - Listing extraction and decomposition (`ListingScraper`)

mod listings;

pub use listings::{ListingFields, ListingScraper, decompose};
