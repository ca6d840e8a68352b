// src/models/mod.rs

//! Domain models for the crawler application.

mod application;
mod config;

// Re-export all public types
pub use application::PlanningApplication;
pub use config::{Config, FetchConfig, ListingConfig, StoreConfig};
