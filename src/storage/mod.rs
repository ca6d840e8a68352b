//! Storage abstractions for planning application persistence.
//!
//! Records are insert-only: a `council_reference` already present in the
//! store is never duplicated or updated. The write path is a single atomic
//! conditional insert so that concurrent runs against the same store cannot
//! race a separate check-then-insert sequence into duplicate rows.

pub mod sqlite;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::PlanningApplication;

// Re-export for convenience
pub use sqlite::SqliteStore;

/// Trait for planning application storage backends.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// Create the applications table if it does not exist. Idempotent.
    async fn ensure_schema(&self) -> Result<()>;

    /// Whether a record with this council reference is already stored.
    ///
    /// Lookup is an exact match on the raw key string.
    async fn exists(&self, council_reference: &str) -> Result<bool>;

    /// Insert the record unless its council reference is already stored.
    ///
    /// Returns `true` if a row was inserted, `false` if an existing row
    /// made the insert a no-op.
    async fn insert_if_absent(&self, application: &PlanningApplication) -> Result<bool>;
}
