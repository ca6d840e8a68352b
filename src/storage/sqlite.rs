//! SQLite storage implementation.
//!
//! A file-based storage backend. The database file is created on first
//! open; the schema is created by `ensure_schema`. The pool is scoped to
//! the run and released on drop.

use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::Result;
use crate::models::PlanningApplication;
use crate::storage::ApplicationStore;

/// SQLite-backed application store.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open a store at the given database file path, creating the file
    /// if it does not exist.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        // The pipeline is sequential; one connection is enough and keeps
        // SQLite's writer locking out of the picture.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Create an in-memory store (for testing).
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::new().in_memory(true);

        // One connection only: each in-memory connection is its own database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ApplicationStore for SqliteStore {
    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS applications (
                id INTEGER PRIMARY KEY,
                council_reference TEXT NOT NULL UNIQUE,
                address TEXT,
                description TEXT,
                date_scraped TEXT,
                date_received TEXT,
                on_notice_to TEXT,
                applicant TEXT,
                owner TEXT,
                stage_description TEXT,
                stage_status TEXT,
                document_description TEXT,
                title_reference TEXT
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn exists(&self, council_reference: &str) -> Result<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM applications WHERE council_reference = ?1")
                .bind(council_reference)
                .fetch_one(&self.pool)
                .await?;

        Ok(count > 0)
    }

    async fn insert_if_absent(&self, application: &PlanningApplication) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO applications (
                council_reference, address, description, date_scraped,
                date_received, on_notice_to, applicant, owner,
                stage_description, stage_status, document_description,
                title_reference
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            ON CONFLICT(council_reference) DO NOTHING
            "#,
        )
        .bind(&application.council_reference)
        .bind(&application.address)
        .bind(&application.description)
        .bind(application.date_scraped.to_string())
        .bind(&application.date_received)
        .bind(&application.on_notice_to)
        .bind(&application.applicant)
        .bind(&application.owner)
        .bind(&application.stage_description)
        .bind(&application.stage_status)
        .bind(&application.document_description)
        .bind(&application.title_reference)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
