// Rust guideline compliant 2026-10-12

//! SQLite adapter for the `Storage` port.
//!
//! Persists flagged postings to a `misdeeds` table via `sqlx`. Reasons are
//! stored as a JSON array in a TEXT column; `date_scraped` as fixed-width
//! RFC 3339 UTC text so that lexical order is chronological order.

use chrono::{DateTime, SecondsFormat, Utc};
use domain::{
    Assessment, JobQuery, JobRecord, ScoredJob, Storage, StorageError, StorageStats, StoredJob,
};
use sqlx::Row as _;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use uuid::Uuid;

/// `Storage` adapter backed by a SQLite database via `sqlx`.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    pool: sqlx::SqlitePool,
}

impl SqliteStorage {
    /// Open or create a SQLite database and initialize the schema.
    ///
    /// The pool holds a single connection, so `sqlite::memory:` keeps one
    /// database for the lifetime of the storage.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` when the connection or schema creation fails.
    pub async fn new(db_url: &str) -> Result<Self, sqlx::Error> {
        let opts = db_url.parse::<SqliteConnectOptions>()?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().max_connections(1).connect_with(opts).await?;
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS misdeeds (
                id              TEXT    PRIMARY KEY,
                job_title       TEXT,
                company_name    TEXT,
                description     TEXT,
                salary_range    TEXT,
                location        TEXT,
                post_date       TEXT,
                original_url    TEXT,
                source_platform TEXT,
                scam_score      INTEGER NOT NULL,
                scam_reasons    TEXT    NOT NULL,  -- JSON array
                date_scraped    TEXT    NOT NULL
            )",
        )
        .execute(&pool)
        .await?;
        Ok(Self { pool })
    }
}

fn unavailable(op: &'static str) -> impl FnOnce(sqlx::Error) -> StorageError {
    move |e| {
        tracing::error!(op, error = %e, "sqlite.operation.failed");
        StorageError::Unavailable
    }
}

fn decode_reasons(text: &str) -> Result<Vec<String>, StorageError> {
    serde_json::from_str(text).map_err(|e| {
        tracing::error!(error = %e, "sqlite.decode.reasons");
        StorageError::Unavailable
    })
}

fn decode_row(row: &SqliteRow) -> Result<StoredJob, sqlx::Error> {
    let id: String = row.try_get("id")?;
    let date_scraped: String = row.try_get("date_scraped")?;
    let scam_score: i64 = row.try_get("scam_score")?;
    let scam_reasons: String = row.try_get("scam_reasons")?;
    let record = JobRecord {
        job_title: row.try_get("job_title")?,
        job_description: row.try_get("description")?,
        company_name: row.try_get("company_name")?,
        salary_range: row.try_get("salary_range")?,
        location: row.try_get("location")?,
        post_date: row.try_get("post_date")?,
        original_url: row.try_get("original_url")?,
        source_platform: row.try_get("source_platform")?,
    };
    Ok(StoredJob {
        id: Uuid::parse_str(&id).map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
        date_scraped: DateTime::parse_from_rfc3339(&date_scraped)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
            .with_timezone(&Utc),
        job: ScoredJob::new(
            record,
            Assessment {
                scam_score: u32::try_from(scam_score).map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
                scam_reasons: serde_json::from_str(&scam_reasons)
                    .map_err(|e| sqlx::Error::Decode(Box::new(e)))?,
            },
        ),
    })
}

impl Storage for SqliteStorage {
    /// Insert every record of `batch` in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` on any `sqlx` error; the underlying
    /// error is logged at `error` level before mapping.
    async fn write_batch(&self, batch: Vec<ScoredJob>) -> Result<Vec<Uuid>, StorageError> {
        let date_scraped = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        let mut tx = self.pool.begin().await.map_err(unavailable("write_batch"))?;
        let mut ids = Vec::with_capacity(batch.len());
        for job in batch {
            let id = Uuid::new_v4();
            let reasons = serde_json::to_string(job.reasons()).map_err(|e| {
                tracing::error!(error = %e, "sqlite.encode.reasons");
                StorageError::Unavailable
            })?;
            let record = &job.record;
            sqlx::query(
                "INSERT INTO misdeeds
                 (id, job_title, company_name, description, salary_range, location,
                  post_date, original_url, source_platform, scam_score, scam_reasons,
                  date_scraped)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(id.to_string())
            .bind(record.job_title.as_deref())
            .bind(record.company_name.as_deref())
            .bind(record.job_description.as_deref())
            .bind(record.salary_range.as_deref())
            .bind(record.location.as_deref())
            .bind(record.post_date.as_deref())
            .bind(record.original_url.as_deref())
            .bind(record.source_platform.as_deref())
            .bind(i64::from(job.score()))
            .bind(reasons)
            .bind(&date_scraped)
            .execute(&mut *tx)
            .await
            .map_err(unavailable("write_batch"))?;
            ids.push(id);
        }
        tx.commit().await.map_err(unavailable("write_batch"))?;
        Ok(ids)
    }

    /// Highest score first; newest first on ties, later inserts winning exact ties.
    ///
    /// The search text is matched in Rust with [`JobQuery::matches`], so `%`
    /// and `_` are literal and case folding covers all of Unicode, exactly as
    /// in the in-memory adapter. SQL applies the score bound and the order.
    async fn query(&self, query: &JobQuery) -> Result<Vec<StoredJob>, StorageError> {
        let min_score = i64::from(query.min_score);
        let rows = if query.search.is_some() {
            sqlx::query(
                "SELECT * FROM misdeeds
                 WHERE scam_score >= ?
                 ORDER BY scam_score DESC, date_scraped DESC, rowid DESC",
            )
            .bind(min_score)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query(
                "SELECT * FROM misdeeds
                 WHERE scam_score >= ?
                 ORDER BY scam_score DESC, date_scraped DESC, rowid DESC
                 LIMIT ?",
            )
            .bind(min_score)
            .bind(i64::try_from(query.limit).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await
        }
        .map_err(unavailable("query"))?;

        let mut matched = Vec::with_capacity(rows.len().min(query.limit));
        for row in &rows {
            if matched.len() >= query.limit {
                break;
            }
            let stored = decode_row(row).map_err(unavailable("query"))?;
            if query.matches(&stored.job) {
                matched.push(stored);
            }
        }
        Ok(matched)
    }

    async fn stats(&self) -> Result<StorageStats, StorageError> {
        let rows: Vec<(i64, String)> = sqlx::query_as("SELECT scam_score, scam_reasons FROM misdeeds")
            .fetch_all(&self.pool)
            .await
            .map_err(unavailable("stats"))?;
        let decoded = rows
            .iter()
            .map(|(score, reasons)| {
                Ok((u32::try_from(*score).unwrap_or_default(), decode_reasons(reasons)?))
            })
            .collect::<Result<Vec<(u32, Vec<String>)>, StorageError>>()?;
        Ok(StorageStats::tally(decoded.iter().map(|(score, reasons)| (*score, reasons.as_slice()))))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
