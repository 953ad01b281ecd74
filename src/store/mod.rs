//! Durable agent storage.
//!
//! A single-table SQLite repository behind a small connection pool. Each
//! operation is one independently committed statement; there is no
//! transaction spanning operations, and the database file may be shared with
//! other processes (row-level last-writer-wins).

use crate::session::AgentRecord;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

const MIGRATION_SQL: &str = include_str!("../../migrations/001_create_agents.sql");

/// Errors raised by the agent store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing database could not be opened or prepared.
    #[error("agent store unavailable: {0}")]
    Unavailable(String),

    /// A row with the same id already exists (primary-key conflict on insert).
    #[error("duplicate agent id: {0}")]
    DuplicateId(String),

    /// The serialized tools column of a row could not be encoded or decoded.
    #[error("invalid tools payload for agent {id}: {source}")]
    InvalidTools {
        /// Id of the offending row.
        id: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Any other database failure.
    #[error("agent store query failed: {0}")]
    Query(#[from] sqlx::Error),
}

/// SQLite-backed repository for agent records.
///
/// The `agents` table is the only table:
/// `id TEXT PRIMARY KEY, name TEXT NOT NULL, prompt TEXT NOT NULL,
/// model TEXT NOT NULL, tools TEXT` with `tools` holding a JSON array of
/// strings (`"[]"` for none).
#[derive(Debug)]
pub struct AgentStore {
    pool: SqlitePool,
}

impl AgentStore {
    /// Open (creating if missing) the database at `db_path` and ensure the
    /// schema exists.
    ///
    /// # Arguments
    /// * `db_path` - Path to the SQLite database file, or `:memory:`
    ///
    /// # Returns
    /// * `Ok(AgentStore)` if the store is ready
    /// * `Err(StoreError::Unavailable)` if it could not be opened or prepared
    pub async fn connect(db_path: &str) -> Result<Self, StoreError> {
        // Ensure parent directory exists
        if let Some(parent) = Path::new(db_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Unavailable(format!(
                    "failed to create {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        // SQLite connection string format: sqlite://path/to/db.db
        let connection_string = if db_path.starts_with("sqlite:") {
            db_path.to_string()
        } else {
            format!("sqlite:{}", db_path)
        };

        let options = SqliteConnectOptions::from_str(&connection_string)
            .map_err(|e| {
                StoreError::Unavailable(format!("invalid database path {}: {}", db_path, e))
            })?
            .create_if_missing(true);

        // Every in-memory SQLite connection is its own database, so the pool
        // must never grow past one connection for ":memory:".
        let max_connections = if db_path.ends_with(":memory:") { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| {
                StoreError::Unavailable(format!("failed to open {}: {}", db_path, e))
            })?;

        info!(path = %db_path, "connected to agent store");

        let store = Self { pool };
        store.initialize().await?;

        Ok(store)
    }

    /// Idempotently ensure the `agents` table exists.
    ///
    /// Runs on every [`connect`](Self::connect); safe to call again at any
    /// time.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        let statements = MIGRATION_SQL
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty());

        for statement in statements {
            sqlx::query(statement).execute(&self.pool).await.map_err(|e| {
                StoreError::Unavailable(format!("schema setup failed: {}", e))
            })?;
        }

        debug!("agent store schema ready");
        Ok(())
    }

    /// Load every stored record, deserializing each row's tool list.
    /// Order is not guaranteed.
    pub async fn load_all(&self) -> Result<Vec<AgentRecord>, StoreError> {
        debug!("loading all agents");

        let rows = sqlx::query("SELECT id, name, prompt, model, tools FROM agents")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_record).collect()
    }

    /// Insert a new record. Insert-only: there is no update path.
    ///
    /// Fails with [`StoreError::DuplicateId`] when a row with the same id
    /// already exists (the primary key enforces uniqueness).
    pub async fn save(&self, record: &AgentRecord) -> Result<(), StoreError> {
        let tools = serde_json::to_string(&record.tools).map_err(|e| {
            StoreError::InvalidTools {
                id: record.id.clone(),
                source: e,
            }
        })?;

        let result = sqlx::query(
            "INSERT INTO agents (id, name, prompt, model, tools) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&record.id)
        .bind(&record.name)
        .bind(&record.prompt)
        .bind(&record.model)
        .bind(tools)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                debug!(id = %record.id, "saved agent");
                Ok(())
            }
            Err(sqlx::Error::Database(db))
                if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
            {
                Err(StoreError::DuplicateId(record.id.clone()))
            }
            Err(e) => Err(StoreError::Query(e)),
        }
    }

    /// Delete the row matching `id`.
    ///
    /// Returns whether a row was removed; an absent id is `Ok(false)`, not an
    /// error.
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM agents WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        debug!(id = %id, deleted, "delete agent");
        Ok(deleted)
    }

    /// Number of stored rows.
    pub async fn count(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM agents")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// The underlying pool (for advanced operations if needed).
    #[allow(dead_code)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn row_to_record(row: &SqliteRow) -> Result<AgentRecord, StoreError> {
    let id: String = row.try_get("id")?;
    let tools = match row.try_get::<Option<String>, _>("tools")? {
        None => Vec::new(),
        Some(raw) if raw.is_empty() => Vec::new(),
        Some(raw) => serde_json::from_str(&raw).map_err(|e| StoreError::InvalidTools {
            id: id.clone(),
            source: e,
        })?,
    };

    Ok(AgentRecord::new(
        id,
        row.try_get("name")?,
        row.try_get("prompt")?,
        row.try_get("model")?,
        tools,
    ))
}
