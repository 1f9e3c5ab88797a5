//! # Postgres document store
//!
//! Each thread is one JSONB document. `board` and `bumped_on` are duplicated
//! into their own columns so the board listing can be served from an index.

use async_trait::async_trait;
use domains::{DomainError, Result, Thread, ThreadId, ThreadRepository};
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::types::Json;

pub struct PgThreadRepository {
    pool: PgPool,
}

// The HTTP layer logs storage errors when it answers 500.
fn storage(err: sqlx::Error) -> DomainError {
    DomainError::Storage(err.to_string())
}

impl PgThreadRepository {
    /// Connects and applies the embedded migrations.
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("postgres thread store ready");

        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    async fn insert(&self, thread: &Thread) -> Result<()> {
        sqlx::query("INSERT INTO threads (id, board, bumped_on, document) VALUES ($1, $2, $3, $4)")
            .bind(thread.id)
            .bind(&thread.board)
            .bind(thread.bumped_on)
            .bind(Json(thread))
            .execute(&self.pool)
            .await
            .map_err(storage)?;
        Ok(())
    }

    async fn find_by_id(&self, id: ThreadId) -> Result<Option<Thread>> {
        let row: Option<(Json<Thread>,)> =
            sqlx::query_as("SELECT document FROM threads WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(storage)?;

        Ok(row.map(|(Json(thread),)| thread))
    }

    async fn find_recent_by_board(&self, board: &str, limit: usize) -> Result<Vec<Thread>> {
        let rows: Vec<(Json<Thread>,)> = sqlx::query_as(
            "SELECT document FROM threads WHERE board = $1 ORDER BY bumped_on DESC LIMIT $2",
        )
        .bind(board)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;

        Ok(rows.into_iter().map(|(Json(thread),)| thread).collect())
    }

    async fn save(&self, thread: &Thread) -> Result<()> {
        let result = sqlx::query("UPDATE threads SET bumped_on = $2, document = $3 WHERE id = $1")
            .bind(thread.id)
            .bind(thread.bumped_on)
            .bind(Json(thread))
            .execute(&self.pool)
            .await
            .map_err(storage)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ThreadNotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: ThreadId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM threads WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage)?;

        Ok(result.rows_affected() > 0)
    }
}
