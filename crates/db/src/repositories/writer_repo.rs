//! Repository for the `writers` table.

use sqlx::PgPool;

use copydesk_core::types::DbId;

use crate::models::writer::{CreateWriter, Writer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, name, password_hash, is_editor, created_at, updated_at";

/// Provides CRUD operations for writers.
pub struct WriterRepo;

impl WriterRepo {
    /// Insert a new writer, returning the created row.
    ///
    /// `is_editor` always starts false; the flag is raised administratively.
    pub async fn create(pool: &PgPool, input: &CreateWriter) -> Result<Writer, sqlx::Error> {
        let query = format!(
            "INSERT INTO writers (username, email, name, password_hash)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Writer>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.name)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a writer by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Writer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM writers WHERE id = $1");
        sqlx::query_as::<_, Writer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a writer by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Writer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM writers WHERE username = $1");
        sqlx::query_as::<_, Writer>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Grant or revoke editor capability. Returns `true` if a row changed.
    pub async fn set_editor(pool: &PgPool, id: DbId, is_editor: bool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE writers SET is_editor = $2 WHERE id = $1")
            .bind(id)
            .bind(is_editor)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a writer. Articles they authored or reviewed survive with
    /// the reference nulled out (`ON DELETE SET NULL`).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM writers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
