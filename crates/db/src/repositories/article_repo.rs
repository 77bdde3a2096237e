//! Repository for the `articles` table.

use sqlx::PgPool;

use copydesk_core::article::STATUS_PENDING_REVIEW;
use copydesk_core::types::DbId;

use crate::models::article::{Article, CreateArticle, UpdateArticle};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, status, written_by, edited_by, created_at, updated_at";

/// Provides CRUD and workflow operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert a new article owned by `written_by`.
    ///
    /// Status and `created_at` come from column defaults; the insert path
    /// cannot supply either.
    pub async fn create(
        pool: &PgPool,
        written_by: DbId,
        input: &CreateArticle,
    ) -> Result<Article, sqlx::Error> {
        let query = format!(
            "INSERT INTO articles (title, content, written_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(written_by)
            .fetch_one(pool)
            .await
    }

    /// Find an article by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update an article's authoring fields.
    ///
    /// Only title and content are touched; status and attribution columns
    /// are not reachable from this statement. Returns `None` if no row
    /// with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArticle,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET
                title = $2,
                content = $3,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// List all articles awaiting review, oldest first.
    ///
    /// The `id` tiebreak keeps the order deterministic for articles
    /// created within the same timestamp tick.
    pub async fn list_pending(pool: &PgPool) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM articles
             WHERE status = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(STATUS_PENDING_REVIEW)
            .fetch_all(pool)
            .await
    }

    /// Resolve a pending article: set its status and record the acting
    /// editor, in one conditional update.
    ///
    /// The `status = 'pending_review'` guard makes the read-modify-write
    /// atomic at the row: of two editors racing on the same article, only
    /// one statement matches, and the loser gets `None`. `None` is also
    /// returned for an id that does not exist at all -- callers must not
    /// distinguish the two cases (resolved-state must not leak through a
    /// different error).
    pub async fn review(
        pool: &PgPool,
        id: DbId,
        new_status: &str,
        edited_by: DbId,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET
                status = $2,
                edited_by = $3,
                updated_at = NOW()
             WHERE id = $1 AND status = $4
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(new_status)
            .bind(edited_by)
            .bind(STATUS_PENDING_REVIEW)
            .fetch_optional(pool)
            .await
    }

    /// List the articles a given editor has resolved, oldest first.
    pub async fn list_edited_by(pool: &PgPool, editor_id: DbId) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM articles
             WHERE edited_by = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(editor_id)
            .fetch_all(pool)
            .await
    }
}
