//! Article entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use copydesk_core::types::{DbId, Timestamp};

/// A row from the `articles` table.
///
/// `written_by` and `edited_by` are weak references: deleting a writer
/// leaves the article in place with the reference nulled out.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub content: String,
    /// One of the `copydesk_core::article::STATUS_*` values.
    pub status: String,
    pub written_by: Option<DbId>,
    pub edited_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an article. The owner and initial status are supplied
/// by the handler, never by the client.
///
/// Fields default to empty when absent from the body, so a missing key
/// reaches the validator as an empty string and gets reported alongside
/// every other failing field, instead of dying in deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateArticle {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// DTO for updating an article.
///
/// Deliberately has no `status` field: this struct is the allow-list of
/// columns the authoring path may touch, so a `status` key in the request
/// body is dropped at deserialization and can never reach the database.
#[derive(Debug, Deserialize)]
pub struct UpdateArticle {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Request body for the review operation.
///
/// A missing `status` key defaults to empty and fails decision
/// validation, which keeps the error in the standard envelope.
#[derive(Debug, Deserialize)]
pub struct ReviewDecision {
    /// Target status: `approved` or `rejected`.
    #[serde(default)]
    pub status: String,
}
