//! Handlers for the editorial review workflow.
//!
//! Every handler here takes [`RequireEditor`]: the role gate runs before
//! any data access.

use axum::extract::{Path, State};
use axum::Json;

use copydesk_core::article::validate_review_decision;
use copydesk_core::error::CoreError;
use copydesk_core::types::DbId;
use copydesk_db::models::article::{Article, ReviewDecision};
use copydesk_db::repositories::ArticleRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/articles/pending
///
/// The review queue: all pending articles, oldest first.
pub async fn list_pending(
    RequireEditor(_editor): RequireEditor,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Article>>>> {
    let articles = ArticleRepo::list_pending(&state.pool).await?;
    Ok(Json(DataResponse { data: articles }))
}

/// POST /api/v1/articles/{article_id}/review
///
/// Resolve a pending article to `approved` or `rejected`, recording the
/// acting editor.
///
/// An article that is absent and one that is already resolved both come
/// back as `NotFound`: the conditional update in the repository matches
/// only pending rows, and the distinction is deliberately not surfaced.
pub async fn review_article(
    RequireEditor(editor): RequireEditor,
    State(state): State<AppState>,
    Path(article_id): Path<DbId>,
    Json(input): Json<ReviewDecision>,
) -> AppResult<Json<DataResponse<Article>>> {
    validate_review_decision(&input.status)?;

    let article = ArticleRepo::review(&state.pool, article_id, &input.status, editor.writer_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Article",
                id: article_id,
            })
        })?;

    tracing::info!(
        editor_id = editor.writer_id,
        article_id = article.id,
        status = %article.status,
        "Article reviewed"
    );

    Ok(Json(DataResponse { data: article }))
}

/// GET /api/v1/articles/edited
///
/// The caller's own edit history, oldest first. Strictly scoped: an
/// editor never sees another editor's decisions here.
pub async fn edit_history(
    RequireEditor(editor): RequireEditor,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Article>>>> {
    let articles = ArticleRepo::list_edited_by(&state.pool, editor.writer_id).await?;
    Ok(Json(DataResponse { data: articles }))
}
