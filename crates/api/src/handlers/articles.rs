//! Handlers for authoring operations on `/articles`.
//!
//! Authoring never touches `status`: the request DTOs carry title and
//! content only, so a submitted status key is dropped at deserialization
//! (server-side allow-list, never trust a client-disabled field).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use copydesk_core::article::validate_article_fields;
use copydesk_core::error::CoreError;
use copydesk_core::types::DbId;
use copydesk_db::models::article::{Article, CreateArticle, UpdateArticle};
use copydesk_db::repositories::ArticleRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/articles
///
/// Create an article owned by the caller. Starts in `pending_review`.
/// Returns 201 with the stored article; the client uses its id for the
/// detail redirect.
pub async fn create_article(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<CreateArticle>,
) -> AppResult<(StatusCode, Json<DataResponse<Article>>)> {
    validate_article_fields(&input.title, &input.content)?;

    let article = ArticleRepo::create(&state.pool, user.writer_id, &input).await?;

    tracing::info!(
        writer_id = user.writer_id,
        article_id = article.id,
        "Article created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: article })))
}

/// GET /api/v1/articles/{article_id}
///
/// Fetch a single article.
pub async fn get_article(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(article_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Article>>> {
    let article = ArticleRepo::find_by_id(&state.pool, article_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Article",
                id: article_id,
            })
        })?;
    Ok(Json(DataResponse { data: article }))
}

/// PUT /api/v1/articles/{article_id}
///
/// Update an article's title and content. The status column is not
/// reachable from this path regardless of what the request body carries.
pub async fn update_article(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(article_id): Path<DbId>,
    Json(input): Json<UpdateArticle>,
) -> AppResult<Json<DataResponse<Article>>> {
    validate_article_fields(&input.title, &input.content)?;

    let article = ArticleRepo::update(&state.pool, article_id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Article",
                id: article_id,
            })
        })?;

    tracing::info!(
        writer_id = user.writer_id,
        article_id = article.id,
        "Article updated"
    );

    Ok(Json(DataResponse { data: article }))
}
