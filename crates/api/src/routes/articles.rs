//! Route definitions for `/articles`: authoring plus the review workflow.
//!
//! Static segments (`/pending`, `/edited`) take priority over the
//! `{article_id}` capture, so the two listing routes never shadow an id.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{articles, review};
use crate::state::AppState;

/// Routes mounted at `/articles`.
///
/// ```text
/// POST /                        create_article      (auth)
/// GET  /{article_id}            get_article         (auth)
/// PUT  /{article_id}            update_article      (auth)
/// GET  /pending                 list_pending        (editor)
/// POST /{article_id}/review     review_article      (editor)
/// GET  /edited                  edit_history        (editor)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(articles::create_article))
        .route(
            "/{article_id}",
            get(articles::get_article).put(articles::update_article),
        )
        .route("/pending", get(review::list_pending))
        .route("/{article_id}/review", post(review::review_article))
        .route("/edited", get(review::edit_history))
}
