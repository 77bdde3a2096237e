//! Route definitions, one module per resource.

pub mod articles;
pub mod auth;
pub mod dashboard;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                   register (public)
/// /auth/login                      login (public)
///
/// /articles                        create (auth)
/// /articles/{article_id}           get, update (auth)
/// /articles/pending                review queue (editor)
/// /articles/{article_id}/review    resolve pending article (editor)
/// /articles/edited                 caller's edit history (editor)
///
/// /dashboard                       per-writer productivity (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/articles", articles::router())
        .nest("/dashboard", dashboard::router())
}
