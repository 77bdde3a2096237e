//! Handler for the writer productivity dashboard.

use axum::extract::State;
use axum::Json;
use chrono::{Duration, Utc};

use copydesk_core::article::RECENT_WINDOW_DAYS;
use copydesk_db::models::dashboard::WriterProductivity;
use copydesk_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard
///
/// Per-writer article counts: lifetime total and articles created in the
/// last 30 days. The window boundary is computed against the wall clock
/// on every request, never cached.
pub async fn writer_dashboard(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<WriterProductivity>>>> {
    let since = Utc::now() - Duration::days(RECENT_WINDOW_DAYS);
    let rows = DashboardRepo::writer_productivity(&state.pool, since).await?;
    Ok(Json(DataResponse { data: rows }))
}
