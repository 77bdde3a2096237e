//! Per-writer productivity rows for the dashboard.

use serde::Serialize;
use sqlx::FromRow;

/// Aggregated article counts for one writer display name.
///
/// Grouping is by `writers.name`, not id, so two writers sharing a display
/// name are merged into one row. This mirrors the documented behavior of
/// the reporting query and is kept on purpose; see DESIGN.md.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WriterProductivity {
    pub name: String,
    pub total_articles: i64,
    pub articles_last_30_days: i64,
}
