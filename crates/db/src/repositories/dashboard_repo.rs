//! Aggregation queries backing the writer productivity dashboard.

use sqlx::PgPool;

use copydesk_core::types::Timestamp;

use crate::models::dashboard::WriterProductivity;

/// Read-only reporting queries over writers and articles.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Per-writer article counts: lifetime total and count created since
    /// `since` (the 30-day window boundary, computed by the caller at
    /// evaluation time, never cached).
    ///
    /// Groups by display name. Writers with no articles still appear with
    /// zero counts via the LEFT JOIN.
    pub async fn writer_productivity(
        pool: &PgPool,
        since: Timestamp,
    ) -> Result<Vec<WriterProductivity>, sqlx::Error> {
        sqlx::query_as::<_, WriterProductivity>(
            "SELECT
                w.name,
                COUNT(a.id) AS total_articles,
                COUNT(a.id) FILTER (WHERE a.created_at >= $1) AS articles_last_30_days
             FROM writers w
             LEFT JOIN articles a ON a.written_by = w.id
             GROUP BY w.name
             ORDER BY w.name ASC",
        )
        .bind(since)
        .fetch_all(pool)
        .await
    }
}
