//! Article status machine constants and validation functions.
//!
//! Status values are stored as lowercase strings in the `articles.status`
//! column. The status changes only through the review operation; authoring
//! paths never carry a status field at all.

use crate::error::CoreError;

/// Default status for every new article, awaiting an editorial decision.
pub const STATUS_PENDING_REVIEW: &str = "pending_review";

/// Article was approved by an editor.
pub const STATUS_APPROVED: &str = "approved";

/// Article was rejected by an editor.
pub const STATUS_REJECTED: &str = "rejected";

/// All statuses an article can hold.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING_REVIEW, STATUS_APPROVED, STATUS_REJECTED];

/// Statuses a review may transition a pending article to. `pending_review`
/// itself is not a valid review target.
pub const VALID_REVIEW_DECISIONS: &[&str] = &[STATUS_APPROVED, STATUS_REJECTED];

/// Maximum length for an article title.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Window for the "recent articles" dashboard count, in days.
pub const RECENT_WINDOW_DAYS: i64 = 30;

/// Validate that a review decision is one of the accepted target statuses.
pub fn validate_review_decision(decision: &str) -> Result<(), CoreError> {
    if VALID_REVIEW_DECISIONS.contains(&decision) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid review decision '{decision}'. Must be one of: {}",
            VALID_REVIEW_DECISIONS.join(", ")
        )))
    }
}

/// Validate authoring input for create and update.
///
/// Collects every failing field before returning, so a request with an
/// empty title and empty content reports both in a single error rather
/// than failing on the first.
pub fn validate_article_fields(title: &str, content: &str) -> Result<(), CoreError> {
    let mut problems: Vec<String> = Vec::new();

    if title.trim().is_empty() {
        problems.push("title must not be empty".to_string());
    } else if title.len() > MAX_TITLE_LENGTH {
        problems.push(format!(
            "title must be at most {MAX_TITLE_LENGTH} characters"
        ));
    }

    if content.trim().is_empty() {
        problems.push("content must not be empty".to_string());
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(problems.join("; ")))
    }
}
