//! Writer (account) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use copydesk_core::roles::role_name;
use copydesk_core::types::{DbId, Timestamp};

/// Full writer row from the `writers` table.
///
/// Contains the password hash -- never serialize this to API responses
/// directly. Use [`WriterResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Writer {
    pub id: DbId,
    pub username: String,
    pub email: String,
    /// Display name, also the dashboard grouping key.
    pub name: String,
    pub password_hash: String,
    pub is_editor: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe writer representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct WriterResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub name: String,
    /// Resolved role name (`"writer"` or `"editor"`).
    pub role: String,
    pub created_at: Timestamp,
}

impl From<Writer> for WriterResponse {
    fn from(w: Writer) -> Self {
        WriterResponse {
            id: w.id,
            username: w.username,
            email: w.email,
            role: role_name(w.is_editor).to_string(),
            name: w.name,
            created_at: w.created_at,
        }
    }
}

/// DTO for creating a new writer. The password is hashed by the caller;
/// only the hash reaches this layer.
#[derive(Debug, Deserialize)]
pub struct CreateWriter {
    pub username: String,
    pub email: String,
    pub name: String,
    pub password_hash: String,
}
