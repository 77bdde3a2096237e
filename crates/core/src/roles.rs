//! Well-known role name constants.
//!
//! A writer's role is derived from the `is_editor` flag on the `writers`
//! row; it is carried in JWT claims and checked by the RBAC extractors.

/// Base role: can author and edit articles.
pub const ROLE_WRITER: &str = "writer";

/// Elevated role: can additionally review pending articles.
pub const ROLE_EDITOR: &str = "editor";

/// Resolve the role name for a writer account.
pub fn role_name(is_editor: bool) -> &'static str {
    if is_editor {
        ROLE_EDITOR
    } else {
        ROLE_WRITER
    }
}
