//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Serialize` response struct safe for API output
//! - `Deserialize` create/update DTOs whose fields double as the
//!   per-operation allow-list of mutable columns

pub mod article;
pub mod dashboard;
pub mod writer;
