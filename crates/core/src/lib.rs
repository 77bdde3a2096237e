//! Domain types shared by the Copydesk persistence and API crates.
//!
//! This crate stays dependency-light: shared ID/timestamp aliases, the
//! error taxonomy, role names, and the article status machine with its
//! validation helpers. Anything touching sqlx or axum lives upstream.

pub mod article;
pub mod error;
pub mod roles;
pub mod types;
