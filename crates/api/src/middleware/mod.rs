//! Request extractors implementing the authorization gate.

pub mod auth;
pub mod rbac;
