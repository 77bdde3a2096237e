//! HTTP request handlers, one module per resource.

pub mod articles;
pub mod auth;
pub mod dashboard;
pub mod review;
