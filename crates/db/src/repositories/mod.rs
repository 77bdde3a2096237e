//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod article_repo;
pub mod dashboard_repo;
pub mod writer_repo;

pub use article_repo::ArticleRepo;
pub use dashboard_repo::DashboardRepo;
pub use writer_repo::WriterRepo;
