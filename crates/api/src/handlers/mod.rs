//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `courseware_db`
//! and map errors via [`crate::error::AppError`]. Admin-only handlers
//! take an [`crate::middleware::auth::AdminUser`] extractor parameter.

pub mod auth;
pub mod dashboard;
pub mod subject;
pub mod video;
