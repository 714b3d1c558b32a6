//! Entity models and request DTOs.

pub mod subject;
pub mod user;
pub mod video;
