//! Domain logic shared by the repository and API layers.
//!
//! This crate has zero internal dependencies so it can be used by any
//! future CLI or worker tooling without pulling in the database stack.

pub mod embed;
pub mod error;
pub mod paging;
pub mod types;
pub mod validate;
