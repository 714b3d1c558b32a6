//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// The `?page=` parameter on paginated listings.
///
/// Deserialized as a raw string because the value is untrusted: parsing,
/// defaulting, and clamping happen in `courseware_core::paging`.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}
