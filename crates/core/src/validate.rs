//! Field validation for subject and video form submissions.

use crate::error::CoreError;

/// Maximum length for subject names and video titles.
pub const MAX_NAME_LENGTH: usize = 255;

/// Validate a subject name: non-blank, at most [`MAX_NAME_LENGTH`] chars.
pub fn validate_subject_name(name: &str) -> Result<(), CoreError> {
    validate_short_text("Subject name", name)
}

/// Validate a video title: non-blank, at most [`MAX_NAME_LENGTH`] chars.
pub fn validate_video_title(title: &str) -> Result<(), CoreError> {
    validate_short_text("Video title", title)
}

/// Validate a stored video link.
///
/// Only requires a plausible absolute URL. Whether the link can actually
/// be turned into an embed link is decided later, at render time, by
/// [`crate::embed::embed_link`].
pub fn validate_link(link: &str) -> Result<(), CoreError> {
    if link.trim().is_empty() {
        return Err(CoreError::Validation("Video link must not be empty".into()));
    }
    if !link.starts_with("http://") && !link.starts_with("https://") {
        return Err(CoreError::Validation(
            "Video link must be an http(s) URL".into(),
        ));
    }
    Ok(())
}

fn validate_short_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}
