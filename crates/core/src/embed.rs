//! Derivation of inline-playable embed links from stored share links.
//!
//! Videos are stored with the share link an uploader pastes in, which for
//! Google Drive is usually of the form
//! `https://drive.google.com/file/d/<id>/view?usp=sharing`. The player page
//! needs the `/preview` form of that URL instead. Extraction is a
//! best-effort string heuristic with a total fallback: any input we cannot
//! recognize is passed through unchanged, never rejected.

/// Derive the embeddable preview link for a stored share link.
///
/// If `link` contains both `/view` and `/d/`, the file id between the
/// first `/d/` and the next `/` is interpolated into the canonical
/// preview URL. Anything else, including a link that ends right after
/// `/d/`, is returned as-is.
pub fn embed_link(link: &str) -> String {
    if !link.contains("/view") || !link.contains("/d/") {
        return link.to_string();
    }
    let Some((_, rest)) = link.split_once("/d/") else {
        return link.to_string();
    };
    let file_id = rest.split('/').next().unwrap_or("");
    if file_id.is_empty() {
        return link.to_string();
    }
    format!("https://drive.google.com/file/d/{file_id}/preview")
}
