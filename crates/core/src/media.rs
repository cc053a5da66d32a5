//! Public URLs for uploaded files.
//!
//! Uploaded images live in an external object store; rows only keep the
//! storage path. The public URL is the configured media base joined with
//! that path.

/// Default media base URL.
pub const DEFAULT_MEDIA_URL: &str = "/media/";

/// Join a media base URL and a stored file path with exactly one slash.
///
/// Absolute URLs (`http://`, `https://`, protocol-relative `//`) are
/// returned unchanged so externally hosted images keep working. An empty
/// path yields an empty string.
pub fn public_url(media_base: &str, path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        media_base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Public URL for an optional file field; empty when no file is set.
pub fn optional_public_url(media_base: &str, path: Option<&str>) -> String {
    path.map(|p| public_url(media_base, p)).unwrap_or_default()
}
