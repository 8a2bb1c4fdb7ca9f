//! MIME utilities for upload parts

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Content type for a file part, guessed from the file name's extension.
#[must_use]
pub fn guess_content_type(file_name: &str) -> String {
    mime_guess::from_path(file_name)
        .first_raw()
        .unwrap_or(FALLBACK_CONTENT_TYPE)
        .to_string()
}
