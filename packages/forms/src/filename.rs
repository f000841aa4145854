use thiserror::Error;

/// Rejection reasons for a submitted upload filename.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilenameError {
    #[error("filename cannot be empty")]
    Empty,
    #[error("filename must not contain path separators")]
    PathSeparator,
    #[error("filename must not be a '..' path component")]
    PathTraversal,
    #[error("filename must not contain control characters")]
    ControlCharacter,
}

/// Validate the display name of a submitted upload.
///
/// Submitted names end up in report markup, CSV rows, and download URLs, so
/// anything that could smuggle a path component or a header line is rejected
/// before the reference is persisted. Leading dots are allowed: submitters
/// legitimately upload dotfiles.
pub fn validate_upload_filename(name: &str) -> Result<&str, FilenameError> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(FilenameError::Empty);
    }

    // Covers null bytes, CR/LF, and the rest of the ASCII control range.
    if trimmed.chars().any(|c| c.is_ascii_control()) {
        return Err(FilenameError::ControlCharacter);
    }

    if trimmed.contains('/') || trimmed.contains('\\') {
        return Err(FilenameError::PathSeparator);
    }

    if trimmed == ".." {
        return Err(FilenameError::PathTraversal);
    }

    Ok(trimmed)
}
