//! Content acquisition.
//!
//! Inline text is used as-is. Files are checked for existence first so a
//! missing file gets its own failure, then read whole as UTF-8.

use std::borrow::Cow;
use std::path::Path;

use crate::config::ContentSource;
use crate::error::CheckError;

/// Resolve a content source to the text that will be scanned.
///
/// # Errors
///
/// - `CheckError::FileNotFound` if a file source does not exist.
/// - `CheckError::Read` if the file cannot be read or is not valid UTF-8.
pub fn resolve_content(source: &ContentSource) -> Result<Cow<'_, str>, CheckError> {
    match source {
        ContentSource::Text(text) => Ok(Cow::Borrowed(text.as_str())),
        ContentSource::File(path) => read_text_file(path).map(Cow::Owned),
    }
}

/// Read a whole file as UTF-8 text.
///
/// # Errors
///
/// - `CheckError::FileNotFound` if nothing exists at `path`.
/// - `CheckError::Read` on any I/O failure, including a directory path or
///   content that is not valid UTF-8.
pub fn read_text_file(path: &Path) -> Result<String, CheckError> {
    if !path.exists() {
        return Err(CheckError::FileNotFound {
            path: path.to_owned(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| CheckError::Read {
        path: path.to_owned(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read content file");
    Ok(content)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_inline_text_is_borrowed_verbatim() {
        let source = ContentSource::Text("  spaced  ".to_owned());
        let content = resolve_content(&source).unwrap();
        assert!(matches!(content, Cow::Borrowed("  spaced  ")));
    }

    #[test]
    fn test_reads_file_content() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"GitHub and GitHub").unwrap();
        let source = ContentSource::File(file.path().to_path_buf());
        assert_eq!(resolve_content(&source).unwrap(), "GitHub and GitHub");
    }

    #[test]
    fn test_missing_file_is_distinct() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("non-existent.md");
        let err = read_text_file(&missing).unwrap_err();
        assert!(matches!(err, CheckError::FileNotFound { .. }));
        assert_eq!(
            err.to_string(),
            format!("File does not exist: {}", missing.display())
        );
    }

    #[test]
    fn test_invalid_utf8_is_read_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x66, 0x6f, 0xff, 0xfe]).unwrap();
        let err = read_text_file(file.path()).unwrap_err();
        assert!(matches!(err, CheckError::Read { .. }));
        assert!(err.is_unexpected());
    }

    #[test]
    fn test_directory_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let err = read_text_file(tmp.path()).unwrap_err();
        assert!(matches!(err, CheckError::Read { .. }));
    }
}
