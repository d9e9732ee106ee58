//! Document loading and translation saving.
//!
//! Only plain-text documents are loaded. PDF and Word files are recognized
//! so the user gets an explanation instead of a generic failure, but no
//! extraction is attempted. Saving writes the output buffer to a
//! timestamped text file in the download directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::logic::download_filename;

/// Rough document classification by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    /// Plain text, loadable as UTF-8.
    Text,
    /// PDF/DOC/DOCX: recognized but not parsed.
    WordLike,
    /// Anything else.
    Unknown,
}

/// Failure modes for document load/save operations.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// PDF/DOC/DOCX selected; text extraction is out of scope.
    #[error(
        "Note: Only text content can be extracted from these file types. For best results, use plain text files."
    )]
    NeedsExtraction,
    /// Extension not recognized at all.
    #[error("Please upload a valid file (TXT, PDF, DOC, or DOCX)")]
    UnsupportedType,
    /// Save requested with an empty output buffer.
    #[error("There is no translated text to download")]
    NothingToDownload,
    /// Underlying filesystem failure.
    #[error("failed to access file: {0}")]
    Io(#[from] std::io::Error),
}

/// Classify a path by its extension (the terminal stand-in for MIME types).
#[must_use]
pub fn detect_kind(path: &Path) -> DocumentKind {
    let ext = path
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("txt" | "text") => DocumentKind::Text,
        Some("pdf" | "doc" | "docx") => DocumentKind::WordLike,
        _ => DocumentKind::Unknown,
    }
}

/// What: Read a plain-text document for the input buffer.
///
/// Inputs:
/// - `path`: File chosen by the user.
///
/// Output:
/// - The file contents (unclamped; the input layer clamps on write), or a
///   [`DocumentError`] explaining the rejection.
///
/// # Errors
/// - [`DocumentError::NeedsExtraction`] for PDF/DOC/DOCX,
///   [`DocumentError::UnsupportedType`] for unrecognized extensions, and
///   [`DocumentError::Io`] for filesystem failures.
pub fn load_document(path: &Path) -> Result<String, DocumentError> {
    match detect_kind(path) {
        DocumentKind::Text => {
            let content = fs::read_to_string(path)?;
            tracing::info!(path = %path.display(), chars = content.chars().count(), "document loaded");
            Ok(content)
        }
        DocumentKind::WordLike => Err(DocumentError::NeedsExtraction),
        DocumentKind::Unknown => Err(DocumentError::UnsupportedType),
    }
}

/// What: Write the translated text to a timestamped file.
///
/// Inputs:
/// - `dir`: Directory to write into.
/// - `lang_code`: Target language embedded in the file name.
/// - `text`: Output buffer content.
/// - `now`: Timestamp for the file name.
///
/// Output:
/// - Path of the written file, [`DocumentError::NothingToDownload`] when
///   the buffer is empty or whitespace, or the I/O failure.
///
/// # Errors
/// - [`DocumentError::NothingToDownload`] for an empty buffer and
///   [`DocumentError::Io`] when the write fails.
pub fn save_translation(
    dir: &Path,
    lang_code: &str,
    text: &str,
    now: chrono::DateTime<chrono::Utc>,
) -> Result<PathBuf, DocumentError> {
    if text.trim().is_empty() {
        return Err(DocumentError::NothingToDownload);
    }
    let path = dir.join(download_filename(lang_code, now));
    fs::write(&path, text)?;
    tracing::info!(path = %path.display(), "translation saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: Extensions map onto the three document classes.
    ///
    /// - Input: Representative file names
    /// - Output: Text for txt, WordLike for pdf/doc/docx, Unknown otherwise
    #[test]
    fn detect_kind_classifies_extensions() {
        assert_eq!(detect_kind(Path::new("notes.txt")), DocumentKind::Text);
        assert_eq!(detect_kind(Path::new("NOTES.TXT")), DocumentKind::Text);
        assert_eq!(detect_kind(Path::new("paper.pdf")), DocumentKind::WordLike);
        assert_eq!(detect_kind(Path::new("cv.docx")), DocumentKind::WordLike);
        assert_eq!(detect_kind(Path::new("image.png")), DocumentKind::Unknown);
        assert_eq!(detect_kind(Path::new("no_extension")), DocumentKind::Unknown);
    }

    /// What: Text files load; Word-like and unknown files are rejected
    /// with their specific messages.
    ///
    /// - Input: Temp .txt, .pdf, and .png paths
    /// - Output: Contents for txt; typed errors otherwise
    #[test]
    fn load_document_accepts_only_text() {
        let dir = tempfile::tempdir().expect("tempdir");
        let txt = dir.path().join("hello.txt");
        fs::write(&txt, "hello world").expect("write");
        assert_eq!(load_document(&txt).expect("text loads"), "hello world");

        let pdf = dir.path().join("doc.pdf");
        fs::write(&pdf, b"%PDF-").expect("write");
        assert!(matches!(
            load_document(&pdf),
            Err(DocumentError::NeedsExtraction)
        ));

        let png = dir.path().join("pic.png");
        fs::write(&png, b"\x89PNG").expect("write");
        assert!(matches!(
            load_document(&png),
            Err(DocumentError::UnsupportedType)
        ));
    }

    /// What: Saving refuses an empty buffer and otherwise writes the file.
    ///
    /// - Input: Whitespace-only text, then real text
    /// - Output: `NothingToDownload`, then a file with the expected name and body
    #[test]
    fn save_translation_guards_empty_output() {
        let dir = tempfile::tempdir().expect("tempdir");
        let now = chrono::Utc::now();

        assert!(matches!(
            save_translation(dir.path(), "fr", "  \n", now),
            Err(DocumentError::NothingToDownload)
        ));

        let path = save_translation(dir.path(), "fr", "Bonjour", now).expect("saved");
        let name = path.file_name().and_then(|n| n.to_str()).expect("name");
        assert!(name.starts_with("translated-to-fr-"));
        assert!(name.ends_with(".txt"));
        assert_eq!(fs::read_to_string(&path).expect("read back"), "Bonjour");
    }
}
