//! Upload-side validation and reading: the chunking engine receives plain
//! text only, so the CLI gates what it will read.

use anyhow::{bail, Context, Result};
use std::path::Path;

/// Maximum accepted file size.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Plain-text formats the chunker accepts directly. Binary formats need
/// external text extraction before they reach this tool.
pub const ALLOWED_EXTENSIONS: &[&str] = &["txt", "md", "markdown"];

/// Validate an upload candidate without reading its contents.
pub fn validate_upload(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        bail!(
            "unsupported file type {:?}: only .txt, .md, and .markdown files are supported",
            path
        );
    }

    let metadata = std::fs::metadata(path)
        .with_context(|| format!("cannot read file metadata for {}", path.display()))?;
    if metadata.len() > MAX_UPLOAD_BYTES {
        bail!(
            "file {} exceeds the {} MiB limit",
            path.display(),
            MAX_UPLOAD_BYTES / (1024 * 1024)
        );
    }

    Ok(())
}

/// Validate and read a document to a UTF-8 string.
pub fn read_document(path: &Path) -> Result<String> {
    validate_upload(path)?;
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.pdf");
        std::fs::write(&path, b"%PDF-").unwrap();
        assert!(validate_upload(&path).is_err());
    }

    #[test]
    fn test_rejects_missing_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy");
        std::fs::write(&path, b"text").unwrap();
        assert!(validate_upload(&path).is_err());
    }

    #[test]
    fn test_accepts_markdown_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.MD");
        std::fs::write(&path, b"# Scope\nBody.").unwrap();
        assert!(validate_upload(&path).is_ok());
    }

    #[test]
    fn test_rejects_oversized_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.txt");
        let file = std::fs::File::create(&path).unwrap();
        file.set_len(MAX_UPLOAD_BYTES + 1).unwrap();
        assert!(validate_upload(&path).is_err());
    }

    #[test]
    fn test_read_document_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "# Scope").unwrap();
        writeln!(file, "This policy applies to all employees.").unwrap();

        let text = read_document(&path).unwrap();
        assert!(text.starts_with("# Scope"));
    }
}
