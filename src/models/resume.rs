//! Resume file selection and AI suggestions

use crate::util::units::{file_extension, format_file_size};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File extensions the upload step accepts
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// Why a local file could not be selected for upload
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("Not a regular file: {0}")]
    NotAFile(String),
    #[error("Unsupported file type. Use PDF, DOC or DOCX.")]
    UnsupportedType,
}

/// A resume picked on the local disk, not yet uploaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub path: PathBuf,
    pub name: String,
    pub size_bytes: u64,
}

impl ResumeFile {
    /// Select a file from a typed or pasted path
    ///
    /// Surrounding whitespace and quotes (terminals quote dropped paths
    /// containing spaces) are stripped before the lookup.
    pub fn select(input: &str) -> Result<Self, SelectionError> {
        let cleaned = input.trim().trim_matches(|c| c == '\'' || c == '"');
        let path = Path::new(cleaned);

        let metadata =
            std::fs::metadata(path).map_err(|_| SelectionError::NotFound(cleaned.to_string()))?;
        if !metadata.is_file() {
            return Err(SelectionError::NotAFile(cleaned.to_string()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| cleaned.to_string());

        match file_extension(&name) {
            Some(ext) if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) => {}
            _ => return Err(SelectionError::UnsupportedType),
        }

        Ok(Self {
            path: path.to_path_buf(),
            name,
            size_bytes: metadata.len(),
        })
    }

    /// MIME type sent with the multipart upload
    pub fn mime_type(&self) -> &'static str {
        match file_extension(&self.name).as_deref() {
            Some("pdf") => "application/pdf",
            Some("doc") => "application/msword",
            Some("docx") => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            _ => "application/octet-stream",
        }
    }

    /// One-line summary shown once a file is picked
    pub fn summary(&self) -> String {
        format!("{} — Ready to upload", format_file_size(self.size_bytes))
    }
}

/// AI review of the resume against the liked job
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeSuggestions {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub missing_skills: Vec<String>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub improvements: Vec<String>,
    /// Suggested resume body, editable before approval
    #[serde(default)]
    pub suggestions: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, bytes: usize) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&vec![b'x'; bytes]).unwrap();
        path
    }

    #[test]
    fn test_select_accepts_pdf() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "resume.pdf", 2048);

        let file = ResumeFile::select(path.to_str().unwrap()).unwrap();
        assert_eq!(file.name, "resume.pdf");
        assert_eq!(file.size_bytes, 2048);
        assert_eq!(file.mime_type(), "application/pdf");
        assert_eq!(file.summary(), "2.0 KB — Ready to upload");
    }

    #[test]
    fn test_select_strips_quotes_from_pasted_path() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "my resume.docx", 10);

        let pasted = format!("'{}'\n", path.display());
        let file = ResumeFile::select(&pasted).unwrap();
        assert_eq!(file.name, "my resume.docx");
    }

    #[test]
    fn test_select_rejects_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "notes.txt", 10);

        let err = ResumeFile::select(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, SelectionError::UnsupportedType));
    }

    #[test]
    fn test_select_missing_file_and_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone.pdf");
        assert!(matches!(
            ResumeFile::select(missing.to_str().unwrap()),
            Err(SelectionError::NotFound(_))
        ));
        assert!(matches!(
            ResumeFile::select(dir.path().to_str().unwrap()),
            Err(SelectionError::NotAFile(_))
        ));
    }

    #[test]
    fn test_suggestions_defaults() {
        let parsed: ResumeSuggestions =
            serde_json::from_str(r#"{"suggestions":"Rewritten"}"#).unwrap();
        assert!(parsed.missing_skills.is_empty());
        assert!(parsed.improvements.is_empty());
        assert_eq!(parsed.suggestions.as_deref(), Some("Rewritten"));

        let parsed: ResumeSuggestions = serde_json::from_str(
            r#"{"missing_skills":null,"improvements":null,"suggestions":"x"}"#,
        )
        .unwrap();
        assert!(parsed.missing_skills.is_empty());
        assert!(parsed.improvements.is_empty());
        assert_eq!(parsed.suggestions.as_deref(), Some("x"));
    }
}
