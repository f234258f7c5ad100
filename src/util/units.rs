//! Units formatting utilities
//!
//! Human-readable sizes for the resume file summary.

/// Format a byte count as kilobytes with one decimal place
///
/// # Examples
/// ```
/// use jobmatch::util::units::format_file_size;
///
/// assert_eq!(format_file_size(0), "0.0 KB");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// assert_eq!(format_file_size(2 * 1024 * 1024), "2048.0 KB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

/// File extension of a path-like string, lowercased, without the dot
///
/// # Examples
/// ```
/// use jobmatch::util::units::file_extension;
///
/// assert_eq!(file_extension("cv/Resume.PDF").as_deref(), Some("pdf"));
/// assert_eq!(file_extension("README"), None);
/// ```
pub fn file_extension(name: &str) -> Option<String> {
    std::path::Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0.0 KB");
        assert_eq!(format_file_size(512), "0.5 KB");
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(12_595), "12.3 KB");
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("resume.pdf").as_deref(), Some("pdf"));
        assert_eq!(file_extension("/home/me/CV.Docx").as_deref(), Some("docx"));
        assert_eq!(file_extension("resume"), None);
        assert_eq!(file_extension(".bashrc"), None);
    }
}
