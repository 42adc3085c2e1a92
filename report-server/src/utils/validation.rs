//! Upload validation helpers
//!
//! Filename hygiene for user-supplied uploads.

use std::path::Path;

use crate::core::config::ALLOWED_EXTENSIONS;

/// Check whether a filename carries one of the allowed spreadsheet
/// extensions (case-insensitive)
pub fn has_allowed_extension(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&e.as_str())
        })
        .unwrap_or(false)
}

/// Strip an uploaded filename down to a safe basename
///
/// Keeps only the final path component and drops path separators and control
/// characters, so a stored file can never escape the upload directory.
/// Returns `None` when nothing safe remains (empty names, dotfiles,
/// traversal attempts).
pub fn sanitize_filename(name: &str) -> Option<String> {
    let base = Path::new(name).file_name()?.to_str()?;

    let cleaned: String = base
        .chars()
        .filter(|c| !c.is_control() && !matches!(c, '/' | '\\' | ':'))
        .collect();

    if cleaned.is_empty() || cleaned.starts_with('.') {
        return None;
    }

    Some(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions() {
        assert!(has_allowed_extension("sales.csv"));
        assert!(has_allowed_extension("sales.xlsx"));
        assert!(has_allowed_extension("SALES.CSV"));
        assert!(has_allowed_extension("daily report.XLSX"));

        assert!(!has_allowed_extension("sales.txt"));
        assert!(!has_allowed_extension("sales.csv.exe"));
        assert!(!has_allowed_extension("sales"));
        assert!(!has_allowed_extension(""));
    }

    #[test]
    fn test_sanitize_keeps_plain_names() {
        assert_eq!(
            sanitize_filename("pos_sales.csv").as_deref(),
            Some("pos_sales.csv")
        );
        assert_eq!(
            sanitize_filename("Daily Report 2026.xlsx").as_deref(),
            Some("Daily Report 2026.xlsx")
        );
    }

    #[test]
    fn test_sanitize_strips_traversal() {
        assert_eq!(
            sanitize_filename("../../evil.csv").as_deref(),
            Some("evil.csv")
        );
        assert_eq!(
            sanitize_filename("/etc/passwd.csv").as_deref(),
            Some("passwd.csv")
        );
    }

    #[test]
    fn test_sanitize_rejects_unsafe_names() {
        assert_eq!(sanitize_filename(""), None);
        assert_eq!(sanitize_filename(".."), None);
        assert_eq!(sanitize_filename(".hidden.csv"), None);
        // Separator-only names have nothing left after cleaning
        assert_eq!(sanitize_filename("\\\\"), None);
    }
}
