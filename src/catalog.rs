//! Hex color catalog loading.
//!
//! A catalog is a plain text file with one hex color per line
//! (`#RRGGBB`). Surrounding whitespace is ignored and blank lines are
//! skipped. Each entry is converted to CIELAB at load time; the trimmed
//! hex string becomes the entry's label.

use std::path::Path;

use lab_kdtree::{CieLab, LabPoint, Srgb};

use crate::error::CatalogError;

/// Read a catalog file from disk and convert every entry to CIELAB.
pub fn load_catalog(path: &Path) -> Result<Vec<LabPoint>, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&text)
}

/// Parse catalog text. Line numbers in errors are 1-based.
pub fn parse_catalog(text: &str) -> Result<Vec<LabPoint>, CatalogError> {
    let mut points = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let hex = line.trim();
        if hex.is_empty() {
            continue;
        }
        let srgb: Srgb = hex
            .parse()
            .map_err(|source| CatalogError::Parse {
                line: idx + 1,
                source,
            })?;
        points.push(LabPoint::new(CieLab::from(srgb), hex));
    }
    if points.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_catalog() {
        let points = parse_catalog("#000000\n#FFFFFF\n#FF0000\n").unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].label, "#000000");
        assert_eq!(points[2].label, "#FF0000");
        // Red's CIELAB coordinates are well known
        assert!((points[2].lab.l - 53.24).abs() < 0.05);
    }

    #[test]
    fn test_blank_lines_and_whitespace_skipped() {
        let points = parse_catalog("\n  #00FF00  \n\n\t\n#0000FF\n").unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label, "#00FF00", "label must be trimmed");
        assert_eq!(points[1].label, "#0000FF");
    }

    #[test]
    fn test_parse_error_reports_one_based_line() {
        let err = parse_catalog("#000000\n#GGGGGG\n").unwrap_err();
        match err {
            CatalogError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Parse error, got {other}"),
        }
    }

    #[test]
    fn test_blank_lines_do_not_shift_error_line_numbers() {
        // The bad entry sits on physical line 4
        let err = parse_catalog("#000000\n\n\n#XYZXYZ\n").unwrap_err();
        match err {
            CatalogError::Parse { line, .. } => assert_eq!(line, 4),
            other => panic!("expected Parse error, got {other}"),
        }
    }

    #[test]
    fn test_non_ascii_line_is_a_parse_error() {
        // A multi-byte line whose byte length matches a hex form must come
        // back as a Parse error with its line number, not abort the load
        let err = parse_catalog("#000000\n日日\n").unwrap_err();
        match err {
            CatalogError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Parse error, got {other}"),
        }
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(parse_catalog(""), Err(CatalogError::Empty)));
        assert!(matches!(parse_catalog("\n \n"), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_catalog(Path::new("/nonexistent/colors.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/colors.txt"));
    }
}
