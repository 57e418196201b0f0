//! Ignore list loading.
//!
//! An ignore file holds one literal substring per line. Any line of a
//! scanned file containing one of them yields no findings at all.

use crate::error::ScanError;
use crate::utils::for_each_line;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load ignore patterns from `path`.
///
/// `None` means no ignore file and yields an empty list. Open failures
/// return an empty list plus the error; a read error mid-file keeps the
/// patterns read so far. Blank lines are kept as empty patterns, which
/// match every line.
pub fn load_ignore_patterns(path: Option<&Path>) -> (Vec<String>, Vec<ScanError>) {
    let Some(path) = path else {
        return (Vec::new(), Vec::new());
    };
    let file = match File::open(path) {
        Ok(f) => f,
        Err(source) => {
            return (
                Vec::new(),
                vec![ScanError::IgnoreOpen {
                    path: path.to_path_buf(),
                    source,
                }],
            )
        }
    };
    let (patterns, errors) = read_ignore_patterns(path, BufReader::new(file));
    tracing::debug!(path = %path.display(), count = patterns.len(), "loaded ignore patterns");
    (patterns, errors)
}

/// Collect one pattern per line of `reader`; `path` only labels errors.
fn read_ignore_patterns<R: BufRead>(path: &Path, reader: R) -> (Vec<String>, Vec<ScanError>) {
    let mut patterns = Vec::new();
    let mut errors = Vec::new();
    if let Err(source) = for_each_line(reader, |l| patterns.push(l)) {
        errors.push(ScanError::IgnoreRead {
            path: path.to_path_buf(),
            source,
        });
    }
    (patterns, errors)
}

/// Drop empty patterns so a stray blank line no longer suppresses everything.
pub fn drop_empty(mut patterns: Vec<String>) -> Vec<String> {
    patterns.retain(|p| !p.is_empty());
    patterns
}

/// True when any ignore pattern occurs in `line`.
pub fn is_ignored(ignore: &[String], line: &str) -> bool {
    ignore.iter().any(|p| line.contains(p.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::FailAfter;
    use tempfile::tempdir;

    #[test]
    fn test_load_none_is_empty() {
        let (pats, errs) = load_ignore_patterns(None);
        assert!(pats.is_empty());
        assert!(errs.is_empty());
    }

    #[test]
    fn test_load_keeps_lines_verbatim() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("ignore.txt");
        std::fs::write(&p, "PermitRootLogin yes\n\n  autoindex on\n").unwrap();
        let (pats, errs) = load_ignore_patterns(Some(&p));
        assert!(errs.is_empty());
        assert_eq!(pats, vec!["PermitRootLogin yes", "", "  autoindex on"]);
    }

    #[test]
    fn test_load_missing_file_reports_and_continues() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("nope.txt");
        let (pats, errs) = load_ignore_patterns(Some(&p));
        assert!(pats.is_empty());
        assert_eq!(errs.len(), 1);
        assert!(matches!(errs[0], ScanError::IgnoreOpen { .. }));
        assert!(errs[0].to_string().starts_with("Error opening ignore file"));
    }

    #[test]
    fn test_read_error_keeps_patterns_read_so_far() {
        let reader = BufReader::new(FailAfter::new(b"PermitRootLogin yes\n# audited\n"));
        let (pats, errs) = read_ignore_patterns(Path::new("ignore.txt"), reader);
        assert_eq!(pats, vec!["PermitRootLogin yes", "# audited"]);
        assert_eq!(errs.len(), 1);
        assert!(matches!(errs[0], ScanError::IgnoreRead { .. }));
        assert!(errs[0].to_string().starts_with("Error reading ignore file ignore.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn test_load_directory_reports_read_error() {
        // opening a directory succeeds on unix; reading it fails
        let tmp = tempdir().unwrap();
        let (pats, errs) = load_ignore_patterns(Some(tmp.path()));
        assert!(pats.is_empty());
        assert_eq!(errs.len(), 1);
        assert!(matches!(errs[0], ScanError::IgnoreRead { .. }));
    }

    #[test]
    fn test_empty_pattern_matches_every_line() {
        let ignore = vec![String::new()];
        assert!(is_ignored(&ignore, "anything"));
        assert!(is_ignored(&ignore, ""));
        assert!(!is_ignored(&drop_empty(ignore), "anything"));
    }

    #[test]
    fn test_is_ignored_substring() {
        let ignore = vec!["# audited".to_string()];
        assert!(is_ignored(&ignore, "PermitRootLogin yes # audited"));
        assert!(!is_ignored(&ignore, "PermitRootLogin yes"));
    }
}
