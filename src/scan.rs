//! Scan pipeline: per-file matching, per-root traversal, and the
//! fan-out over roots.
//!
//! Every function returns what it managed to collect together with the
//! errors it hit. Nothing here aborts; a failure only truncates the
//! contribution of the file or root it happened in.

use crate::error::ScanError;
use crate::ignore::is_ignored;
use crate::models::catalog::{matching_checks, ConfigPattern};
use crate::models::Finding;
use crate::utils::for_each_line;
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Roots scanned when none are given on the command line or in config.
pub const DEFAULT_ROOTS: &[&str] = &["/etc/apache2", "/etc/nginx", "/etc/ssh", "/etc/mysql"];

/// Match `patterns` against every line of the file at `path`.
///
/// A line containing any ignore pattern contributes nothing, whichever
/// catalog pattern it matched.
pub fn scan_file(
    path: &Path,
    patterns: &[ConfigPattern],
    ignore: &[String],
) -> (Vec<Finding>, Vec<ScanError>) {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(source) => {
            return (
                Vec::new(),
                vec![ScanError::FileOpen {
                    path: path.to_path_buf(),
                    source,
                }],
            )
        }
    };
    let (findings, res) = scan_reader(
        &path.to_string_lossy(),
        BufReader::new(file),
        patterns,
        ignore,
    );
    let errors = match res {
        Ok(()) => Vec::new(),
        Err(source) => vec![ScanError::FileRead {
            path: path.to_path_buf(),
            source,
        }],
    };
    (findings, errors)
}

/// Line matcher behind `scan_file`; findings read before an I/O error
/// are returned along with it.
fn scan_reader<R: BufRead>(
    file: &str,
    reader: R,
    patterns: &[ConfigPattern],
    ignore: &[String],
) -> (Vec<Finding>, std::io::Result<()>) {
    let mut findings = Vec::new();
    let mut line_no = 0usize;
    let res = for_each_line(reader, |line| {
        line_no += 1;
        if is_ignored(ignore, &line) {
            return;
        }
        for p in patterns.iter().filter(|p| line.contains(p.pattern)) {
            findings.push(Finding {
                file: file.to_string(),
                line: line_no,
                pattern: p.pattern.to_string(),
                content: line.clone(),
                severity: p.severity,
            });
        }
    });
    (findings, res)
}

/// Walk `root` recursively and scan every file whose path ends with a
/// catalog filename, once per matching check.
///
/// Entries are visited in file-name order and symlinks are not followed.
/// The first traversal error is reported and ends the walk of this root.
pub fn scan_directory(root: &Path, ignore: &[String]) -> (Vec<Finding>, Vec<ScanError>) {
    let mut findings = Vec::new();
    let mut errors = Vec::new();
    tracing::debug!(root = %root.display(), "walking root");
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(source) => {
                errors.push(ScanError::Walk {
                    root: root.to_path_buf(),
                    source,
                });
                break;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        let path_str = entry.path().to_string_lossy();
        for check in matching_checks(&path_str) {
            tracing::info!(path = %path_str, "scanning file");
            let (mut found, mut errs) = scan_file(entry.path(), check.patterns, ignore);
            findings.append(&mut found);
            errors.append(&mut errs);
        }
    }
    (findings, errors)
}

/// Scan all `roots` in parallel and merge the results once every walk
/// has finished.
///
/// Each worker owns its result lists; merging happens after the join, so
/// no state is shared between workers beyond the read-only ignore list.
/// Duplicate roots are scanned twice. Roots run on the rayon pool, so with
/// more roots than worker threads some walks wait for a free thread.
pub fn run_scan(roots: &[PathBuf], ignore: &[String]) -> (Vec<Finding>, Vec<ScanError>) {
    let per_root: Vec<(Vec<Finding>, Vec<ScanError>)> = roots
        .par_iter()
        .map(|root| scan_directory(root, ignore))
        .collect();
    let mut findings = Vec::new();
    let mut errors = Vec::new();
    for (mut f, mut e) in per_root {
        findings.append(&mut f);
        errors.append(&mut e);
    }
    tracing::info!(
        findings = findings.len(),
        roots = roots.len(),
        errors = errors.len(),
        "scan finished"
    );
    (findings, errors)
}

/// Stable order by file path, then line number.
pub fn sort_findings(findings: &mut [Finding]) {
    findings.sort_by(|a, b| a.file.cmp(&b.file).then(a.line.cmp(&b.line)));
}
