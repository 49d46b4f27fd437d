//! Keyword search over a folder of plain-text notes.

use crate::error::{SuiteError, SuiteResult};
use std::fs;
use std::path::Path;
use tracing::debug;

/// True when `file_name` ends with one of `extensions`, ignoring case.
pub fn is_note(file_name: &str, extensions: &[String]) -> bool {
    let lower = file_name.to_lowercase();
    extensions
        .iter()
        .any(|ext| lower.ends_with(&ext.to_lowercase()))
}

/// Names of the notes directly inside `dir` containing `keyword`.
///
/// Matching is a case-sensitive substring test on the file content read as
/// lossy UTF-8. Unreadable files are skipped. Results are sorted by name.
pub fn search(dir: &Path, keyword: &str, extensions: &[String]) -> SuiteResult<Vec<String>> {
    if !dir.is_dir() {
        return Err(SuiteError::NotADirectory(dir.to_path_buf()));
    }
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(SuiteError::missing_field("keyword"));
    }

    let mut found = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| SuiteError::io(dir, e))? {
        let Ok(entry) = entry else { continue };
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !is_note(&file_name, extensions) {
            continue;
        }

        let path = entry.path();
        match fs::read(&path) {
            Ok(bytes) => {
                if String::from_utf8_lossy(&bytes).contains(keyword) {
                    found.push(file_name);
                }
            }
            Err(e) => debug!(path = %path.display(), error = %e, "Skipping unreadable note"),
        }
    }

    found.sort();
    debug!(dir = %dir.display(), keyword, hits = found.len(), "Note search finished");
    Ok(found)
}
