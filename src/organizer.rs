//! File classifier and mover.
//!
//! Sorts the top-level files of a directory into bucket subfolders chosen by
//! file extension. Subdirectories, including buckets created by earlier
//! runs, are never entered, so re-running on a sorted directory moves
//! nothing.

use crate::error::{SuiteError, SuiteResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A named destination folder and the extensions that land in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub name: &'static str,
    /// Lower-case extensions without the leading dot. Empty for the catch-all.
    pub extensions: &'static [&'static str],
}

impl Bucket {
    pub fn matches(&self, extension: &str) -> bool {
        self.extensions.contains(&extension)
    }
}

/// Bucket receiving anything no other bucket claims.
pub const CATCH_ALL: Bucket = Bucket {
    name: "OTHER_GARBAGE",
    extensions: &[],
};

/// Buckets in match order. The catch-all is last.
pub static BUCKETS: [Bucket; 5] = [
    Bucket {
        name: "PICS",
        extensions: &["jpg", "jpeg", "png", "gif"],
    },
    Bucket {
        name: "Docs_PDFs",
        extensions: &["pdf", "doc", "docx", "txt", "xlsx"],
    },
    Bucket {
        name: "Archives",
        extensions: &["zip", "7z", "rar"],
    },
    Bucket {
        name: "CodeFiles",
        extensions: &["py", "sh", "json", "js", "html"],
    },
    CATCH_ALL,
];

/// Lower-cased extension of a file name, without the dot.
///
/// Dotfiles such as `.bashrc` have no extension.
pub fn extension_of(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}

/// First bucket claiming the file's extension, else the catch-all.
pub fn classify(file_name: &str) -> &'static Bucket {
    let catch_all = &BUCKETS[BUCKETS.len() - 1];
    let Some(ext) = extension_of(file_name) else {
        return catch_all;
    };
    BUCKETS
        .iter()
        .find(|bucket| bucket.matches(&ext))
        .unwrap_or(catch_all)
}

/// A file that was moved and where it went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub file_name: String,
    pub bucket: &'static str,
}

/// A file that could not be moved.
#[derive(Debug)]
pub struct MoveFailure {
    pub file_name: String,
    pub error: SuiteError,
}

/// Outcome of one organizer run.
#[derive(Debug, Default)]
pub struct OrganizeReport {
    pub placements: Vec<Placement>,
    pub failures: Vec<MoveFailure>,
}

impl OrganizeReport {
    pub fn moved(&self) -> usize {
        self.placements.len()
    }
}

/// Move every top-level file of `dir` into its bucket subfolder.
///
/// Fails only when `dir` is not an existing directory or cannot be listed.
/// Per-file failures are collected in the report and the batch continues.
/// A same-named file already in the bucket is replaced.
pub fn organize(dir: &Path) -> SuiteResult<OrganizeReport> {
    if !dir.is_dir() {
        return Err(SuiteError::NotADirectory(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|e| SuiteError::io(dir, e))?;
    let mut report = OrganizeReport::default();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "Skipping unreadable directory entry");
                continue;
            }
        };

        let path = entry.path();
        if path.is_dir() {
            debug!(path = %path.display(), "Skipping subdirectory");
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        let bucket = classify(&file_name);

        match move_into_bucket(dir, &path, &file_name, bucket) {
            Ok(()) => {
                debug!(file = %file_name, bucket = bucket.name, "Moved file");
                report.placements.push(Placement {
                    file_name,
                    bucket: bucket.name,
                });
            }
            Err(error) => {
                warn!(file = %file_name, error = %error, "Skipping file");
                report.failures.push(MoveFailure { file_name, error });
            }
        }
    }

    info!(
        dir = %dir.display(),
        moved = report.moved(),
        failed = report.failures.len(),
        "Organize finished"
    );
    Ok(report)
}

fn move_into_bucket(dir: &Path, path: &Path, file_name: &str, bucket: &Bucket) -> SuiteResult<()> {
    let dest_dir: PathBuf = dir.join(bucket.name);
    fs::create_dir_all(&dest_dir).map_err(|e| SuiteError::io(&dest_dir, e))?;
    fs::rename(path, dest_dir.join(file_name)).map_err(|e| SuiteError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("photo.JPG").as_deref(), Some("jpg"));
        assert_eq!(extension_of("archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(extension_of("README"), None);
        assert_eq!(extension_of(".bashrc"), None);
    }

    #[test]
    fn test_classify_by_extension() {
        assert_eq!(classify("a.jpg").name, "PICS");
        assert_eq!(classify("b.PDF").name, "Docs_PDFs");
        assert_eq!(classify("c.7z").name, "Archives");
        assert_eq!(classify("d.json").name, "CodeFiles");
        assert_eq!(classify("e.xyz").name, "OTHER_GARBAGE");
        assert_eq!(classify("Makefile").name, "OTHER_GARBAGE");
    }

    #[test]
    fn test_catch_all_is_last_and_empty() {
        let last = BUCKETS[BUCKETS.len() - 1];
        assert_eq!(last, CATCH_ALL);
        assert!(last.extensions.is_empty());
    }

    #[test]
    fn test_extension_sets_are_disjoint() {
        for (i, a) in BUCKETS.iter().enumerate() {
            for b in &BUCKETS[i + 1..] {
                assert!(
                    a.extensions.iter().all(|ext| !b.matches(ext)),
                    "{} and {} overlap",
                    a.name,
                    b.name
                );
            }
        }
    }
}
