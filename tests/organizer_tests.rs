//! Integration tests for the file organizer.

use human_suite::error::SuiteError;
use human_suite::organizer::organize;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Count regular files anywhere below `dir`.
fn count_files(dir: &Path) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .map(|path| if path.is_dir() { count_files(&path) } else { 1 })
        .sum()
}

fn touch(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn files_land_in_their_buckets() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    touch(dir, "a.jpg", "img");
    touch(dir, "b.pdf", "doc");
    touch(dir, "c.xyz", "???");

    let report = organize(dir).unwrap();

    assert_eq!(report.moved(), 3);
    assert!(report.failures.is_empty());
    assert!(dir.join("PICS/a.jpg").is_file());
    assert!(dir.join("Docs_PDFs/b.pdf").is_file());
    assert!(dir.join("OTHER_GARBAGE/c.xyz").is_file());
    assert!(!dir.join("a.jpg").exists());
    assert_eq!(count_files(dir), 3);
}

#[test]
fn extension_match_ignores_case() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "Holiday.PNG", "x");
    touch(temp.path(), "backup.ZIP", "x");

    organize(temp.path()).unwrap();

    assert!(temp.path().join("PICS/Holiday.PNG").is_file());
    assert!(temp.path().join("Archives/backup.ZIP").is_file());
}

#[test]
fn second_run_moves_nothing() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    touch(dir, "a.jpg", "img");
    touch(dir, "run.sh", "echo");
    touch(dir, "notes", "no extension");

    assert_eq!(organize(dir).unwrap().moved(), 3);
    let second = organize(dir).unwrap();

    assert_eq!(second.moved(), 0);
    assert!(second.failures.is_empty());
    assert_eq!(count_files(dir), 3);
}

#[test]
fn existing_subdirectories_are_left_alone() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    fs::create_dir(dir.join("projects")).unwrap();
    touch(&dir.join("projects"), "deep.jpg", "img");
    touch(dir, "top.txt", "doc");

    let report = organize(dir).unwrap();

    assert_eq!(report.moved(), 1);
    assert!(dir.join("projects/deep.jpg").is_file());
    assert!(!dir.join("PICS").exists());
    assert!(dir.join("Docs_PDFs/top.txt").is_file());
}

#[test]
fn same_name_in_bucket_is_replaced() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    fs::create_dir(dir.join("PICS")).unwrap();
    touch(&dir.join("PICS"), "a.jpg", "old");
    touch(dir, "a.jpg", "new");

    let report = organize(dir).unwrap();

    assert_eq!(report.moved(), 1);
    assert_eq!(fs::read_to_string(dir.join("PICS/a.jpg")).unwrap(), "new");
    assert_eq!(count_files(dir), 1);
}

#[test]
fn missing_directory_is_rejected() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope");

    let err = organize(&missing).unwrap_err();
    assert!(matches!(err, SuiteError::NotADirectory(_)));
    assert!(!missing.exists());
}

#[test]
fn file_path_is_rejected() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "plain.txt", "x");

    let err = organize(&temp.path().join("plain.txt")).unwrap_err();
    assert!(matches!(err, SuiteError::NotADirectory(_)));
    assert!(temp.path().join("plain.txt").is_file());
}

#[test]
fn placements_report_each_move() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "index.html", "<p>");

    let report = organize(temp.path()).unwrap();
    assert_eq!(report.placements.len(), 1);
    assert_eq!(report.placements[0].file_name, "index.html");
    assert_eq!(report.placements[0].bucket, "CodeFiles");
}

#[test]
fn blocked_bucket_is_reported_per_file() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    // A plain file occupying the catch-all bucket's name blocks that bucket.
    touch(dir, "OTHER_GARBAGE", "in the way");
    touch(dir, "README", "no extension");
    touch(dir, "a.jpg", "img");

    let report = organize(dir).unwrap();

    assert_eq!(report.moved(), 1);
    let mut failed: Vec<&str> = report
        .failures
        .iter()
        .map(|f| f.file_name.as_str())
        .collect();
    failed.sort();
    assert_eq!(failed, vec!["OTHER_GARBAGE", "README"]);
    assert!(
        report
            .failures
            .iter()
            .all(|f| matches!(f.error, SuiteError::Io { .. }))
    );
    assert!(dir.join("PICS/a.jpg").is_file());
    assert!(dir.join("README").is_file());
    assert!(dir.join("OTHER_GARBAGE").is_file());
}
