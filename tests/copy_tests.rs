//! Tests for atomic file copy operations

use dirmirror::executor::copy::PART_SUFFIX;
use dirmirror::executor::copy_file_atomic;
use dirmirror::types::MirrorError;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

fn create_test_file(path: &Path, content: &[u8]) {
    let mut file = fs::File::create(path).expect("Failed to create test file");
    file.write_all(content)
        .expect("Failed to write test content");
    file.flush().expect("Failed to flush");
}

fn set_file_mtime(path: &Path, mtime: SystemTime) {
    let filetime_mtime = filetime::FileTime::from_system_time(mtime);
    filetime::set_file_mtime(path, filetime_mtime).expect("Failed to set mtime");
}

fn leftover_parts(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .expect("Failed to read dir")
        .map(|entry| {
            entry
                .expect("Failed to read entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .filter(|name| name.ends_with(PART_SUFFIX))
        .collect()
}

fn mtime_of(path: &Path) -> SystemTime {
    fs::metadata(path)
        .expect("Failed to read metadata")
        .modified()
        .expect("Failed to get mtime")
}

#[test]
fn test_copy_basic_content() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    let src_path = root.join("source.txt");
    let content = b"Hello, dirmirror! This is a test file.";
    create_test_file(&src_path, content);

    let dest_path = root.join("dest.txt");

    let bytes_copied =
        copy_file_atomic(&src_path, &dest_path).expect("copy_file_atomic should succeed");

    assert_eq!(bytes_copied, content.len() as u64);

    let dest_content = fs::read(&dest_path).expect("Failed to read dest file");
    assert_eq!(dest_content, content);
}

#[test]
fn test_copy_overwrites_existing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    let src_path = root.join("source.txt");
    create_test_file(&src_path, b"fresh");
    let dest_path = root.join("dest.txt");
    create_test_file(&dest_path, b"stale and longer than the source");

    copy_file_atomic(&src_path, &dest_path).expect("copy_file_atomic should succeed");

    assert_eq!(fs::read(&dest_path).expect("Failed to read dest file"), b"fresh");
}

#[test]
fn test_copy_preserves_mtime_exactly() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    let src_path = root.join("source.txt");
    create_test_file(&src_path, b"test content");
    set_file_mtime(&src_path, SystemTime::now() - Duration::from_secs(3600));

    let dest_path = root.join("dest.txt");
    copy_file_atomic(&src_path, &dest_path).expect("copy_file_atomic should succeed");

    // Equal times are what make the next pass treat the copy as up to date
    assert_eq!(mtime_of(&src_path), mtime_of(&dest_path));
}

#[test]
fn test_copy_removes_part_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    let src_path = root.join("source.txt");
    create_test_file(&src_path, b"test content");

    let dest_path = root.join("dest.txt");
    copy_file_atomic(&src_path, &dest_path).expect("copy_file_atomic should succeed");

    assert!(
        leftover_parts(root).is_empty(),
        ".part file should be gone after successful copy"
    );
    assert!(dest_path.exists());
}

#[test]
fn test_failed_copy_cleans_up_part_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    let src_path = root.join("source.txt");
    create_test_file(&src_path, b"test content");

    // A directory in the way makes the final rename fail
    let dest_path = root.join("blocked.txt");
    fs::create_dir(&dest_path).expect("Failed to create blocking dir");

    let result = copy_file_atomic(&src_path, &dest_path);

    assert!(matches!(
        result,
        Err(MirrorError::Fs { .. }) | Err(MirrorError::PermissionDenied { .. })
    ));
    assert!(leftover_parts(root).is_empty());
    assert!(dest_path.is_dir(), "destination must be left as it was");
}

#[test]
fn test_copy_missing_source_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    let result = copy_file_atomic(&root.join("missing.txt"), &root.join("dest.txt"));

    let err = result.unwrap_err();
    assert!(err.to_string().contains("missing.txt"));
    assert!(!root.join("dest.txt").exists());
}

#[test]
fn test_copy_large_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    let src_path = root.join("large.bin");
    let size = 1024 * 1024 + 17;
    let content: Vec<u8> = (0..size).map(|i| (i % 256) as u8).collect();
    create_test_file(&src_path, &content);

    let dest_path = root.join("large_copy.bin");

    let bytes_copied =
        copy_file_atomic(&src_path, &dest_path).expect("copy_file_atomic should handle large files");

    assert_eq!(bytes_copied, size as u64);

    let dest_content = fs::read(&dest_path).expect("Failed to read dest file");
    assert_eq!(dest_content, content);
}

#[test]
fn test_copy_empty_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    let src_path = root.join("empty.txt");
    create_test_file(&src_path, b"");
    let dest_path = root.join("empty_copy.txt");

    let bytes_copied = copy_file_atomic(&src_path, &dest_path).expect("copy empty file");

    assert_eq!(bytes_copied, 0);
    assert!(dest_path.exists());
}
