use std::fs;

use tracker_core::Registry;
use tracker_engine::{ensure_dir, load_profile_lines, save_profile_lines, AtomicFileWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("state");
    assert!(!new_dir.exists());
    ensure_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing_content() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("profiles.txt", "https://steamcommunity.com/id/a\n").unwrap();
    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        "https://steamcommunity.com/id/a\n"
    );

    // Save is a full overwrite, not an append.
    let second = writer.write("profiles.txt", "https://steamcommunity.com/id/b\n").unwrap();
    assert_eq!(first, second);
    assert_eq!(
        fs::read_to_string(&second).unwrap(),
        "https://steamcommunity.com/id/b\n"
    );
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    let result = writer.write("profiles.txt", "data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name("profiles.txt").exists());
}

#[test]
fn missing_profiles_file_loads_as_empty() {
    let temp = TempDir::new().unwrap();
    let lines = load_profile_lines(&temp.path().join("profiles.txt"));
    assert!(lines.is_empty());
}

#[test]
fn registry_round_trips_through_the_profiles_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("profiles.txt");

    let mut registry = Registry::new();
    registry.load_lines(
        "https://steamcommunity.com/id/a\nhttps://steamcommunity.com/profiles/42\n",
    );
    save_profile_lines(&path, &registry.dump_lines()).unwrap();

    let mut restored = Registry::new();
    restored.load_lines(&load_profile_lines(&path));
    assert_eq!(restored, registry);
}
