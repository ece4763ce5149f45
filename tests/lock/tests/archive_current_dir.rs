//! Archiving the current directory with the default destination.
//!
//! The default archive for `.` lands in `.` itself, so the writer must leave
//! its own output out. This file holds a single test because it changes the
//! process working directory.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use myutils_archive::compress;

#[test]
fn current_dir_archive_excludes_itself() {
    let work = tempfile::tempdir().unwrap();
    fs::write(work.path().join("data.txt"), "payload").unwrap();
    let dir_name = PathBuf::from(fs::canonicalize(work.path()).unwrap().file_name().unwrap());

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(work.path()).unwrap();
    let result = compress(Path::new("."));
    std::env::set_current_dir(previous).unwrap();

    let archive = result.unwrap();
    assert_eq!(archive, PathBuf::from("..tar.gz"));

    let written = work.path().join("..tar.gz");
    let mut reader = tar::Archive::new(GzDecoder::new(File::open(&written).unwrap()));
    let names: Vec<PathBuf> = reader
        .entries()
        .unwrap()
        .map(|e| e.unwrap().path().unwrap().into_owned())
        .collect();

    assert!(names.contains(&dir_name.join("data.txt")), "{names:?}");
    assert!(!names.iter().any(|n| n.ends_with("..tar.gz")), "{names:?}");
}
