//! Shared input builders for the myutils benchmark suites.

use std::fs;
use std::io;
use std::path::Path;

/// Ascending keys `0, 3, 6, ...` (`n` of them). Every multiple of 3 below
/// `3 * n` is present; every other value is absent.
#[must_use]
pub fn sorted_keys(n: usize) -> Vec<u64> {
    (0..n as u64).map(|i| i * 3).collect()
}

/// Lookup targets spread over the key range: `hits` present keys followed by
/// `hits` absent values.
#[must_use]
pub fn lookup_targets(n: usize, hits: usize) -> Vec<u64> {
    let stride = (n / hits.max(1)).max(1) as u64;
    let present = (0..hits as u64).map(|i| (i * stride) * 3);
    let absent = (0..hits as u64).map(|i| (i * stride) * 3 + 1);
    present.chain(absent).collect()
}

/// Write a small directory tree of `files` text files spread over
/// `files / 8 + 1` subdirectories.
///
/// # Errors
///
/// Returns the underlying I/O error if any file cannot be written.
pub fn write_tree(root: &Path, files: usize) -> io::Result<()> {
    for i in 0..files {
        let dir = root.join(format!("d{}", i / 8));
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(format!("f{i}.txt")), format!("file {i}\n").repeat(32))?;
    }
    Ok(())
}
