//! Pack a file or directory tree into a tar or tar.gz archive.
//!
//! The source is added recursively under its own path, minus any root,
//! `.` or `..` components, so `/srv/logs` is stored as `srv/logs/...`.
//! Symlinks are stored as links and never followed. When the archive is
//! written inside the source tree, the archive file itself is skipped.
//!
//! A missing source is detected before the archive file is created. Once
//! the archive file exists, any later failure removes it again.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use tar::Builder;
use tracing::{debug, error, info, warn};

use crate::error::ArchiveError;
use crate::options::{ArchiveFormat, ArchiveOptions};

/// Archive path used when none is given: `<src>.<extension>`.
#[must_use]
pub fn default_archive_path(src: &Path, format: ArchiveFormat) -> PathBuf {
    // Re-collecting drops a trailing separator ("logs/" -> "logs").
    let trimmed: PathBuf = src.components().collect();
    let mut name = trimmed.into_os_string();
    name.push(".");
    name.push(format.extension());
    PathBuf::from(name)
}

/// Compress `src` into `<src>.tar.gz`.
///
/// # Errors
///
/// See [`compress_to_tar`].
pub fn compress(src: &Path) -> Result<PathBuf, ArchiveError> {
    compress_to_tar(src, &ArchiveOptions::default())
}

/// Compress `src` (a file or a directory tree) into an archive.
///
/// Returns the path of the written archive.
///
/// # Errors
///
/// - [`ArchiveError::NotFound`] if `src` or the archive's parent directory
///   does not exist.
/// - [`ArchiveError::PermissionDenied`] if `src` cannot be read or the
///   archive cannot be written.
/// - [`ArchiveError::Archive`] for any other failure while writing.
pub fn compress_to_tar(src: &Path, options: &ArchiveOptions) -> Result<PathBuf, ArchiveError> {
    let archive_path = options
        .archive_path
        .clone()
        .unwrap_or_else(|| default_archive_path(src, options.format));

    let metadata = fs::symlink_metadata(src).map_err(|e| {
        let err = ArchiveError::from_io(&e, src);
        error!(path = %src.display(), error = %err, "cannot read archive source");
        err
    })?;
    let name = entry_name(src).map_err(|e| ArchiveError::from_io(&e, src))?;

    let file = File::create(&archive_path).map_err(|e| {
        let err = ArchiveError::from_io(&e, &archive_path);
        error!(archive = %archive_path.display(), error = %err, "cannot create archive");
        err
    })?;

    let source = Source {
        path: src,
        name: &name,
        is_dir: metadata.is_dir(),
    };
    if let Err(err) = write_archive(file, &source, &archive_path, options.format) {
        error!(
            path = %src.display(),
            archive = %archive_path.display(),
            error = %err,
            "failed to write archive"
        );
        if let Err(cleanup) = fs::remove_file(&archive_path) {
            warn!(
                archive = %archive_path.display(),
                error = %cleanup,
                "could not remove partial archive"
            );
        }
        return Err(err);
    }

    info!(
        path = %src.display(),
        archive = %archive_path.display(),
        format = options.format.extension(),
        "archive written"
    );
    Ok(archive_path)
}

/// What to add to the archive and under which name.
struct Source<'a> {
    path: &'a Path,
    name: &'a Path,
    is_dir: bool,
}

fn write_archive(
    file: File,
    source: &Source<'_>,
    archive_path: &Path,
    format: ArchiveFormat,
) -> Result<(), ArchiveError> {
    // Resolved after creation so a destination inside the source tree is
    // recognised and left out of its own contents.
    let own_archive = fs::canonicalize(archive_path).ok();
    let writer = BufWriter::new(file);
    let mut writer = match format {
        ArchiveFormat::Tar => append_source(writer, source, archive_path, own_archive)?,
        ArchiveFormat::TarGz => {
            let encoder = GzEncoder::new(writer, Compression::default());
            append_source(encoder, source, archive_path, own_archive)?
                .finish()
                .map_err(|e| ArchiveError::from_io(&e, archive_path))?
        }
    };
    writer
        .flush()
        .map_err(|e| ArchiveError::from_io(&e, archive_path))
}

fn append_source<W: Write>(
    writer: W,
    source: &Source<'_>,
    archive_path: &Path,
    own_archive: Option<PathBuf>,
) -> Result<W, ArchiveError> {
    let mut builder = Builder::new(ArchiveWriter::new(writer));
    builder.follow_symlinks(false);

    let mut appender = Appender {
        builder,
        archive_path,
        own_archive,
    };
    if source.is_dir {
        appender.append_tree(source.path, source.name)?;
    } else {
        appender.append_entry(source.path, source.name)?;
    }
    appender.finish()
}

/// Write side of the archive. Remembers whether a write failed, so an
/// I/O error can be attributed to the archive rather than to the entry
/// being read at the time.
struct ArchiveWriter<W> {
    inner: W,
    failed: bool,
}

impl<W> ArchiveWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            failed: false,
        }
    }

    fn record<T>(&mut self, result: io::Result<T>) -> io::Result<T> {
        if let Err(e) = &result {
            if e.kind() != io::ErrorKind::Interrupted {
                self.failed = true;
            }
        }
        result
    }
}

impl<W: Write> Write for ArchiveWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let result = self.inner.write(buf);
        self.record(result)
    }

    fn flush(&mut self) -> io::Result<()> {
        let result = self.inner.flush();
        self.record(result)
    }
}

/// Recursive walk over the source, one entry at a time.
struct Appender<'a, W: Write> {
    builder: Builder<ArchiveWriter<W>>,
    archive_path: &'a Path,
    own_archive: Option<PathBuf>,
}

impl<W: Write> Appender<'_, W> {
    /// Attribute `err` to the archive if writing failed, else to `path`.
    fn fail(&self, err: &io::Error, path: &Path) -> ArchiveError {
        if self.builder.get_ref().failed {
            ArchiveError::from_io(err, self.archive_path)
        } else {
            ArchiveError::from_io(err, path)
        }
    }

    fn is_own_archive(&self, path: &Path) -> bool {
        let Some(own) = &self.own_archive else {
            return false;
        };
        // Canonicalize only on a file-name match.
        own.file_name() == path.file_name()
            && fs::canonicalize(path).is_ok_and(|resolved| &resolved == own)
    }

    fn append_entry(&mut self, path: &Path, name: &Path) -> Result<(), ArchiveError> {
        self.builder
            .append_path_with_name(path, name)
            .map_err(|e| self.fail(&e, path))
    }

    /// Add `dir` and everything below it. Children are visited in file-name
    /// order so archive layout does not depend on directory iteration order.
    fn append_tree(&mut self, dir: &Path, name: &Path) -> Result<(), ArchiveError> {
        self.builder
            .append_dir(name, dir)
            .map_err(|e| self.fail(&e, dir))?;

        let mut children = fs::read_dir(dir)
            .and_then(|entries| entries.collect::<io::Result<Vec<_>>>())
            .map_err(|e| ArchiveError::from_io(&e, dir))?;
        children.sort_by_key(fs::DirEntry::file_name);

        for child in children {
            let path = child.path();
            let child_name = name.join(child.file_name());
            let metadata =
                fs::symlink_metadata(&path).map_err(|e| ArchiveError::from_io(&e, &path))?;

            if metadata.is_dir() {
                self.append_tree(&path, &child_name)?;
            } else if metadata.is_file() && self.is_own_archive(&path) {
                debug!(archive = %path.display(), "skipping the archive itself");
            } else {
                self.append_entry(&path, &child_name)?;
            }
        }
        Ok(())
    }

    /// Write the end-of-archive blocks and hand back the inner writer.
    fn finish(self) -> Result<W, ArchiveError> {
        let archive_path = self.archive_path;
        self.builder
            .into_inner()
            .map(|writer| writer.inner)
            .map_err(|e| ArchiveError::from_io(&e, archive_path))
    }
}

/// Name of the top-level archive entry for `src`.
fn entry_name(src: &Path) -> io::Result<PathBuf> {
    let name: PathBuf = src
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect();
    if !name.as_os_str().is_empty() {
        return Ok(name);
    }

    // "." or "/": fall back to the directory's own name.
    let resolved = fs::canonicalize(src)?;
    Ok(resolved
        .file_name()
        .map_or_else(|| PathBuf::from("root"), PathBuf::from))
}
