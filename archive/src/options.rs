//! Archive format and destination options.

use std::path::PathBuf;
use std::str::FromStr;

/// Output format of an archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArchiveFormat {
    /// Uncompressed tar.
    Tar,
    /// Gzip-compressed tar. Default.
    #[default]
    TarGz,
}

impl ArchiveFormat {
    /// File extension appended to the source path for default archive names.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Tar => "tar",
            Self::TarGz => "tar.gz",
        }
    }
}

impl FromStr for ArchiveFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tar" => Ok(Self::Tar),
            "tar.gz" | "tgz" | "gz" => Ok(Self::TarGz),
            other => Err(format!("unknown archive format: {other}")),
        }
    }
}

/// Where and how to write an archive.
#[derive(Debug, Clone, Default)]
pub struct ArchiveOptions {
    /// Destination file. `None` places the archive next to the source as
    /// `<source>.<extension>`.
    pub archive_path: Option<PathBuf>,
    /// Output format.
    pub format: ArchiveFormat,
}
