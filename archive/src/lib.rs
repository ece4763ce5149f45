//! Tar archive compression for files and directory trees.
//!
//! [`compress`] packs a path into `<path>.tar.gz` next to it;
//! [`compress_to_tar`] takes an explicit destination and format.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compress;
pub mod error;
pub mod options;

pub use compress::{compress, compress_to_tar, default_archive_path};
pub use error::ArchiveError;
pub use options::{ArchiveFormat, ArchiveOptions};
