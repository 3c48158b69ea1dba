//! Filesystem access: listing the source directory and reading documents.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Errors during file system operations on the source tree.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("path not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid encoding in {path}: {encoding}")]
    InvalidEncoding { path: PathBuf, encoding: String },
}

impl FsError {
    /// Creates an appropriate FsError from an io::Error.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path: path.into() },
            _ => FsError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Contents of a source directory, split into manifest and documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceListing {
    /// Whether the manifest file is a direct child of the directory.
    pub manifest_found: bool,
    /// The manifest filename that was looked for.
    pub manifest: String,
    /// Markdown filenames other than the manifest, sorted by name.
    pub documents: Vec<String>,
}

/// Lists the direct children of `dir`, separating the manifest from the
/// candidate Markdown documents.
///
/// Only regular files ending in `.md` are candidates. Subdirectories are
/// not descended into.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the directory doesn't exist.
/// Returns `FsError::NotADirectory` if the path is not a directory.
pub fn scan_source_directory(dir: &Path, manifest: &str) -> Result<SourceListing, FsError> {
    if !dir.exists() {
        return Err(FsError::NotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(FsError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut manifest_found = false;
    let mut documents = Vec::new();

    let files = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file());

    for entry in files {
        let Some(name) = file_name(&entry) else {
            continue;
        };
        if name == manifest {
            manifest_found = true;
        } else if name.ends_with(".md") {
            documents.push(name.to_string());
        }
    }

    Ok(SourceListing {
        manifest_found,
        manifest: manifest.to_string(),
        documents,
    })
}

fn file_name(entry: &DirEntry) -> Option<&str> {
    entry.file_name().to_str()
}

/// Reads a whole text file.
///
/// A leading UTF-8 byte order mark is removed.
///
/// # Errors
///
/// Returns `FsError::NotFound` if the file doesn't exist.
/// Returns `FsError::PermissionDenied` if access is denied.
/// Returns `FsError::InvalidEncoding` if the file is not valid UTF-8.
pub fn read_text(path: &Path) -> Result<String, FsError> {
    let bytes = std::fs::read(path).map_err(|e| FsError::from_io(path, e))?;

    let content = String::from_utf8(bytes).map_err(|e| FsError::InvalidEncoding {
        path: path.into(),
        encoding: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
    })?;

    Ok(match content.strip_prefix('\u{FEFF}') {
        Some(rest) => rest.to_string(),
        None => content,
    })
}
