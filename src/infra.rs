//! Infrastructure traits for abstracting filesystem I/O.
//!
//! Config resolution and source loading go through [`FileSystem`] so they can be
//! exercised against in-memory mocks in tests.

use std::io::{self, Write};
use std::path::Path;

/// Trait for abstracting filesystem operations.
pub trait FileSystem {
    /// Returns true if `path` exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Read the entire contents of a file as raw bytes.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Write `contents` to `path`, replacing any existing file.
    ///
    /// Implementations must not leave a partially written file behind on failure.
    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()>;
}

/// Real filesystem implementation that delegates to std::fs.
#[derive(Debug, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
        write_atomic(path, contents.as_ref())
    }
}

/// Drop a leading UTF-8 byte order mark
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

/// Write a file by staging it next to the destination and renaming it into place.
///
/// Either the complete contents land at `path` or the previous file is left untouched.
/// An existing file keeps its permissions. A new file gets the same mode a plain
/// create would give it.
///
/// # Examples
///
/// ```
/// use bundle_banner::infra::write_atomic;
///
/// let dir = tempfile::tempdir().unwrap();
/// let target = dir.path().join("bundle.js");
/// write_atomic(&target, b"/*! banner */\n").unwrap();
/// assert_eq!(std::fs::read(&target).unwrap(), b"/*! banner */\n");
/// ```
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = std::fs::metadata(path).ok().map(|meta| meta.permissions());

    let mut staged = staging_file(dir)?;
    staged.write_all(contents)?;
    if let Some(permissions) = existing {
        staged.as_file().set_permissions(permissions)?;
    }
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|e| e.error)?;

    log::debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

// Temp files default to 0600; 0666 passes through the umask like File::create
#[cfg(unix)]
fn staging_file(dir: &Path) -> io::Result<tempfile::NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    tempfile::Builder::new()
        .permissions(std::fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn staging_file(dir: &Path) -> io::Result<tempfile::NamedTempFile> {
    tempfile::NamedTempFile::new_in(dir)
}
