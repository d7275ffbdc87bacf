//! Capability-based file helpers for request, database and report paths.

use std::io;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open `path` for reading.
pub(crate) fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create (or truncate) `path`, creating missing parent directories first.
pub(crate) fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    ensure_parent_dir(path)?;
    fs_utf8::File::create_ambient(path, ambient_authority())
}

/// Whether `path` names a regular file.
///
/// A missing path surfaces as an [`io::ErrorKind::NotFound`] error so callers
/// can tell it apart from a directory.
pub(crate) fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = parent_or_current(path);
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "path has no file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let parent = parent_or_current(path);
    let (base, relative) = split_anchor(parent);
    if relative.as_str().is_empty() {
        return Ok(());
    }
    let dir = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    dir.create_dir_all(&relative)
}

fn parent_or_current(path: &Utf8Path) -> &Utf8Path {
    match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    }
}

/// Split `path` into an ambient anchor (root, drive or `.`) and the relative
/// remainder beneath it.
fn split_anchor(path: &Utf8Path) -> (Utf8PathBuf, Utf8PathBuf) {
    let mut anchor = Utf8PathBuf::new();
    let mut relative = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::Prefix(_) | Utf8Component::RootDir => anchor.push(component),
            other => relative.push(other),
        }
    }
    if anchor.as_str().is_empty() {
        anchor.push(".");
    }
    (anchor, relative)
}
