use crate::error::DirTreeError;
use crate::options::{DirTreeOptions, SortOrder};
use crate::types::{DirectoryNode, FileEntry};
use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};
/// Immediate contents of one directory, split by kind.
struct Listing {
    files: Vec<FileEntry>,
    dirs: Vec<PathBuf>,
}
impl Listing {
    /// Reads `path` once. The directory handle is released before returning.
    fn read(path: &Path, options: &DirTreeOptions) -> Result<Self, DirTreeError> {
        let mut files = Vec::new();
        let mut dirs = Vec::new();
        let entries = fs::read_dir(path).map_err(|e| traversal_error(path, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| traversal_error(path, e))?;
            let entry_path = entry.path();
            #[cfg(feature = "logging")]
            tracing::trace!("Entry: {}", entry_path.display());
            if is_directory(&entry, options.follow_links)? {
                dirs.push(entry_path);
            } else {
                files.push(FileEntry {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    path: entry_path,
                });
            }
        }
        if options.sort == SortOrder::Name {
            files.sort_by(|a, b| a.name.cmp(&b.name));
            dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        Ok(Self { files, dirs })
    }
}
fn is_directory(entry: &DirEntry, follow_links: bool) -> Result<bool, DirTreeError> {
    let file_type = entry
        .file_type()
        .map_err(|e| traversal_error(&entry.path(), e))?;
    if file_type.is_symlink() && follow_links {
        let entry_path = entry.path();
        return match fs::metadata(&entry_path) {
            Ok(meta) => Ok(meta.is_dir()),
            // Dangling links are listed as files.
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DirTreeError::io(entry_path, e)),
        };
    }
    Ok(file_type.is_dir())
}
/// A vanished directory is reported as not found, everything else as I/O.
fn traversal_error(path: &Path, source: io::Error) -> DirTreeError {
    if source.kind() == io::ErrorKind::NotFound {
        DirTreeError::not_found(path)
    } else {
        DirTreeError::io(path, source)
    }
}
fn ensure_directory(path: &Path) -> Result<(), DirTreeError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(DirTreeError::not_found(path)),
        Err(e) => Err(traversal_error(path, e)),
    }
}
fn build_node(path: PathBuf, options: &DirTreeOptions) -> Result<DirectoryNode, DirTreeError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Listing directory: {}", path.display());
    let Listing { files, dirs } = Listing::read(&path, options)?;
    let children = dirs
        .into_iter()
        .map(|dir| build_node(dir, options))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DirectoryNode {
        path,
        files,
        children,
    })
}
/// Builds the tree rooted at `options.root`.
///
/// Fails with [`DirTreeError::PathNotFound`] when the root is missing or
/// is not a directory. Any failure below the root aborts the whole build.
pub fn build_with(options: &DirTreeOptions) -> Result<DirectoryNode, DirTreeError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting dirtree with root: {}", options.root.display());
    ensure_directory(&options.root)?;
    let root = build_node(options.root.clone(), options)?;
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Built tree for {}: {} directories, {} files",
        options.root.display(),
        root.dir_count(),
        root.file_count()
    );
    Ok(root)
}
/// Builds the tree rooted at `path` with default options.
pub fn build(path: impl Into<PathBuf>) -> Result<DirectoryNode, DirTreeError> {
    build_with(&DirTreeOptions {
        root: path.into(),
        ..Default::default()
    })
}
impl DirectoryNode {
    /// Same as [`crate::build`].
    pub fn build(path: impl Into<PathBuf>) -> Result<Self, DirTreeError> {
        build(path)
    }
}
