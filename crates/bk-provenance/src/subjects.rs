//! Artifact walking and SHA-256 content addressing.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::ProvenanceError;
use crate::statement::{DigestSet, Subject};

/// Hash every non-directory entry under `root` into a [`Subject`].
///
/// Entries are visited depth-first, sorted by file name within each
/// directory, so unchanged trees always produce the same sequence.
/// Subject names are relative to `root` and `/`-separated; when `root` is
/// itself a file, its base name is used.
///
/// Symlinks are not followed while walking, but a symlink entry is read
/// through like any other file.
///
/// # Errors
///
/// Returns [`ProvenanceError::ArtifactNotFound`] if `root` does not exist.
/// Any other traversal or read failure aborts the walk with
/// [`ProvenanceError::WalkError`] or [`ProvenanceError::IoError`].
pub fn collect(root: &Path) -> Result<Vec<Subject>, ProvenanceError> {
    let mut subjects = Vec::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| classify_walk_error(root, e))?;
        if entry.file_type().is_dir() {
            continue;
        }

        let name = subject_name(root, entry.path());
        let sha256 = sha256_file(entry.path())?;
        debug!(name = %name, sha256 = %sha256, "hashed artifact");

        subjects.push(Subject {
            name,
            digest: DigestSet::sha256(sha256),
        });
    }

    info!(
        root = %root.display(),
        count = subjects.len(),
        "collected artifact subjects"
    );
    Ok(subjects)
}

/// Collect subjects for each root in order and concatenate them.
///
/// Duplicate names from overlapping roots are kept as separate entries.
///
/// # Errors
///
/// Stops at the first root that fails; see [`collect`].
pub fn collect_all<P: AsRef<Path>>(roots: &[P]) -> Result<Vec<Subject>, ProvenanceError> {
    let mut subjects = Vec::new();
    for root in roots {
        subjects.extend(collect(root.as_ref())?);
    }
    Ok(subjects)
}

/// Compute the SHA-256 hex digest of a file.
///
/// # Errors
///
/// Returns [`ProvenanceError::IoError`] if the file cannot be opened or read.
pub fn sha256_file(path: &Path) -> Result<String, ProvenanceError> {
    let io_error = |source| ProvenanceError::IoError {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(io_error)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher).map_err(io_error)?;
    Ok(hex::encode(hasher.finalize()))
}

/// Compute the SHA-256 hex digest of a byte slice.
#[must_use]
pub fn sha256_bytes(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

fn subject_name(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    if relative.as_os_str().is_empty() {
        return root.file_name().map_or_else(
            || root.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );
    }

    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// A missing root is the caller's mistake; anything else is unexpected.
fn classify_walk_error(root: &Path, err: walkdir::Error) -> ProvenanceError {
    let root_missing = err.depth() == 0
        && err
            .io_error()
            .is_some_and(|e| e.kind() == io::ErrorKind::NotFound);

    if root_missing {
        ProvenanceError::ArtifactNotFound {
            path: PathBuf::from(root),
        }
    } else {
        ProvenanceError::WalkError(err)
    }
}
