//! Candidate file discovery
//!
//! Walks one or more search roots and produces the files the pipeline can
//! act on: wheel files by suffix, and archive files by content sniff. In
//! strict mode archive inspection is bypassed entirely.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::archive;
use crate::error::{Result, WheelError};

/// Suffix identifying an installable wheel file.
pub const WHEEL_SUFFIX: &str = ".whl";

/// What a discovered file is, derived once at discovery time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    Wheel,
    Archive,
}

/// A file the pipeline can act on. Immutable once discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub path: PathBuf,
    pub kind: CandidateKind,
}

impl FileCandidate {
    /// Classify a file, or `None` when it is neither a wheel nor an archive.
    ///
    /// The content sniff wins over the suffix, so an archive named like a
    /// wheel is still treated as a container rather than handed to pip.
    pub fn classify(path: &Path) -> Option<Self> {
        if !path.is_file() {
            return None;
        }
        if archive::is_archive(path) {
            return Some(Self {
                path: path.to_path_buf(),
                kind: CandidateKind::Archive,
            });
        }
        if archive::has_suffix(path, WHEEL_SUFFIX) {
            return Some(Self {
                path: path.to_path_buf(),
                kind: CandidateKind::Wheel,
            });
        }
        None
    }
}

/// Discover candidate files under a single search root.
///
/// Ordering follows filesystem traversal and is not stable across
/// platforms; callers must not depend on it. An empty result is a valid
/// "nothing to do" outcome.
pub fn discover(root: &Path, recursive: bool, strict: bool) -> Result<Vec<FileCandidate>> {
    if !root.exists() {
        return Err(WheelError::SearchPathNotFound {
            path: root.display().to_string(),
        });
    }
    if !root.is_dir() {
        return Err(WheelError::NotADirectory {
            path: root.display().to_string(),
        });
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut candidates = Vec::new();

    for entry in WalkDir::new(root).max_depth(max_depth) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if strict {
            if archive::has_suffix(path, WHEEL_SUFFIX) {
                candidates.push(FileCandidate {
                    path: path.to_path_buf(),
                    kind: CandidateKind::Wheel,
                });
            }
        } else if archive::is_archive(path) {
            candidates.push(FileCandidate {
                path: path.to_path_buf(),
                kind: CandidateKind::Archive,
            });
        } else if archive::has_suffix(path, WHEEL_SUFFIX) {
            candidates.push(FileCandidate {
                path: path.to_path_buf(),
                kind: CandidateKind::Wheel,
            });
        }
    }

    Ok(candidates)
}

/// Discover candidates across several roots, concatenated in root order.
pub fn discover_all(roots: &[PathBuf], recursive: bool, strict: bool) -> Result<Vec<FileCandidate>> {
    let mut candidates = Vec::new();
    for root in roots {
        candidates.extend(discover(root, recursive, strict)?);
    }
    Ok(candidates)
}
