//! Tar archive detection and member extraction
//!
//! Archive recognition is a content sniff, never a suffix check: a file is an
//! archive if it starts with the gzip magic or carries the ustar/GNU magic at
//! offset 257. Plain tar and gzip-compressed tar are the only supported
//! container formats.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};

use flate2::read::GzDecoder;
use tar::Archive;

use crate::error::{Result, WheelError};

/// Offset of the "ustar" magic in a tar header block.
const TAR_MAGIC_OFFSET: usize = 257;
const TAR_MAGIC: &[u8] = b"ustar";
const GZIP_MAGIC: &[u8] = &[0x1f, 0x8b];

/// Bytes needed to cover both magics.
const SNIFF_LEN: usize = TAR_MAGIC_OFFSET + TAR_MAGIC.len();

/// Container format of a recognized archive file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Tar,
    TarGz,
}

/// Sniff the archive format from the leading bytes of a stream.
///
/// A gzip stream is assumed to wrap a tar archive; a mismatch surfaces
/// later as an open/unpack skip.
fn sniff_bytes(head: &[u8]) -> Option<ArchiveFormat> {
    if head.len() >= GZIP_MAGIC.len() && &head[..GZIP_MAGIC.len()] == GZIP_MAGIC {
        return Some(ArchiveFormat::TarGz);
    }
    if head.len() >= SNIFF_LEN && &head[TAR_MAGIC_OFFSET..SNIFF_LEN] == TAR_MAGIC {
        return Some(ArchiveFormat::Tar);
    }
    None
}

/// Sniff the archive format of a file from its content.
///
/// Returns `None` for unreadable files, files too short to carry a magic,
/// and files that match neither magic.
pub fn detect_format(path: &Path) -> Option<ArchiveFormat> {
    let file = File::open(path).ok()?;
    let mut head = Vec::with_capacity(SNIFF_LEN);
    file.take(SNIFF_LEN as u64).read_to_end(&mut head).ok()?;
    sniff_bytes(&head)
}

/// Check whether a file is a supported archive, by content.
pub fn is_archive(path: &Path) -> bool {
    path.is_file() && detect_format(path).is_some()
}

/// Open an archive for reading, decompressing transparently.
pub fn open(path: &Path) -> Result<Archive<Box<dyn Read>>> {
    let format = detect_format(path).ok_or_else(|| open_failed(path, "not a recognized tar archive"))?;

    let file = File::open(path).map_err(|e| open_failed(path, e))?;

    let reader: Box<dyn Read> = match format {
        ArchiveFormat::Tar => Box::new(file),
        ArchiveFormat::TarGz => Box::new(GzDecoder::new(file)),
    };

    Ok(Archive::new(reader))
}

fn open_failed(path: &Path, reason: impl ToString) -> WheelError {
    WheelError::ArchiveOpenFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// List all member names of an archive.
///
/// Used by the list command at higher verbosity to show what each archive
/// would contribute.
pub fn list_members(path: &Path) -> Result<Vec<String>> {
    let mut archive = open(path)?;
    let entries = archive.entries().map_err(|e| open_failed(path, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| open_failed(path, e))?;
        let name = entry
            .path()
            .map_err(|e| open_failed(path, e))?
            .display()
            .to_string();
        names.push(name);
    }
    Ok(names)
}

/// Check whether a member or file name carries the given suffix (e.g. `.whl`).
pub fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(suffix))
}

/// Strip root and parent components so a member can never escape `dest`.
/// Returns `None` when nothing remains.
fn sanitize_member_path(member: &Path) -> Option<PathBuf> {
    let clean: PathBuf = member
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect();
    (!clean.as_os_str().is_empty()).then_some(clean)
}

/// Unpack the members the pipeline cares about into `dest`.
///
/// Keeps members whose name ends with `suffix`, plus members recognized as
/// nested archives by sniffing their leading bytes, so archive-in-archive
/// nesting survives the filter. Returns the absolute paths of the files
/// written.
pub fn unpack_matching_members(path: &Path, suffix: &str, dest: &Path) -> Result<Vec<PathBuf>> {
    let mut archive = open(path)?;
    let entries = archive.entries().map_err(|e| open_failed(path, e))?;

    let mut unpacked = Vec::new();
    for entry in entries {
        let mut entry = entry.map_err(|e| open_failed(path, e))?;
        if !entry.header().entry_type().is_file() {
            continue;
        }

        let member_path = entry
            .path()
            .map_err(|e| open_failed(path, e))?
            .into_owned();
        let member_name = member_path.display().to_string();
        let unpack_failed = |reason: String| WheelError::ArchiveUnpackFailed {
            path: path.display().to_string(),
            member: member_name.clone(),
            reason,
        };

        if has_suffix(&member_path, suffix) {
            // unpack_in refuses members that would escape dest; those are
            // silently dropped rather than treated as an archive error.
            let wrote = entry
                .unpack_in(dest)
                .map_err(|e| unpack_failed(e.to_string()))?;
            if wrote {
                if let Some(rel) = sanitize_member_path(&member_path) {
                    unpacked.push(dest.join(rel));
                }
            }
            continue;
        }

        // Not a match by name; peek at the content for a nested archive.
        let mut head = Vec::with_capacity(SNIFF_LEN);
        (&mut entry)
            .take(SNIFF_LEN as u64)
            .read_to_end(&mut head)
            .map_err(|e| unpack_failed(e.to_string()))?;
        if sniff_bytes(&head).is_none() {
            continue;
        }
        let Some(rel) = sanitize_member_path(&member_path) else {
            continue;
        };

        let target = dest.join(rel);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(|e| unpack_failed(e.to_string()))?;
        }
        let mut out = File::create(&target).map_err(|e| unpack_failed(e.to_string()))?;
        io::Write::write_all(&mut out, &head).map_err(|e| unpack_failed(e.to_string()))?;
        io::copy(&mut entry, &mut out).map_err(|e| unpack_failed(e.to_string()))?;
        unpacked.push(target);
    }
    Ok(unpacked)
}
