//! Wheel extraction from discovered candidates
//!
//! Turns the discovered candidate set into a flat list of wheel files on
//! disk. Wheels pass through directly; archives are unpacked into their own
//! staging level and whatever lands there is fed back through the same
//! logic, so archives nested inside archives are handled to any depth.
//!
//! Each call returns a fresh list and callers concatenate explicitly; no
//! accumulator is shared across recursive calls.

use std::path::PathBuf;

use crate::archive;
use crate::discovery::{CandidateKind, FileCandidate, WHEEL_SUFFIX};
use crate::error::{Result, WheelError};
use crate::staging::Staging;
use crate::ui::Output;

/// Collect wheel paths from `candidates`, unpacking archives into `staging`.
///
/// Every returned path exists on disk and carries the `.whl` suffix; this
/// is the sole enforcement point of that invariant. An archive that cannot
/// be opened or unpacked is skipped with a note; a candidate path that is
/// not a file is a hard failure.
pub fn extract(
    candidates: &[FileCandidate],
    staging: &mut Staging,
    out: &Output,
) -> Result<Vec<PathBuf>> {
    let mut wheels = Vec::new();

    for candidate in candidates {
        match candidate.kind {
            CandidateKind::Wheel => {
                if !candidate.path.is_file() {
                    return Err(WheelError::NotAFile {
                        path: candidate.path.display().to_string(),
                    });
                }
                let path = candidate
                    .path
                    .canonicalize()
                    .unwrap_or_else(|_| candidate.path.clone());
                out.say(2, format!("Add {}", path.display()));
                wheels.push(path);
            }
            CandidateKind::Archive => {
                out.say(3, format!("Analyse {}", candidate.path.display()));
                let level = staging.next_level()?;
                match archive::unpack_matching_members(&candidate.path, WHEEL_SUFFIX, &level) {
                    Ok(files) => {
                        let nested: Vec<FileCandidate> = files
                            .iter()
                            .filter_map(|path| FileCandidate::classify(path))
                            .collect();
                        wheels.extend(extract(&nested, staging, out)?);
                    }
                    Err(e) => {
                        // Misdetected or corrupt archives are a best-effort skip.
                        out.say(2, format!("Skipping {}: {e}", candidate.path.display()));
                    }
                }
            }
        }
    }

    Ok(wheels)
}
