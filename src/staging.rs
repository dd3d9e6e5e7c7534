//! Staging area for extracted wheels
//!
//! Extraction writes into subdirectories of one staging root owned by the
//! top-level run, so everything a run unpacks is released together when the
//! run ends. Passing `--keep-extracted` disbands the root instead, leaving
//! the files in place.
//!
//! The base is never a relative path, so staging dirs are never created
//! under the current working directory (e.g. when TMPDIR=tmp).

use std::env;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{Result, WheelError};

/// Returns a directory path suitable for creating staging directories.
fn staging_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// The staging root for one pipeline run.
///
/// Dropped at the end of the run, removing every extracted file, unless
/// [`Staging::keep`] was called first.
pub struct Staging {
    root: TempDir,
    level_count: usize,
}

impl Staging {
    pub fn new() -> Result<Self> {
        let root = tempfile::Builder::new()
            .prefix("wheel-staging-")
            .tempdir_in(staging_base())
            .map_err(|e| WheelError::StagingCreateFailed {
                reason: e.to_string(),
            })?;
        Ok(Self {
            root,
            level_count: 0,
        })
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Create a fresh subdirectory for one archive's members.
    ///
    /// Each archive gets its own level so recursion into nested archives
    /// never re-reads files unpacked for a sibling.
    pub fn next_level(&mut self) -> Result<PathBuf> {
        self.level_count += 1;
        let level = self.root.path().join(format!("level-{}", self.level_count));
        std::fs::create_dir(&level)?;
        Ok(level)
    }

    /// Persist the staging root past the end of the run and return its path.
    pub fn keep(self) -> PathBuf {
        self.root.keep()
    }
}
