//! Error types and handling for wheelwright
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Errors fall into three tiers:
//! - hard input errors (bad search roots) that abort the run,
//! - per-archive errors that are skipped best-effort by the extractor,
//! - per-invocation process errors that are recorded in the aggregate
//!   install result without stopping the run.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for wheelwright operations
#[derive(Error, Diagnostic, Debug)]
pub enum WheelError {
    // Input errors
    #[error("Search path not found: {path}")]
    #[diagnostic(
        code(wheelwright::input::path_not_found),
        help("Check that the path exists and is a directory")
    )]
    SearchPathNotFound { path: String },

    #[error("Not a directory: {path}")]
    #[diagnostic(
        code(wheelwright::input::not_a_directory),
        help("Search roots must be directories, not files")
    )]
    NotADirectory { path: String },

    #[error("Not a file: {path}")]
    #[diagnostic(code(wheelwright::input::not_a_file))]
    NotAFile { path: String },

    // Archive errors
    #[error("Failed to open archive: {path}")]
    #[diagnostic(code(wheelwright::archive::open_failed))]
    ArchiveOpenFailed { path: String, reason: String },

    #[error("Failed to unpack archive member '{member}' from {path}")]
    #[diagnostic(code(wheelwright::archive::unpack_failed))]
    ArchiveUnpackFailed {
        path: String,
        member: String,
        reason: String,
    },

    // Staging directory errors
    #[error("Failed to create staging directory")]
    #[diagnostic(
        code(wheelwright::staging::create_failed),
        help("Check that the system temporary directory is writable")
    )]
    StagingCreateFailed { reason: String },

    // Process errors
    #[error("Failed to spawn installer process: {command}")]
    #[diagnostic(
        code(wheelwright::process::spawn_failed),
        help("Check that the Python interpreter is on PATH (see --python)")
    )]
    ProcessSpawnFailed { command: String, reason: String },

    #[error("Installer process did not finish: {command}")]
    #[diagnostic(code(wheelwright::process::wait_failed))]
    ProcessWaitFailed { command: String, reason: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(wheelwright::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for WheelError {
    fn from(err: std::io::Error) -> Self {
        WheelError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for WheelError {
    fn from(err: walkdir::Error) -> Self {
        WheelError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, WheelError>;
