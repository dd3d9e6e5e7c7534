//! Command implementations
//!
//! The binary has a single entry point; `--list` turns the run into
//! discovery-only, everything else goes through the full
//! discover/extract/install pipeline.

pub mod install;
pub mod list;

use crate::cli::Cli;
use crate::discovery::FileCandidate;
use crate::error::Result;
use crate::ui::Output;

/// Dispatch a parsed command line, returning the process exit code.
pub fn run(cli: &Cli) -> Result<i32> {
    if cli.list {
        list::run(cli)
    } else {
        install::run(cli)
    }
}

/// Print the discovered files and the summary line.
///
/// The summary goes to stderr when nothing was found, matching the
/// "nothing to do" exit path. `min_level` lets the list command force the
/// listing out at any verbosity.
pub(crate) fn report_found(candidates: &[FileCandidate], cli: &Cli, out: &Output, min_level: u8) {
    let roots = cli
        .path
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    out.say(min_level, format!("Files in \"{roots}\":"));
    for candidate in candidates {
        out.say(min_level, candidate.path.display().to_string());
    }

    if candidates.is_empty() {
        out.error("Found no files.");
    } else {
        out.say(0, format!("{} files found.", candidates.len()));
    }
}
