//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// wheelwright - wheel discovery and installation
///
/// Find Python wheels in directory trees and tar archives and install them
/// with pip.
#[derive(Parser, Debug)]
#[command(
    name = "wheel",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Find Python wheels in directory trees and tar archives and install them with pip",
    long_about = "Searches the given directories for wheel files and tar archives, extracts \
                  wheels out of the archives (nested archives included), and installs the \
                  collected wheels one pip invocation at a time.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  wheel ./downloads                \x1b[90m# Install wheels found in ./downloads\x1b[0m\n   \
                  wheel ./downloads -r -l          \x1b[90m# List recursively, install nothing\x1b[0m\n   \
                  wheel ./dist -s -y               \x1b[90m# Wheels only, skip confirmation\x1b[0m\n   \
                  wheel ./dist --dry-run -vv       \x1b[90m# Let pip simulate, show detail\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Path to look for files to install
    #[arg(required = true, value_name = "PATH")]
    pub path: Vec<PathBuf>,

    /// Look for files and list them. Do not install anything
    #[arg(short, long)]
    pub list: bool,

    /// Look recursively for files
    #[arg(short, long)]
    pub recursive: bool,

    /// Level of verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Run without actually installing anything (passed through to pip)
    #[arg(long)]
    pub dry_run: bool,

    /// Install modules system-wide, not in user space
    #[arg(long)]
    pub system_wide: bool,

    /// Assume yes for any interactive question
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Strict mode: only look for .whl wheel files, ignore archives
    #[arg(short, long)]
    pub strict: bool,

    /// Keep extracted files instead of removing them after the run
    #[arg(long)]
    pub keep_extracted: bool,

    /// Python interpreter used for pip invocations
    #[arg(long, default_value = "python3", value_name = "INTERPRETER", env = "WHEEL_PYTHON")]
    pub python: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_single_path() {
        let cli = Cli::try_parse_from(["wheel", "./pkgs"]).unwrap();
        assert_eq!(cli.path, vec![PathBuf::from("./pkgs")]);
        assert!(!cli.list);
        assert!(!cli.recursive);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parsing_multiple_paths() {
        let cli = Cli::try_parse_from(["wheel", "./a", "./b", "./c"]).unwrap();
        assert_eq!(cli.path.len(), 3);
    }

    #[test]
    fn test_cli_requires_a_path() {
        assert!(Cli::try_parse_from(["wheel"]).is_err());
        assert!(Cli::try_parse_from(["wheel", "--list"]).is_err());
    }

    #[test]
    fn test_cli_verbose_is_repeatable() {
        let cli = Cli::try_parse_from(["wheel", "-vvv", "./pkgs"]).unwrap();
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::try_parse_from(["wheel", "./pkgs", "-r", "-s", "-y", "-l"]).unwrap();
        assert!(cli.recursive);
        assert!(cli.strict);
        assert!(cli.yes);
        assert!(cli.list);
    }

    #[test]
    fn test_cli_pip_flags() {
        let cli = Cli::try_parse_from(["wheel", "./pkgs", "--dry-run", "--system-wide"]).unwrap();
        assert!(cli.dry_run);
        assert!(cli.system_wide);
    }

    #[test]
    fn test_cli_python_default_and_override() {
        let cli = Cli::try_parse_from(["wheel", "./pkgs"]).unwrap();
        assert_eq!(cli.python, "python3");

        let cli = Cli::try_parse_from(["wheel", "./pkgs", "--python", "mayapy"]).unwrap();
        assert_eq!(cli.python, "mayapy");
    }

    #[test]
    fn test_cli_keep_extracted() {
        let cli = Cli::try_parse_from(["wheel", "./pkgs", "--keep-extracted"]).unwrap();
        assert!(cli.keep_extracted);
    }
}
