//! Terminal output and the interactive confirmation gate
//!
//! Output is gated by the repeatable `-v` flag: level 0 prints only
//! results and errors, level 1 adds pipeline stages, level 2 adds per-file
//! progress, level 3 adds archive analysis detail.

pub mod confirm;

use std::fmt::Display;

use console::Style;

pub use confirm::{Confirmation, confirm_install};

/// Verbosity-gated writer for pipeline output.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    level: u8,
}

impl Output {
    pub fn new(level: u8) -> Self {
        Self { level }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Print to stdout when verbosity reaches `min_level`.
    pub fn say(&self, min_level: u8, msg: impl Display) {
        if self.level >= min_level {
            println!("{msg}");
        }
    }

    /// Print a stage headline to stdout when verbosity reaches `min_level`.
    pub fn stage(&self, min_level: u8, msg: impl Display) {
        if self.level >= min_level {
            println!("{}", Style::new().bold().apply_to(msg));
        }
    }

    /// Print to stderr regardless of verbosity.
    pub fn error(&self, msg: impl Display) {
        eprintln!("{}", Style::new().red().apply_to(msg));
    }

    /// Render a per-invocation success or failure mark.
    pub fn status_mark(succeeded: bool) -> String {
        if succeeded {
            Style::new().green().apply_to("ok").to_string()
        } else {
            Style::new().red().bold().apply_to("failed").to_string()
        }
    }
}
