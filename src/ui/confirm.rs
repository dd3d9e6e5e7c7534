//! Interactive confirmation before installation
//!
//! Reads plain lines rather than driving a full-screen prompt, so piped
//! stdin works and tests can feed answers through any `BufRead` without
//! ever blocking on a terminal.

use std::io::{BufRead, Write};

use crate::error::Result;

/// How many invalid answers are tolerated before giving up.
pub const PROMPT_ATTEMPTS: usize = 3;

/// Outcome of the confirmation gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// User confirmed; proceed with installation.
    Yes,
    /// User cancelled explicitly, or input ended.
    Cancelled,
    /// Attempt budget exhausted on unrecognized input.
    Invalid(String),
}

/// Ask whether to continue with installation.
///
/// Recognizes `y` and `n` by the first character of the answer,
/// case-insensitively. Anything else consumes one attempt; after
/// [`PROMPT_ATTEMPTS`] invalid answers the gate reports the last input.
pub fn confirm_install<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Confirmation> {
    let mut last_input = String::new();

    for _ in 0..PROMPT_ATTEMPTS {
        write!(output, "Do you want to continue with installation? (Y/n) ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // End of input counts as a cancel, not a retry.
            return Ok(Confirmation::Cancelled);
        }

        last_input = line.trim().to_string();
        match last_input.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('y') => return Ok(Confirmation::Yes),
            Some('n') => return Ok(Confirmation::Cancelled),
            _ => {}
        }
    }

    Ok(Confirmation::Invalid(last_input))
}
