//! List command implementation
//!
//! Discovery only: print what would be acted on, install nothing. At `-vv`
//! the listing also shows, per archive, the wheel members it contains.

use crate::archive;
use crate::cli::Cli;
use crate::commands::report_found;
use crate::discovery::{self, CandidateKind, WHEEL_SUFFIX};
use crate::error::Result;
use crate::ui::Output;

pub fn run(cli: &Cli) -> Result<i32> {
    let out = Output::new(cli.verbose);
    let candidates = discovery::discover_all(&cli.path, cli.recursive, cli.strict)?;

    report_found(&candidates, cli, &out, 0);

    if candidates.is_empty() {
        return Ok(1);
    }

    if out.level() >= 2 {
        for candidate in candidates
            .iter()
            .filter(|c| c.kind == CandidateKind::Archive)
        {
            match archive::list_members(&candidate.path) {
                Ok(members) => {
                    let wheels: Vec<_> = members
                        .iter()
                        .filter(|m| m.ends_with(WHEEL_SUFFIX))
                        .collect();
                    out.say(2, format!("{}:", candidate.path.display()));
                    if wheels.is_empty() {
                        out.say(2, "  (no wheels)");
                    }
                    for member in wheels {
                        out.say(2, format!("  {member}"));
                    }
                }
                Err(e) => out.say(2, format!("Skipping {}: {e}", candidate.path.display())),
            }
        }
    }

    Ok(0)
}
