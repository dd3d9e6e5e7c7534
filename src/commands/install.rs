//! Install command implementation
//!
//! The full pipeline:
//! 1. Discover wheels and archives under the search roots
//! 2. Confirm with the operator (unless --yes)
//! 3. Extract wheels out of archives into a staging directory
//! 4. Install each wheel through pip
//! 5. Release the staging directory (unless --keep-extracted)
//!
//! Exit code 0 means every pip invocation succeeded; 1 covers "nothing
//! found", a cancelled confirmation, and any failed invocation.

use std::io::{self, Write};

use crate::cli::Cli;
use crate::commands::report_found;
use crate::discovery;
use crate::error::Result;
use crate::extract;
use crate::installer::{self, InstallOptions};
use crate::staging::Staging;
use crate::ui::{Confirmation, Output, confirm_install};

pub fn run(cli: &Cli) -> Result<i32> {
    let out = Output::new(cli.verbose);

    let candidates = discovery::discover_all(&cli.path, cli.recursive, cli.strict)?;
    report_found(&candidates, cli, &out, 1);

    if candidates.is_empty() {
        return Ok(1);
    }

    if !cli.yes {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut prompt_out = io::stderr();
        // Part of the prompt, shown at every verbosity.
        writeln!(
            prompt_out,
            "(Archives that do not contain python wheels will be ignored automatically)"
        )?;
        match confirm_install(&mut input, &mut prompt_out)? {
            Confirmation::Yes => {}
            Confirmation::Cancelled => {
                out.error("Aborted by user.");
                return Ok(1);
            }
            Confirmation::Invalid(answer) => {
                out.error(format!("Invalid input: \"{answer}\""));
                return Ok(1);
            }
        }
    }

    out.stage(1, "Prepare installation");
    out.stage(1, "Extract archives and collect wheels");
    let mut staging = Staging::new()?;
    let wheels = extract::extract(&candidates, &mut staging, &out)?;

    if wheels.is_empty() {
        out.say(0, "No wheels to install.");
        return Ok(0);
    }

    out.stage(1, "Install wheels");
    let options = InstallOptions {
        system_wide: cli.system_wide,
        dry_run: cli.dry_run,
        python: cli.python.clone(),
    };
    let aggregate = installer::install(&wheels, &options, &out);

    if cli.keep_extracted {
        let kept = staging.keep();
        out.say(0, format!("Extracted files kept in {}", kept.display()));
    }

    out.say(3, "Finished.");

    if aggregate.all_succeeded() {
        Ok(0)
    } else {
        out.error(format!(
            "{} of {} installations failed.",
            aggregate.failure_count(),
            aggregate.results.len()
        ));
        Ok(1)
    }
}
