//! Wheel installation through pip child processes
//!
//! Each wheel gets one pip invocation built as an explicit argument list,
//! never a shell string. Invocations run with a fixed timeout; on expiry the
//! process is killed and whatever output was captured so far is kept. A
//! non-empty stderr marks the invocation failed even on exit code 0, so pip
//! problems that never reach the exit code still fail the run.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{Result, WheelError};
use crate::progress::InstallProgress;
use crate::ui::Output;

/// Fixed per-invocation timeout.
pub const INSTALL_TIMEOUT: Duration = Duration::from_secs(60);

/// Poll interval while waiting on a child process.
const WAIT_POLL: Duration = Duration::from_millis(50);

/// Flags controlling how pip is invoked.
#[derive(Debug, Clone)]
pub struct InstallOptions {
    pub system_wide: bool,
    pub dry_run: bool,
    /// Interpreter used for `-m pip`.
    pub python: String,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            system_wide: false,
            dry_run: false,
            python: "python3".to_string(),
        }
    }
}

/// Outcome of a single pip invocation.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Rendered command line, for display only.
    pub command: String,
    /// Exit code, `None` when the process died without one (e.g. killed).
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub timed_out: bool,
}

impl CommandResult {
    /// Non-empty stderr fails the invocation regardless of exit code.
    pub fn succeeded(&self) -> bool {
        !self.timed_out && self.code == Some(0) && self.stderr.trim().is_empty()
    }
}

/// Combined outcome across all invocations of one run.
#[derive(Debug, Clone, Default)]
pub struct AggregateResult {
    pub results: Vec<CommandResult>,
}

impl AggregateResult {
    /// Overall success is "all succeeded".
    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(CommandResult::succeeded)
    }

    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| !r.succeeded()).count()
    }
}

/// Build the pip argument list for one wheel.
fn pip_args(wheel: &Path, options: &InstallOptions) -> Vec<String> {
    let mut args = vec!["-m".to_string(), "pip".to_string(), "install".to_string()];
    if !options.system_wide {
        args.push("--user".to_string());
    }
    if options.dry_run {
        args.push("--dry-run".to_string());
    }
    args.push(wheel.display().to_string());
    args
}

/// Render a command for logs, quoting arguments with whitespace.
fn render_command(program: &str, args: &[String]) -> String {
    let mut rendered = String::from(program);
    for arg in args {
        rendered.push(' ');
        if arg.chars().any(char::is_whitespace) {
            rendered.push('"');
            rendered.push_str(arg);
            rendered.push('"');
        } else {
            rendered.push_str(arg);
        }
    }
    rendered
}

/// Kill a running invocation, including any processes pip spawned.
///
/// Descendants inherit the captured output pipes; if they survive the direct
/// child, the reader threads never see EOF and the wait after a kill blocks
/// until the grandchildren exit on their own. Signalling the whole group
/// closes every pipe holder at once.
fn kill_invocation(handle: &duct::Handle) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use nix::sys::signal::{Signal, killpg};
        use nix::unistd::Pid;

        // The child was spawned as its own group leader, so pgid == pid.
        for pid in handle.pids() {
            if let Ok(pid) = i32::try_from(pid) {
                let _ = killpg(Pid::from_raw(pid), Signal::SIGKILL);
            }
        }
    }
    handle.kill()
}

/// Run one command, killing it when `timeout` expires.
fn run_command(program: &str, args: &[String], timeout: Duration) -> Result<CommandResult> {
    let command = render_command(program, args);

    let handle = duct::cmd(program, args)
        .stdout_capture()
        .stderr_capture()
        .unchecked()
        .before_spawn(|cmd| {
            // Own process group, so an expired timeout can take down the
            // whole pip process tree and not just the direct child.
            #[cfg(unix)]
            std::os::unix::process::CommandExt::process_group(cmd, 0);
            #[cfg(not(unix))]
            let _ = cmd;
            Ok(())
        })
        .start()
        .map_err(|e| WheelError::ProcessSpawnFailed {
            command: command.clone(),
            reason: e.to_string(),
        })?;

    let deadline = Instant::now() + timeout;
    let mut timed_out = false;

    let output = loop {
        match handle.try_wait() {
            Ok(Some(output)) => break output.clone(),
            Ok(None) => {
                if Instant::now() >= deadline {
                    timed_out = true;
                    kill_invocation(&handle).map_err(|e| WheelError::ProcessWaitFailed {
                        command: command.clone(),
                        reason: e.to_string(),
                    })?;
                    // Partial output survives the kill.
                    break handle
                        .wait()
                        .map_err(|e| WheelError::ProcessWaitFailed {
                            command: command.clone(),
                            reason: e.to_string(),
                        })?
                        .clone();
                }
                std::thread::sleep(WAIT_POLL);
            }
            Err(e) => {
                return Err(WheelError::ProcessWaitFailed {
                    command,
                    reason: e.to_string(),
                });
            }
        }
    };

    Ok(CommandResult {
        command,
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        timed_out,
    })
}

/// Install every wheel in `paths`, one pip invocation each.
///
/// Failures are recorded and the run continues to the next wheel; nothing
/// is retried. Spawn failures (interpreter missing) are recorded as failed
/// invocations too, so one bad `--python` value does not abort reporting.
pub fn install(paths: &[PathBuf], options: &InstallOptions, out: &Output) -> AggregateResult {
    let progress = (out.level() == 0 && !paths.is_empty())
        .then(|| InstallProgress::new(paths.len() as u64));

    let mut aggregate = AggregateResult::default();

    for wheel in paths {
        out.say(2, format!("Install {}", wheel.display()));
        if let Some(ref pb) = progress {
            pb.update_wheel(&wheel.display().to_string());
        }

        let args = pip_args(wheel, options);
        let result = match run_command(&options.python, &args, INSTALL_TIMEOUT) {
            Ok(result) => result,
            Err(e) => CommandResult {
                command: render_command(&options.python, &args),
                code: None,
                stdout: String::new(),
                stderr: e.to_string(),
                timed_out: false,
            },
        };

        out.say(1, format!("$ {}", result.command));
        if !result.stdout.is_empty() {
            out.say(2, result.stdout.trim_end());
        }
        if !result.stderr.trim().is_empty() {
            out.say(1, result.stderr.trim_end());
        }
        out.say(1, Output::status_mark(result.succeeded()));

        if let Some(ref pb) = progress {
            pb.inc_wheel();
        }
        aggregate.results.push(result);
    }

    if let Some(pb) = progress {
        pb.finish();
    }
    aggregate
}
