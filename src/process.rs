//! Subprocess runner for the launcher.
//!
//! Spawns a program with piped stdout/stderr, drains both streams to
//! completion on separate threads, and blocks until the child exits. Both
//! the PATH lookup and the generator invocation go through this module.

use crate::error::{LauncherError, Result};
use std::io::{self, Read};
use std::process::{Command, Stdio};
use std::thread;

/// Exit code recorded when the child was terminated without one (e.g. by a signal).
pub const NO_EXIT_CODE: i32 = -1;

/// Termination outcome of a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// Exit code of the process, or [`NO_EXIT_CODE`].
    pub exit_code: i32,
    /// Everything the process wrote to stdout, untrimmed.
    pub stdout: String,
    /// Everything the process wrote to stderr, untrimmed.
    pub stderr: String,
}

impl ProcessOutcome {
    /// Returns true if the process exited with code 0.
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Something that can run a program to completion and capture its output.
///
/// The production implementation is [`SystemRunner`]; tests substitute a
/// scripted runner so lookups don't depend on the host's PATH.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutcome>;
}

/// Runs programs as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutcome> {
        run_process(program, args)
    }
}

/// Run `program` with `args`, capturing stdout and stderr.
///
/// stdin is inherited from the launcher, so a generator that prompts still
/// sees the host's terminal.
///
/// # Returns
///
/// * `Ok(ProcessOutcome)` - The process ran to completion (any exit code)
/// * `Err(LauncherError::LaunchFailure)` - The process could not be started,
///   or its output could not be collected
pub fn run_process(program: &str, args: &[String]) -> Result<ProcessOutcome> {
    let launch_failure = |source: io::Error| LauncherError::LaunchFailure {
        path: program.to_string(),
        source,
    };

    tracing::debug!(command = %display_command(program, args), "spawning process");

    let mut child = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(launch_failure)?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    // Pipe buffers are bounded: a child that fills one stream while we block
    // on the other would never exit, so each stream gets its own reader.
    let (stdout, stderr) = thread::scope(|scope| {
        let stdout_reader = scope.spawn(move || drain(stdout));
        let stderr_reader = scope.spawn(move || drain(stderr));
        (join_reader(stdout_reader), join_reader(stderr_reader))
    });

    let status = child.wait().map_err(launch_failure)?;
    let stdout = stdout.map_err(launch_failure)?;
    let stderr = stderr.map_err(launch_failure)?;

    let exit_code = status.code().unwrap_or(NO_EXIT_CODE);
    tracing::debug!(program, exit_code, "process exited");

    Ok(ProcessOutcome {
        exit_code,
        stdout: String::from_utf8_lossy(&stdout).into_owned(),
        stderr: String::from_utf8_lossy(&stderr).into_owned(),
    })
}

/// Shell-quoted rendering of a command line, for logs.
pub fn display_command(program: &str, args: &[String]) -> String {
    shell_words::join(std::iter::once(program).chain(args.iter().map(String::as_str)))
}

fn drain<R: Read>(stream: Option<R>) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut stream) = stream {
        stream.read_to_end(&mut buf)?;
    }
    Ok(buf)
}

fn join_reader(handle: thread::ScopedJoinHandle<'_, io::Result<Vec<u8>>>) -> io::Result<Vec<u8>> {
    handle
        .join()
        .unwrap_or_else(|_| Err(io::Error::other("output reader thread panicked")))
}
