use crate::error::{LauncherError, Result};
use crate::process::{CommandRunner, ProcessOutcome};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub(crate) fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(crate) fn env(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A `CommandRunner` that answers every call with a canned result and
/// records what it was asked to run.
pub(crate) struct ScriptedRunner {
    response: Option<ProcessOutcome>,
    calls: RefCell<Vec<(String, Vec<String>)>>,
}

impl ScriptedRunner {
    /// Lookup succeeds and prints `stdout`.
    pub(crate) fn found(stdout: &str) -> Self {
        Self::exits(0, stdout)
    }

    pub(crate) fn exits(exit_code: i32, stdout: &str) -> Self {
        Self {
            response: Some(ProcessOutcome {
                exit_code,
                stdout: stdout.to_string(),
                stderr: String::new(),
            }),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// The lookup tool itself cannot be started.
    pub(crate) fn missing_tool() -> Self {
        Self {
            response: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.borrow().len()
    }

    pub(crate) fn last_call(&self) -> Option<(String, Vec<String>)> {
        self.calls.borrow().last().cloned()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutcome> {
        self.calls
            .borrow_mut()
            .push((program.to_string(), args.to_vec()));
        self.response
            .clone()
            .ok_or_else(|| LauncherError::LaunchFailure {
                path: program.to_string(),
                source: io::Error::from(io::ErrorKind::NotFound),
            })
    }
}

/// A sink whose reader went away, like a closed stderr pipe.
pub(crate) struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }
}

/// Write an executable shell script standing in for the generator.
#[cfg(unix)]
pub(crate) fn write_fake_generator(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("arrow");
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}
