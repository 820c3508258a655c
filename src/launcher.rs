//! Single-shot generation pipeline.
//!
//! One call walks `Locating -> Building -> Running -> Reporting` and ends in
//! success or a terminal error. Nothing is cached between calls.

use crate::command::build_arguments;
use crate::config::Config;
use crate::error::Result;
use crate::locator::BinaryLocator;
use crate::process::{CommandRunner, run_process};
use crate::report::{emit, report};
use crate::request::InvocationRequest;
use std::io::Write;

/// Locate the generator, run it for the request's package, and report.
///
/// `runner` serves the PATH lookup only; the generator itself always runs as
/// a real child process.
pub fn run_generation<R, O, E>(
    request: &InvocationRequest,
    config: &Config,
    runner: &R,
    out: &mut O,
    err: &mut E,
) -> Result<()>
where
    R: CommandRunner,
    O: Write,
    E: Write,
{
    tracing::debug!(stage = "locating", package = %request.package_name);
    let binary = BinaryLocator::new(config, runner)
        .resolve(&request.raw_arguments, &request.environment)?;

    tracing::debug!(stage = "building", path = %binary.path, source = %binary.source);
    let arguments = build_arguments(
        request.sources_path_override.as_deref(),
        &request.plugin_work_directory,
        &config.sources_segment,
    );

    emit(
        out,
        &format!(
            "Generating dependency container for {}...",
            request.package_name
        ),
    );

    tracing::debug!(stage = "running");
    let outcome = run_process(&binary.path, &arguments)?;

    tracing::debug!(stage = "reporting", exit_code = outcome.exit_code);
    report(
        &outcome,
        &request.package_name,
        &config.generated_file_name,
        out,
        err,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LauncherError;
    use crate::test_support::ScriptedRunner;

    fn request(raw: &[&str], environment: &[(&str, &str)], work_dir: &std::path::Path) -> InvocationRequest {
        InvocationRequest::new(
            raw.iter().map(|s| s.to_string()).collect(),
            environment.iter().map(|(k, v)| (k.to_string(), v.to_string())),
            work_dir,
            "MyPkg",
        )
    }

    #[test]
    fn test_not_found_stops_before_running() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let runner = ScriptedRunner::missing_tool();
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = run_generation(
            &request(&[], &[], temp_dir.path()),
            &Config::default(),
            &runner,
            &mut out,
            &mut err,
        );

        assert!(matches!(result, Err(LauncherError::BinaryNotFound { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn test_unlaunchable_path_is_launch_failure() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let missing = temp_dir.path().join("no-such-arrow");
        let missing = missing.to_str().unwrap();
        let runner = ScriptedRunner::missing_tool();
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = run_generation(
            &request(&["--arrow-path", missing], &[], temp_dir.path()),
            &Config::default(),
            &runner,
            &mut out,
            &mut err,
        );

        match result {
            Err(LauncherError::LaunchFailure { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected LaunchFailure, got {other:?}"),
        }
        assert_eq!(runner.calls(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_generator_receives_default_sources_path() {
        use crate::test_support::write_fake_generator;

        let temp_dir = tempfile::TempDir::new().unwrap();
        let generator = write_fake_generator(temp_dir.path(), "echo \"args: $*\"");
        let runner = ScriptedRunner::found(generator.to_str().unwrap());
        let mut out = Vec::new();
        let mut err = Vec::new();

        run_generation(
            &request(&[], &[], temp_dir.path()),
            &Config::default(),
            &runner,
            &mut out,
            &mut err,
        )
        .unwrap();

        let out = String::from_utf8(out).unwrap();
        let expected_sources = temp_dir.path().join("Sources");
        assert!(out.starts_with("Generating dependency container for MyPkg...\n"));
        assert!(out.contains(&format!(
            "args: generate --is-package --package-sources-path {}",
            expected_sources.display()
        )));
        assert!(out.ends_with("✓ Generated dependencies.generated.swift for MyPkg\n"));
        assert!(err.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_generator_failure_is_reported() {
        use crate::test_support::write_fake_generator;

        let temp_dir = tempfile::TempDir::new().unwrap();
        let generator = write_fake_generator(temp_dir.path(), "echo 'bad syntax' >&2\nexit 2");
        let generator = generator.to_str().unwrap();
        let runner = ScriptedRunner::missing_tool();
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = run_generation(
            &request(
                &["--package-sources-path", "/custom/src"],
                &[("ARROW_PATH", generator)],
                temp_dir.path(),
            ),
            &Config::default(),
            &runner,
            &mut out,
            &mut err,
        );

        assert!(matches!(
            result,
            Err(LauncherError::GenerationFailed { exit_code: 2, .. })
        ));
        assert_eq!(String::from_utf8(err).unwrap(), "Error: bad syntax\n\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_closed_output_does_not_mask_generator_result() {
        use crate::test_support::{ClosedPipe, write_fake_generator};

        let temp_dir = tempfile::TempDir::new().unwrap();
        let generator = write_fake_generator(temp_dir.path(), "echo 'bad syntax' >&2\nexit 3");
        let runner = ScriptedRunner::found(generator.to_str().unwrap());

        let result = run_generation(
            &request(&[], &[], temp_dir.path()),
            &Config::default(),
            &runner,
            &mut ClosedPipe,
            &mut ClosedPipe,
        );

        match result {
            Err(err @ LauncherError::GenerationFailed { exit_code: 3, .. }) => {
                assert_eq!(err.exit_code(), crate::exit_codes::GENERATION_FAILED);
            }
            other => panic!("expected GenerationFailed, got {other:?}"),
        }
    }
}
