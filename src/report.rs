//! Relays the generator's outcome to the host.
//!
//! Status text goes to `out` and the generator's error output to `err`, so the
//! binary can bind them to stdout/stderr while tests bind them to buffers.

use crate::error::{LauncherError, Result};
use crate::process::ProcessOutcome;
use std::io::Write;

/// Interpret a finished generator run.
///
/// On exit code 0 the generator's stdout (if any) and a confirmation line are
/// written to `out`. Otherwise its stderr (if any) is written to `err` with an
/// `Error: ` prefix and `GenerationFailed` is returned.
///
/// Writes are best-effort: a broken sink is logged and never changes the
/// result, which depends on the exit code alone.
pub fn report<O: Write, E: Write>(
    outcome: &ProcessOutcome,
    package_name: &str,
    generated_file_name: &str,
    out: &mut O,
    err: &mut E,
) -> Result<()> {
    if outcome.is_success() {
        if !outcome.stdout.is_empty() {
            emit(out, &outcome.stdout);
        }
        emit(
            out,
            &format!("✓ Generated {} for {}", generated_file_name, package_name),
        );
        return Ok(());
    }

    if !outcome.stderr.is_empty() {
        emit(err, &format!("Error: {}", outcome.stderr));
    }

    tracing::debug!(
        package = package_name,
        exit_code = outcome.exit_code,
        "generator failed"
    );

    Err(LauncherError::GenerationFailed {
        package_name: package_name.to_string(),
        exit_code: outcome.exit_code,
    })
}

/// Write one line to `sink`, logging instead of failing if it is gone.
pub(crate) fn emit<W: Write>(sink: &mut W, text: &str) {
    if let Err(e) = writeln!(sink, "{}", text).and_then(|()| sink.flush()) {
        tracing::warn!(error = %e, "failed to write output");
    }
}
