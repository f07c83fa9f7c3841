//! Modes command implementation.

use super::CliError;
use mbdecomp::{Mode, OperatorTable};
use std::process::ExitCode;

/// List the supported engine modes.
///
/// # Errors
///
/// Never fails; the signature matches the other commands.
#[allow(clippy::unnecessary_wraps)]
pub(crate) fn execute() -> Result<ExitCode, CliError> {
    for mode in Mode::ALL {
        let marker = if mode == Mode::default() { " (default)" } else { "" };
        let operators = OperatorTable::load(mode).len();
        println!(
            "{:<10} {} - {operators} operators{marker}",
            mode.name(),
            mode.description()
        );
    }
    Ok(ExitCode::SUCCESS)
}
