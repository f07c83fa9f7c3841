//! Decompile command implementation.

use super::output::format_text;
use super::{CliError, ModeArg, ReportFormat};
use indicatif::{ProgressBar, ProgressStyle};
use mbdecomp::{CancelToken, DecompileConfig, Decompiler, RunStatus};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

/// Exit status of a cancelled run.
const EXIT_CANCELLED: u8 = 2;

/// Execute the decompile command.
///
/// # Errors
///
/// Returns an error if the input is missing, the output directory cannot be
/// prepared, or the report cannot be serialized.
pub(crate) fn execute(
    input: PathBuf,
    output: PathBuf,
    mode: ModeArg,
    fail_fast: bool,
    format: ReportFormat,
    progress: bool,
    timeout: Option<u64>,
) -> Result<ExitCode, CliError> {
    let config = DecompileConfig {
        input,
        output,
        mode: mode.into(),
        fail_fast,
    };
    let cancel = CancelToken::new();
    if let Some(secs) = timeout {
        spawn_deadline(cancel.clone(), Duration::from_secs(secs));
    }
    let decompiler = Decompiler::new(config, cancel);

    let pb = if progress {
        let total = decompiler.plan()?.len();
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files {msg}")
                .map_err(|e| CliError::new(format!("invalid progress template: {e}")))?
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let report = decompiler.run(|file| {
        if let Some(pb) = &pb {
            pb.set_message(file.input.display().to_string());
            pb.inc(1);
        }
    })?;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    match format {
        ReportFormat::Text => print!("{}", format_text(&report)),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(match report.status {
        RunStatus::Completed => ExitCode::SUCCESS,
        RunStatus::CompletedWithErrors | RunStatus::Aborted => ExitCode::FAILURE,
        RunStatus::Cancelled => ExitCode::from(EXIT_CANCELLED),
    })
}

/// Cancel the run from a control thread once `after` has elapsed.
fn spawn_deadline(cancel: CancelToken, after: Duration) {
    thread::spawn(move || {
        thread::sleep(after);
        tracing::warn!(seconds = after.as_secs(), "timeout reached, cancelling");
        cancel.cancel();
    });
}
